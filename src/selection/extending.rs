//! Extending cuboid selector.
//!
//! The two anchors are always the minimum and maximum corner of one box. A
//! primary pick collapses the box onto the picked block; secondary picks grow
//! it just enough to include the picked block, so it never shrinks or moves.

use crate::core::feedback::Feedback;
use crate::core::types::{format_pos, BlockPos, Result};
use crate::math::{Cuboid, Region};
use super::anchors::CuboidAnchors;
use super::{anchored_region, RegionSelector};

/// Selector whose secondary picks grow a bounding box.
#[derive(Clone, Debug, Default)]
pub struct ExtendingCuboidSelector {
    anchors: CuboidAnchors,
}

impl ExtendingCuboidSelector {
    /// Create a selector with no anchors
    pub fn new() -> Self {
        Self::default()
    }

    /// Take over another selector's selection, normalizing its anchors to the
    /// min/max corners of its region.
    pub fn from_selector(old: &dyn RegionSelector) -> Self {
        let anchors = match old.region() {
            Ok(region) => CuboidAnchors::new(Some(region.min()), Some(region.max())),
            Err(_) => {
                let (pos1, pos2) = old.anchors();
                CuboidAnchors::new(pos1, pos2)
            }
        };
        Self { anchors }
    }

    fn area(&self) -> u64 {
        self.anchors.region().map_or(0, |region| region.area())
    }
}

impl RegionSelector for ExtendingCuboidSelector {
    fn type_name(&self) -> &'static str {
        "extending cuboid"
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        if self.anchors.pos1() == Some(pos) && self.anchors.pos2() == Some(pos) {
            return false;
        }
        self.anchors.set_both(pos, pos);
        true
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        let (Some(min), Some(max), Some(region)) =
            (self.anchors.pos1(), self.anchors.pos2(), self.anchors.region().copied())
        else {
            return self.select_primary(pos);
        };

        if region.contains(pos) {
            return false;
        }

        self.anchors.set_both(pos.min(min), pos.max(max));

        if let Some(grown) = self.anchors.region() {
            debug_assert!(grown.contains_cuboid(&region));
            debug_assert!(grown.contains(pos));
        }
        true
    }

    fn explain_primary_selection(&self, out: &mut dyn Feedback, pos: BlockPos) {
        out.print(&format!("Started selection at {} ({}).", format_pos(pos), self.area()));
    }

    fn explain_secondary_selection(&self, out: &mut dyn Feedback, pos: BlockPos) {
        out.print(&format!(
            "Extended selection to encompass {} ({}).",
            format_pos(pos),
            self.area()
        ));
    }

    fn anchors(&self) -> (Option<BlockPos>, Option<BlockPos>) {
        (self.anchors.pos1(), self.anchors.pos2())
    }

    fn region(&self) -> Result<&Cuboid> {
        anchored_region(&self.anchors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::selection::CuboidSelector;
    use proptest::prelude::*;

    fn p(x: i32, y: i32, z: i32) -> BlockPos {
        IVec3::new(x, y, z)
    }

    #[test]
    fn test_primary_collapses_to_point() {
        let mut selector = ExtendingCuboidSelector::new();
        assert!(selector.select_primary(p(0, 0, 0)));
        assert_eq!(selector.anchors(), (Some(p(0, 0, 0)), Some(p(0, 0, 0))));
        assert_eq!(selector.region().unwrap(), &Cuboid::single(p(0, 0, 0)));
    }

    #[test]
    fn test_repeat_primary_is_unchanged() {
        let mut selector = ExtendingCuboidSelector::new();
        selector.select_primary(p(1, 1, 1));
        assert!(!selector.select_primary(p(1, 1, 1)));
    }

    #[test]
    fn test_primary_discards_grown_box() {
        let mut selector = ExtendingCuboidSelector::new();
        selector.select_primary(p(0, 0, 0));
        selector.select_secondary(p(4, 4, 4));

        // Equal to pos1 but not to pos2: still resets
        assert!(selector.select_primary(p(0, 0, 0)));
        assert_eq!(selector.region().unwrap().area(), 1);
    }

    #[test]
    fn test_secondary_without_anchors_bootstraps() {
        let mut selector = ExtendingCuboidSelector::new();
        assert!(selector.select_secondary(p(3, 2, 1)));
        assert_eq!(selector.region().unwrap(), &Cuboid::single(p(3, 2, 1)));
    }

    #[test]
    fn test_growth_scenario() {
        let mut selector = ExtendingCuboidSelector::new();
        let mut out: Vec<String> = Vec::new();

        assert!(selector.select_primary(p(0, 0, 0)));
        assert_eq!(selector.region().unwrap(), &Cuboid::single(p(0, 0, 0)));

        assert!(selector.select_secondary(p(5, 0, 0)));
        assert_eq!(selector.region().unwrap(), &Cuboid::new(p(0, 0, 0), p(5, 0, 0)));

        let before = *selector.region().unwrap();
        assert!(!selector.select_secondary(p(2, 0, 0)));
        assert_eq!(selector.region().unwrap(), &before);

        assert!(selector.select_secondary(p(-1, 0, 0)));
        assert_eq!(selector.region().unwrap(), &Cuboid::new(p(-1, 0, 0), p(5, 0, 0)));
        selector.explain_secondary_selection(&mut out, p(-1, 0, 0));
        assert_eq!(out, vec!["Extended selection to encompass (-1, 0, 0) (7).".to_string()]);
    }

    #[test]
    fn test_anchors_stay_min_max() {
        let mut selector = ExtendingCuboidSelector::new();
        selector.select_primary(p(5, 5, 5));
        selector.select_secondary(p(0, 9, 2));

        let (pos1, pos2) = selector.anchors();
        assert_eq!(pos1, Some(p(0, 5, 2)));
        assert_eq!(pos2, Some(p(5, 9, 5)));
    }

    #[test]
    fn test_diverges_from_plain_selector() {
        let (a, b, c) = (p(0, 0, 0), p(4, 4, 4), p(-2, 6, 1));

        let mut plain = CuboidSelector::new();
        plain.select_primary(a);
        plain.select_secondary(b);
        plain.select_secondary(c);

        let mut extending = ExtendingCuboidSelector::new();
        extending.select_primary(a);
        extending.select_secondary(b);
        extending.select_secondary(c);

        let plain_region = plain.region().unwrap();
        assert_eq!((plain_region.min(), plain_region.max()), (a.min(c), a.max(c)));

        let grown = extending.region().unwrap();
        assert_eq!(grown.min(), a.min(b).min(c));
        assert_eq!(grown.max(), a.max(b).max(c));
    }

    #[test]
    fn test_from_selector_normalizes_anchors() {
        let mut old = CuboidSelector::new();
        old.select_primary(p(5, 0, 5));
        old.select_secondary(p(0, 5, 0));

        let selector = ExtendingCuboidSelector::from_selector(&old);
        assert_eq!(selector.anchors(), (Some(p(0, 0, 0)), Some(p(5, 5, 5))));

        let (region, old_region) = (selector.region().unwrap(), old.region().unwrap());
        assert_eq!((region.min(), region.max()), (old_region.min(), old_region.max()));
        // Same blocks, different defining corners
        assert_ne!(region, old_region);
    }

    #[test]
    fn test_from_incomplete_selector() {
        let mut old = CuboidSelector::new();
        old.select_primary(p(1, 2, 3));

        let mut selector = ExtendingCuboidSelector::from_selector(&old);
        assert_eq!(selector.anchors(), (Some(p(1, 2, 3)), None));
        // Incomplete anchors make the next secondary pick start a new box
        assert!(selector.select_secondary(p(7, 7, 7)));
        assert_eq!(selector.region().unwrap(), &Cuboid::single(p(7, 7, 7)));
    }

    #[test]
    fn test_explain_primary() {
        let mut selector = ExtendingCuboidSelector::new();
        let mut out: Vec<String> = Vec::new();
        selector.select_primary(p(2, 64, -3));
        selector.explain_primary_selection(&mut out, p(2, 64, -3));
        assert_eq!(out, vec!["Started selection at (2, 64, -3) (1).".to_string()]);
    }

    #[test]
    fn test_extreme_picks_report_without_overflow() {
        let mut selector = ExtendingCuboidSelector::new();
        let mut out: Vec<String> = Vec::new();
        selector.select_primary(p(-2_000_000_000, 0, 0));
        selector.select_secondary(p(2_000_000_000, 0, 0));
        selector.explain_secondary_selection(&mut out, p(2_000_000_000, 0, 0));

        assert_eq!(
            out,
            vec!["Extended selection to encompass (2000000000, 0, 0) (4000000001).".to_string()]
        );
        assert_eq!(
            selector.information_lines().last().map(String::as_str),
            Some("Size: 4000000001 x 1 x 1 (4000000001 blocks)")
        );

        selector.select_primary(IVec3::splat(i32::MIN));
        selector.select_secondary(IVec3::splat(i32::MAX));
        out.clear();
        selector.explain_secondary_selection(&mut out, IVec3::splat(i32::MAX));
        assert!(out[0].ends_with(&format!("({}).", u64::MAX)));
    }

    fn block_pos() -> impl Strategy<Value = BlockPos> {
        (-64i32..64, -64i32..64, -64i32..64).prop_map(|(x, y, z)| IVec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn test_growth_contains_previous_and_pick(
            first in block_pos(),
            picks in prop::collection::vec(block_pos(), 1..40),
        ) {
            let mut selector = ExtendingCuboidSelector::new();
            selector.select_primary(first);

            for pick in picks {
                let previous = *selector.region().unwrap();
                let changed = selector.select_secondary(pick);
                let current = *selector.region().unwrap();

                prop_assert!(current.contains_cuboid(&previous));
                prop_assert!(current.contains(pick));
                prop_assert_eq!(changed, !previous.contains(pick));
                let (pos1, pos2) = selector.anchors();
                prop_assert_eq!((pos1, pos2), (Some(current.min()), Some(current.max())));
            }
        }

        #[test]
        fn test_interior_pick_leaves_region_untouched(
            a in block_pos(),
            b in block_pos(),
            t in (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        ) {
            let mut selector = ExtendingCuboidSelector::new();
            selector.select_primary(a);
            selector.select_secondary(b);
            let before = *selector.region().unwrap();

            // Any point between the corners
            let (min, max) = (before.min().as_dvec3(), before.max().as_dvec3());
            let inside = (min + (max - min) * glam::DVec3::new(t.0, t.1, t.2)).round().as_ivec3();

            prop_assert!(!selector.select_secondary(inside));
            prop_assert_eq!(selector.region().unwrap(), &before);
            prop_assert_eq!(selector.anchors(), (Some(before.min()), Some(before.max())));
        }

        #[test]
        fn test_region_is_bounding_box_of_picks(
            first in block_pos(),
            picks in prop::collection::vec(block_pos(), 0..40),
        ) {
            let mut selector = ExtendingCuboidSelector::new();
            selector.select_primary(first);
            for &pick in &picks {
                selector.select_secondary(pick);
            }

            let (min, max) = picks.iter().fold((first, first), |(min, max), &pick| {
                (min.min(pick), max.max(pick))
            });
            let region = selector.region().unwrap();
            prop_assert_eq!((region.min(), region.max()), (min, max));
        }
    }
}
