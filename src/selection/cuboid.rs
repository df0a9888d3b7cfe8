//! Plain two-corner cuboid selector.

use crate::core::feedback::Feedback;
use crate::core::types::{format_pos, BlockPos, Result};
use crate::math::{Cuboid, Region};
use super::anchors::CuboidAnchors;
use super::{anchored_region, RegionSelector};

/// Primary pick sets the first corner, secondary pick sets the second.
#[derive(Clone, Debug, Default)]
pub struct CuboidSelector {
    anchors: CuboidAnchors,
}

impl CuboidSelector {
    /// Create a selector with no anchors
    pub fn new() -> Self {
        Self::default()
    }

    /// Take over the anchors of another selector
    pub fn from_selector(old: &dyn RegionSelector) -> Self {
        let (pos1, pos2) = old.anchors();
        Self {
            anchors: CuboidAnchors::new(pos1, pos2),
        }
    }

    fn describe(&self, what: &str, pos: BlockPos) -> String {
        match self.anchors.region() {
            Some(region) => format!("{} set to {} ({}).", what, format_pos(pos), region.area()),
            None => format!("{} set to {}.", what, format_pos(pos)),
        }
    }
}

impl RegionSelector for CuboidSelector {
    fn type_name(&self) -> &'static str {
        "cuboid"
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        if self.anchors.pos1() == Some(pos) {
            return false;
        }
        self.anchors.set_pos1(pos);
        true
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        if self.anchors.pos2() == Some(pos) {
            return false;
        }
        self.anchors.set_pos2(pos);
        true
    }

    fn explain_primary_selection(&self, out: &mut dyn Feedback, pos: BlockPos) {
        out.print(&self.describe("First position", pos));
    }

    fn explain_secondary_selection(&self, out: &mut dyn Feedback, pos: BlockPos) {
        out.print(&self.describe("Second position", pos));
    }

    fn anchors(&self) -> (Option<BlockPos>, Option<BlockPos>) {
        (self.anchors.pos1(), self.anchors.pos2())
    }

    fn region(&self) -> Result<&Cuboid> {
        anchored_region(&self.anchors)
    }
}
