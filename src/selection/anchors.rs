//! Anchor pair shared by the cuboid selectors.

use crate::core::types::BlockPos;
use crate::math::Cuboid;

/// Two optional anchors and the cuboid derived from them.
///
/// Every write goes through [`CuboidAnchors::recompute`], so the region is
/// `Some` exactly when both anchors are set and always matches them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CuboidAnchors {
    pos1: Option<BlockPos>,
    pos2: Option<BlockPos>,
    region: Option<Cuboid>,
}

impl CuboidAnchors {
    /// Create from possibly-unset anchors
    pub fn new(pos1: Option<BlockPos>, pos2: Option<BlockPos>) -> Self {
        let mut anchors = Self { pos1, pos2, region: None };
        anchors.recompute();
        anchors
    }

    /// First anchor
    pub fn pos1(&self) -> Option<BlockPos> {
        self.pos1
    }

    /// Second anchor
    pub fn pos2(&self) -> Option<BlockPos> {
        self.pos2
    }

    /// Derived region, once both anchors are set
    pub fn region(&self) -> Option<&Cuboid> {
        self.region.as_ref()
    }

    /// Set the first anchor
    pub fn set_pos1(&mut self, pos: BlockPos) {
        self.pos1 = Some(pos);
        self.recompute();
    }

    /// Set the second anchor
    pub fn set_pos2(&mut self, pos: BlockPos) {
        self.pos2 = Some(pos);
        self.recompute();
    }

    /// Set both anchors at once
    pub fn set_both(&mut self, pos1: BlockPos, pos2: BlockPos) {
        self.pos1 = Some(pos1);
        self.pos2 = Some(pos2);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.region = match (self.pos1, self.pos2) {
            (Some(pos1), Some(pos2)) => Some(Cuboid::new(pos1, pos2)),
            _ => None,
        };
    }
}
