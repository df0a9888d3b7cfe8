//! Region selectors: turn primary/secondary block picks into a region.
//!
//! Both selectors here derive a [`Cuboid`] from two anchors. They differ in
//! what the anchors mean:
//! - [`CuboidSelector`]: primary and secondary picks each move one corner.
//! - [`ExtendingCuboidSelector`]: the anchors are the min/max of a box that
//!   secondary picks only ever grow.

pub mod anchors;
pub mod cuboid;
pub mod extending;

pub use anchors::CuboidAnchors;
pub use cuboid::CuboidSelector;
pub use extending::ExtendingCuboidSelector;

use std::fmt::Debug;

use crate::core::error::Error;
use crate::core::feedback::Feedback;
use crate::core::types::{format_pos, BlockPos, Result};
use crate::math::{Cuboid, Region};

/// Converts block picks into a selected region.
pub trait RegionSelector: Debug + Send {
    /// Short name of the selection mode
    fn type_name(&self) -> &'static str;

    /// Handle a primary pick. Returns true if the selection changed.
    fn select_primary(&mut self, pos: BlockPos) -> bool;

    /// Handle a secondary pick. Returns true if the selection changed.
    fn select_secondary(&mut self, pos: BlockPos) -> bool;

    /// Tell the user what a primary pick at `pos` did
    fn explain_primary_selection(&self, out: &mut dyn Feedback, pos: BlockPos);

    /// Tell the user what a secondary pick at `pos` did
    fn explain_secondary_selection(&self, out: &mut dyn Feedback, pos: BlockPos);

    /// Current anchors
    fn anchors(&self) -> (Option<BlockPos>, Option<BlockPos>);

    /// Selected region, or `Error::IncompleteRegion` while anchors are missing
    fn region(&self) -> Result<&Cuboid>;

    /// Check if a full region is selected
    fn is_defined(&self) -> bool {
        self.region().is_ok()
    }

    /// Human-readable description of the selection, one line per fact
    fn information_lines(&self) -> Vec<String> {
        let (pos1, pos2) = self.anchors();
        let mut lines = Vec::new();
        if let Some(pos) = pos1 {
            lines.push(format!("Position 1: {}", format_pos(pos)));
        }
        if let Some(pos) = pos2 {
            lines.push(format!("Position 2: {}", format_pos(pos)));
        }
        if let Ok(region) = self.region() {
            let size = region.size();
            lines.push(format!(
                "Size: {} x {} x {} ({} blocks)",
                size.x, size.y, size.z, region.area()
            ));
        }
        lines
    }
}

/// Region of a set of anchors, or the incomplete-region error.
fn anchored_region(anchors: &CuboidAnchors) -> Result<&Cuboid> {
    anchors.region().ok_or(Error::IncompleteRegion)
}
