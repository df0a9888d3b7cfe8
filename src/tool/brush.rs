//! Brush tool - paints a shape of blocks around the targeted block.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::{BlockPos, IVec3, Result};
use crate::math::Cuboid;
use crate::voxel::block::{ids, Block};
use crate::voxel::edit::{reborrow_supply, BlockSupply, ChangeSet};
use super::Tool;

/// Default reach of a brush in blocks
pub const DEFAULT_BRUSH_RANGE: u32 = 100;

/// Brush shapes, centered on the targeted block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushShape {
    Sphere { radius: f32, hollow: bool },
    /// Vertical cylinder standing on the targeted block
    Cylinder { radius: f32, height: u32, hollow: bool },
    Cuboid { half_extents: IVec3 },
}

impl BrushShape {
    /// Check if a block at `offset` from the target is part of the shape
    pub fn contains(&self, offset: IVec3) -> bool {
        match *self {
            BrushShape::Sphere { radius, hollow } => {
                let distance = offset.as_vec3().length();
                within_shell(distance, radius, hollow)
            }
            BrushShape::Cylinder { radius, height, hollow } => {
                if offset.y < 0 || offset.y >= height as i32 {
                    return false;
                }
                let distance = Vec2::new(offset.x as f32, offset.z as f32).length();
                within_shell(distance, radius, hollow)
            }
            BrushShape::Cuboid { half_extents } => {
                offset.abs().cmple(half_extents.abs()).all()
            }
        }
    }

    /// Smallest cuboid holding the shape when centered on `target`
    pub fn bounds(&self, target: BlockPos) -> Cuboid {
        match *self {
            BrushShape::Sphere { radius, .. } => {
                Cuboid::around(target, radius.max(0.0).ceil() as i32)
            }
            BrushShape::Cylinder { radius, height, .. } => {
                let r = radius.max(0.0).ceil() as i32;
                let top = height.max(1) as i32 - 1;
                let min = target - IVec3::new(r, 0, r);
                let max = target + IVec3::new(r, top, r);
                Cuboid::new(min, max)
            }
            BrushShape::Cuboid { half_extents } => {
                let half = half_extents.abs();
                Cuboid::new(target - half, target + half)
            }
        }
    }
}

/// Inside a solid radius, or on the one-block shell of it when hollow.
fn within_shell(distance: f32, radius: f32, hollow: bool) -> bool {
    let outer = radius + 0.5;
    if distance > outer {
        return false;
    }
    !hollow || distance > outer - 1.0
}

/// Item-bound brush: shape, fill block, optional mask and reach.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushTool {
    pub shape: BrushShape,
    /// Block painted into the shape
    pub fill: Block,
    /// Only replace blocks of this type, if set
    pub mask: Option<Block>,
    /// Maximum distance to the targeted block
    pub range: u32,
}

impl Default for BrushTool {
    fn default() -> Self {
        Self {
            shape: BrushShape::Sphere { radius: 2.0, hollow: false },
            fill: Block::new(ids::COBBLESTONE),
            mask: None,
            range: DEFAULT_BRUSH_RANGE,
        }
    }
}

impl BrushTool {
    /// Paint the brush shape around `target` into `edit`.
    ///
    /// Returns the number of blocks changed.
    pub fn apply(
        &self,
        edit: &mut ChangeSet,
        target: BlockPos,
        mut supply: Option<&mut dyn BlockSupply>,
    ) -> Result<usize> {
        let mut changed = 0;
        for pos in self.shape.bounds(target).iter() {
            if !self.shape.contains(pos - target) {
                continue;
            }
            if let Some(mask) = self.mask {
                if edit.block(pos) != mask {
                    continue;
                }
            }
            if edit.set_block(pos, self.fill, reborrow_supply(&mut supply))? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

impl Tool for BrushTool {
    fn name(&self) -> &'static str {
        "brush"
    }

    fn as_brush(&self) -> Option<&BrushTool> {
        Some(self)
    }

    fn as_brush_mut(&mut self) -> Option<&mut BrushTool> {
        Some(self)
    }
}
