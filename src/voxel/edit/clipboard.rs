//! Clipboard - blocks copied out of a region for later pasting.

use crate::core::types::{BlockPos, IVec3, Result};
use crate::math::Cuboid;
use crate::voxel::block::Block;
use crate::voxel::world::BlockWorld;
use super::change_set::ChangeSet;
use super::supply::{reborrow_supply, BlockSupply};

/// A copied cuboid of blocks, positioned relative to the point it was copied from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clipboard {
    /// Extent in blocks
    size: IVec3,
    /// Minimum corner relative to the copy origin
    offset: IVec3,
    /// Blocks in X-major, Z-minor order
    blocks: Vec<Block>,
}

impl Clipboard {
    /// Copy the blocks of `region`, remembering their offset from `origin`.
    pub fn copy(world: &BlockWorld, region: &Cuboid, origin: BlockPos) -> Self {
        let blocks = region.iter().map(|pos| world.block(pos)).collect();
        Self {
            size: region.size().as_ivec3(),
            offset: region.min() - origin,
            blocks,
        }
    }

    /// Extent in blocks
    pub fn size(&self) -> IVec3 {
        self.size
    }

    /// Minimum corner relative to the copy origin
    pub fn offset(&self) -> IVec3 {
        self.offset
    }

    /// Block at a position relative to the minimum corner
    pub fn block(&self, local: IVec3) -> Option<Block> {
        if local.cmplt(IVec3::ZERO).any() || local.cmpge(self.size).any() {
            return None;
        }
        let index = (local.x * self.size.y + local.y) * self.size.z + local.z;
        self.blocks.get(index as usize).copied()
    }

    /// Region the clipboard covers when pasted at `at`
    pub fn paste_region(&self, at: BlockPos) -> Cuboid {
        let min = at + self.offset;
        Cuboid::new(min, min + self.size - IVec3::ONE)
    }

    /// Paste into `edit` with the copy origin placed at `at`.
    ///
    /// Returns the number of blocks changed. With `skip_air`, air in the
    /// clipboard leaves the world untouched.
    pub fn paste(
        &self,
        edit: &mut ChangeSet,
        at: BlockPos,
        skip_air: bool,
        mut supply: Option<&mut dyn BlockSupply>,
    ) -> Result<usize> {
        let target = self.paste_region(at);
        let mut changed = 0;
        for (pos, &block) in target.iter().zip(&self.blocks) {
            if skip_air && block.is_air() {
                continue;
            }
            if edit.set_block(pos, block, reborrow_supply(&mut supply))? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}
