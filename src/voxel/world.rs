//! Sparse in-memory block world.
//!
//! Stands in for the real world backend: edit records read and write blocks
//! through a shared [`WorldHandle`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::types::BlockPos;
use super::block::Block;

/// Shared, lockable reference to a world
pub type WorldHandle = Arc<RwLock<BlockWorld>>;

/// Sparse block storage. Positions never written read as air.
#[derive(Debug, Default)]
pub struct BlockWorld {
    name: String,
    blocks: HashMap<BlockPos, Block>,
}

impl BlockWorld {
    /// Create an empty world
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: HashMap::new(),
        }
    }

    /// Wrap in a shared handle
    pub fn into_handle(self) -> WorldHandle {
        Arc::new(RwLock::new(self))
    }

    /// World name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Block at position
    pub fn block(&self, pos: BlockPos) -> Block {
        self.blocks.get(&pos).copied().unwrap_or(Block::AIR)
    }

    /// Set block at position, returning the block it replaced
    pub fn set_block(&mut self, pos: BlockPos, block: Block) -> Block {
        let previous = if block.is_air() {
            self.blocks.remove(&pos)
        } else {
            self.blocks.insert(pos, block)
        };
        previous.unwrap_or(Block::AIR)
    }

    /// Number of non-air blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Read access that tolerates a poisoned lock.
pub fn read_world(world: &WorldHandle) -> RwLockReadGuard<'_, BlockWorld> {
    world.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access that tolerates a poisoned lock.
pub fn write_world(world: &WorldHandle) -> RwLockWriteGuard<'_, BlockWorld> {
    world.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::voxel::block::ids;

    #[test]
    fn test_unset_reads_as_air() {
        let world = BlockWorld::new("test");
        assert!(world.block(IVec3::new(1, 2, 3)).is_air());
        assert_eq!(world.block_count(), 0);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut world = BlockWorld::new("test");
        let pos = IVec3::new(0, 64, 0);

        assert!(world.set_block(pos, Block::new(ids::STONE)).is_air());
        assert_eq!(world.set_block(pos, Block::new(ids::DIRT)), Block::new(ids::STONE));
        assert_eq!(world.block(pos), Block::new(ids::DIRT));
        assert_eq!(world.block_count(), 1);
    }

    #[test]
    fn test_setting_air_removes_entry() {
        let mut world = BlockWorld::new("test");
        let pos = IVec3::ZERO;
        world.set_block(pos, Block::new(ids::GLASS));
        world.set_block(pos, Block::AIR);
        assert_eq!(world.block_count(), 0);
    }

    #[test]
    fn test_handle_access() {
        let handle = BlockWorld::new("shared").into_handle();
        write_world(&handle).set_block(IVec3::ONE, Block::new(ids::STONE));
        assert_eq!(read_world(&handle).block(IVec3::ONE), Block::new(ids::STONE));
        assert_eq!(read_world(&handle).name(), "shared");
    }
}
