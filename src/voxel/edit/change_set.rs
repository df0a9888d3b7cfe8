//! Change set - an edit record of individual block changes.

use crate::core::error::Error;
use crate::core::types::{BlockPos, Result};
use crate::voxel::block::Block;
use crate::voxel::world::{read_world, write_world, WorldHandle};
use super::record::EditRecord;
use super::supply::{reborrow_supply, BlockSupply};

/// One block change: what was there and what replaced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockChange {
    pub pos: BlockPos,
    pub previous: Block,
    pub current: Block,
}

/// Block changes applied to one world, in application order.
#[derive(Debug)]
pub struct ChangeSet {
    /// World the changes were applied to
    world: WorldHandle,
    /// Applied changes, oldest first
    changes: Vec<BlockChange>,
    /// Maximum number of changes. `None` = unlimited
    limit: Option<usize>,
    /// Blocks skipped during replay because the supply ran dry
    missing_blocks: usize,
}

impl ChangeSet {
    /// Create an empty change set for a world
    pub fn new(world: WorldHandle, limit: Option<usize>) -> Self {
        Self {
            world,
            changes: Vec::new(),
            limit,
            missing_blocks: 0,
        }
    }

    /// World this set applies to
    pub fn world(&self) -> &WorldHandle {
        &self.world
    }

    /// Change limit
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Recorded changes, oldest first
    pub fn changes(&self) -> &[BlockChange] {
        &self.changes
    }

    /// Blocks that could not be placed during replay
    pub fn missing_blocks(&self) -> usize {
        self.missing_blocks
    }

    /// Set a block in the world and record the change.
    ///
    /// Returns `Ok(false)` if the block was already there. Fails without
    /// touching the world when the limit is reached or the supply is empty.
    pub fn set_block(
        &mut self,
        pos: BlockPos,
        block: Block,
        supply: Option<&mut dyn BlockSupply>,
    ) -> Result<bool> {
        if let Some(limit) = self.limit {
            if self.changes.len() >= limit {
                return Err(Error::ChangeLimitReached { limit });
            }
        }

        // Held from the read through the write, so `previous` is never stale
        let mut world = write_world(&self.world);
        if world.block(pos) == block {
            return Ok(false);
        }

        if let Some(supply) = supply {
            supply.fetch(block)?;
            if let Err(e) = supply.store(world.block(pos)) {
                log::trace!("Dropped removed block at {:?}: {}", pos, e);
            }
        }

        let previous = world.set_block(pos, block);
        drop(world);
        self.changes.push(BlockChange { pos, previous, current: block });
        Ok(true)
    }

    /// Block currently in the world at `pos`
    pub fn block(&self, pos: BlockPos) -> Block {
        read_world(&self.world).block(pos)
    }

    /// Empty record on the same world, without a change limit
    fn sibling(&self) -> Self {
        Self::new(self.world.clone(), None)
    }

    /// Apply a replayed change, counting supply shortages instead of failing.
    fn replay(&mut self, pos: BlockPos, block: Block, supply: Option<&mut dyn BlockSupply>) {
        match self.set_block(pos, block, supply) {
            Ok(_) => {}
            Err(Error::Supply(e)) => {
                self.missing_blocks += 1;
                log::warn!("Skipped block at {:?} during replay: {}", pos, e);
            }
            Err(e) => {
                log::warn!("Replay of block at {:?} failed: {}", pos, e);
            }
        }
    }
}

impl EditRecord for ChangeSet {
    fn size(&self) -> usize {
        self.changes.len()
    }

    fn undo(&self, mut supply: Option<&mut dyn BlockSupply>) -> Self {
        let mut sibling = self.sibling();
        for change in self.changes.iter().rev() {
            sibling.replay(change.pos, change.previous, reborrow_supply(&mut supply));
        }
        sibling
    }

    fn redo(&self, mut supply: Option<&mut dyn BlockSupply>) -> Self {
        let mut sibling = self.sibling();
        for change in &self.changes {
            sibling.replay(change.pos, change.current, reborrow_supply(&mut supply));
        }
        sibling
    }
}
