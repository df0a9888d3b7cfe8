//! Block supplies consumed when edits place blocks.

use std::collections::HashMap;

use thiserror::Error;

use crate::voxel::block::Block;

/// Failure to take or return a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SupplyError {
    #[error("out of blocks of type {}", .0.id)]
    OutOfBlocks(Block),
    #[error("no room to store blocks of type {}", .0.id)]
    OutOfSpace(Block),
}

/// Source of blocks for placement and sink for removed blocks.
///
/// Edits that run without a supply draw from an unconstrained source.
pub trait BlockSupply: Send {
    /// Take one block out of the supply
    fn fetch(&mut self, block: Block) -> Result<(), SupplyError>;

    /// Put one removed block back into the supply
    fn store(&mut self, block: Block) -> Result<(), SupplyError>;
}

/// Counted stacks of block types, like a player inventory.
#[derive(Clone, Debug, Default)]
pub struct InventorySupply {
    /// Count per block type id
    stacks: HashMap<u16, u32>,
    /// Maximum count kept per block type
    max_per_type: u32,
}

impl InventorySupply {
    /// Create an empty inventory holding at most `max_per_type` of each type
    pub fn new(max_per_type: u32) -> Self {
        Self {
            stacks: HashMap::new(),
            max_per_type,
        }
    }

    /// Add blocks, saturating at the per-type maximum
    pub fn with_blocks(mut self, block: Block, count: u32) -> Self {
        let stack = self.stacks.entry(block.id).or_insert(0);
        *stack = stack.saturating_add(count).min(self.max_per_type);
        self
    }

    /// Number of blocks held of a type
    pub fn count(&self, block: Block) -> u32 {
        self.stacks.get(&block.id).copied().unwrap_or(0)
    }
}

impl BlockSupply for InventorySupply {
    fn fetch(&mut self, block: Block) -> Result<(), SupplyError> {
        if block.is_air() {
            return Ok(());
        }
        match self.stacks.get_mut(&block.id) {
            Some(stack) if *stack > 0 => {
                *stack -= 1;
                Ok(())
            }
            _ => Err(SupplyError::OutOfBlocks(block)),
        }
    }

    fn store(&mut self, block: Block) -> Result<(), SupplyError> {
        if block.is_air() {
            return Ok(());
        }
        let stack = self.stacks.entry(block.id).or_insert(0);
        if *stack >= self.max_per_type {
            return Err(SupplyError::OutOfSpace(block));
        }
        *stack += 1;
        Ok(())
    }
}

/// Reborrow an optional supply for one call, leaving it usable afterwards.
///
/// `Option::as_deref_mut` keeps the trait object's original lifetime, which
/// ties every call in a loop to the same borrow.
pub fn reborrow_supply<'s>(
    supply: &'s mut Option<&mut dyn BlockSupply>,
) -> Option<&'s mut dyn BlockSupply> {
    match supply {
        Some(supply) => {
            let supply: &mut dyn BlockSupply = &mut **supply;
            Some(supply)
        }
        None => None,
    }
}
