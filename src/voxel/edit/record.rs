//! Contract between the undo history and the edit records it stores.

use super::supply::BlockSupply;

/// A recorded, invertible set of block changes.
///
/// Records are produced by whatever applies edits to a world. Once handed to
/// the history they are never mutated; undo and redo instead replay a record
/// into a fresh sibling bound to the same world.
pub trait EditRecord: Send {
    /// Number of block changes in the record
    fn size(&self) -> usize;

    /// True if the record changed nothing
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Revert this record's changes in the world, recording the reversal in a
    /// new sibling record. Blocks come from `supply` when one is given.
    fn undo(&self, supply: Option<&mut dyn BlockSupply>) -> Self
    where
        Self: Sized;

    /// Re-apply this record's changes in the world, recording them in a new
    /// sibling record. Blocks come from `supply` when one is given.
    fn redo(&self, supply: Option<&mut dyn BlockSupply>) -> Self
    where
        Self: Sized;
}
