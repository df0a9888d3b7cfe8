//! The user a session belongs to, as seen by the session.

use crate::core::feedback::Feedback;
use crate::core::types::BlockPos;
use crate::voxel::edit::BlockSupply;

/// A user driving a session: receives feedback, has a position and an inventory.
pub trait Actor: Feedback {
    /// Block position the actor currently occupies
    fn block_in(&self) -> BlockPos;

    /// The actor's inventory as a block supply
    fn inventory(&mut self) -> &mut dyn BlockSupply;
}
