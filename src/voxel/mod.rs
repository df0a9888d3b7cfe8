//! Blocks, worlds and the edit records applied to them

pub mod block;
pub mod world;
pub mod edit;

pub use block::Block;
pub use world::{BlockWorld, WorldHandle};
