//! Voxel Session - per-user editing sessions for block worlds
//!
//! Selections, undo history, clipboards and tool bindings for users editing
//! a shared voxel world.

pub mod core;
pub mod math;
pub mod voxel;
pub mod selection;
pub mod tool;
pub mod session;
