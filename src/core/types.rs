//! Core type aliases and re-exports

pub use glam::IVec3;

/// Integer block coordinate in world space
pub type BlockPos = IVec3;

/// Item or block type identifier, used as the key for tool bindings
pub type ItemId = u16;

/// Standard Result type for editing sessions
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;

/// Format a block position the way user feedback shows it: `(x, y, z)`
pub fn format_pos(pos: BlockPos) -> String {
    format!("({}, {}, {})", pos.x, pos.y, pos.z)
}
