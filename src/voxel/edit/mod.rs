//! Edit records, their undo history and the block supplies they draw from.
//!
//! Edits are recorded as change sets over the world, which the per-session
//! history can undo and redo.

pub mod record;
pub mod supply;
pub mod change_set;
pub mod history;
pub mod clipboard;

pub use record::EditRecord;
pub use supply::{reborrow_supply, BlockSupply, InventorySupply, SupplyError};
pub use change_set::{BlockChange, ChangeSet};
pub use history::{EditHistory, Replayed, DEFAULT_HISTORY_CAPACITY};
pub use clipboard::Clipboard;
