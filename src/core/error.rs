//! Error types for editing sessions

use thiserror::Error;

use crate::core::types::ItemId;
use crate::voxel::edit::supply::SupplyError;

/// Reason an item cannot carry a tool binding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BindRejection {
    #[error("Blocks can't be used")]
    BlockId,
    #[error("Item is not usable")]
    UnusableItem,
    #[error("Already used for the wand")]
    Wand,
    #[error("Already used for the navigation wand")]
    NavigationWand,
}

/// Main error type for editing sessions
#[derive(Debug, Error)]
pub enum Error {
    #[error("Make a region selection first")]
    IncompleteRegion,

    #[error("Can't bind tool to item {item}: {reason}")]
    InvalidToolBinding { item: ItemId, reason: BindRejection },

    #[error("Tool on item {item} is not a brush")]
    NotABrush { item: ItemId },

    #[error("Your clipboard is empty")]
    EmptyClipboard,

    #[error("Block change limit of {limit} reached")]
    ChangeLimitReached { limit: usize },

    #[error("Block supply error: {0}")]
    Supply(#[from] SupplyError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
