//! Core types, errors, configuration and logging

pub mod types;
pub mod error;
pub mod logging;
pub mod config;
pub mod feedback;

pub use types::*;
pub use error::{BindRejection, Error};
pub use config::SessionConfig;
pub use feedback::{Feedback, LogFeedback};
