//! Per-user editing sessions and the registry that owns them.

pub mod actor;
pub mod local;
pub mod registry;

pub use actor::Actor;
pub use local::{CompassMode, LocalSession, Snapshot, VERSION};
pub use registry::{lock_session, SessionRegistry, SharedSession};
