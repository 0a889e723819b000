//! Launcher self-update resolution
//!
//! Two sources feed one decision: the game server's own update endpoint
//! and, only when that is unreachable, the public repository-release API.
//! Whichever answers is normalized into a single "latest version" value,
//! compared against the running build, and folded into a
//! [`crate::models::VersionDecision`] together with the user's stored
//! "ignore this version" preference.

mod probe;
mod resolver;

pub use probe::check_status;
pub use resolver::{preference_update, UpdateCheck, UpdateResolver};
