#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the launchrs application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod auth;
pub mod models;
pub mod server_info;
pub mod settings;
pub mod transport;
pub mod update;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use auth::{classify_login_response, AuthService};
pub use models::{AuthOutcome, Credentials, PreferenceUpdate, PromptResolution, VersionDecision};
pub use settings::LaunchrsSettings;
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use update::UpdateResolver;
