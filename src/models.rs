//! Core data types for the launcher network layer
//!
//! Everything here is created fresh per call and handed to the UI layer as
//! plain data; no long-lived state lives in these types.

use serde::Deserialize;
use std::fmt;

/// Login credentials for a single authentication attempt
///
/// Transient: built per login attempt, sent once, never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

// Manual Debug so the password never reaches a log line
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Terminal outcome of a login attempt
///
/// Exactly one variant describes each attempt. `Success` is the only
/// variant carrying tokens; tokens are opaque strings and are never
/// validated by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Server accepted the credentials
    Success {
        user_id: String,
        login_token: String,
        warning: Option<String>,
    },
    /// Account is banned; a missing `expires_at` means the ban is permanent
    Banned {
        reason: String,
        expires_at: Option<String>,
    },
    /// Server rejected the e-mail/password pair
    InvalidCredentials,
    /// Server recognized a modified launcher build
    TamperingDetected,
    /// Server replied, but with a failure or an unexpected document
    ServerError { code: u16, message: String },
    /// No usable reply was obtained at all
    TransportFailure { message: String },
}

impl AuthOutcome {
    /// Render the outcome as text the UI can show directly
    #[must_use]
    pub fn user_message(&self, server_name: &str) -> String {
        match self {
            AuthOutcome::Success { .. } => "Login successful.".to_string(),
            AuthOutcome::Banned { reason, expires_at } => {
                let mut message = format!("You got banned on {server_name}.\nReason: {reason}");
                match expires_at {
                    Some(expires) => message.push_str(&format!("\nBan expires {expires}")),
                    None => message.push_str("\nBanned forever."),
                }
                message
            }
            AuthOutcome::InvalidCredentials => "Invalid e-mail or password.".to_string(),
            AuthOutcome::TamperingDetected => {
                "Launcher tampering detected. Please use original build.".to_string()
            }
            AuthOutcome::ServerError { code, message } => format!("ERROR {code}: {message}"),
            AuthOutcome::TransportFailure { message } => message.clone(),
        }
    }
}

/// Reachability of one remote endpoint, recomputed on every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Online,
    Offline,
}

/// Latest version reported by whichever update source answered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateInfo {
    /// `None` means both probed sources failed to yield a usable version
    pub latest_version: Option<String>,
}

/// Verdict of comparing the running build against the reported latest one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionDecision {
    /// Local build is newer than the reported latest
    InsiderBuild,
    UpToDate,
    UpdateAvailable { latest_version: String },
    /// No source yielded a usable version
    BackendError,
}

/// How the user answered the update prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResolution {
    /// Apply the update (the apply action itself is external)
    Accept,
    /// Dismiss this time only
    Dismiss,
    /// Dismiss and stop prompting for this version
    DismissAndRemember,
}

/// Settings write the resolver proposes after a prompt resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceUpdate {
    Unchanged,
    Clear,
    Remember(String),
}

/// JSON body of the primary update-metadata endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCheckResponse {
    #[serde(rename = "Payload")]
    pub payload: UpdatePayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePayload {
    #[serde(rename = "LatestVersion")]
    pub latest_version: Option<String>,
}

/// JSON body of the secondary (repository-release) endpoint
///
/// Its tag name fills the same semantic slot as `LatestVersion` above.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseInfo {
    #[serde(rename = "TagName")]
    pub tag_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("player@example.com", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("player@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_banned_message_permanent() {
        let outcome = AuthOutcome::Banned {
            reason: "Cheating".to_string(),
            expires_at: None,
        };
        let message = outcome.user_message("World Revival");
        assert!(message.contains("You got banned on World Revival."));
        assert!(message.contains("Reason: Cheating"));
        assert!(message.contains("Banned forever."));
    }

    #[test]
    fn test_banned_message_with_expiry() {
        let outcome = AuthOutcome::Banned {
            reason: "Chat abuse".to_string(),
            expires_at: Some("2026-09-01".to_string()),
        };
        let message = outcome.user_message("World Revival");
        assert!(message.contains("Ban expires 2026-09-01"));
        assert!(!message.contains("Banned forever."));
    }

    #[test]
    fn test_server_error_message_carries_code() {
        let outcome = AuthOutcome::ServerError {
            code: 503,
            message: "oops".to_string(),
        };
        assert_eq!(outcome.user_message("any"), "ERROR 503: oops");
    }

    #[test]
    fn test_update_check_response_deserializes() {
        let body = r#"{"Payload":{"LatestVersion":"2.1.9"}}"#;
        let parsed: UpdateCheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.payload.latest_version.as_deref(), Some("2.1.9"));
    }

    #[test]
    fn test_release_info_deserializes() {
        let body = r#"{"TagName":"v3"}"#;
        let parsed: ReleaseInfo = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.tag_name.as_deref(), Some("v3"));
    }
}
