//! Login flow against the authentication endpoint

use crate::auth::classifier::{classify_login_response, NO_REPLY_MESSAGE};
use crate::models::{AuthOutcome, Credentials};
use crate::transport::Transport;
use log::{debug, warn};

/// Drives the login call and hands whatever comes back to the classifier
///
/// Every failure path is folded into an [`AuthOutcome`]; `login` never
/// returns an `Err` and never panics.
pub struct AuthService<'a> {
    transport: &'a dyn Transport,
    server_url: String,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub fn new(transport: &'a dyn Transport, server_url: &str) -> Self {
        Self {
            transport,
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    /// Authenticate one set of credentials
    ///
    /// The reply body decides the outcome; the HTTP status code is carried
    /// through for display only. A request that produced no reply at all
    /// collapses to `TransportFailure` with a fixed message.
    pub async fn login(&self, credentials: &Credentials) -> AuthOutcome {
        // Query built by concatenation, matching the legacy endpoint
        // exactly; escaping beyond what the transport applies is
        // deliberately absent.
        let url = format!(
            "{}/User/authenticateUser?email={}&password={}",
            self.server_url, credentials.email, credentials.password
        );

        debug!(
            "Authenticating {} against {}",
            credentials.email, self.server_url
        );

        match self.transport.get(&url).await {
            Ok(reply) => classify_login_response(&reply.body, Some(reply.status)),
            Err(e) => {
                warn!("Login request produced no reply: {e}");
                AuthOutcome::TransportFailure {
                    message: NO_REPLY_MESSAGE.to_string(),
                }
            }
        }
    }
}
