//! HTTP transport capability
//!
//! Both the auth and update components reach the network through this one
//! seam, so tests can substitute a scripted transport. Timeout enforcement
//! lives here; callers never hang and never retry.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors produced when no usable reply was obtained at all
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Request(String),
}

/// A reply that actually came back from the server
///
/// Non-2xx replies that carried a body are still a reply: interpreting the
/// body is the caller's job, the status code rides along for display.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// The HTTP GET capability both components depend on
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET against `url`
    ///
    /// # Errors
    ///
    /// Returns an error only when no reply was obtained (connect failure,
    /// timeout). Status-level failures are an `Ok` reply.
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError>;
}

/// The launcher's default user-agent string
#[must_use]
pub fn default_user_agent() -> String {
    format!(
        "launchrs/{} (+https://github.com/launchrs/launchrs)",
        crate::VERSION
    )
}

/// Transport backed by a shared `reqwest` client
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout and user agent
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Request(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
