//! Mock objects and fake implementations for testing

use crate::transport::{HttpReply, Transport, TransportError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted transport for isolated tests
///
/// Replies are matched by URL substring in registration order; a GET with
/// no matching script errors like an unreachable host. Every request is
/// recorded so tests can assert call sequencing, not just final outcomes.
#[derive(Default)]
pub struct MockTransport {
    replies: Vec<(String, u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a reply for any URL containing `url_fragment`
    #[must_use]
    pub fn with_reply(mut self, url_fragment: &str, status: u16, body: &str) -> Self {
        self.replies
            .push((url_fragment.to_string(), status, body.to_string()));
        self
    }

    /// Every URL requested so far, in order
    ///
    /// # Panics
    ///
    /// Panics if the interior request log lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        self.requests
            .lock()
            .expect("request log lock poisoned")
            .push(url.to_string());

        self.replies
            .iter()
            .find(|(fragment, _, _)| url.contains(fragment))
            .map(|(_, status, body)| HttpReply {
                status: *status,
                body: body.clone(),
            })
            .ok_or_else(|| TransportError::Connect(format!("no scripted reply for {url}")))
    }
}
