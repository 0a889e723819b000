//! Endpoint reachability probing

use crate::models::ApiStatus;
use crate::transport::Transport;
use log::debug;

/// Check whether an endpoint currently answers at all
///
/// Reachability only: a reply with a success status counts as `Online`,
/// anything else (error status or no reply) as `Offline`. The payload is
/// never inspected, and nothing is cached between calls.
pub async fn check_status(transport: &dyn Transport, url: &str) -> ApiStatus {
    match transport.get(url).await {
        Ok(reply) if (200..300).contains(&reply.status) => ApiStatus::Online,
        Ok(reply) => {
            debug!("Probe of {url} answered with status {}", reply.status);
            ApiStatus::Offline
        }
        Err(e) => {
            debug!("Probe of {url} failed: {e}");
            ApiStatus::Offline
        }
    }
}
