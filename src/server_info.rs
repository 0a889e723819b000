//! Server self-description fetch
//!
//! The launcher's main window shows the server's name, player counts, and
//! signup links; all of it comes from one JSON document the server
//! publishes. This is a thin typed fetch with no decision logic.

use crate::transport::{Transport, TransportError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerInfoError {
    #[error("server information request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("server information endpoint answered with status {0}")]
    Status(u16),
    #[error("server information did not parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The server's published self-description
///
/// Field names follow the wire document; anything the server omits stays
/// at its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerInformation {
    #[serde(rename = "ServerName")]
    pub server_name: Option<String>,
    #[serde(rename = "MessageSrv")]
    pub message: Option<String>,
    #[serde(rename = "HomePageUrl")]
    pub home_page_url: Option<String>,
    #[serde(rename = "DiscordUrl")]
    pub discord_url: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "BannerUrl")]
    pub banner_url: Option<String>,
    #[serde(rename = "ServerVersion")]
    pub server_version: Option<String>,
    #[serde(rename = "NumberOfRegistered")]
    pub registered_players: u64,
    #[serde(rename = "OnlineNumber")]
    pub online_players: u64,
    #[serde(rename = "MaxUsersAllowed")]
    pub max_players: u64,
    #[serde(rename = "RequireTicket")]
    pub require_ticket: Option<String>,
    #[serde(rename = "WebSignupUrl")]
    pub web_signup_url: Option<String>,
    #[serde(rename = "WebRecoveryUrl")]
    pub web_recovery_url: Option<String>,
}

/// Fetch the server's self-description
///
/// # Errors
///
/// Returns an error if the request produced no reply, the endpoint
/// answered with a non-success status, or the body did not parse.
pub async fn fetch_server_information(
    transport: &dyn Transport,
    server_url: &str,
) -> Result<ServerInformation, ServerInfoError> {
    let url = format!("{}/GetServerInformation", server_url.trim_end_matches('/'));
    let reply = transport.get(&url).await?;

    if !(200..300).contains(&reply.status) {
        return Err(ServerInfoError::Status(reply.status));
    }

    Ok(serde_json::from_str(&reply.body)?)
}
