//! Pre-built test data
//!
//! Canonical reply bodies for every endpoint this crate talks to, so test
//! files don't each hand-roll their own wire documents.

use crate::settings::LaunchrsSettings;

/// Well-formed success reply from the login endpoint
#[must_use]
pub fn login_success_body() -> &'static str {
    "<LoginStatusVO><UserId>1337</UserId><LoginToken>token-abc</LoginToken></LoginStatusVO>"
}

/// Login reply carrying a timed ban
#[must_use]
pub fn login_banned_body() -> &'static str {
    "<LoginStatusVO><Ban><Reason>Cheating</Reason><Expires>2026-09-01</Expires></Ban></LoginStatusVO>"
}

/// Login reply carrying the exact tampering marker
#[must_use]
pub fn login_tampering_body() -> &'static str {
    "<LoginStatusVO><Description>Please use MeTonaTOR's launcher. Or, are you tampering?</Description></LoginStatusVO>"
}

/// The generic page a broken deployment serves instead of the schema
#[must_use]
pub fn login_fallback_page() -> &'static str {
    "<html><body>Bad Gateway</body></html>"
}

/// Primary update endpoint reply advertising `version`
#[must_use]
pub fn update_metadata_body(version: &str) -> String {
    format!(r#"{{"Payload":{{"LatestVersion":"{version}"}}}}"#)
}

/// Repository releases/latest reply advertising `tag`
#[must_use]
pub fn release_body(tag: &str) -> String {
    format!(r#"{{"TagName":"{tag}"}}"#)
}

/// A representative server self-description document
#[must_use]
pub fn server_information_body() -> &'static str {
    r#"{
        "ServerName": "World Revival",
        "MessageSrv": "Welcome back, racers!",
        "HomePageUrl": "https://worldrevival.example",
        "DiscordUrl": "https://discord.example/worldrevival",
        "Country": "DE",
        "ServerVersion": "1.8.4",
        "NumberOfRegistered": 50000,
        "OnlineNumber": 128,
        "MaxUsersAllowed": 1000,
        "RequireTicket": "false",
        "WebSignupUrl": "https://worldrevival.example/signup"
    }"#
}

/// Settings pointing every endpoint at a test host
#[must_use]
pub fn test_settings() -> LaunchrsSettings {
    let mut settings = LaunchrsSettings::default();
    settings.server.url = "http://server.test".to_string();
    settings.server.name = "World Revival".to_string();
    settings.update.status_url = "http://server.test/update.php".to_string();
    settings.update.release_url = "http://releases.test/releases/latest".to_string();
    settings
}
