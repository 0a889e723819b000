//! Launcher configuration
//!
//! Settings load from `Settings.toml` next to the launcher binary, fall
//! back to defaults, and take environment-variable overrides on top. The
//! one value this crate ever writes back is the ignored-update-version
//! preference; everything else is read-only configuration.

use crate::models::PreferenceUpdate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] basic_toml::Error),
    #[error("invalid URL for {key}: {source}")]
    InvalidUrl {
        key: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LaunchrsSettings {
    pub server: ServerSettings,
    pub update: UpdateSettings,
    pub http: HttpSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the game server's API
    pub url: String,
    /// Display name used in user-facing messages
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSettings {
    /// Primary update endpoint on the game server, probed and fetched with
    /// a `?version=` query
    pub status_url: String,
    /// Secondary repository-release endpoint used when the primary is
    /// unreachable
    pub release_url: String,
    /// Version string the user chose to ignore; empty when none
    pub ignore_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout applied by the transport
    pub timeout_secs: u64,
    /// Overrides the built-in launcher user agent when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:6850".to_string(),
            name: "Game Server".to_string(),
        }
    }
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            status_url: "http://localhost:6850/update.php".to_string(),
            release_url: "https://api.github.com/repos/launchrs/launchrs/releases/latest"
                .to_string(),
            ignore_version: String::new(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LaunchrsSettings {
    /// Load settings from `Settings.toml` and environment variables
    ///
    /// Also initializes the logger, so callers get log output from the
    /// first network call onward.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read or
    /// parsed. A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self, SettingsError> {
        Self::initialize_logging();

        let mut settings = Self::load_from(Path::new(SETTINGS_FILE))?;
        Self::apply_env_overrides(&mut settings);
        settings.validate()?;

        Ok(settings)
    }

    /// Check that every configured endpoint parses as a URL
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending key when an endpoint does not
    /// parse.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let endpoints = [
            ("server.url", &self.server.url),
            ("update.status_url", &self.update.status_url),
            ("update.release_url", &self.update.release_url),
        ];

        for (key, value) in endpoints {
            url::Url::parse(value).map_err(|source| SettingsError::InvalidUrl {
                key: key.to_string(),
                source,
            })?;
        }

        Ok(())
    }

    /// Load settings from a specific TOML file, defaults when it is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let toml_content = fs::read_to_string(path)?;
        let settings = basic_toml::from_str(&toml_content)?;
        println!("✓ Loaded settings from {}", path.display());

        Ok(settings)
    }

    /// Write the settings document back to disk
    ///
    /// Used after an update-prompt resolution changed the ignore
    /// preference; the whole document is rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn store(&self, path: &Path) -> Result<(), SettingsError> {
        let toml_content = basic_toml::to_string(self)?;
        fs::write(path, toml_content)?;
        Ok(())
    }

    /// Fold a proposed preference write into the settings value
    ///
    /// The caller decides when to [`store`](Self::store) the result; the
    /// read-then-decide-then-write sequence belongs to one update check.
    pub fn apply_preference_update(&mut self, preference: &PreferenceUpdate) {
        match preference {
            PreferenceUpdate::Unchanged => {}
            PreferenceUpdate::Clear => self.update.ignore_version.clear(),
            PreferenceUpdate::Remember(version) => {
                self.update.ignore_version = version.clone();
            }
        }
    }

    /// The stored ignore preference, empty when none
    #[must_use]
    pub fn ignored_version(&self) -> &str {
        &self.update.ignore_version
    }

    /// Effective user agent for outgoing requests
    #[must_use]
    pub fn user_agent(&self) -> String {
        self.http
            .user_agent
            .clone()
            .unwrap_or_else(crate::transport::default_user_agent)
    }

    // Tolerates repeated initialization so tests can call load() freely
    fn initialize_logging() {
        let _ = env_logger::try_init();
    }

    /// Apply environment variable overrides to settings
    fn apply_env_overrides(settings: &mut Self) {
        if let Ok(url) = std::env::var("LAUNCHER_SERVER_URL") {
            settings.server.url = url;
        }
        if let Ok(name) = std::env::var("LAUNCHER_SERVER_NAME") {
            settings.server.name = name;
        }
        if let Ok(status_url) = std::env::var("LAUNCHER_UPDATE_URL") {
            settings.update.status_url = status_url;
        }
        if let Ok(release_url) = std::env::var("LAUNCHER_RELEASE_URL") {
            settings.update.release_url = release_url;
        }
        if let Ok(user_agent) = std::env::var("LAUNCHER_USER_AGENT") {
            settings.http.user_agent = Some(user_agent);
        }
        Self::apply_numeric_env_override("LAUNCHER_TIMEOUT_SECS", &mut settings.http.timeout_secs);
        if let Ok(log_level) = std::env::var("RUST_LOG") {
            settings.logging.level = log_level;
        }
    }

    /// Helper function to apply numeric environment variable overrides
    fn apply_numeric_env_override(env_var: &str, target: &mut u64) {
        if let Ok(value_str) = std::env::var(env_var) {
            if let Ok(value) = value_str.parse::<u64>() {
                *target = value;
            }
        }
    }
}
