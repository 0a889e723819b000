//! Dual-source update resolution
//!
//! The primary source may be offline independently of whether update
//! information exists at all, so resolution chains to the repository
//! releases endpoint as a deliberate fallback. The two probes are strictly
//! sequential, never raced. A fetch or parse failure after a successful
//! probe is not classified on its own; it leaves the latest version
//! unknown for that source, indistinguishable from "no data".

use crate::models::{
    ApiStatus, PreferenceUpdate, PromptResolution, ReleaseInfo, UpdateCheckResponse, UpdateInfo,
    VersionDecision,
};
use crate::transport::Transport;
use crate::update::probe::check_status;
use log::{debug, error, info, warn};
use std::cmp::Ordering;

/// Outcome of one update check, ready for the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    pub decision: VersionDecision,
    /// `false` when the stored ignore-preference suppresses the prompt
    /// (the decision itself still reports what was found)
    pub should_prompt: bool,
}

/// Resolves the latest launcher version and decides what the UI should do
pub struct UpdateResolver<'a> {
    transport: &'a dyn Transport,
    primary_url: String,
    secondary_url: String,
}

impl<'a> UpdateResolver<'a> {
    /// `primary_url` is the game server's update endpoint, probed and
    /// fetched with a `?version=` query; `secondary_url` is the repository
    /// `releases/latest` endpoint.
    #[must_use]
    pub fn new(transport: &'a dyn Transport, primary_url: &str, secondary_url: &str) -> Self {
        Self {
            transport,
            primary_url: primary_url.to_string(),
            secondary_url: secondary_url.to_string(),
        }
    }

    /// Run one full update check
    ///
    /// `ignored_version` is the stored preference value (empty when the
    /// user never dismissed a prompt); equality with the freshly resolved
    /// latest version suppresses the prompt. The preference is only read
    /// here; writes are proposed via [`preference_update`].
    pub async fn check(&self, current_version: &str, ignored_version: &str) -> UpdateCheck {
        let update_info = self.resolve_latest(current_version).await;
        let decision = decide(current_version, update_info.latest_version);

        let should_prompt = match &decision {
            VersionDecision::UpdateAvailable { latest_version } => {
                ignored_version != latest_version
            }
            _ => false,
        };

        UpdateCheck {
            decision,
            should_prompt,
        }
    }

    /// Resolve the latest version, primary source first
    pub async fn resolve_latest(&self, current_version: &str) -> UpdateInfo {
        let probe_url = format!("{}?version={}", self.primary_url, current_version);

        if check_status(self.transport, &probe_url).await == ApiStatus::Online {
            return UpdateInfo {
                latest_version: self.fetch_primary(&probe_url).await,
            };
        }

        warn!("UPDATER: falling back to the release API");

        if check_status(self.transport, &self.secondary_url).await == ApiStatus::Online {
            return UpdateInfo {
                latest_version: self.fetch_secondary().await,
            };
        }

        error!("UPDATER: failed to retrieve latest build information from both sources");
        UpdateInfo::default()
    }

    async fn fetch_primary(&self, url: &str) -> Option<String> {
        let reply = match self.transport.get(url).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Primary update metadata fetch failed: {e}");
                return None;
            }
        };

        match serde_json::from_str::<UpdateCheckResponse>(&reply.body) {
            Ok(response) => {
                let latest = response.payload.latest_version;
                if let Some(version) = &latest {
                    info!("UPDATER: latest version -> {version}");
                }
                latest
            }
            Err(e) => {
                debug!("Primary update metadata did not parse: {e}");
                None
            }
        }
    }

    async fn fetch_secondary(&self) -> Option<String> {
        let reply = match self.transport.get(&self.secondary_url).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Release metadata fetch failed: {e}");
                return None;
            }
        };

        match serde_json::from_str::<ReleaseInfo>(&reply.body) {
            Ok(release) => {
                // The tag name fills the same slot as the primary source's
                // LatestVersion field
                let latest = release.tag_name;
                if let Some(version) = &latest {
                    info!("UPDATER: latest version -> {version}");
                }
                latest
            }
            Err(e) => {
                debug!("Release metadata did not parse: {e}");
                None
            }
        }
    }
}

/// Compare the running build against whatever the sources reported
///
/// Ordinal string comparison, deliberately not semver-aware: behavior
/// parity with the legacy launcher, quirks included.
fn decide(current_version: &str, latest_version: Option<String>) -> VersionDecision {
    let Some(latest) = latest_version else {
        return VersionDecision::BackendError;
    };

    match current_version.cmp(latest.as_str()) {
        Ordering::Greater => VersionDecision::InsiderBuild,
        Ordering::Equal => VersionDecision::UpToDate,
        Ordering::Less => VersionDecision::UpdateAvailable {
            latest_version: latest,
        },
    }
}

/// Which settings write should follow a prompt resolution
///
/// Accepting changes nothing here (applying the update is external);
/// dismissing clears any stored preference; dismissing with "remember"
/// stores the offered version so only a newer release prompts again.
#[must_use]
pub fn preference_update(resolution: PromptResolution, latest_version: &str) -> PreferenceUpdate {
    match resolution {
        PromptResolution::Accept => PreferenceUpdate::Unchanged,
        PromptResolution::Dismiss => PreferenceUpdate::Clear,
        PromptResolution::DismissAndRemember => {
            PreferenceUpdate::Remember(latest_version.to_string())
        }
    }
}
