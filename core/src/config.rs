//! Client configuration.
//!
//! `ClientConfig` deserializes with defaults for every field, so a host can
//! embed it in its own configuration file and set only what differs.
//! `from_env` overlays the `METMUSEUM_*` environment variables.

use std::time::Duration;

use serde::Deserialize;

/// Public endpoint of the collection API.
pub const DEFAULT_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

const DEFAULT_USER_AGENT: &str = concat!("metmuseum-core/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request timeout applied by the network transport.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `METMUSEUM_URL` and `METMUSEUM_TIMEOUT_SECS`.
    ///
    /// An unparseable timeout is ignored with a warning.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("METMUSEUM_URL").filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = lookup("METMUSEUM_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => self.timeout_secs = Some(secs),
                Err(err) => tracing::warn!(value = %raw, error = %err, "ignoring METMUSEUM_TIMEOUT_SECS"),
            }
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
