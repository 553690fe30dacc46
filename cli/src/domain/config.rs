//! Domain types for fleet CLI configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.fleet-cloud.io";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration stored in `~/.fleet/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FleetConfig {
    /// Base URL of the fleet API.
    pub api_url: String,
    /// Session token sent as a bearer credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout for API calls.
    pub request_timeout_secs: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl FleetConfig {
    /// Apply environment overrides on top of file values.
    ///
    /// Blank values are ignored so an exported-but-empty variable does not
    /// wipe the file setting.
    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = token.filter(|v| !v.trim().is_empty()) {
            self.token = Some(token);
        }
        self
    }

    /// The session token, if one is present and not blank.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// API base URL without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
