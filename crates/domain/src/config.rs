//! Client configuration structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::API_ORIGIN;

/// Settings for the HTTP side of the client.
///
/// Every field has a default, so an empty JSON/TOML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin requests are sent to. Overridden in tests to point at a mock
    /// server.
    pub base_url: String,
    /// Skip TLS peer verification. Off by default; turning it on restores the
    /// behavior of the legacy client, which never checked certificates.
    pub accept_invalid_certs: bool,
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout_secs: Option<u64>,
    /// Replaces the built-in user agent when set.
    pub user_agent: Option<String>,
    /// Route requests through the proxy named by `HTTPS_PROXY` and related
    /// environment variables. On by default.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_ORIGIN.to_string(),
            accept_invalid_certs: false,
            timeout_secs: None,
            user_agent: None,
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
