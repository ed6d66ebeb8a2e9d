//! Error type returned by every fallible API operation

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified failure for an API request.
///
/// Transport failures, connection failures and HTTP error statuses all
/// surface as this one type. `reason` is always present; `debug` carries the
/// vendor's machine-oriented detail when the API returned one.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{reason}{}", debug_suffix(.debug))]
pub struct ApiError {
    reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    debug: Option<String>,
}

impl ApiError {
    /// Error with a reason and no debug detail.
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into(), debug: None }
    }

    /// Error carrying both the human-readable reason and the debug detail.
    pub fn with_debug(reason: impl Into<String>, debug: impl Into<String>) -> Self {
        Self { reason: reason.into(), debug: Some(debug.into()) }
    }

    /// Configuration problem detected before any request was issued.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::new(format!("configuration error: {message}"))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn debug(&self) -> Option<&str> {
        self.debug.as_deref()
    }
}

// Reason and debug detail are rendered on separate lines.
fn debug_suffix(debug: &Option<String>) -> String {
    debug.as_ref().map(|debug| format!("\n{debug}")).unwrap_or_default()
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
