//! Request-scoped value types

use std::fmt;

use crate::errors::{ApiError, Result};

/// Member login name and API key used to sign a request.
///
/// Supplied by the caller for each call. The key never appears in `Debug`
/// output and the type has no serde impls.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { username: username.into(), api_key: api_key.into() }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Path portion of an API URL, always starting with `/`.
///
/// This is the only place the leading-separator rule lives: the same value
/// feeds both the signed canonical string and the request URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath(String);

impl RequestPath {
    /// Normalize a caller-supplied path, prepending `/` when missing.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if `raw` is empty.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(ApiError::new("request path must not be empty"));
        }

        if raw.starts_with('/') {
            Ok(Self(raw.to_owned()))
        } else {
            Ok(Self(format!("/{raw}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RequestPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
