use std::fmt;
use std::sync::Arc;

use nfsnapi_domain::constants::{AUTH_HEADER_NAME, FIELD_SEPARATOR};
use nfsnapi_domain::{Credentials, RequestPath, Result};
use sha1::{Digest, Sha1};
use tracing::trace;

use super::ports::{Clock, SaltSource};
use super::sources::{RandomSalt, SystemClock};

/// Computed value of the `X-NFSN-Authentication` header.
///
/// Valid for exactly one request: the digest covers the path and body it was
/// computed for. Its `Debug` output leaves out the digest.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    username: String,
    timestamp: i64,
    salt: String,
    digest: String,
}

impl AuthHeader {
    /// Header name the value must be sent under.
    pub const HEADER_NAME: &'static str = AUTH_HEADER_NAME;

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// `username;timestamp;salt;digest`
    pub fn value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = FIELD_SEPARATOR;
        write!(f, "{}{sep}{}{sep}{}{sep}{}", self.username, self.timestamp, self.salt, self.digest)
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeader")
            .field("username", &self.username)
            .field("timestamp", &self.timestamp)
            .field("salt", &self.salt)
            .finish_non_exhaustive()
    }
}

/// Hex SHA-1 digest over the canonical string
/// `username;timestamp;salt;api_key;path;hex(sha1(body))`.
///
/// Deterministic: all inputs are explicit. [`Authenticator`] supplies the
/// timestamp and salt for real requests.
pub fn sign(
    credentials: &Credentials,
    timestamp: i64,
    salt: &str,
    path: &RequestPath,
    body: &[u8],
) -> String {
    let body_digest = hex::encode(Sha1::digest(body));
    let timestamp = timestamp.to_string();

    let canonical = [
        credentials.username(),
        timestamp.as_str(),
        salt,
        credentials.api_key(),
        path.as_str(),
        body_digest.as_str(),
    ]
    .join(FIELD_SEPARATOR);

    hex::encode(Sha1::digest(canonical.as_bytes()))
}

/// Produces auth headers from an injected clock and salt source.
#[derive(Clone)]
pub struct Authenticator {
    clock: Arc<dyn Clock>,
    salt_source: Arc<dyn SaltSource>,
}

impl Authenticator {
    pub fn new(clock: Arc<dyn Clock>, salt_source: Arc<dyn SaltSource>) -> Self {
        Self { clock, salt_source }
    }

    /// Sign one request. `body` is empty for GET requests and the exact
    /// transmitted bytes for POST requests.
    pub fn compute(&self, credentials: &Credentials, path: &RequestPath, body: &[u8]) -> AuthHeader {
        let timestamp = self.clock.unix_timestamp();
        let salt = self.salt_source.salt();
        let digest = sign(credentials, timestamp, &salt, path, body);

        trace!(path = %path, timestamp, body_len = body.len(), "computed auth header");

        AuthHeader { username: credentials.username().to_owned(), timestamp, salt, digest }
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomSalt))
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator").finish_non_exhaustive()
    }
}

/// Sign a request with the system clock and a random salt.
///
/// `request_path` may omit its leading `/`.
///
/// # Errors
///
/// Returns an [`ApiError`](nfsnapi_domain::ApiError) if `request_path` is
/// empty.
pub fn compute_auth_header(
    username: &str,
    api_key: &str,
    request_path: &str,
    request_body: &[u8],
) -> Result<AuthHeader> {
    let path = RequestPath::parse(request_path)?;
    let credentials = Credentials::new(username, api_key);
    Ok(Authenticator::default().compute(&credentials, &path, request_body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FixedClock, FixedSalt};

    const USERNAME: &str = "testuser";
    const API_KEY: &str = "p3kxmRKf9dk3l6ls";
    const TIMESTAMP: i64 = 1_012_121_212;
    const SALT: &str = "dkwo28Sile4jdXkw";

    fn credentials() -> Credentials {
        Credentials::new(USERNAME, API_KEY)
    }

    fn fixed_authenticator() -> Authenticator {
        Authenticator::new(Arc::new(FixedClock(TIMESTAMP)), Arc::new(FixedSalt::new(SALT)))
    }

    #[test]
    fn golden_vector_for_get_info() {
        let path = RequestPath::parse("/site/example/getInfo").unwrap();
        let header = fixed_authenticator().compute(&credentials(), &path, b"");

        assert_eq!(header.digest(), "0fa8932e122d56e2f6d1550f9aab39c4aef8bfc4");
        assert_eq!(
            header.value(),
            "testuser;1012121212;dkwo28Sile4jdXkw;0fa8932e122d56e2f6d1550f9aab39c4aef8bfc4"
        );
    }

    #[test]
    fn golden_vector_with_form_body() {
        let path = RequestPath::parse("/dns/example.com/listRRs").unwrap();
        let digest = sign(&credentials(), TIMESTAMP, SALT, &path, b"type=A");
        assert_eq!(digest, "96c6dea13b5def23affe6921c1d514edd37413e4");
    }

    #[test]
    fn missing_leading_separator_signs_identically() {
        let authenticator = fixed_authenticator();
        let with = RequestPath::parse("/site/example/getInfo").unwrap();
        let without = RequestPath::parse("site/example/getInfo").unwrap();

        assert_eq!(
            authenticator.compute(&credentials(), &with, b"").value(),
            authenticator.compute(&credentials(), &without, b"").value()
        );
    }

    #[test]
    fn single_byte_body_change_changes_digest() {
        let path = RequestPath::parse("/dns/example.com/addRR").unwrap();
        let a = sign(&credentials(), TIMESTAMP, SALT, &path, b"name=www&type=A&data=10.0.0.1");
        let b = sign(&credentials(), TIMESTAMP, SALT, &path, b"name=www&type=A&data=10.0.0.2");
        assert_ne!(a, b);
    }

    #[test]
    fn timestamp_and_salt_feed_the_digest() {
        let path = RequestPath::parse("/account/ABCD-1234/balance").unwrap();
        let base = sign(&credentials(), TIMESTAMP, SALT, &path, b"");
        assert_ne!(base, sign(&credentials(), TIMESTAMP + 1, SALT, &path, b""));
        assert_ne!(base, sign(&credentials(), TIMESTAMP, "dkwo28Sile4jdXkW", &path, b""));
    }

    #[test]
    fn header_fields_are_exposed() {
        let path = RequestPath::parse("/site/example/getInfo").unwrap();
        let header = fixed_authenticator().compute(&credentials(), &path, b"");

        assert_eq!(AuthHeader::HEADER_NAME, "X-NFSN-Authentication");
        assert_eq!(header.username(), USERNAME);
        assert_eq!(header.timestamp(), TIMESTAMP);
        assert_eq!(header.salt(), SALT);
        assert_eq!(header.digest().len(), 40);
    }

    #[test]
    fn debug_output_omits_digest() {
        let path = RequestPath::parse("/site/example/getInfo").unwrap();
        let header = fixed_authenticator().compute(&credentials(), &path, b"");
        assert!(!format!("{header:?}").contains(header.digest()));
    }

    #[test]
    fn free_function_uses_live_sources() {
        let header = compute_auth_header(USERNAME, API_KEY, "site/example/getInfo", b"").unwrap();
        let value = header.value();
        let fields: Vec<&str> = value.split(';').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], USERNAME);
        assert_eq!(header.salt().len(), 16);

        let path = RequestPath::parse("/site/example/getInfo").unwrap();
        let expected = sign(&credentials(), header.timestamp(), header.salt(), &path, b"");
        assert_eq!(header.digest(), expected);
    }

    #[test]
    fn free_function_rejects_empty_path() {
        let err = compute_auth_header(USERNAME, API_KEY, "", b"").unwrap_err();
        assert_eq!(err.reason(), "request path must not be empty");
    }
}
