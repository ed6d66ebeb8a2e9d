//! Wire-level constants for the NearlyFreeSpeech.NET API.

/// Origin every API request is sent to.
pub const API_ORIGIN: &str = "https://api.nearlyfreespeech.net";

/// Name of the header carrying the computed authentication value.
pub const AUTH_HEADER_NAME: &str = "X-NFSN-Authentication";

/// User agent sent with every request unless overridden in config: library
/// name and version, then the project's home page.
pub const USER_AGENT: &str =
    concat!("nfsnapi/", env!("CARGO_PKG_VERSION"), " +", env!("CARGO_PKG_REPOSITORY"));

/// Content type of POST bodies; the API takes form-encoded parameters.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// Salt generation
pub const SALT_LENGTH: usize = 16;
pub const SALT_ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Separator between the fields of the auth header and the hashed canonical string.
pub const FIELD_SEPARATOR: &str = ";";
