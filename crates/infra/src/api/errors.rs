//! Translation of HTTP error responses into [`ApiError`]
//!
//! The API reports failures as a JSON object with a human-readable `error`
//! and a `debug` string aimed at developers. Anything else falls back to the
//! status reason phrase.

use nfsnapi_domain::ApiError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error body returned by the API on 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
    debug: String,
}

/// Build the error for a non-success response.
///
/// Both `error` and `debug` must be present as strings for the payload to be
/// used; a partial or malformed payload yields the reason phrase alone.
pub fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) => ApiError::with_debug(payload.error, payload.debug),
        Err(_) => ApiError::new(reason_phrase(status)),
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(|| status.as_str().to_owned(), str::to_owned)
}
