//! NearlyFreeSpeech.NET API access
//!
//! This module signs and sends API requests and folds every failure into a
//! single [`ApiError`](nfsnapi_domain::ApiError).
//!
//! # Architecture
//!
//! - Uses the [`HttpClient`](crate::http::HttpClient) wrapper (no direct
//!   reqwest client construction)
//! - Signing is delegated to `nfsnapi-core`
//! - One attempt per call: no retries, no caching
//! - Structured tracing only; credentials and digests are never logged

pub mod client;
pub mod errors;

pub use client::{run_request, RequestRunner, RequestRunnerBuilder};
pub use errors::map_status_error;
