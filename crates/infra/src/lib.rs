//! # nfsnapi Infrastructure
//!
//! I/O side of the NearlyFreeSpeech.NET API client.
//!
//! This crate contains:
//! - The request runner that signs and sends API calls
//! - The HTTP client wrapper (reqwest)
//! - Conversions from transport errors into `ApiError`
//! - Configuration loading from the environment and files
//!
//! ## Example
//!
//! ```no_run
//! # async fn demo() -> Result<(), nfsnapi_infra::ApiError> {
//! let balance =
//!     nfsnapi_infra::run_request("USERNAME", "API_KEY", "/account/ACCOUNT/balance", None)
//!         .await?;
//! let records =
//!     nfsnapi_infra::run_request("USERNAME", "API_KEY", "/dns/DOMAIN/listRRs", Some("type=A"))
//!         .await?;
//! # let _ = (balance, records);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{run_request, RequestRunner, RequestRunnerBuilder};
pub use http::{HttpClient, HttpClientBuilder};
pub use nfsnapi_domain::{ApiError, ClientConfig, Credentials};
