//! # nfsnapi Domain
//!
//! Plain data types shared by the NearlyFreeSpeech.NET API client crates.
//!
//! This crate contains:
//! - The unified [`ApiError`] and its `Result` alias
//! - Caller credentials and the normalized request path
//! - Client configuration structures
//! - Wire-level constants (API origin, header names, user agent)
//!
//! ## Architecture
//! - No dependencies on other nfsnapi crates
//! - No I/O, no clocks, no randomness

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
