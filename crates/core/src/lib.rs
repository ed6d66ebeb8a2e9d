//! # nfsnapi Core
//!
//! Request signing for the NearlyFreeSpeech.NET API - no I/O.
//!
//! This crate contains:
//! - The authentication header algorithm
//! - Port interfaces for the clock and the salt source
//!
//! ## Architecture Principles
//! - Only depends on `nfsnapi-domain`
//! - No HTTP code
//! - Time and randomness come in through traits so signing is reproducible

pub mod auth;

// Re-export specific items to avoid ambiguity
pub use auth::ports::{Clock, SaltSource};
pub use auth::{compute_auth_header, sign, AuthHeader, Authenticator};
pub use auth::{FixedClock, FixedSalt, RandomSalt, SystemClock};
