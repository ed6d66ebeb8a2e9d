//! Authentication header derivation
//!
//! Every request carries `X-NFSN-Authentication: user;timestamp;salt;digest`,
//! where the digest binds the API key to one path, one body, one timestamp
//! and one salt.

mod header;
pub mod ports;
mod sources;

pub use header::{compute_auth_header, sign, AuthHeader, Authenticator};
pub use sources::{FixedClock, FixedSalt, RandomSalt, SystemClock};
