//! Ports for the non-deterministic inputs of request signing

use std::sync::Arc;

/// Source of the wall-clock timestamp embedded in each header.
///
/// The API rejects headers whose timestamp falls outside its replay window,
/// so production code uses [`SystemClock`](super::SystemClock). Tests pin the
/// value with [`FixedClock`](super::FixedClock).
pub trait Clock: Send + Sync {
    /// Current Unix time in whole seconds.
    fn unix_timestamp(&self) -> i64;
}

/// Source of the per-request salt.
pub trait SaltSource: Send + Sync {
    /// A fresh salt. Implementations used against the live API must return
    /// 16 ASCII letters.
    fn salt(&self) -> String;
}

/// Implement Clock for Arc<T> where T: Clock for convenient sharing
impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn unix_timestamp(&self) -> i64 {
        (**self).unix_timestamp()
    }
}

impl<T: SaltSource + ?Sized> SaltSource for Arc<T> {
    fn salt(&self) -> String {
        (**self).salt()
    }
}
