//! Production and fixed implementations of the signing ports

use nfsnapi_domain::constants::{SALT_ALPHABET, SALT_LENGTH};
use rand::Rng;

use super::ports::{Clock, SaltSource};

/// Real wall clock. Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock frozen at a single instant, for reproducible signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}

/// Draws each salt character uniformly, with replacement, from the 52 ASCII
/// letters using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSalt;

impl SaltSource for RandomSalt {
    fn salt(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SALT_LENGTH)
            .map(|_| char::from(SALT_ALPHABET[rng.gen_range(0..SALT_ALPHABET.len())]))
            .collect()
    }
}

/// Always returns the same salt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSalt(pub String);

impl FixedSalt {
    pub fn new(salt: impl Into<String>) -> Self {
        Self(salt.into())
    }
}

impl SaltSource for FixedSalt {
    fn salt(&self) -> String {
        self.0.clone()
    }
}
