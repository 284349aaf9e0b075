//! Id and timestamp generation
//!
//! Stores never call the clock or the RNG directly; they go through an
//! [`IdStrategy`] so tests can substitute a deterministic one.

use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;

const TOKEN_LENGTH: usize = 8;

/// Source of record ids, random tokens and creation timestamps
pub trait IdStrategy: Send + Sync {
    /// Current time used for `created_at` and id composition
    fn now(&self) -> DateTime<Utc>;

    /// Short random token (lowercase alphanumeric)
    fn token(&self) -> String;

    /// Unique id of the form `{prefix}_{unix millis}_{token}`
    fn next_id(&self, prefix: &str) -> String {
        format!(
            "{}_{}_{}",
            prefix,
            self.now().timestamp_millis(),
            self.token()
        )
    }
}

/// Default strategy: wall clock plus thread-local RNG entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdStrategy;

impl IdStrategy for TimestampIdStrategy {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn token(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect()
    }
}
