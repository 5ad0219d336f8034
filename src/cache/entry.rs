//! Cache Entry Module
//!
//! Defines the payload stored per key together with its insertion instant.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A raw response body and the instant it was inserted or last overwritten.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// Insertion instant, reset by every overwrite
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self::stamped(value, Instant::now())
    }

    /// Creates an entry stamped with an explicit instant.
    pub fn stamped(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `max_age` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals `max_age` exactly is
    /// still live. Only strictly older entries are expired.
    pub fn is_expired(&self, now: Instant, max_age: Duration) -> bool {
        self.age(now) > max_age
    }
}
