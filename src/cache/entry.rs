//! Cache Entry Module
//!
//! Defines the structure for individual cached payloads.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached response body and the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was inserted or last overwritten
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Strictly greater: an entry exactly `ttl` old is still live.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
