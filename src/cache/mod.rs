//! Cache Module
//!
//! In-memory response cache with time-based expiry, shared between the
//! fetcher and the background sweep.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache handle shared by the fetcher and the sweep task.
///
/// One lock serializes every read, write and sweep. Holders must not
/// await network I/O while it is held.
pub type SharedCache = Arc<Mutex<CacheStore>>;

/// Creates an empty shared cache with the given TTL.
pub fn shared(ttl: Duration) -> SharedCache {
    Arc::new(Mutex::new(CacheStore::new(ttl)))
}
