//! Cache Statistics Module
//!
//! Tracks cache hits, misses and sweep evictions.

use chrono::{DateTime, Utc};

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of lookups that found an entry
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries removed by the sweep
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Wall-clock time of the most recent sweep
    pub last_sweep_at: Option<DateTime<Utc>>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Sweep ==
    /// Adds `removed` to the eviction counter and stamps the sweep time.
    pub fn record_sweep(&mut self, removed: usize) {
        self.evictions += removed as u64;
        self.last_sweep_at = Some(Utc::now());
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
