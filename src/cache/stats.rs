//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Stats Counters ==
/// Live counters owned by the store.
///
/// Hits and misses are atomics so lookups can be recorded under a shared
/// read lock.
#[derive(Debug, Default)]
pub struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: u64,
    invalidations: u64,
}

impl StatsCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts an entry dropped to make room under the size bound.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Counts entries dropped by a region-wide invalidation.
    pub fn record_invalidations(&mut self, count: usize) {
        self.invalidations += count as u64;
    }

    // == Snapshot ==
    /// Captures the counters alongside the current entry counts.
    pub fn snapshot(&self, regions: BTreeMap<String, usize>) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions,
            invalidations: self.invalidations,
            total_entries: regions.values().sum(),
            regions,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of cache performance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (absent or expired)
    pub misses: u64,
    /// Number of entries evicted for capacity
    pub evictions: u64,
    /// Number of entries removed by region invalidation
    pub invalidations: u64,
    /// Current number of entries across all regions
    pub total_entries: usize,
    /// Current number of entries per region
    pub regions: BTreeMap<String, usize>,
}

impl CacheStats {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
