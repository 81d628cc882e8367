//! Cache Entry Module
//!
//! Defines a single cached value together with the instant it was written.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its write timestamp.
///
/// Entries carry no TTL of their own; the owning store applies one
/// store-wide time-to-live measured from `inserted_at`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (serialized JSON)
    pub value: String,
    /// When the entry was written
    pub inserted_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: String) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }

    // == Time To Live ==
    /// Returns how long the entry remains visible, zero once expired.
    pub fn ttl_remaining(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.inserted_at.elapsed())
    }
}
