//! Shared Cache Handle
//!
//! The process-wide handle every component receives to reach the cache.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore};

// == Shared Cache ==
/// Cloneable handle to one `CacheStore`.
///
/// Values cross the handle as JSON, so one store can hold product lists,
/// optional products and quote strings side by side. Lookups share a read
/// lock; writes and invalidations take the write lock, so each call is
/// atomic on its own. Nothing here spans a get-then-put sequence.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl SharedCache {
    /// Wraps an existing store.
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a store with the given capacity and TTL.
    pub fn with_limits(max_entries: usize, ttl: Duration) -> Self {
        Self::new(CacheStore::new(max_entries, ttl))
    }

    /// Creates a store from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::with_limits(config.max_entries, config.ttl())
    }

    // == Get ==
    /// Looks up and decodes a cached value.
    ///
    /// A value that no longer decodes as `T` reads as a miss.
    pub async fn get<T: DeserializeOwned>(&self, region: &str, key: &str) -> Option<T> {
        let raw = self.inner.read().await.get(region, key)?;

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(region, key, "cache hit");
                Some(value)
            }
            Err(err) => {
                warn!(region, key, error = %err, "discarding undecodable cache entry");
                None
            }
        }
    }

    // == Put ==
    /// Encodes and stores a value. Values that fail to encode are skipped.
    pub async fn put<T: Serialize + ?Sized>(&self, region: &str, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                self.inner.write().await.put(region, key, raw);
                debug!(region, key, "cache store");
            }
            Err(err) => {
                warn!(region, key, error = %err, "value could not be encoded for caching");
            }
        }
    }

    // == Evict All ==
    /// Invalidates a whole region.
    pub async fn evict_all(&self, region: &str) -> usize {
        let removed = self.inner.write().await.evict_all(region);
        debug!(region, removed, "cache region invalidated");
        removed
    }

    /// Sweeps expired entries from every region.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn region_len(&self, region: &str) -> usize {
        self.inner.read().await.region_len(region)
    }
}
