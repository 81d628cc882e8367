//! Cache Store Module
//!
//! Region-partitioned cache engine with a store-wide TTL and a global
//! entry bound enforced in write order.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, EntryKey, StatsCounters, WriteOrder};

// == Cache Store ==
/// Keyed storage split into independent named regions.
///
/// The entry bound applies to the sum of all regions. When a new entry would
/// exceed it, the oldest-written entries are evicted first regardless of
/// which region they live in.
#[derive(Debug)]
pub struct CacheStore {
    /// Region name -> key -> entry
    regions: HashMap<String, HashMap<String, CacheEntry>>,
    /// Write-order tracker across all regions
    order: WriteOrder,
    /// Performance statistics
    stats: StatsCounters,
    /// Maximum number of entries allowed across all regions
    max_entries: usize,
    /// Time-to-live applied to every entry
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new store with the given global capacity and TTL.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            regions: HashMap::new(),
            order: WriteOrder::new(),
            stats: StatsCounters::new(),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    // == Get ==
    /// Returns the value stored under `key` in `region`.
    ///
    /// Absent, expired and evicted entries all read as `None`. Lookups leave
    /// entries and eviction order untouched.
    pub fn get(&self, region: &str, key: &str) -> Option<String> {
        let entry = self
            .regions
            .get(region)
            .and_then(|entries| entries.get(key))
            .filter(|entry| !entry.is_expired(self.ttl));

        match entry {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Inserts or replaces a value, resetting its age to zero.
    ///
    /// Inserting a new key into a full store first evicts the
    /// oldest-written entries until there is room.
    pub fn put(&mut self, region: &str, key: &str, value: String) {
        let entry_key = EntryKey::new(region, key);

        if !self.order.contains(&entry_key) {
            while self.order.len() >= self.max_entries {
                let Some(oldest) = self.order.pop_oldest() else {
                    break;
                };
                self.remove_entry(&oldest);
                self.stats.record_eviction();
            }
        }

        self.regions
            .entry(region.to_string())
            .or_default()
            .insert(key.to_string(), CacheEntry::new(value));
        self.order.record(entry_key);
    }

    // == Evict All ==
    /// Removes every entry in `region`, returning how many were removed.
    ///
    /// Other regions are untouched.
    pub fn evict_all(&mut self, region: &str) -> usize {
        let removed = self
            .regions
            .remove(region)
            .map(|entries| entries.len())
            .unwrap_or(0);
        self.order.remove_region(region);
        self.stats.record_invalidations(removed);
        removed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from every region.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let expired: Vec<EntryKey> = self
            .regions
            .iter()
            .flat_map(|(region, entries)| {
                entries
                    .iter()
                    .filter(move |(_, entry)| entry.is_expired(ttl))
                    .map(move |(key, _)| EntryKey::new(region.as_str(), key.as_str()))
            })
            .collect();

        for entry_key in &expired {
            self.remove_entry(entry_key);
            self.order.remove(entry_key);
        }

        expired.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let regions: BTreeMap<String, usize> = self
            .regions
            .iter()
            .map(|(name, entries)| (name.clone(), entries.len()))
            .collect();
        self.stats.snapshot(regions)
    }

    // == Length ==
    /// Returns the number of entries across all regions, expired ones included
    /// until they are swept or evicted.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of entries held in one region.
    pub fn region_len(&self, region: &str) -> usize {
        self.regions.get(region).map(HashMap::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn remove_entry(&mut self, entry_key: &EntryKey) {
        if let Some(entries) = self.regions.get_mut(&entry_key.region) {
            entries.remove(&entry_key.key);
            if entries.is_empty() {
                self.regions.remove(&entry_key.region);
            }
        }
    }
}
