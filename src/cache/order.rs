//! Write Order Module
//!
//! Tracks the order in which entries were last written so the store can
//! evict the oldest-written entry first when it reaches capacity.

use std::collections::{BTreeMap, HashMap};

// == Entry Key ==
/// Fully qualified location of an entry: region plus key within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub region: String,
    pub key: String,
}

impl EntryKey {
    pub fn new(region: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            key: key.into(),
        }
    }
}

// == Write Order ==
/// Orders entries by write sequence.
///
/// Every write takes the next sequence number, so the smallest sequence is
/// always the oldest-written entry. Ties cannot occur.
#[derive(Debug, Default)]
pub struct WriteOrder {
    /// Next sequence number to hand out
    next_seq: u64,
    /// Sequence number -> entry, oldest first
    by_seq: BTreeMap<u64, EntryKey>,
    /// Entry -> its current sequence number
    seq_of: HashMap<EntryKey, u64>,
}

impl WriteOrder {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Write ==
    /// Marks an entry as the most recently written.
    pub fn record(&mut self, entry: EntryKey) {
        let seq = self.next_seq;
        self.next_seq += 1;

        if let Some(previous) = self.seq_of.insert(entry.clone(), seq) {
            self.by_seq.remove(&previous);
        }
        self.by_seq.insert(seq, entry);
    }

    // == Remove ==
    /// Stops tracking an entry. Unknown entries are ignored.
    pub fn remove(&mut self, entry: &EntryKey) {
        if let Some(seq) = self.seq_of.remove(entry) {
            self.by_seq.remove(&seq);
        }
    }

    // == Remove Region ==
    /// Stops tracking every entry in a region, returning how many were dropped.
    pub fn remove_region(&mut self, region: &str) -> usize {
        let before = self.by_seq.len();
        self.by_seq.retain(|_, entry| entry.region != region);
        self.seq_of.retain(|entry, _| entry.region != region);
        before - self.by_seq.len()
    }

    // == Pop Oldest ==
    /// Returns and stops tracking the oldest-written entry.
    pub fn pop_oldest(&mut self) -> Option<EntryKey> {
        let (_, entry) = self.by_seq.pop_first()?;
        self.seq_of.remove(&entry);
        Some(entry)
    }

    // == Peek Oldest ==
    pub fn peek_oldest(&self) -> Option<&EntryKey> {
        self.by_seq.first_key_value().map(|(_, entry)| entry)
    }

    pub fn contains(&self, entry: &EntryKey) -> bool {
        self.seq_of.contains_key(entry)
    }

    pub fn len(&self) -> usize {
        self.by_seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_seq.is_empty()
    }
}
