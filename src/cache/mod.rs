//! Cache Module
//!
//! Region-partitioned in-memory cache with a store-wide TTL and a global
//! entry bound enforced in write order.

mod entry;
mod order;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use order::{EntryKey, WriteOrder};
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsCounters};
pub use store::CacheStore;

// == Region Names ==
/// Snapshot of the full product listing
pub const PRODUCTS_REGION: &str = "products";

/// Individual product lookups keyed by id
pub const PRODUCT_BY_ID_REGION: &str = "productById";

/// The most recent upstream (or fallback) quote
pub const QUOTES_REGION: &str = "externalQuotes";
