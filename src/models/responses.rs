//! Response DTOs for the catalog server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for DELETE /api/products/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Human-readable outcome
    pub message: String,
    /// The id that was requested
    pub id: i64,
    /// Whether a product was actually removed
    pub removed: bool,
}

impl DeleteResponse {
    pub fn new(id: i64, removed: bool) -> Self {
        let message = if removed {
            format!("Product {} deleted", id)
        } else {
            format!("Product {} was not present", id)
        };
        Self {
            message,
            id,
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Number of entries removed by region invalidation
    pub invalidations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Entries per region
    pub regions: BTreeMap<String, usize>,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            regions: stats.regions,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
