//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_MAX_ENTRIES: usize = 10_000;
const DEFAULT_TTL_SECS: u64 = 300;
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 30;
const DEFAULT_RETRY_COUNT: u32 = 3;
const DEFAULT_QUOTE_API_URL: &str = "https://api.quotable.io/random";
const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 3;
const DEFAULT_CATALOG_LATENCY_MS: u64 = 800;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries across all cache regions
    pub max_entries: usize,
    /// Time-to-live in seconds applied to every cache entry
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Upstream quote attempts before falling back to a local quote
    pub retry_count: u32,
    /// Upstream quote endpoint
    pub quote_api_url: String,
    /// Per-attempt upstream timeout in seconds
    pub quote_timeout: u64,
    /// Simulated cost of reading the product collection, in milliseconds
    pub catalog_latency_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 10000)
    /// - `DEFAULT_TTL` - Entry TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    /// - `QUOTE_RETRY_COUNT` - Upstream attempts per miss (default: 3)
    /// - `QUOTE_API_URL` - Upstream quote endpoint
    /// - `QUOTE_TIMEOUT_SECS` - Upstream timeout in seconds (default: 3)
    /// - `CATALOG_LATENCY_MS` - Simulated catalog read cost (default: 800)
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            max_entries: parse_var("MAX_ENTRIES", DEFAULT_MAX_ENTRIES),
            default_ttl: parse_var("DEFAULT_TTL", DEFAULT_TTL_SECS),
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT),
            cleanup_interval: parse_var("CLEANUP_INTERVAL", DEFAULT_CLEANUP_INTERVAL_SECS),
            retry_count: parse_var("QUOTE_RETRY_COUNT", DEFAULT_RETRY_COUNT),
            quote_api_url: env::var("QUOTE_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_QUOTE_API_URL.to_string()),
            quote_timeout: parse_var("QUOTE_TIMEOUT_SECS", DEFAULT_QUOTE_TIMEOUT_SECS),
            catalog_latency_ms: parse_var("CATALOG_LATENCY_MS", DEFAULT_CATALOG_LATENCY_MS),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    pub fn quote_timeout(&self) -> Duration {
        Duration::from_secs(self.quote_timeout)
    }

    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog_latency_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            default_ttl: DEFAULT_TTL_SECS,
            server_port: DEFAULT_SERVER_PORT,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL_SECS,
            retry_count: DEFAULT_RETRY_COUNT,
            quote_api_url: DEFAULT_QUOTE_API_URL.to_string(),
            quote_timeout: DEFAULT_QUOTE_TIMEOUT_SECS,
            catalog_latency_ms: DEFAULT_CATALOG_LATENCY_MS,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
