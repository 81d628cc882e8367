//! Catalog Cache - product catalog and quote service behind a region cache
//!
//! Cache-aside reads over an owned product collection, plus a retrying,
//! fallback-backed proxy for an external quote provider, both sharing one
//! TTL- and size-bounded cache.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod quotes;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
