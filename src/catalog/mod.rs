//! Catalog Module
//!
//! The product collection and its cache-aside service.

mod service;

pub use service::{ProductService, ALL_PRODUCTS_KEY};
