//! API Module
//!
//! HTTP handlers and routing for the catalog server REST API.
//!
//! # Endpoints
//! - `GET /api/products` - List all products
//! - `POST /api/products` - Create or replace a product
//! - `GET /api/products/:id` - Fetch one product
//! - `DELETE /api/products/:id` - Delete a product
//! - `GET /api/quotes` - Quote of the moment
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
