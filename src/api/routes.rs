//! API Routes
//!
//! Configures the Axum router with all catalog server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_product_handler, delete_product_handler, get_product_handler, health_handler,
    list_products_handler, quote_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/products` - List all products
/// - `POST /api/products` - Create or replace a product
/// - `GET /api/products/:id` - Fetch one product
/// - `DELETE /api/products/:id` - Delete a product
/// - `GET /api/quotes` - Quote of the moment (plain text)
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so a separately served frontend can call in
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(get_product_handler).delete(delete_product_handler),
        )
        .route("/api/quotes", get(quote_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
