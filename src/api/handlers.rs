//! API Handlers
//!
//! HTTP request handlers for the catalog, quote and diagnostics endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::SharedCache;
use crate::catalog::ProductService;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{DeleteResponse, HealthResponse, Product, StatsResponse};
use crate::quotes::{HttpQuoteSource, QuoteError, QuoteProxy};

/// Application state shared across all handlers.
///
/// Built once at startup; every component receives the same cache handle.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide cache
    pub cache: SharedCache,
    /// Catalog service over the owned product collection
    pub products: ProductService,
    /// Caching proxy in front of the upstream quote provider
    pub quotes: Arc<QuoteProxy<HttpQuoteSource>>,
}

impl AppState {
    /// Creates a new AppState wiring the given components together.
    pub fn new(
        cache: SharedCache,
        products: ProductService,
        quotes: QuoteProxy<HttpQuoteSource>,
    ) -> Self {
        Self {
            cache,
            products,
            quotes: Arc::new(quotes),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails only if the upstream HTTP client cannot be built.
    pub fn from_config(config: &Config) -> std::result::Result<Self, QuoteError> {
        let cache = SharedCache::from_config(config);
        let products = ProductService::new(cache.clone(), config.catalog_latency());
        let source = HttpQuoteSource::new(config.quote_api_url.clone(), config.quote_timeout())?;
        let quotes = QuoteProxy::new(source, cache.clone(), config.retry_count);

        Ok(Self::new(cache, products, quotes))
    }
}

/// Handler for GET /api/products
pub async fn list_products_handler(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products.find_all().await)
}

/// Handler for GET /api/products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    state
        .products
        .find_by_id(id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

/// Handler for POST /api/products
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = product.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    Ok(Json(state.products.save(product).await))
}

/// Handler for DELETE /api/products/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<DeleteResponse> {
    let removed = state.products.delete(id).await;
    Json(DeleteResponse::new(id, removed))
}

/// Handler for GET /api/quotes
///
/// Always answers with plain text; upstream failures surface as a fallback quote.
pub async fn quote_handler(State(state): State<AppState>) -> String {
    state.quotes.get_quote().await
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let config = Config {
        catalog_latency_ms: 0,
        quote_api_url: "http://127.0.0.1:9/random".to_string(),
        quote_timeout: 1,
        ..Config::default()
    };
    AppState::from_config(&config).expect("test client builds")
}
