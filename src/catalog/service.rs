//! Product Service
//!
//! Cache-aside reads and region-wide invalidation over the owned product
//! collection.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::cache::{SharedCache, PRODUCTS_REGION, PRODUCT_BY_ID_REGION};
use crate::models::Product;

/// Key of the full listing snapshot inside the products region.
pub const ALL_PRODUCTS_KEY: &str = "all";

// == Product Service ==
/// Owns the product collection and keeps the cache in step with it.
///
/// The collection is the source of truth; cached listings and lookups are
/// derived from it. Concurrent misses on the same key may each recompute
/// and store, and the last write wins.
#[derive(Debug, Clone)]
pub struct ProductService {
    /// Owned product collection keyed by id
    products: Arc<DashMap<i64, Product>>,
    /// Handle to the process-wide cache
    cache: SharedCache,
    /// Simulated cost of reading the collection on a miss
    read_latency: Duration,
}

impl ProductService {
    pub fn new(cache: SharedCache, read_latency: Duration) -> Self {
        Self {
            products: Arc::new(DashMap::new()),
            cache,
            read_latency,
        }
    }

    // == Find All ==
    /// Returns every product ordered by id.
    pub async fn find_all(&self) -> Vec<Product> {
        if let Some(products) = self
            .cache
            .get::<Vec<Product>>(PRODUCTS_REGION, ALL_PRODUCTS_KEY)
            .await
        {
            return products;
        }

        debug!("product listing not cached, reading collection");
        self.simulate_read().await;

        let mut products: Vec<Product> = self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        products.sort_by_key(|product| product.id);

        self.cache
            .put(PRODUCTS_REGION, ALL_PRODUCTS_KEY, &products)
            .await;
        products
    }

    // == Find By Id ==
    /// Returns the product with `id`, if any.
    ///
    /// A missing product is cached as well, so repeated lookups for an
    /// absent id stay cheap until the next write.
    pub async fn find_by_id(&self, id: i64) -> Option<Product> {
        let key = id.to_string();

        if let Some(cached) = self
            .cache
            .get::<Option<Product>>(PRODUCT_BY_ID_REGION, &key)
            .await
        {
            return cached;
        }

        debug!(id, "product lookup not cached, reading collection");
        self.simulate_read().await;

        let product = self.products.get(&id).map(|entry| entry.value().clone());
        self.cache.put(PRODUCT_BY_ID_REGION, &key, &product).await;
        product
    }

    // == Save ==
    /// Inserts or replaces a product, then invalidates both product regions.
    pub async fn save(&self, product: Product) -> Product {
        self.products.insert(product.id, product.clone());
        self.invalidate().await;

        info!(id = product.id, name = %product.name, "product saved");
        product
    }

    // == Delete ==
    /// Removes a product if present, then invalidates both product regions.
    ///
    /// Returns whether a product was removed.
    pub async fn delete(&self, id: i64) -> bool {
        let removed = self.products.remove(&id).is_some();
        self.invalidate().await;

        info!(id, removed, "product delete");
        removed
    }

    /// Number of products in the owned collection.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // Per-id entries cannot be selectively invalidated: the listing snapshot
    // and earlier negative lookups may both depend on the written id.
    async fn invalidate(&self) {
        self.cache.evict_all(PRODUCTS_REGION).await;
        self.cache.evict_all(PRODUCT_BY_ID_REGION).await;
    }

    async fn simulate_read(&self) {
        if !self.read_latency.is_zero() {
            tokio::time::sleep(self.read_latency).await;
        }
    }
}
