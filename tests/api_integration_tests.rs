//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles against the router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use catalog_cache::{api::create_router, quotes::FALLBACK_QUOTES, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn test_config() -> Config {
    Config {
        catalog_latency_ms: 0,
        // Nothing listens on the loopback discard port, so every upstream
        // attempt fails fast
        quote_api_url: "http://127.0.0.1:9/random".to_string(),
        quote_timeout: 1,
        ..Config::default()
    }
}

fn create_test_app() -> (AppState, Router) {
    let state = AppState::from_config(&test_config()).unwrap();
    let app = create_router(state.clone());
    (state, app)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Body) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, response.into_body())
}

fn ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

// == Product Endpoint Tests ==

#[tokio::test]
async fn test_create_list_delete_cycle() {
    let (_, app) = create_test_app();

    let (status, _) = send(&app, "POST", "/api/products", Some(r#"{"id":1,"name":"Lamp","price":19.5}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/api/products", Some(r#"{"id":2,"name":"Mug","price":4.0}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body_to_json(body).await), vec![1, 2]);

    let (status, body) = send(&app, "DELETE", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body_to_json(body).await["removed"], Value::Bool(true));

    let (_, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(ids(&body_to_json(body).await), vec![2]);
}

#[tokio::test]
async fn test_create_returns_saved_product() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, "POST", "/api/products", Some(r#"{"id":7,"name":"Rug","price":80.0}"#)).await;

    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["id"].as_i64().unwrap(), 7);
    assert_eq!(json["name"].as_str().unwrap(), "Rug");
}

#[tokio::test]
async fn test_get_product_after_stale_negative_lookup() {
    let (_, app) = create_test_app();

    // Caches "absent" for id 5
    let (status, _) = send(&app, "GET", "/api/products/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, "POST", "/api/products", Some(r#"{"id":5,"name":"Chair","price":45.0}"#)).await;

    let (status, body) = send(&app, "GET", "/api/products/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body_to_json(body).await["name"].as_str().unwrap(), "Chair");
}

#[tokio::test]
async fn test_get_product_not_found_has_error_body() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, "GET", "/api/products/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body_to_json(body).await.get("error").is_some());
}

#[tokio::test]
async fn test_delete_missing_product_is_ok() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, "DELETE", "/api/products/999", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body_to_json(body).await["removed"], Value::Bool(false));
}

#[tokio::test]
async fn test_list_is_cached_until_write() {
    let (state, app) = create_test_app();

    send(&app, "GET", "/api/products", None).await;
    send(&app, "GET", "/api/products", None).await;

    let stats = state.cache.stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.regions.get("products"), Some(&1));

    send(&app, "POST", "/api/products", Some(r#"{"id":1,"name":"Lamp","price":1.0}"#)).await;

    let stats = state.cache.stats().await;
    assert_eq!(stats.regions.get("products"), None);
}

// == Validation Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let (_, app) = create_test_app();

    let (status, _) = send(&app, "POST", "/api/products", Some(r#"{"invalid json"#)).await;

    // Axum rejects malformed bodies before the handler runs
    assert!(status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_blank_name_rejected() {
    let (state, app) = create_test_app();

    let (status, body) = send(&app, "POST", "/api/products", Some(r#"{"id":1,"name":"  ","price":1.0}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body_to_json(body).await.get("error").is_some());
    assert!(state.products.is_empty());
}

// == Quote Endpoint Tests ==

#[tokio::test]
async fn test_quote_falls_back_and_is_cached() {
    let (state, app) = create_test_app();

    let (status, body) = send(&app, "GET", "/api/quotes", None).await;
    assert_eq!(status, StatusCode::OK);
    let first = body_to_string(body).await;
    assert!(FALLBACK_QUOTES.contains(&first.as_str()));

    let (status, body) = send(&app, "GET", "/api/quotes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body_to_string(body).await, first);

    let stats = state.cache.stats().await;
    assert_eq!(stats.regions.get("externalQuotes"), Some(&1));
}

#[tokio::test]
async fn test_product_writes_leave_quote_cached() {
    let (state, app) = create_test_app();

    send(&app, "GET", "/api/quotes", None).await;
    send(&app, "POST", "/api/products", Some(r#"{"id":1,"name":"Lamp","price":1.0}"#)).await;

    assert_eq!(state.cache.region_len("externalQuotes").await, 1);
}

// == Diagnostics Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let (_, app) = create_test_app();

    send(&app, "GET", "/api/products/1", None).await;
    send(&app, "GET", "/api/products/1", None).await;

    let (status, body) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;

    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["total_entries"].as_u64().unwrap(), 1);
    assert_eq!(json["regions"]["productById"].as_u64().unwrap(), 1);
    assert!(json.get("hit_rate").is_some());
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
