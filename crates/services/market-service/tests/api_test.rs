//! HTTP endpoint tests.
//!
//! The router runs over the in-memory store, or over a store that always
//! fails, so no database is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use futures::stream::{self, StreamExt};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewProduct, NewUser, Product, User};
use market_service_lib::api::{create_router, AppState};
use market_service_lib::repository::{
    ProductRepository, ProductStream, StoreHealth, UserRepository,
};

// =============================================================================
// Test Helpers
// =============================================================================

/// Store whose every call fails as if the database were down
struct UnavailableStore;

#[async_trait]
impl UserRepository for UnavailableStore {
    async fn save(&self, _user: NewUser) -> AppResult<User> {
        Err(AppError::service_unavailable("database"))
    }

    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<User>> {
        Err(AppError::service_unavailable("database"))
    }
}

#[async_trait]
impl ProductRepository for UnavailableStore {
    async fn save(&self, _product: NewProduct) -> AppResult<Product> {
        Err(AppError::service_unavailable("database"))
    }

    fn find_by_currency(&self, _currency: &str) -> ProductStream {
        stream::once(async { Err(AppError::service_unavailable("database")) }).boxed()
    }
}

#[async_trait]
impl StoreHealth for UnavailableStore {
    async fn ping(&self) -> AppResult<()> {
        Err(AppError::service_unavailable("database"))
    }
}

fn unavailable_app() -> Router {
    let store = Arc::new(UnavailableStore);
    create_router(AppState::from_repositories(
        store.clone(),
        store.clone(),
        store,
    ))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

// =============================================================================
// Save Endpoints
// =============================================================================

#[tokio::test]
async fn test_save_user_assigns_id() {
    let app = create_router(AppState::in_memory());

    let (status, body) = post_json(
        &app,
        "/save/user",
        json!({ "name": "Maxim", "currency": "ruble" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["name"], "Maxim");
    assert_eq!(body["currency"], "ruble");
}

#[tokio::test]
async fn test_save_user_ignores_client_id() {
    let app = create_router(AppState::in_memory());
    let chosen = Uuid::new_v4().to_string();

    let (status, body) = post_json(
        &app,
        "/save/user",
        json!({ "id": chosen, "name": "Maxim", "currency": "ruble" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["id"], chosen);
}

#[tokio::test]
async fn test_save_product_assigns_id() {
    let app = create_router(AppState::in_memory());

    let (status, body) = post_json(
        &app,
        "/save/product",
        json!({ "name": "milk", "price": 70, "currency": "ruble" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["price"], 70);
}

#[tokio::test]
async fn test_save_product_rejects_negative_price() {
    let app = create_router(AppState::in_memory());

    let (status, body) = post_json(
        &app,
        "/save/product",
        json!({ "name": "milk", "price": -1, "currency": "ruble" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Price cannot be negative");
}

#[tokio::test]
async fn test_save_product_reports_every_invalid_field() {
    let app = create_router(AppState::in_memory());

    let (status, body) = post_json(
        &app,
        "/save/product",
        json!({ "name": "m".repeat(256), "price": -1, "currency": "ruble" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Name is too long, Price cannot be negative"
    );
}

#[tokio::test]
async fn test_save_product_rejects_missing_field() {
    let app = create_router(AppState::in_memory());

    let (status, body) =
        post_json(&app, "/save/product", json!({ "name": "milk", "currency": "ruble" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_save_user_rejects_oversized_name() {
    let app = create_router(AppState::in_memory());

    let (status, body) = post_json(
        &app,
        "/save/user",
        json!({ "name": "x".repeat(256), "currency": "ruble" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Name is too long");
}

// =============================================================================
// Lookup Endpoints
// =============================================================================

#[tokio::test]
async fn test_user_and_product_currency() {
    let app = create_router(AppState::in_memory());

    let (_, user) = post_json(
        &app,
        "/save/user",
        json!({ "name": "Maxim", "currency": "ruble" }),
    )
    .await;
    let (_, product) = post_json(
        &app,
        "/save/product",
        json!({ "name": "milk", "price": 70, "currency": "ruble" }),
    )
    .await;

    let uri = format!("/get/products/{}", user["id"].as_str().unwrap());
    let (status, body) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([product]));
}

#[tokio::test]
async fn test_different_user_and_product_currency() {
    let app = create_router(AppState::in_memory());

    let (_, user) = post_json(
        &app,
        "/save/user",
        json!({ "name": "Maxim", "currency": "ruble" }),
    )
    .await;
    post_json(
        &app,
        "/save/product",
        json!({ "name": "milk", "price": 1, "currency": "dollar" }),
    )
    .await;

    let uri = format!("/get/products/{}", user["id"].as_str().unwrap());
    let (status, body) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_user_gets_empty_list() {
    let app = create_router(AppState::in_memory());

    let (status, body) = get(&app, "/get/products/nonexistent-id").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_lookup_distinguishes_unknown_user() {
    let app = create_router(AppState::in_memory());

    let uri = format!("/lookup/{}", Uuid::new_v4());
    let (status, body) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "user_not_found" }));
}

#[tokio::test]
async fn test_lookup_found_user() {
    let app = create_router(AppState::in_memory());

    let (_, user) = post_json(
        &app,
        "/save/user",
        json!({ "name": "Maxim", "currency": "dollar" }),
    )
    .await;

    let uri = format!("/lookup/{}", user["id"].as_str().unwrap());
    let (status, body) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "found", "products": [] }));
}

// =============================================================================
// Store Failures
// =============================================================================

#[tokio::test]
async fn test_store_failure_surfaces_as_error() {
    let app = unavailable_app();

    let uri = format!("/get/products/{}", Uuid::new_v4());
    let (status, body) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_save_failure_surfaces_as_error() {
    let app = unavailable_app();

    let (status, _) = post_json(
        &app,
        "/save/user",
        json!({ "name": "Maxim", "currency": "ruble" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// Health & Docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_store_state() {
    let (status, body) = get(&create_router(AppState::in_memory()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));

    let (status, body) = get(&unavailable_app(), "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (status, body) = get(&create_router(AppState::in_memory()), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/save/user"].is_object());
    assert!(body["paths"]["/get/products/{user_id}"].is_object());
}
