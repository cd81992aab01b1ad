//! Integration tests for the root, health and fallback endpoints and the
//! middleware stack.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, fresh_app, get};
use sceneboard_db::models::character::Character;
use sceneboard_db::models::scene::Scene;
use sceneboard_db::models::user::User;
use sceneboard_db::{MemoryStore, Repository, Store, StoreResult};
use tower::ServiceExt;

/// Delegates to a [`MemoryStore`] but panics on `ping`.
struct PanickingStore(MemoryStore);

#[async_trait]
impl Store for PanickingStore {
    fn users(&self) -> &dyn Repository<User> {
        self.0.users()
    }

    fn characters(&self) -> &dyn Repository<Character> {
        self.0.characters()
    }

    fn scenes(&self) -> &dyn Repository<Scene> {
        self.0.scenes()
    }

    async fn ping(&self) -> StoreResult<()> {
        panic!("connection pool poisoned: secret-token-42");
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health reports a reachable store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_when_store_answers() {
    let (app, _store) = fresh_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "connected");
    assert!(json["version"].is_string());
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 500 when the store is unreachable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_500_when_store_is_down() {
    let (app, store) = fresh_app();
    store.set_online(false);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"], "disconnected");
}

// ---------------------------------------------------------------------------
// Test: GET / describes the service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_lists_service_info_and_endpoints() {
    let (app, _store) = fresh_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["service"], "sceneboard-api");
    assert_eq!(json["status"], "running");
    assert_eq!(json["environment"], "test");
    assert_eq!(json["endpoints"]["users"], "/api/users");
    assert_eq!(json["endpoints"]["characters"], "/api/characters");
    assert_eq!(json["endpoints"]["scenes"], "/api/scenes");
    assert_eq!(json["endpoints"]["health"], "/health");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404 JSON
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_json() {
    let (app, _store) = fresh_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Route not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unknown_route_under_api_prefix_returns_404_json() {
    let (app, _store) = fresh_app();
    let response = get(app, "/api/users/everything").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _store) = fresh_app();
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a UUID string (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

#[tokio::test]
async fn incoming_request_id_is_kept() {
    let (app, _store) = fresh_app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight accepts any origin by default
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let (app, _store) = fresh_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/users/write")
        .header("Origin", "http://somewhere.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "*");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PATCH"),
        "Allow-Methods should contain PATCH, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Test: a panicking handler is answered with a generic 500 JSON body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn handler_panic_returns_generic_500() {
    let app = common::build_test_app_with(Arc::new(PanickingStore(MemoryStore::new())));
    let response = get(app.clone(), "/health").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = body_bytes(response).await;
    assert!(!String::from_utf8_lossy(&bytes).contains("secret-token-42"));
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "Something went wrong!");
    assert_eq!(json["code"], "INTERNAL_ERROR");

    // The server keeps serving after a panic.
    let response = get(app, "/api/scenes/list").await;
    assert_eq!(response.status(), StatusCode::OK);
}
