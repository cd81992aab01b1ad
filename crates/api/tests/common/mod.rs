#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sceneboard_api::config::{CorsOrigins, LogFormat, ServerConfig};
use sceneboard_api::router::build_app_router;
use sceneboard_api::state::AppState;
use sceneboard_db::{MemoryStore, Store};

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows any CORS origin, matching the default when `CORS_ORIGINS` is unset.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        environment: "test".to_string(),
        cors_origins: CorsOrigins::Any,
        log_format: LogFormat::Text,
        database_max_connections: 1,
    }
}

/// Build the full application router backed by `store`.
///
/// Goes through [`build_app_router`], so tests exercise the same middleware
/// stack (CORS, request ID, tracing, panic recovery) that production uses.
/// Keep a clone of the `Arc` to inspect or toggle the store afterwards.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_test_app_with(store)
}

/// Same as [`build_test_app`] over any storage backend.
pub fn build_test_app_with(store: Arc<dyn Store>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh app over an empty store, plus the store itself.
pub fn fresh_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (build_test_app(Arc::clone(&store)), store)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Read the full response body as bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Read the full response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a scene through the API and return its id.
pub async fn create_scene(app: Router, title: &str) -> i64 {
    let response = post_json(
        app,
        "/api/scenes/write",
        serde_json::json!({
            "title": title,
            "description": "A quiet place",
            "image": "scenes/harbor.png",
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
