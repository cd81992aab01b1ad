use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use sceneboard_core::types::Timestamp;

use crate::resources::{Characters, Scenes, Users};
use crate::routes::mount_point;
use crate::state::AppState;

/// Root info payload.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    /// Value of `APP_ENV`.
    pub environment: String,
    pub timestamp: Timestamp,
    pub endpoints: Endpoints,
}

/// Where each resource and the health check are mounted.
#[derive(Serialize)]
pub struct Endpoints {
    pub users: String,
    pub characters: String,
    pub scenes: String,
    pub health: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET / -- service banner.
async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        environment: state.config.environment.clone(),
        timestamp: Utc::now(),
        endpoints: Endpoints {
            users: mount_point::<Users>(),
            characters: mount_point::<Characters>(),
            scenes: mount_point::<Scenes>(),
            health: "/health",
        },
    })
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, body_status, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "connected"),
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "degraded", "disconnected")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: body_status,
            database,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Mount root and health routes (not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}
