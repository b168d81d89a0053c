use axum::{routing::get, Json, Router};
use serde::Serialize;
use todo_core::types::Timestamp;

use crate::state::AppState;

/// Service name reported by the liveness probe.
pub const SERVICE_NAME: &str = "todo-list-api";

/// Liveness response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving requests.
    pub status: &'static str,
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub service: &'static str,
}

/// Readiness response payload.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: Timestamp,
}

/// GET /health -- liveness; no dependency checks.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        service: SERVICE_NAME,
    })
}

/// GET /health/ready -- readiness.
///
/// Storage is in-process, so there is nothing to probe yet.
async fn readiness_check() -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready",
        timestamp: chrono::Utc::now(),
    })
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
}
