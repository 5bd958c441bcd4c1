//! Health check handler.

use axum::{response::IntoResponse, Json};
use sonic_core::models::HealthStatus;

/// Liveness probe. No side effects, no shared state, always succeeds.
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthStatus::healthy())
}
