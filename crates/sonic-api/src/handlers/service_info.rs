//! Service descriptor handler.

use axum::{response::IntoResponse, Json};
use sonic_core::models::ServiceDescriptor;

/// Service descriptor: status, name, version, endpoint map.
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Service descriptor", body = ServiceDescriptor)
    )
)]
pub async fn service_info() -> impl IntoResponse {
    Json(ServiceDescriptor::current())
}
