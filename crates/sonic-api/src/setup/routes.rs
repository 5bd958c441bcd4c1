//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use sonic_core::RelayConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::api_doc;
use crate::handlers;
use crate::state::AppState;

/// Headroom for multipart framing and the text fields on top of the audio
/// payload ceiling. Requests past this cap are refused at the transport
/// level; the handler's own check produces the JSON envelope for anything
/// that gets through.
const MULTIPART_OVERHEAD_BYTES: usize = 2 * 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &RelayConfig, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/", get(handlers::service_info::service_info))
        .route("/health", get(handlers::health::health_check))
        .route("/upload", post(handlers::upload::upload_audio))
        .route("/file/{file_id}", get(handlers::file_link::get_file_link))
        .with_state(state)
        .route(
            "/api/openapi.json",
            get(|| async { Json(api_doc::get_openapi_spec()) }),
        )
        .layer(RequestBodyLimitLayer::new(
            config.max_upload_size_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn setup_cors(config: &RelayConfig) -> Result<CorsLayer, anyhow::Error> {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
