//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use sonic_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sonic Relay API",
        version = "0.1.0",
        description = "HTTP relay that forwards audio uploads to a messaging channel and returns public download URLs."
    ),
    paths(
        handlers::service_info::service_info,
        handlers::health::health_check,
        handlers::upload::upload_audio,
        handlers::file_link::get_file_link,
    ),
    components(schemas(
        models::ServiceDescriptor,
        models::EndpointMap,
        models::HealthStatus,
        models::UploadReceipt,
        models::FileLink,
        error::ErrorResponse,
    )),
    tags(
        (name = "service", description = "Service metadata and health"),
        (name = "relay", description = "Audio relay and file resolution")
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec for the relay's HTTP surface.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
