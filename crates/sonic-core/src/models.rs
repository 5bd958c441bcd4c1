//! Response models for the relay's HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful upload receipt returned by `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadReceipt {
    pub success: bool,
    /// Opaque upstream handle, usable later with `GET /file/{file_id}`.
    pub file_id: String,
    pub download_url: String,
    pub title: String,
    pub artist: String,
    /// Duration in seconds; 0 when the upstream omitted it.
    pub duration: u32,
    /// Upstream-reported size, or the staged payload's byte length when the
    /// upstream omitted it.
    pub file_size: u64,
    pub message: String,
}

/// Fresh download link returned by `GET /file/{file_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileLink {
    pub file_id: String,
    pub download_url: String,
    /// Upstream-internal path; transient, re-resolved on every request.
    pub file_path: String,
}

/// Liveness payload for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub ok: bool,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        HealthStatus {
            ok: true,
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Endpoint map advertised by the service descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EndpointMap {
    pub upload: String,
    pub file: String,
    pub health: String,
}

/// Service descriptor returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceDescriptor {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

impl ServiceDescriptor {
    pub fn current() -> Self {
        ServiceDescriptor {
            status: "online".to_string(),
            service: "Sonic Music Upload Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: EndpointMap {
                upload: "POST /upload".to_string(),
                file: "GET /file/{file_id}".to_string(),
                health: "GET /health".to_string(),
            },
        }
    }
}
