//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<AppError>`) for errors and `?`
//! so they become `HttpAppError` and render consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sonic_core::{AppError, ErrorMetadata, LogLevel};
use sonic_telegram::TelegramError;
use utoipa::ToSchema;

/// JSON error envelope. Every failure the client sees has this shape; no
/// unhandled error ever reaches the caller as a stack trace.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "UPSTREAM_ERROR")
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Upstream error body, embedded for diagnosability when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from sonic-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

// Convert upstream client errors to HttpAppError (avoids orphan rule: we impl
// for local HttpAppError). Staged-file I/O is an internal fault; everything
// else is the upstream's.
impl From<TelegramError> for HttpAppError {
    fn from(err: TelegramError) -> Self {
        let app = match err {
            TelegramError::Io(e) => AppError::Internal(format!("Staged file I/O failed: {}", e)),
            TelegramError::NotOk { description } => AppError::Upstream {
                message: "Upstream did not acknowledge".to_string(),
                details: Some(description),
            },
            TelegramError::Api { status, body } => AppError::Upstream {
                message: format!("Upstream request failed with status {}", status),
                details: Some(body),
            },
            TelegramError::MissingAudio => AppError::Upstream {
                message: "Upstream response did not include an audio object".to_string(),
                details: None,
            },
            TelegramError::Transport(e) => AppError::Upstream {
                message: format!("Upstream transport error: {}", e),
                details: None,
            },
            TelegramError::Decode(msg) => AppError::Upstream {
                message: "Failed to decode upstream response".to_string(),
                details: Some(msg),
            },
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error.detailed_message(), error_type = error_type, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.error_code().to_string(),
            message: app_error.client_message(),
            details: app_error.upstream_details().map(String::from),
        });

        (status, body).into_response()
    }
}
