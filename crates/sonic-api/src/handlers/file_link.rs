//! File identifier resolution handler.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sonic_core::models::FileLink;
use sonic_core::AppError;
use sonic_telegram::TelegramError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Re-resolve a previously issued file identifier into a fresh download URL.
/// The upstream path is queried on demand, never cached, because the platform
/// may rotate or expire it.
#[utoipa::path(
    get,
    path = "/file/{file_id}",
    tag = "relay",
    params(
        ("file_id" = String, Path, description = "Opaque file identifier from a previous upload")
    ),
    responses(
        (status = 200, description = "Fresh download URL", body = FileLink),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Upstream transport error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(file_id = %file_id, operation = "get_file_link"))]
pub async fn get_file_link(
    Path(file_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let file = state
        .telegram
        .get_file(&file_id)
        .await
        .map_err(not_found_error)?;

    let download_url = state.telegram.download_url(&file.file_path);

    Ok(Json(FileLink {
        file_id,
        download_url,
        file_path: file.file_path,
    }))
}

/// An upstream refusal on lookup means the identifier does not resolve;
/// transport failures stay upstream errors.
fn not_found_error(err: TelegramError) -> HttpAppError {
    match err {
        TelegramError::NotOk { .. } => {
            HttpAppError(AppError::NotFound("File not found".to_string()))
        }
        other => other.into(),
    }
}
