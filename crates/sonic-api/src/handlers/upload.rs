//! Audio upload relay handler.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use sonic_core::models::UploadReceipt;
use sonic_core::AppError;
use sonic_telegram::TelegramError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::staging::extract_audio_form;
use crate::state::AppState;

/// Relay an audio upload to the configured channel and return its public
/// download URL.
///
/// The payload is staged to local storage before any network call, posted
/// upstream as a streamed multipart request, then resolved to a download URL
/// with a second upstream call. The staged file is removed exactly once
/// whatever the outcome.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "relay",
    responses(
        (status = 200, description = "Audio relayed successfully", body = UploadReceipt),
        (status = 400, description = "No audio file provided", body = ErrorResponse),
        (status = 413, description = "Payload too large", body = ErrorResponse),
        (status = 500, description = "Upstream or internal error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_audio"))]
pub async fn upload_audio(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    // Validation and size enforcement happen before anything touches disk.
    let form = extract_audio_form(multipart, state.config.max_upload_size_bytes).await?;

    tracing::info!(
        title = %form.title,
        artist = %form.artist,
        size = form.data.len(),
        "Processing upload"
    );

    let staged = state.staging.stage(&form.filename, &form.data).await?;
    let staged_size = staged.size();

    let send_result = state
        .telegram
        .send_audio(staged.path(), &form.filename, &form.title, &form.artist)
        .await;

    // The staged bytes are spent either way; remove before shaping the
    // response so cleanup cannot be skipped by an early return below.
    staged.remove().await;

    let audio = send_result?;

    let file = state
        .telegram
        .get_file(&audio.file_id)
        .await
        .map_err(resolve_error)?;
    let download_url = state.telegram.download_url(&file.file_path);

    tracing::info!(file_id = %audio.file_id, "Upload relayed");

    Ok(Json(UploadReceipt {
        success: true,
        file_id: audio.file_id,
        download_url,
        title: form.title,
        artist: form.artist,
        duration: audio.duration.unwrap_or(0),
        // Upstream-reported size wins; the staged byte length substitutes
        // when the upstream omits it.
        file_size: audio.file_size.unwrap_or(staged_size),
        message: "Upload successful".to_string(),
    }))
}

/// A refusal while resolving the just-uploaded file is still an upstream
/// fault, not a lookup miss.
fn resolve_error(err: TelegramError) -> HttpAppError {
    match err {
        TelegramError::NotOk { description } => HttpAppError(AppError::Upstream {
            message: "Could not resolve file location".to_string(),
            details: Some(description),
        }),
        other => other.into(),
    }
}
