//! Temporary staging for inbound uploads.
//!
//! Inbound audio is written to durable local storage before any network call,
//! so the bytes are stable even if the client connection is slow. The staged
//! file is wrapped in a guard whose cleanup runs exactly once on every exit
//! path: an explicit `remove()` on the main paths, with `Drop` as a backstop
//! for early returns. Deletion failures are logged, never escalated.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use sonic_core::AppError;
use uuid::Uuid;

const DEFAULT_TITLE: &str = "Unknown";
const DEFAULT_ARTIST: &str = "Unknown Artist";
const DEFAULT_FILENAME: &str = "audio.mp3";

/// Staging directory. Files are uniquely named per request, so concurrent
/// uploads never contend.
#[derive(Debug, Clone)]
pub struct StagingArea {
    dir: PathBuf,
}

impl StagingArea {
    /// Create the staging area, ensuring the directory exists.
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, anyhow::Error> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Write the payload to a uniquely named file inside the staging
    /// directory and return its cleanup guard.
    pub async fn stage(&self, filename: &str, data: &[u8]) -> Result<StagedAudio, AppError> {
        let unique_name = format!("{}.{}", Uuid::new_v4(), staged_extension(filename));
        let path = self.dir.join(unique_name);

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to stage upload: {}", e)))?;

        tracing::debug!(path = %path.display(), size = data.len(), "Staged inbound upload");

        Ok(StagedAudio {
            path,
            size: data.len() as u64,
            removed: false,
        })
    }
}

/// A staged upload on disk. Removed exactly once: explicitly via `remove()`,
/// or by `Drop` if the request unwinds before reaching it.
#[derive(Debug)]
pub struct StagedAudio {
    path: PathBuf,
    size: u64,
    removed: bool,
}

impl StagedAudio {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte length of the staged payload, used as file-size fallback when the
    /// upstream omits one.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Delete the staged file. Failures are logged and swallowed so they
    /// never mask the primary response.
    pub async fn remove(mut self) {
        self.removed = true;
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staged upload");
        }
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staged upload");
        }
    }
}

/// Extension for the staged filename: taken from the client's filename when
/// it is plain alphanumeric, otherwise `mp3`.
fn staged_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "mp3".to_string())
}

/// The parsed `/upload` form: one required binary field plus optional
/// metadata with the documented defaults.
#[derive(Debug)]
pub struct AudioUploadForm {
    pub data: Vec<u8>,
    pub filename: String,
    pub title: String,
    pub artist: String,
}

/// Extract the upload form from multipart data. The `audio` field is
/// required; `title` and `artist` default when absent. The size ceiling is
/// enforced here, before anything touches disk.
pub async fn extract_audio_form(
    mut multipart: Multipart,
    max_size: usize,
) -> Result<AudioUploadForm, AppError> {
    let mut data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut title: Option<String> = None;
    let mut artist: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "audio" => {
                if data.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple audio fields are not allowed; send exactly one field named 'audio'"
                            .to_string(),
                    ));
                }
                filename = field.file_name().map(|s: &str| s.to_string());

                let bytes = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read audio data: {}", e))
                })?;

                if bytes.len() > max_size {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Audio payload exceeds maximum allowed size of {} MB",
                        max_size / 1024 / 1024
                    )));
                }

                data = Some(bytes.to_vec());
            }
            "title" => {
                title = field.text().await.ok().filter(|s| !s.is_empty());
            }
            "artist" => {
                artist = field.text().await.ok().filter(|s| !s.is_empty());
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::InvalidInput("No audio file provided".to_string()))?;

    Ok(AudioUploadForm {
        data,
        filename: filename.unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        artist: artist.unwrap_or_else(|| DEFAULT_ARTIST.to_string()),
    })
}
