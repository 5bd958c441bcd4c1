// Telegram Bot API client: sendAudio, getFile, download URL composition.

use std::path::Path;
use std::time::Duration;

use reqwest::{multipart, Body, Client, StatusCode};
use serde::de::DeserializeOwned;
use sonic_core::RelayConfig;
use tokio_util::io::ReaderStream;

use crate::types::{ApiEnvelope, AudioPost, FileInfo, SentMessage};

const GET_FILE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// Non-2xx response whose body is not a Bot API envelope.
    #[error("Bot API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// The upstream answered with `ok: false`.
    #[error("Bot API returned ok=false: {description}")]
    NotOk { description: String },

    #[error("Bot API response did not include an audio object")]
    MissingAudio,

    #[error("Bot API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode Bot API response: {0}")]
    Decode(String),

    #[error("Failed to read staged audio: {0}")]
    Io(#[from] std::io::Error),
}

impl TelegramError {
    /// Upstream error body, when one was received. Used to embed upstream
    /// diagnostics in the relay's error envelope.
    pub fn upstream_body(&self) -> Option<String> {
        match self {
            TelegramError::Api { body, .. } => Some(body.clone()),
            TelegramError::NotOk { description } => Some(description.clone()),
            _ => None,
        }
    }
}

/// Client for the upstream Bot API. Cheap to clone; holds the shared
/// reqwest connection pool plus the read-only credential and channel id.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http_client: Client,
    api_base: String,
    file_base: String,
    bot_token: String,
    chat_id: String,
    upload_timeout: Duration,
}

impl TelegramClient {
    pub fn new(config: &RelayConfig) -> Result<Self, TelegramError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(GET_FILE_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            api_base: config.api_base_url.clone(),
            file_base: config.file_base_url.clone(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
        })
    }

    /// Post a staged audio file to the configured channel.
    ///
    /// The file is streamed from disk rather than buffered a second time. The
    /// request carries a generous timeout sized for large uploads; there is
    /// no retry, a single failure is terminal.
    pub async fn send_audio(
        &self,
        path: &Path,
        filename: &str,
        title: &str,
        performer: &str,
    ) -> Result<AudioPost, TelegramError> {
        let file = tokio::fs::File::open(path).await?;
        let file_len = file.metadata().await?.len();

        let audio_part =
            multipart::Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), file_len)
                .file_name(filename.to_string())
                .mime_str("audio/mpeg")?;

        let form = multipart::Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("title", title.to_string())
            .text("performer", performer.to_string())
            .part("audio", audio_part);

        tracing::debug!(filename, file_len, "Posting audio to channel");

        let response = self
            .http_client
            .post(format!("{}/bot{}/sendAudio", self.api_base, self.bot_token))
            .multipart(form)
            .timeout(self.upload_timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let message: SentMessage = decode_envelope(status, &body)?;

        message.audio.ok_or(TelegramError::MissingAudio)
    }

    /// Resolve a file identifier to its current upstream path.
    pub async fn get_file(&self, file_id: &str) -> Result<FileInfo, TelegramError> {
        let response = self
            .http_client
            .get(format!("{}/bot{}/getFile", self.api_base, self.bot_token))
            .query(&[("file_id", file_id)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }

    /// Compose the public download URL for a resolved file path. Must match
    /// the upstream's URL scheme byte-for-byte; clients dereference it
    /// directly.
    pub fn download_url(&self, file_path: &str) -> String {
        format!("{}/bot{}/{}", self.file_base, self.bot_token, file_path)
    }
}

/// Decode a Bot API envelope. Error envelopes can arrive with any status, so
/// the body is parsed first and the HTTP status only matters when the body is
/// not an envelope at all.
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, TelegramError> {
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => {
            if !envelope.ok {
                return Err(TelegramError::NotOk {
                    description: envelope.description.unwrap_or_else(|| {
                        format!("no description (error_code {:?})", envelope.error_code)
                    }),
                });
            }
            envelope
                .result
                .ok_or_else(|| TelegramError::Decode("envelope missing result".to_string()))
        }
        Err(_) if !status.is_success() => Err(TelegramError::Api {
            status: status.as_u16(),
            body: body.to_string(),
        }),
        Err(e) => Err(TelegramError::Decode(e.to_string())),
    }
}
