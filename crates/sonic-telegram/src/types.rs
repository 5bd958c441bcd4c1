//! Bot API wire types.

use serde::Deserialize;

/// Standard Bot API response envelope: `ok` plus either `result` or an error
/// description. Error responses may arrive with a non-2xx status and still
/// carry this shape.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

/// The message object returned by `sendAudio`. Only the audio attachment is
/// of interest to the relay.
#[derive(Debug, Deserialize)]
pub struct SentMessage {
    pub audio: Option<AudioPost>,
}

/// Audio attachment metadata reported by the upstream after a post.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioPost {
    /// Opaque handle, stable across later `getFile` calls.
    pub file_id: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// Result of `getFile`. The path is transient and only good for composing a
/// download URL right away.
#[derive(Debug, Clone, Deserialize)]
pub struct FileInfo {
    pub file_path: String,
    #[serde(default)]
    pub file_size: Option<u64>,
}
