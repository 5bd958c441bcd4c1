//! Telegram Bot API client for the Sonic relay.
//!
//! Covers the two upstream operations the relay needs: posting an audio file
//! to a channel (`sendAudio`) and resolving a file identifier to a transient
//! file path (`getFile`), plus download URL composition. The base URLs are
//! configurable so tests can point the client at a mock server.

mod client;
mod types;

pub use client::{TelegramClient, TelegramError};
pub use types::{AudioPost, FileInfo};
