//! Sonic Core Library
//!
//! This crate provides the configuration, error types, and response models
//! shared by the Sonic relay components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::RelayConfig;
pub use error::{AppError, ErrorMetadata, LogLevel};
