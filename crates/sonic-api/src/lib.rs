//! Sonic API Library
//!
//! This crate provides the HTTP handlers, staging, and application setup for
//! the relay service.

// Module declarations
mod api_doc;
mod handlers;
pub mod setup;
pub mod staging;
mod telemetry;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
