//! Error types module
//!
//! This module provides the core error taxonomy for the relay. All failures
//! are unified under the `AppError` enum: inbound validation, payload limits,
//! upstream Bot API failures, and unexpected internal errors.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UPSTREAM_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        /// Upstream error body, echoed to the caller for diagnosability.
        details: Option<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Static metadata table for all error variants.
/// Returns (http_status_code, error_code, log_level).
fn app_error_static_metadata(error: &AppError) -> (u16, &'static str, LogLevel) {
    match error {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", LogLevel::Debug),
        AppError::Upstream { .. } => (500, "UPSTREAM_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Upstream { .. } => "Upstream",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Upstream error body, when the upstream returned one.
    pub fn upstream_details(&self) -> Option<&str> {
        match self {
            AppError::Upstream { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Upstream { message, .. } => message.clone(),
            // Internal detail is logged, not returned
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }
}
