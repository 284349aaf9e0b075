//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Each variant
//! self-describes how it should be presented over HTTP through [`ErrorMetadata`].

use std::io;

/// Generic message returned for failures whose details must not leak
pub const GENERIC_SERVER_ERROR: &str = "Internal server error";

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client mistakes worth noticing
    Warn,
    /// Error level - for backend and unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "BACKEND_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from the caller
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client-caused validation failure (missing fields, word limit, bad upload)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reported by the hosted database or object storage
    #[error("Backend error: {0}")]
    Backend(String),

    /// Request that could not be parsed (malformed JSON or multipart)
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedRequest(format!("JSON parsing error: {}", err))
    }
}

impl AppError {
    /// Variant name for structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Backend(_) => "Backend",
            AppError::MalformedRequest(_) => "MalformedRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "InternalWithSource",
        }
    }

    /// Full message including sources, for operators only
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::InternalWithSource { message, source } => {
                format!("{}: {:#}", message, source)
            }
            other => other.to_string(),
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Backend(_)
            | AppError::MalformedRequest(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Backend(_) => "BACKEND_ERROR",
            AppError::MalformedRequest(_) => "MALFORMED_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Backend(msg) => msg.clone(),
            AppError::NotFound(_) => "Endpoint not found".to_string(),
            AppError::MalformedRequest(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => GENERIC_SERVER_ERROR.to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        matches!(
            self,
            AppError::MalformedRequest(_)
                | AppError::Internal(_)
                | AppError::InternalWithSource { .. }
        )
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::NotFound(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}
