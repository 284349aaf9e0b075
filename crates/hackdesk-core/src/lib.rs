//! Hackdesk Core Library
//!
//! This crate provides the domain models, error types, configuration, validation
//! and id generation shared by the storage and API crates.

pub mod backend_mode;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use backend_mode::BackendMode;
pub use config::{Config, SubmissionSchema};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use ids::{IdStrategy, TimestampIdStrategy};
pub use models::{NewSubmission, SubmissionForm, SubmissionRecord, UploadFile, UploadedAsset};
