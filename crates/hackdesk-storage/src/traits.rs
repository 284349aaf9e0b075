//! Storage abstraction trait
//!
//! This module defines the contract both persistence backends implement.

use crate::BackendMode;
use async_trait::async_trait;
use hackdesk_core::{NewSubmission, SubmissionRecord, UploadFile, UploadedAsset};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The hosted store answered with an error; carries its message
    #[error("{0}")]
    Backend(String),

    #[error("Request to storage backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from storage backend: {0}")]
    InvalidResponse(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence contract shared by the in-memory and hosted backends
///
/// Every operation either returns its data or a [`StorageError`], so callers
/// treat both backends identically.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a validated submission, assigning its id and creation timestamp
    async fn write(&self, submission: NewSubmission) -> StorageResult<SubmissionRecord>;

    /// All submissions, newest first
    async fn read(&self) -> StorageResult<Vec<SubmissionRecord>>;

    /// Store a validated file under `folder` and return its public location
    async fn upload(&self, file: UploadFile, folder: &str) -> StorageResult<UploadedAsset>;

    /// Which backend this is
    fn mode(&self) -> BackendMode;
}
