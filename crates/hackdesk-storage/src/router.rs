//! Persistence routing
//!
//! The router is the single switchpoint between the hosted backend and the
//! in-memory demo store. The choice is made once at construction and held for
//! the lifetime of the process.

use crate::{create_store, BackendMode, StorageResult, SubmissionStore};
use hackdesk_core::{
    Config, IdStrategy, NewSubmission, SubmissionRecord, UploadFile, UploadedAsset,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct PersistenceRouter {
    store: Arc<dyn SubmissionStore>,
}

impl PersistenceRouter {
    /// Build the router from configuration, selecting the backend once.
    pub fn from_config(config: &Config, ids: Arc<dyn IdStrategy>) -> StorageResult<Self> {
        let store = create_store(config, ids)?;
        Ok(Self::new(store))
    }

    /// Wrap an already constructed store
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub fn mode(&self) -> BackendMode {
        self.store.mode()
    }

    pub async fn write(&self, submission: NewSubmission) -> StorageResult<SubmissionRecord> {
        self.store.write(submission).await.inspect_err(|e| {
            tracing::error!(error = %e, mode = %self.mode(), "Submission write failed");
        })
    }

    pub async fn read(&self) -> StorageResult<Vec<SubmissionRecord>> {
        self.store.read().await.inspect_err(|e| {
            tracing::error!(error = %e, mode = %self.mode(), "Submission read failed");
        })
    }

    pub async fn upload(&self, file: UploadFile, folder: &str) -> StorageResult<UploadedAsset> {
        self.store.upload(file, folder).await.inspect_err(|e| {
            tracing::error!(error = %e, mode = %self.mode(), folder = %folder, "Asset upload failed");
        })
    }
}
