use crate::keys::{asset_file_name, object_key};
use crate::traits::{StorageResult, SubmissionStore};
use crate::BackendMode;
use async_trait::async_trait;
use hackdesk_core::constants::{DEMO_ID_PREFIX, DEMO_STORAGE_BASE_URL};
use hackdesk_core::{IdStrategy, NewSubmission, SubmissionRecord, UploadFile, UploadedAsset};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// In-memory submission store used in demo mode
///
/// Records are kept in insertion order for the lifetime of the process and
/// lost on restart. Appends are serialized by a mutex so ids stay unique and
/// `created_at` never decreases along the sequence.
pub struct MockStore {
    records: Mutex<Vec<SubmissionRecord>>,
    ids: Arc<dyn IdStrategy>,
    latency: Duration,
}

impl MockStore {
    /// Create an empty store
    ///
    /// # Arguments
    /// * `ids` - Id and timestamp source
    /// * `latency` - Artificial delay applied to writes and uploads
    pub fn new(ids: Arc<dyn IdStrategy>, latency: Duration) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            ids,
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Append a submission, assigning a unique id and creation timestamp.
    pub async fn append(&self, submission: NewSubmission) -> SubmissionRecord {
        let mut records = self.records.lock().await;

        let now = self.ids.now();
        let created_at = match records.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };

        let id = self.ids.next_id(DEMO_ID_PREFIX);
        let record = SubmissionRecord::new(id, submission, created_at);
        records.push(record.clone());
        record
    }

    /// Full sequence in insertion order (oldest first)
    pub async fn list(&self) -> Vec<SubmissionRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl SubmissionStore for MockStore {
    #[tracing::instrument(skip(self, submission), fields(store = "mock", operation = "write"))]
    async fn write(&self, submission: NewSubmission) -> StorageResult<SubmissionRecord> {
        self.simulate_latency().await;
        let record = self.append(submission).await;

        tracing::info!(
            id = %record.id,
            team_name = %record.submission.team_name,
            "Demo submission saved"
        );

        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(store = "mock", operation = "read"))]
    async fn read(&self) -> StorageResult<Vec<SubmissionRecord>> {
        let mut records = self.list().await;
        records.reverse();
        Ok(records)
    }

    #[tracing::instrument(skip(self, file), fields(store = "mock", operation = "upload"))]
    async fn upload(&self, file: UploadFile, folder: &str) -> StorageResult<UploadedAsset> {
        self.simulate_latency().await;

        let file_name = asset_file_name(self.ids.as_ref(), &file.filename, &file.content_type);
        let url = format!(
            "{}/{}",
            DEMO_STORAGE_BASE_URL,
            object_key(folder, &file_name)
        );

        tracing::info!(
            url = %url,
            size_bytes = file.size(),
            "Demo upload simulated"
        );

        Ok(UploadedAsset {
            file_name,
            folder: folder.to_string(),
            url,
        })
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Demo
    }
}
