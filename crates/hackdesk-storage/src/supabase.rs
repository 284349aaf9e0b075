//! Hosted backend: Supabase REST (PostgREST) for rows, Supabase Storage for assets.

use crate::keys::{asset_file_name, object_key};
use crate::traits::{StorageError, StorageResult, SubmissionStore};
use crate::BackendMode;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hackdesk_core::constants::SUBMISSION_ID_PREFIX;
use hackdesk_core::{IdStrategy, NewSubmission, SubmissionRecord, UploadFile, UploadedAsset};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Row layout of the submissions table (snake_case columns)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SubmissionRow {
    id: String,
    team_name: String,
    team_lead_name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    contact: Option<String>,
    #[serde(default)]
    team_lead_email: Option<String>,
    #[serde(default)]
    team_lead_contact: Option<String>,
    #[serde(default)]
    project_title: Option<String>,
    #[serde(default)]
    project_description: Option<String>,
    #[serde(default)]
    git_link: Option<String>,
    #[serde(default)]
    project_url: Option<String>,
    #[serde(default)]
    project_logo_url: Option<String>,
    #[serde(default)]
    project_banner_url: Option<String>,
    #[serde(default)]
    video_demo_link: Option<String>,
    #[serde(default)]
    other_details: Option<String>,
    created_at: DateTime<Utc>,
}

impl SubmissionRow {
    fn from_submission(id: String, s: NewSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            team_name: s.team_name,
            team_lead_name: s.team_lead_name,
            email: s.email,
            contact: s.contact,
            team_lead_email: s.team_lead_email,
            team_lead_contact: s.team_lead_contact,
            project_title: s.project_title,
            project_description: s.project_description,
            git_link: s.git_link,
            project_url: s.project_url,
            project_logo_url: s.project_logo_url,
            project_banner_url: s.project_banner_url,
            video_demo_link: s.video_demo_link,
            other_details: s.other_details,
            created_at,
        }
    }

    fn into_record(self) -> SubmissionRecord {
        SubmissionRecord::new(
            self.id,
            NewSubmission {
                team_name: self.team_name,
                team_lead_name: self.team_lead_name,
                email: self.email,
                contact: self.contact,
                team_lead_email: self.team_lead_email,
                team_lead_contact: self.team_lead_contact,
                project_title: self.project_title,
                project_description: self.project_description,
                git_link: self.git_link,
                project_url: self.project_url,
                project_logo_url: self.project_logo_url,
                project_banner_url: self.project_banner_url,
                video_demo_link: self.video_demo_link,
                other_details: self.other_details,
            },
            self.created_at,
        )
    }
}

/// Error body shared by PostgREST and the storage API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Supabase-backed submission store
pub struct SupabaseStore {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
    bucket: String,
    ids: Arc<dyn IdStrategy>,
}

impl Debug for SupabaseStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SupabaseStore")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl SupabaseStore {
    /// Create a new SupabaseStore
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyzcompany.supabase.co")
    /// * `api_key` - Anon or service key sent as `apikey` and bearer token
    /// * `table` - Submissions table name
    /// * `bucket` - Public storage bucket for uploaded assets
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
        bucket: impl Into<String>,
        timeout: Duration,
        ids: Arc<dyn IdStrategy>,
    ) -> StorageResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: table.into(),
            bucket: bucket.into(),
            ids,
        })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url,
            urlencoding::encode(&self.table)
        )
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            urlencoding::encode(&self.bucket),
            key
        )
    }

    /// Public URL of an object in the bucket
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            urlencoding::encode(&self.bucket),
            key
        )
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Turn a non-2xx response into `StorageError::Backend` with the store's message.
    async fn check(response: reqwest::Response) -> StorageResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if text.trim().is_empty() {
                    format!("Storage backend returned {}", status)
                } else {
                    text
                }
            });

        Err(StorageError::Backend(message))
    }
}

#[async_trait]
impl SubmissionStore for SupabaseStore {
    #[tracing::instrument(skip(self, submission), fields(store = "supabase", db.table = %self.table, db.operation = "insert"))]
    async fn write(&self, submission: NewSubmission) -> StorageResult<SubmissionRecord> {
        let row = SubmissionRow::from_submission(
            self.ids.next_id(SUBMISSION_ID_PREFIX),
            submission,
            self.ids.now(),
        );
        let start = Instant::now();

        let response = self
            .authorized(self.http_client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[&row])
            .send()
            .await?;
        let response = Self::check(response).await?;

        let mut rows: Vec<SubmissionRow> = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;
        if rows.is_empty() {
            return Err(StorageError::InvalidResponse(
                "insert returned no rows".to_string(),
            ));
        }
        let record = rows.swap_remove(0).into_record();

        tracing::info!(
            id = %record.id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Submission inserted"
        );

        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(store = "supabase", db.table = %self.table, db.operation = "select"))]
    async fn read(&self) -> StorageResult<Vec<SubmissionRecord>> {
        let response = self
            .authorized(self.http_client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let response = Self::check(response).await?;

        let rows: Vec<SubmissionRow> = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;

        tracing::debug!(count = rows.len(), "Submissions fetched");
        Ok(rows.into_iter().map(SubmissionRow::into_record).collect())
    }

    #[tracing::instrument(skip(self, file), fields(store = "supabase", bucket = %self.bucket, folder = %folder))]
    async fn upload(&self, file: UploadFile, folder: &str) -> StorageResult<UploadedAsset> {
        let file_name = asset_file_name(self.ids.as_ref(), &file.filename, &file.content_type);
        let key = object_key(folder, &file_name);
        if key.contains("..") || key.starts_with('/') {
            return Err(StorageError::InvalidKey(key));
        }

        let size = file.size();
        let start = Instant::now();

        let response = self
            .authorized(self.http_client.post(self.object_url(&key)))
            .header(reqwest::header::CONTENT_TYPE, file.content_type)
            .header("x-upsert", "false")
            .body(file.data)
            .send()
            .await?;
        Self::check(response).await?;

        let url = self.public_url(&key);

        tracing::info!(
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Supabase storage upload successful"
        );

        Ok(UploadedAsset {
            file_name,
            folder: folder.to_string(),
            url,
        })
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mockito::Matcher;

    struct FixedIds;

    impl IdStrategy for FixedIds {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
        }

        fn token(&self) -> String {
            "tok00001".to_string()
        }
    }

    fn store(base_url: &str) -> SupabaseStore {
        SupabaseStore::new(
            base_url,
            "anon-key",
            "hackathon_submissions",
            "hackathon-assets",
            Duration::from_secs(5),
            Arc::new(FixedIds),
        )
        .unwrap()
    }

    fn submission() -> NewSubmission {
        NewSubmission {
            team_name: "Tech Innovators".to_string(),
            team_lead_name: "Alice Johnson".to_string(),
            email: None,
            contact: None,
            team_lead_email: Some("alice@example.com".to_string()),
            team_lead_contact: Some("+1-555-0123".to_string()),
            project_title: Some("Tracker".to_string()),
            project_description: Some("Tracks things".to_string()),
            git_link: Some("https://github.com/ti/tracker".to_string()),
            project_url: None,
            project_logo_url: None,
            project_banner_url: None,
            video_demo_link: None,
            other_details: None,
        }
    }

    #[tokio::test]
    async fn test_write_inserts_snake_case_row() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/hackathon_submissions")
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer anon-key")
            .match_header("prefer", "return=representation")
            .match_body(Matcher::PartialJson(serde_json::json!([{
                "id": "submission_1700000000000_tok00001",
                "team_name": "Tech Innovators",
                "team_lead_email": "alice@example.com",
                "git_link": "https://github.com/ti/tracker"
            }])))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!([{
                    "id": "submission_1700000000000_tok00001",
                    "team_name": "Tech Innovators",
                    "team_lead_name": "Alice Johnson",
                    "team_lead_email": "alice@example.com",
                    "team_lead_contact": "+1-555-0123",
                    "project_title": "Tracker",
                    "project_description": "Tracks things",
                    "git_link": "https://github.com/ti/tracker",
                    "created_at": "2023-11-14T22:13:20.000+00:00"
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let record = store(&server.url()).write(submission()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.id, "submission_1700000000000_tok00001");
        assert_eq!(record.submission, submission());
        assert_eq!(record.created_at.timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn test_write_propagates_store_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/rest/v1/hackathon_submissions")
            .with_status(409)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
            )
            .create_async()
            .await;

        let err = store(&server.url()).write(submission()).await.unwrap_err();
        match err {
            StorageError::Backend(msg) => {
                assert_eq!(msg, "duplicate key value violates unique constraint")
            }
            other => panic!("Expected Backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_orders_newest_first() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/hackathon_submissions")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("order".into(), "created_at.desc".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!([
                    {"id": "b", "team_name": "B", "team_lead_name": "Lb", "created_at": "2024-05-02T10:00:00Z"},
                    {"id": "a", "team_name": "A", "team_lead_name": "La", "created_at": "2024-05-01T10:00:00Z"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let records = store(&server.url()).read().await.unwrap();

        mock.assert_async().await;
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn test_read_error_without_json_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let err = store(&server.url()).read().await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_upload_writes_object_and_resolves_public_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/storage/v1/object/hackathon-assets/logos/tok00001-1700000000000.png",
            )
            .match_header("content-type", "image/png")
            .match_header("apikey", "anon-key")
            .with_status(200)
            .with_body(r#"{"Key":"hackathon-assets/logos/tok00001-1700000000000.png"}"#)
            .create_async()
            .await;

        let store = store(&server.url());
        let asset = store
            .upload(
                UploadFile {
                    filename: "logo.png".to_string(),
                    content_type: "image/png".to_string(),
                    data: vec![137, 80, 78, 71],
                },
                "logos",
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(asset.file_name, "tok00001-1700000000000.png");
        assert_eq!(
            asset.url,
            format!(
                "{}/storage/v1/object/public/hackathon-assets/logos/tok00001-1700000000000.png",
                server.url()
            )
        );
    }

    #[tokio::test]
    async fn test_upload_error_uses_storage_error_field() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Any)
            .with_status(400)
            .with_body(r#"{"statusCode":"404","error":"Bucket not found"}"#)
            .create_async()
            .await;

        let err = store(&server.url())
            .upload(
                UploadFile {
                    filename: "a.jpg".to_string(),
                    content_type: "image/jpeg".to_string(),
                    data: vec![1],
                },
                "uploads",
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bucket not found");
    }
}
