use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// File received from a client, before validation
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// A stored file and its public URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAsset {
    /// Generated name: random token, timestamp and original extension
    pub file_name: String,
    /// Folder classification, e.g. "logos", "banners", "uploads"
    pub folder: String,
    pub url: String,
}
