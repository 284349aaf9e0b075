//! Multipart parsing for the upload handler

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use hackdesk_core::{AppError, UploadFile};

use crate::error::HttpAppError;

const FILE_FIELD: &str = "file";
const FOLDER_FIELD: &str = "folder";

/// Fields of an upload form, before validation
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadFile>,
    pub folder: Option<String>,
}

/// Read the `file` and optional `folder` fields from a multipart body.
///
/// Unknown fields are drained and ignored. A file part with neither a filename nor any
/// bytes counts as "no file". Exceeding the body limit is reported as an oversized file
/// so the client sees the same message as for a file just over `max_bytes`.
pub async fn extract_upload_form(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<UploadForm, HttpAppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            FILE_FIELD => {
                if form.file.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    )
                    .into());
                }

                let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, max_bytes))?;

                if filename.is_empty() && data.is_empty() {
                    continue;
                }

                form.file = Some(UploadFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            FOLDER_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, max_bytes))?;
                form.folder = Some(text);
            }
            _ => {
                // Drain so the stream can advance to the next part
                field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, max_bytes))?;
            }
        }
    }

    Ok(form)
}

fn multipart_error(err: MultipartError, max_bytes: usize) -> HttpAppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::InvalidInput(format!(
            "File too large. Maximum size is {}MB",
            max_bytes / 1024 / 1024
        ))
        .into();
    }
    AppError::MalformedRequest(format!("Failed to read multipart: {}", err.body_text())).into()
}
