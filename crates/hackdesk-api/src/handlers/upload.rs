use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
    Json,
};
use hackdesk_core::validation::{validate_folder, validate_upload};
use hackdesk_core::UploadedAsset;
use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::UPLOAD_SUCCESS_MESSAGE;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub message: String,
    pub data: UploadedAsset,
}

/// Upload an image asset (logo or banner)
///
/// Accepts a multipart body with a `file` part and an optional `folder` field.
/// The file must have an `image/*` content type and be no larger than the configured limit.
///
/// # Errors
/// - `AppError::InvalidInput` - No file, non-image type, too large, or bad folder name
/// - `AppError::Backend` - Object storage rejected the upload
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded", body = UploadResponse),
        (status = 400, description = "Invalid file or folder", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let max_bytes = state.config.max_upload_bytes();
    let form = extract_upload_form(multipart?, max_bytes).await?;

    let file = validate_upload(form.file, max_bytes)?;
    let folder = validate_folder(form.folder.as_deref())?;

    tracing::debug!(
        filename = %file.filename,
        content_type = %file.content_type,
        size_bytes = file.size(),
        folder = %folder,
        "Upload validated"
    );

    let asset = state.persistence.upload(file, &folder).await?;

    tracing::info!(url = %asset.url, folder = %asset.folder, "File uploaded");

    Ok(Json(UploadResponse {
        success: true,
        url: asset.url.clone(),
        message: UPLOAD_SUCCESS_MESSAGE.to_string(),
        data: asset,
    }))
}
