use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use hackdesk_core::validation::validate_submission;
use hackdesk_core::{SubmissionForm, SubmissionRecord};
use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::SUBMIT_SUCCESS_MESSAGE;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub data: SubmissionRecord,
}

/// List all submissions, newest first
#[utoipa::path(
    get,
    path = "/api/submissions",
    tag = "submissions",
    responses(
        (status = 200, description = "Submissions, newest first", body = Vec<SubmissionRecord>),
        (status = 500, description = "Storage backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_submissions"))]
pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.persistence.read().await?;
    tracing::debug!(count = records.len(), "Submissions listed");
    Ok(Json(records))
}

/// Submit a hackathon entry
///
/// Validation runs in order: required fields, email shape, description word count.
/// Nothing is persisted unless every check passes.
///
/// # Errors
/// - `AppError::InvalidInput` - Missing fields, bad email or description over 100 words
/// - `AppError::Backend` - Storage backend rejected the write
/// - `AppError::MalformedRequest` - Body is not valid JSON
#[utoipa::path(
    post,
    path = "/api/submit",
    tag = "submissions",
    request_body = SubmissionForm,
    responses(
        (status = 200, description = "Submission stored", body = SubmitResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure or malformed body", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, form), fields(operation = "submit"))]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    ValidatedJson(form): ValidatedJson<SubmissionForm>,
) -> Result<impl IntoResponse, HttpAppError> {
    let submission = validate_submission(form, state.config.schema)?;

    let record = state.persistence.write(submission).await?;

    tracing::info!(
        id = %record.id,
        team_name = %record.submission.team_name,
        mode = %state.persistence.mode(),
        "Submission accepted"
    );

    Ok(Json(SubmitResponse {
        success: true,
        message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        data: record,
    }))
}
