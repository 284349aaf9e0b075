//! OpenAPI documentation, served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::setup::routes::health;
use hackdesk_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hackdesk API",
        version = "0.1.0",
        description = "Hackathon submission intake: team registration, listing and image asset upload. Runs against a hosted database and object storage, or an in-memory demo store when the backend is not configured."
    ),
    paths(
        health::health_check,
        handlers::submissions::list_submissions,
        handlers::submissions::submit,
        handlers::upload::upload_file,
    ),
    components(schemas(
        models::SubmissionForm,
        models::NewSubmission,
        models::SubmissionRecord,
        models::UploadedAsset,
        hackdesk_core::BackendMode,
        health::HealthResponse,
        handlers::submissions::SubmitResponse,
        handlers::upload::UploadResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "health", description = "Service status and backend mode"),
        (name = "submissions", description = "Create and list hackathon submissions"),
        (name = "uploads", description = "Image uploads for logos and banners")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
