//! Health check handler and response type.

use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use hackdesk_core::BackendMode;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Current time, RFC 3339
    pub timestamp: String,
    /// Backend the persistence router selected at startup
    pub mode: BackendMode,
}

/// Report liveness and which persistence backend is active
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        mode: state.persistence.mode(),
    })
}
