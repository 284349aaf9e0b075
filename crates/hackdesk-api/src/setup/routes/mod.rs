//! Route configuration and setup.
//!
//! Submission routes live in [handlers](crate::handlers); the health check in [health](health).

pub(crate) mod health;

use crate::constants::{API_PREFIX, MULTIPART_OVERHEAD_BYTES};
use crate::error::HttpAppError;
use crate::handlers;
use crate::middleware::request_id::RequestId;
use crate::middleware::{preflight_middleware, request_id_middleware};
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use hackdesk_core::{AppError, Config};
use std::any::Any;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub async fn setup_routes(
    config: &Config,
    state: Arc<AppState>,
) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.as_str())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    // Let a file slightly over the upload limit through so validation can report it
    let body_limit = config.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;

    let app = api_routes()
        .route(
            &format!("{}/openapi.json", API_PREFIX),
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(cors)
        .layer(trace_layer)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn(preflight_middleware))
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(&format!("{}/health", API_PREFIX), get(health::health_check))
        .route(
            &format!("{}/submissions", API_PREFIX),
            get(handlers::submissions::list_submissions),
        )
        .route(
            &format!("{}/submit", API_PREFIX),
            post(handlers::submissions::submit),
        )
        .route(
            &format!("{}/upload", API_PREFIX),
            post(handlers::upload::upload_file),
        )
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(CorsAny)
            .allow_methods(methods)
            .allow_headers(CorsAny)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(CorsAny)
    };
    Ok(cors)
}

async fn endpoint_not_found(uri: Uri) -> HttpAppError {
    HttpAppError(AppError::NotFound(uri.path().to_string()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    HttpAppError(AppError::Internal(format!("Handler panicked: {}", detail))).into_response()
}
