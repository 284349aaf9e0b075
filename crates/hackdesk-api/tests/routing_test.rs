//! Routing, preflight and middleware integration tests.
//!
//! Run with: `cargo test -p hackdesk-api --test routing_test`

mod helpers;

use axum::http::Method;
use helpers::{api_path, setup_test_app};
use serde_json::Value;

#[tokio::test]
async fn test_unknown_path_returns_endpoint_not_found() {
    let server = setup_test_app().await;

    let response = server.get(&api_path("/does-not-exist")).await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn test_wrong_method_returns_endpoint_not_found() {
    let server = setup_test_app().await;

    let response = server.get(&api_path("/submit")).await;
    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Endpoint not found");

    let response = server.delete(&api_path("/submissions")).await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_options_preflight_on_any_path() {
    let server = setup_test_app().await;

    for path in [api_path("/submit"), api_path("/nowhere"), "/".to_string()] {
        let response = server.method(Method::OPTIONS, &path).await;

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.header("access-control-allow-origin"), "*");
        assert_eq!(
            response.header("access-control-allow-methods"),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            response.header("access-control-allow-headers"),
            "Content-Type, Authorization"
        );
    }
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let server = setup_test_app().await;

    let response = server
        .get(&api_path("/health"))
        .add_header("X-Request-ID", "req-123")
        .await;
    assert_eq!(response.header("x-request-id"), "req-123");

    let response = server.get(&api_path("/health")).await;
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let server = setup_test_app().await;

    let body: Value = server.get(&api_path("/openapi.json")).await.json();

    let paths = body["paths"].as_object().unwrap();
    for route in ["/api/health", "/api/submissions", "/api/submit", "/api/upload"] {
        assert!(paths.contains_key(route), "missing {}", route);
    }
}
