//! Upload integration tests (demo mode).
//!
//! Run with: `cargo test -p hackdesk-api --test upload_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::fixtures::minimal_png;
use helpers::{api_path, setup_test_app};
use serde_json::Value;

const FIVE_MIB: usize = 5 * 1024 * 1024;

fn image_form(data: Vec<u8>, file_name: &str, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data).file_name(file_name).mime_type(mime),
    )
}

#[tokio::test]
async fn test_upload_png_to_folder() {
    let server = setup_test_app().await;
    let form = image_form(minimal_png(), "logo.png", "image/png").add_text("folder", "logos");

    let response = server.post(&api_path("/upload")).multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "File uploaded successfully");
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://demo-storage.supabase.co/logos/"));
    assert!(url.ends_with(".png"));
    assert_eq!(body["data"]["folder"], "logos");
    assert_eq!(body["data"]["url"], url);
}

#[tokio::test]
async fn test_upload_defaults_to_uploads_folder() {
    let server = setup_test_app().await;

    let response = server
        .post(&api_path("/upload"))
        .multipart(image_form(minimal_png(), "banner.jpg", "image/jpeg"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["data"]["folder"], "uploads");
}

#[tokio::test]
async fn test_upload_without_file() {
    let server = setup_test_app().await;
    let form = MultipartForm::new().add_text("folder", "logos");

    let response = server.post(&api_path("/upload")).multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let server = setup_test_app().await;

    let response = server
        .post(&api_path("/upload"))
        .multipart(image_form(b"%PDF-1.4".to_vec(), "deck.pdf", "application/pdf"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid file type. Only image files are allowed");
}

#[tokio::test]
async fn test_upload_just_under_limit_succeeds() {
    let server = setup_test_app().await;

    let response = server
        .post(&api_path("/upload"))
        .multipart(image_form(vec![0u8; FIVE_MIB - 1], "big.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_upload_just_over_limit_rejected() {
    let server = setup_test_app().await;

    let response = server
        .post(&api_path("/upload"))
        .multipart(image_form(vec![0u8; FIVE_MIB + 1], "huge.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "File too large. Maximum size is 5MB");
}

#[tokio::test]
async fn test_upload_rejects_unsafe_folder() {
    let server = setup_test_app().await;
    let form = image_form(minimal_png(), "logo.png", "image/png").add_text("folder", "../secrets");

    let response = server.post(&api_path("/upload")).multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid folder name '../secrets'");
}
