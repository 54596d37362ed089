//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router or store is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use catalog_api::error::AppError;
use catalog_core::error::CoreError;

async fn render(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn read_failure_renders_not_found_page() {
    let err = AppError::read(CoreError::Query("Error fetching projects: boom".into()));
    assert_matches!(&err, AppError::NotFound(_));

    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>404</h1>"));
    assert!(body.contains("Error fetching projects: boom"));
}

#[tokio::test]
async fn validation_write_failure_is_400_on_error_page() {
    let err = AppError::write(CoreError::Validation("value too long".into()));
    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("<h1>400</h1>"));
    assert!(!body.contains("<h1>500</h1>"));
    assert!(body.contains("value too long"));
}

#[tokio::test]
async fn not_found_write_failure_is_404_on_error_page() {
    let err = AppError::write(CoreError::NotFound {
        entity: "Project",
        id: 8,
    });
    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>404</h1>"));
    assert!(body.contains("Project not found (id 8)"));
}

#[tokio::test]
async fn store_write_failure_is_500() {
    for err in [
        CoreError::Query("Error adding project: syntax".into()),
        CoreError::Connectivity("connection refused".into()),
    ] {
        let (status, body) = render(AppError::write(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("<h1>500</h1>"));
        assert!(body.contains("we have encountered the following error"));
    }
}

#[tokio::test]
async fn messages_are_html_escaped() {
    let err = AppError::NotFound("<script>alert(1)</script>".into());
    let (_, body) = render(err).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn malformed_write_id_is_404() {
    let (status, body) = render(AppError::write_missing_project("abc")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Project not found (id abc)"));
}
