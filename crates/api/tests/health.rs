mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_text, build_test_app, get, InMemoryStore};

#[tokio::test]
async fn health_reports_ok_when_store_answers() {
    let store = Arc::new(InMemoryStore::with_sectors(&["Industry"]));
    let response = get(build_test_app(store), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_reports_degraded_when_store_fails() {
    let store = Arc::new(InMemoryStore::with_sectors(&["Industry"]));
    store.fail_with("down");
    let response = get(build_test_app(store), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let store = Arc::new(InMemoryStore::with_sectors(&["Industry"]));
    let response = get(build_test_app(store), "/").await;
    assert!(response.headers().contains_key("x-request-id"));
}
