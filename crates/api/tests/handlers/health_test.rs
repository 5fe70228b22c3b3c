use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::test_utils::{send, TestContext};

#[tokio::test]
async fn test_health_needs_no_token() {
    let (status, body) = send(TestContext::new().app(), "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_version_names_the_service() {
    let (status, body) = send(TestContext::new().app(), "GET", "/version", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "planner-api");
    assert!(body["version"].is_string());
}
