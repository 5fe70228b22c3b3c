use axum::http::StatusCode;
use planner_api::middleware::error_handling::map_error;
use planner_core::errors::{PlannerError, ValidationErrors, Violation};
use pretty_assertions::assert_eq;
use serde_json::Value;

async fn body_of(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_validation_maps_to_bad_request() {
    let mut errors = ValidationErrors::new();
    errors.push(Violation::bad_parameter("PerPage"));
    errors.push(Violation::TimeOrder);

    let response = map_error(PlannerError::Validation(errors));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_of(response).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let response = map_error(PlannerError::not_found("Teacher"));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_authentication_maps_to_401() {
    let response = map_error(PlannerError::Authentication("expired".to_string()));
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unexpected_hides_internal_detail() {
    let response = map_error(PlannerError::Unexpected(eyre::eyre!(
        "connection to 10.0.0.3 refused"
    )));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_of(response).await;
    assert_eq!(body["errors"][0]["message"], "An unexpected error occurred");
    assert!(!body.to_string().contains("10.0.0.3"));
}
