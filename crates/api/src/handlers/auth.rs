use axum::{extract::State, http::{HeaderMap, StatusCode}, Json};
use planner_core::{
    errors::PlannerError,
    models::auth::{LoginRequest, LoginResponse},
};
use std::sync::Arc;

use crate::{
    middleware::{auth::bearer_token, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response =
        services::auth::login(state.store.as_ref(), &payload, state.session_ttl).await?;
    Ok(Json(response))
}

/// Drops the session named by the bearer token.
#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers).ok_or_else(|| {
        PlannerError::Authentication("Missing or malformed bearer token".to_string())
    })?;

    services::auth::logout(state.store.as_ref(), token).await?;
    Ok(StatusCode::NO_CONTENT)
}
