use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use planner_core::models::user::{CreateUserRequest, UpdateUserRequest, User};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

/// Registration is the one write open to anonymous callers.
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = services::user::create_user(state.store.as_ref(), &state.policy, &payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = services::user::get_user(state.store.as_ref(), actor, id).await?;
    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, AppError> {
    let user =
        services::user::update_user(state.store.as_ref(), actor, &state.policy, id, &payload)
            .await?;
    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::user::delete_user(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
