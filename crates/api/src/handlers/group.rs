use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::group::{CreateGroupRequest, Group, UpdateGroupRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_group(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<Group>), AppError> {
    let created = services::group::create_group(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_groups(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(schedule_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<Group>>, AppError> {
    let page =
        services::group::list_groups(state.store.as_ref(), actor, schedule_id, &query).await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_group(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<Group>, AppError> {
    let found = services::group::get_group(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_group(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGroupRequest>,
) -> Result<Json<Group>, AppError> {
    let updated = services::group::update_group(state.store.as_ref(), actor, id, &payload).await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_group(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::group::delete_group(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
