use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::group::{CreateSubgroupRequest, Subgroup, UpdateSubgroupRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_subgroup(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateSubgroupRequest>,
) -> Result<(StatusCode, Json<Subgroup>), AppError> {
    let created = services::subgroup::create_subgroup(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists the subgroups of one group.
#[axum::debug_handler]
pub async fn list_subgroups(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(group_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<Subgroup>>, AppError> {
    let page =
        services::subgroup::list_subgroups(state.store.as_ref(), actor, group_id, &query).await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_subgroup(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<Subgroup>, AppError> {
    let found = services::subgroup::get_subgroup(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_subgroup(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSubgroupRequest>,
) -> Result<Json<Subgroup>, AppError> {
    let updated =
        services::subgroup::update_subgroup(state.store.as_ref(), actor, id, &payload).await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_subgroup(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::subgroup::delete_subgroup(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
