use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::classroom::{CreateClassroomTypeRequest, ClassroomType, UpdateClassroomTypeRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_classroom_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateClassroomTypeRequest>,
) -> Result<(StatusCode, Json<ClassroomType>), AppError> {
    let created = services::classroom_type::create_classroom_type(
        state.store.as_ref(),
        actor,
        &payload,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_classroom_types(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(schedule_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<ClassroomType>>, AppError> {
    let page = services::classroom_type::list_classroom_types(
        state.store.as_ref(),
        actor,
        schedule_id,
        &query,
    )
    .await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_classroom_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassroomType>, AppError> {
    let found =
        services::classroom_type::get_classroom_type(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_classroom_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClassroomTypeRequest>,
) -> Result<Json<ClassroomType>, AppError> {
    let updated = services::classroom_type::update_classroom_type(
        state.store.as_ref(),
        actor,
        id,
        &payload,
    )
    .await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_classroom_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::classroom_type::delete_classroom_type(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
