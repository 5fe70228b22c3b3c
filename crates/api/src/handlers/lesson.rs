use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::lesson::{CreateLessonRequest, Lesson, UpdateLessonRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_lesson(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let created = services::lesson::create_lesson(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_lessons(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(schedule_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<Lesson>>, AppError> {
    let page =
        services::lesson::list_lessons(state.store.as_ref(), actor, schedule_id, &query).await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_lesson(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<Lesson>, AppError> {
    let found = services::lesson::get_lesson(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_lesson(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLessonRequest>,
) -> Result<Json<Lesson>, AppError> {
    let updated = services::lesson::update_lesson(state.store.as_ref(), actor, id, &payload).await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_lesson(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::lesson::delete_lesson(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
