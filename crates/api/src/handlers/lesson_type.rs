use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::lesson_type::{CreateLessonTypeRequest, LessonType, UpdateLessonTypeRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_lesson_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateLessonTypeRequest>,
) -> Result<(StatusCode, Json<LessonType>), AppError> {
    let created =
        services::lesson_type::create_lesson_type(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_lesson_types(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(schedule_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<LessonType>>, AppError> {
    let page = services::lesson_type::list_lesson_types(
        state.store.as_ref(),
        actor,
        schedule_id,
        &query,
    )
    .await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_lesson_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<LessonType>, AppError> {
    let found = services::lesson_type::get_lesson_type(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_lesson_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLessonTypeRequest>,
) -> Result<Json<LessonType>, AppError> {
    let updated =
        services::lesson_type::update_lesson_type(state.store.as_ref(), actor, id, &payload).await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_lesson_type(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::lesson_type::delete_lesson_type(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
