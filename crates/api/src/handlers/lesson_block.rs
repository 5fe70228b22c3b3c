use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::lesson::{CreateLessonBlockRequest, LessonBlock, UpdateLessonBlockRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

/// Creating, moving or deleting a block also refreshes the lesson's current hours.
#[axum::debug_handler]
pub async fn create_lesson_block(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateLessonBlockRequest>,
) -> Result<(StatusCode, Json<LessonBlock>), AppError> {
    let created =
        services::lesson_block::create_lesson_block(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_lesson_blocks(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(lesson_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<LessonBlock>>, AppError> {
    let page = services::lesson_block::list_lesson_blocks(
        state.store.as_ref(),
        actor,
        lesson_id,
        &query,
    )
    .await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_lesson_block(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<LessonBlock>, AppError> {
    let found = services::lesson_block::get_lesson_block(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_lesson_block(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLessonBlockRequest>,
) -> Result<Json<LessonBlock>, AppError> {
    let updated = services::lesson_block::update_lesson_block(
        state.store.as_ref(),
        actor,
        id,
        &payload,
    )
    .await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_lesson_block(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::lesson_block::delete_lesson_block(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
