use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::lesson_period::{CreateLessonPeriodRequest, LessonPeriod, UpdateLessonPeriodRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_lesson_period(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateLessonPeriodRequest>,
) -> Result<(StatusCode, Json<LessonPeriod>), AppError> {
    let created =
        services::lesson_period::create_lesson_period(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_lesson_periods(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(schedule_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<LessonPeriod>>, AppError> {
    let page = services::lesson_period::list_lesson_periods(
        state.store.as_ref(),
        actor,
        schedule_id,
        &query,
    )
    .await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_lesson_period(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<LessonPeriod>, AppError> {
    let found = services::lesson_period::get_lesson_period(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_lesson_period(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLessonPeriodRequest>,
) -> Result<Json<LessonPeriod>, AppError> {
    let updated = services::lesson_period::update_lesson_period(
        state.store.as_ref(),
        actor,
        id,
        &payload,
    )
    .await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_lesson_period(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::lesson_period::delete_lesson_period(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
