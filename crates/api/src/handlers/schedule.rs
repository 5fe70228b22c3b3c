use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::schedule::{
        CreateScheduleRequest, Schedule, ScheduleSettings, UpdateScheduleRequest,
        UpdateScheduleSettingsRequest,
    },
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<Schedule>), AppError> {
    let schedule =
        services::schedule::create_schedule(state.store.as_ref(), actor, &state.policy, &payload)
            .await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Admins list every schedule, everyone else only their own.
#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<Schedule>>, AppError> {
    let page = services::schedule::list_schedules(state.store.as_ref(), actor, &query).await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<Schedule>, AppError> {
    let schedule = services::schedule::get_schedule(state.store.as_ref(), actor, id).await?;
    Ok(Json(schedule))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> Result<Json<Schedule>, AppError> {
    let schedule = services::schedule::update_schedule(
        state.store.as_ref(),
        actor,
        &state.policy,
        id,
        &payload,
    )
    .await?;
    Ok(Json(schedule))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::schedule::delete_schedule(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleSettings>, AppError> {
    let settings =
        services::schedule_settings::get_settings(state.store.as_ref(), actor, id).await?;
    Ok(Json(settings))
}

#[axum::debug_handler]
pub async fn update_settings(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScheduleSettingsRequest>,
) -> Result<Json<ScheduleSettings>, AppError> {
    let settings =
        services::schedule_settings::update_settings(state.store.as_ref(), actor, id, &payload)
            .await?;
    Ok(Json(settings))
}
