use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::day_off::{CreateDayOffRequest, DayOff, UpdateDayOffRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

/// A day off without `to` covers the single day `from`.
#[axum::debug_handler]
pub async fn create_day_off(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateDayOffRequest>,
) -> Result<(StatusCode, Json<DayOff>), AppError> {
    let created = services::day_off::create_day_off(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_day_offs(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(schedule_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<DayOff>>, AppError> {
    let page =
        services::day_off::list_day_offs(state.store.as_ref(), actor, schedule_id, &query).await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_day_off(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<DayOff>, AppError> {
    let found = services::day_off::get_day_off(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn update_day_off(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDayOffRequest>,
) -> Result<Json<DayOff>, AppError> {
    let updated =
        services::day_off::update_day_off(state.store.as_ref(), actor, id, &payload).await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_day_off(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::day_off::delete_day_off(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
