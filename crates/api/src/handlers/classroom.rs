use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use planner_core::{
    models::classroom::{CreateClassroomRequest, Classroom, UpdateClassroomRequest},
    pagination::{PageQuery, PaginatedResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthActor, error_handling::AppError},
    services, ApiState,
};

#[axum::debug_handler]
pub async fn create_classroom(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateClassroomRequest>,
) -> Result<(StatusCode, Json<Classroom>), AppError> {
    let created =
        services::classroom::create_classroom(state.store.as_ref(), actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_classrooms(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(schedule_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<Classroom>>, AppError> {
    let page = services::classroom::list_classrooms(
        state.store.as_ref(),
        actor,
        schedule_id,
        &query,
    )
    .await?;
    Ok(Json(PaginatedResponse::new(page, &query)))
}

#[axum::debug_handler]
pub async fn get_classroom(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<Json<Classroom>, AppError> {
    let found = services::classroom::get_classroom(state.store.as_ref(), actor, id).await?;
    Ok(Json(found))
}

/// `classroom_type_ids`, when sent, replaces the classroom's whole type set.
#[axum::debug_handler]
pub async fn update_classroom(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClassroomRequest>,
) -> Result<Json<Classroom>, AppError> {
    let updated =
        services::classroom::update_classroom(state.store.as_ref(), actor, id, &payload).await?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_classroom(
    State(state): State<Arc<ApiState>>,
    AuthActor(actor): AuthActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::classroom::delete_classroom(state.store.as_ref(), actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
