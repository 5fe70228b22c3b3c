use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

/// Schedules, their settings and every list nested under a schedule.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedules",
            post(handlers::schedule::create_schedule).get(handlers::schedule::list_schedules),
        )
        .route(
            "/api/schedules/:id",
            get(handlers::schedule::get_schedule)
                .patch(handlers::schedule::update_schedule)
                .delete(handlers::schedule::delete_schedule),
        )
        .route(
            "/api/schedules/:id/settings",
            get(handlers::schedule::get_settings).patch(handlers::schedule::update_settings),
        )
        .route(
            "/api/schedules/:id/day-offs",
            get(handlers::day_off::list_day_offs),
        )
        .route(
            "/api/schedules/:id/lesson-periods",
            get(handlers::lesson_period::list_lesson_periods),
        )
        .route(
            "/api/schedules/:id/teachers",
            get(handlers::teacher::list_teachers),
        )
        .route(
            "/api/schedules/:id/classroom-types",
            get(handlers::classroom_type::list_classroom_types),
        )
        .route(
            "/api/schedules/:id/classrooms",
            get(handlers::classroom::list_classrooms),
        )
        .route(
            "/api/schedules/:id/lesson-types",
            get(handlers::lesson_type::list_lesson_types),
        )
        .route(
            "/api/schedules/:id/groups",
            get(handlers::group::list_groups),
        )
        .route(
            "/api/schedules/:id/lessons",
            get(handlers::lesson::list_lessons),
        )
        .route(
            "/api/groups/:id/subgroups",
            get(handlers::subgroup::list_subgroups),
        )
        .route(
            "/api/groups/:id/students",
            get(handlers::student::list_students),
        )
        .route(
            "/api/lessons/:id/lesson-blocks",
            get(handlers::lesson_block::list_lesson_blocks),
        )
}
