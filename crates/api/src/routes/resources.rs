use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

/// Adds `POST /api/{path}` and `GET/PATCH/DELETE /api/{path}/:id` for one resource.
macro_rules! crud {
    (
        $router:expr,
        $path:literal,
        $handlers:ident,
        $create:ident,
        $get:ident,
        $update:ident,
        $delete:ident
    ) => {
        $router
            .route(concat!("/api/", $path), post(handlers::$handlers::$create))
            .route(
                concat!("/api/", $path, "/:id"),
                get(handlers::$handlers::$get)
                    .patch(handlers::$handlers::$update)
                    .delete(handlers::$handlers::$delete),
            )
    };
}

/// Resources that live inside a schedule.
pub fn routes() -> Router<Arc<ApiState>> {
    let router = Router::new();
    let router = crud!(
        router,
        "day-offs",
        day_off,
        create_day_off,
        get_day_off,
        update_day_off,
        delete_day_off
    );
    let router = crud!(
        router,
        "lesson-periods",
        lesson_period,
        create_lesson_period,
        get_lesson_period,
        update_lesson_period,
        delete_lesson_period
    );
    let router = crud!(
        router,
        "teachers",
        teacher,
        create_teacher,
        get_teacher,
        update_teacher,
        delete_teacher
    );
    let router = crud!(
        router,
        "classroom-types",
        classroom_type,
        create_classroom_type,
        get_classroom_type,
        update_classroom_type,
        delete_classroom_type
    );
    let router = crud!(
        router,
        "classrooms",
        classroom,
        create_classroom,
        get_classroom,
        update_classroom,
        delete_classroom
    );
    let router = crud!(
        router,
        "lesson-types",
        lesson_type,
        create_lesson_type,
        get_lesson_type,
        update_lesson_type,
        delete_lesson_type
    );
    let router = crud!(
        router,
        "groups",
        group,
        create_group,
        get_group,
        update_group,
        delete_group
    );
    let router = crud!(
        router,
        "subgroups",
        subgroup,
        create_subgroup,
        get_subgroup,
        update_subgroup,
        delete_subgroup
    );
    let router = crud!(
        router,
        "students",
        student,
        create_student,
        get_student,
        update_student,
        delete_student
    );
    let router = crud!(
        router,
        "lessons",
        lesson,
        create_lesson,
        get_lesson,
        update_lesson,
        delete_lesson
    );
    crud!(
        router,
        "lesson-blocks",
        lesson_block,
        create_lesson_block,
        get_lesson_block,
        update_lesson_block,
        delete_lesson_block
    )
}
