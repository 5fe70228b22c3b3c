use axum::http::StatusCode;
use planner_db::models::DbTeacher;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, send, TestContext};

fn teacher(id: Uuid, name: &str, surname: &str, schedule_id: Uuid) -> DbTeacher {
    DbTeacher {
        id,
        name: name.to_string(),
        surname: surname.to_string(),
        schedule_id,
    }
}

#[tokio::test]
async fn test_changing_surname_checks_full_name() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let (id, schedule_id) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store
        .expect_get_teacher()
        .returning(move |id, _| Ok(Some(teacher(id, "Jan", "Kowalski", schedule_id))));
    ctx.store
        .expect_find_teacher_by_name()
        .withf(move |schedule, name, surname| {
            *schedule == schedule_id && name.to_string() == "Jan" && surname.to_string() == "Nowak"
        })
        .times(1)
        .returning(move |_, name, surname| {
            Ok(Some(teacher(Uuid::new_v4(), name, surname, schedule_id)))
        });
    ctx.store.expect_update_teacher().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/teachers/{}", id),
        Some(token),
        Some(json!({ "surname": "Nowak" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["There is already a Teacher with the name Jan Nowak"]
    );
}

#[tokio::test]
async fn test_teacher_may_keep_own_name() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let (id, schedule_id) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store
        .expect_get_teacher()
        .returning(move |id, _| Ok(Some(teacher(id, "Jan", "Kowalski", schedule_id))));
    ctx.store
        .expect_find_teacher_by_name()
        .returning(move |_, name, surname| Ok(Some(teacher(id, name, surname, schedule_id))));
    ctx.store
        .expect_update_teacher()
        .times(1)
        .returning(move |id, _, _| Ok(Some(teacher(id, "Janusz", "Kowalski", schedule_id))));

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/teachers/{}", id),
        Some(token),
        Some(json!({ "name": "Janusz" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Janusz");
}
