use axum::http::StatusCode;
use planner_db::models::{DbGroup, DbStudent};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, send, TestContext};

fn student(id: Uuid, album_number: &str, schedule_id: Uuid) -> DbStudent {
    DbStudent {
        id,
        album_number: album_number.to_string(),
        group_id: Uuid::new_v4(),
        schedule_id,
    }
}

#[tokio::test]
async fn test_album_number_is_unique_in_schedule() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let (group_id, schedule_id) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store.expect_get_group().returning(move |id, _| {
        Ok(Some(DbGroup {
            id,
            name: "1A".to_string(),
            student_count: 30,
            schedule_id,
        }))
    });
    ctx.store
        .expect_find_student_by_album_number()
        .withf(move |schedule, album| *schedule == schedule_id && album.to_string() == "123456")
        .returning(move |_, album| Ok(Some(student(Uuid::new_v4(), album, schedule_id))));
    ctx.store.expect_create_student().never();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/students",
        Some(token),
        Some(json!({ "album_number": "123456", "group_id": group_id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["There is already a Student with the name 123456"]
    );
}

#[tokio::test]
async fn test_unknown_group_is_reported() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let group_id = Uuid::new_v4();
    ctx.store.expect_get_group().returning(|_, _| Ok(None));
    ctx.store.expect_find_student_by_album_number().never();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/students",
        Some(token),
        Some(json!({ "album_number": "123456", "group_id": group_id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![format!("Group with id {} was not found", group_id)]
    );
}

#[tokio::test]
async fn test_update_keeps_own_album_number() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let (id, schedule_id) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store
        .expect_get_student()
        .returning(move |id, _| Ok(Some(student(id, "123456", schedule_id))));
    ctx.store
        .expect_find_student_by_album_number()
        .returning(move |_, album| Ok(Some(student(id, album, schedule_id))));
    ctx.store
        .expect_update_student()
        .times(1)
        .returning(move |id, _, _| Ok(Some(student(id, "123456", schedule_id))));

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/students/{}", id),
        Some(token),
        Some(json!({ "album_number": "123456" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["album_number"], "123456");
}
