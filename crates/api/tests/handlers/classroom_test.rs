use axum::http::StatusCode;
use planner_db::models::{DbClassroom, DbClassroomType, DbSchedule};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, send, TestContext};

fn classroom(id: Uuid, schedule_id: Uuid) -> DbClassroom {
    DbClassroom {
        id,
        name: "101".to_string(),
        capacity: 30,
        schedule_id,
    }
}

fn classroom_type(id: Uuid, schedule_id: Uuid) -> DbClassroomType {
    DbClassroomType {
        id,
        name: "Lab".to_string(),
        schedule_id,
    }
}

#[tokio::test]
async fn test_create_reports_capacity_and_classroom_types() {
    let mut ctx = TestContext::new().signed_in();
    let (token, user_id) = (ctx.token, ctx.user_id);
    let (schedule_id, type_id) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store.expect_get_schedule().returning(move |id, _| {
        Ok(Some(DbSchedule {
            id,
            name: "Fall".to_string(),
            user_id,
        }))
    });
    ctx.store
        .expect_find_classroom_by_name()
        .returning(|_, _| Ok(None));
    ctx.store
        .expect_get_classroom_type()
        .times(1)
        .returning(|id, _| Ok(Some(classroom_type(id, Uuid::new_v4()))));
    ctx.store.expect_create_classroom().never();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/classrooms",
        Some(token),
        Some(json!({
            "name": "101",
            "capacity": 0,
            "schedule_id": schedule_id,
            "classroom_type_ids": [type_id, type_id],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            "Capacity parameter is invalid".to_string(),
            format!("Cannot add multiple ClassroomType with the value {}", type_id),
            "ClassroomType must be in the same Schedule as Classroom".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_stores_classroom_types() {
    let mut ctx = TestContext::new().signed_in();
    let (token, user_id) = (ctx.token, ctx.user_id);
    let (schedule_id, type_id) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store.expect_get_schedule().returning(move |id, _| {
        Ok(Some(DbSchedule {
            id,
            name: "Fall".to_string(),
            user_id,
        }))
    });
    ctx.store
        .expect_find_classroom_by_name()
        .returning(|_, _| Ok(None));
    ctx.store
        .expect_get_classroom_type()
        .returning(move |id, _| Ok(Some(classroom_type(id, schedule_id))));
    ctx.store
        .expect_create_classroom()
        .times(1)
        .returning(|request| Ok(classroom(Uuid::new_v4(), request.schedule_id)));
    ctx.store
        .expect_set_classroom_types()
        .withf(move |_, ids| ids.to_vec() == vec![type_id])
        .times(1)
        .returning(|_, _| Ok(()));

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/classrooms",
        Some(token),
        Some(json!({
            "name": "101",
            "capacity": 30,
            "schedule_id": schedule_id,
            "classroom_type_ids": [type_id],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["classroom_type_ids"], json!([type_id]));
}

#[tokio::test]
async fn test_update_replaces_classroom_types() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let (id, schedule_id, type_id) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    ctx.store
        .expect_get_classroom()
        .returning(move |id, _| Ok(Some(classroom(id, schedule_id))));
    ctx.store
        .expect_get_classroom_type()
        .returning(move |id, _| Ok(Some(classroom_type(id, schedule_id))));
    ctx.store
        .expect_update_classroom()
        .times(1)
        .returning(move |id, _, _| Ok(Some(classroom(id, schedule_id))));
    ctx.store
        .expect_set_classroom_types()
        .withf(move |classroom_id, ids| *classroom_id == id && ids.to_vec() == vec![type_id])
        .times(1)
        .returning(|_, _| Ok(()));
    ctx.store.expect_classroom_type_ids().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/classrooms/{}", id),
        Some(token),
        Some(json!({ "classroom_type_ids": [type_id] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classroom_type_ids"], json!([type_id]));
}

#[tokio::test]
async fn test_update_rejects_empty_classroom() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let id = Uuid::new_v4();
    ctx.store
        .expect_get_classroom()
        .returning(|id, _| Ok(Some(classroom(id, Uuid::new_v4()))));
    ctx.store.expect_update_classroom().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/classrooms/{}", id),
        Some(token),
        Some(json!({ "capacity": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec!["Capacity parameter is invalid"]);
}
