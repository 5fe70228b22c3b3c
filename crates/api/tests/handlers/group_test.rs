use axum::http::StatusCode;
use planner_db::models::DbGroup;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, send, TestContext};

const TOO_MANY: &str =
    "Student count in a subgroup cannot be greater than the student count in a group";

fn group(id: Uuid, student_count: i32) -> DbGroup {
    DbGroup {
        id,
        name: "1A".to_string(),
        student_count,
        schedule_id: Uuid::new_v4(),
    }
}

#[tokio::test]
async fn test_subgroup_larger_than_group_is_rejected() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store
        .expect_get_group()
        .returning(|id, _| Ok(Some(group(id, 20))));
    ctx.store
        .expect_find_subgroup_by_name()
        .returning(|_, _| Ok(None));
    ctx.store.expect_create_subgroup().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/subgroups",
        Some(token),
        Some(json!({ "name": "Lab A", "student_count": 25, "group_id": Uuid::new_v4() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec![TOO_MANY]);
}

#[tokio::test]
async fn test_group_cannot_shrink_below_subgroup() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store
        .expect_get_group()
        .returning(|id, _| Ok(Some(group(id, 30))));
    ctx.store
        .expect_max_subgroup_student_count()
        .returning(|_| Ok(Some(25)));
    ctx.store.expect_update_group().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/groups/{}", Uuid::new_v4()),
        Some(token),
        Some(json!({ "student_count": 20 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec![TOO_MANY]);
}

#[tokio::test]
async fn test_group_without_subgroups_can_shrink() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store
        .expect_get_group()
        .returning(|id, _| Ok(Some(group(id, 30))));
    ctx.store
        .expect_max_subgroup_student_count()
        .returning(|_| Ok(None));
    ctx.store
        .expect_update_group()
        .times(1)
        .returning(|id, _, _| Ok(Some(group(id, 10))));
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/groups/{}", Uuid::new_v4()),
        Some(token),
        Some(json!({ "student_count": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_count"], 10);
}
