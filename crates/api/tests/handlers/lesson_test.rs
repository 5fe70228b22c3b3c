use axum::http::StatusCode;
use planner_db::models::{DbClassroomType, DbLesson, DbLessonType, DbSubgroup};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, send, TestContext};

fn lesson_type(id: Uuid, schedule_id: Uuid) -> DbLessonType {
    DbLessonType {
        id,
        name: "Lecture".to_string(),
        color: 3,
        schedule_id,
    }
}

fn subgroup(id: Uuid, schedule_id: Uuid) -> DbSubgroup {
    DbSubgroup {
        id,
        name: "A".to_string(),
        student_count: 15,
        group_id: Uuid::new_v4(),
        schedule_id,
    }
}

#[tokio::test]
async fn test_amount_of_hours_is_checked_first() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store.expect_get_lesson_type().never();
    ctx.store.expect_create_lesson().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lessons",
        Some(token),
        Some(json!({
            "name": "Algebra",
            "amount_of_hours": 0,
            "lesson_type_id": Uuid::new_v4(),
            "subgroup_id": Uuid::new_v4(),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec!["AmountOfHours parameter is invalid"]);
}

#[tokio::test]
async fn test_missing_references_are_all_reported() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store.expect_get_lesson_type().returning(|_, _| Ok(None));
    ctx.store.expect_get_subgroup().returning(|_, _| Ok(None));
    let token = ctx.token;
    let (lesson_type_id, subgroup_id) = (Uuid::new_v4(), Uuid::new_v4());

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lessons",
        Some(token),
        Some(json!({
            "name": "Algebra",
            "amount_of_hours": 30,
            "lesson_type_id": lesson_type_id,
            "subgroup_id": subgroup_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            format!("LessonType with id {} was not found", lesson_type_id),
            format!("Subgroup with id {} was not found", subgroup_id),
        ]
    );
}

#[tokio::test]
async fn test_lesson_type_from_other_schedule() {
    let mut ctx = TestContext::new().signed_in();
    let schedule_id = Uuid::new_v4();
    ctx.store
        .expect_get_lesson_type()
        .returning(|id, _| Ok(Some(lesson_type(id, Uuid::new_v4()))));
    ctx.store
        .expect_get_subgroup()
        .returning(move |id, _| Ok(Some(subgroup(id, schedule_id))));
    ctx.store
        .expect_find_lesson_by_name()
        .returning(|_, _| Ok(None));
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lessons",
        Some(token),
        Some(json!({
            "name": "Algebra",
            "amount_of_hours": 30,
            "lesson_type_id": Uuid::new_v4(),
            "subgroup_id": Uuid::new_v4(),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["Subgroup must be in the same Schedule as LessonType"]
    );
}

#[tokio::test]
async fn test_duplicate_classroom_types_are_rejected() {
    let mut ctx = TestContext::new().signed_in();
    let schedule_id = Uuid::new_v4();
    let classroom_type_id = Uuid::new_v4();
    ctx.store
        .expect_get_lesson_type()
        .returning(move |id, _| Ok(Some(lesson_type(id, schedule_id))));
    ctx.store
        .expect_get_subgroup()
        .returning(move |id, _| Ok(Some(subgroup(id, schedule_id))));
    ctx.store
        .expect_get_classroom_type()
        .times(1)
        .returning(move |id, _| {
            Ok(Some(DbClassroomType {
                id,
                name: "Lab".to_string(),
                schedule_id,
            }))
        });
    ctx.store
        .expect_find_lesson_by_name()
        .returning(|_, _| Ok(None));
    ctx.store.expect_create_lesson().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lessons",
        Some(token),
        Some(json!({
            "name": "Algebra",
            "amount_of_hours": 30,
            "lesson_type_id": Uuid::new_v4(),
            "subgroup_id": Uuid::new_v4(),
            "classroom_type_ids": [classroom_type_id, classroom_type_id],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![format!(
            "Cannot add multiple ClassroomType with the value {}",
            classroom_type_id
        )]
    );
}

#[tokio::test]
async fn test_classroom_type_from_other_schedule() {
    let mut ctx = TestContext::new().signed_in();
    let schedule_id = Uuid::new_v4();
    ctx.store
        .expect_get_lesson_type()
        .returning(move |id, _| Ok(Some(lesson_type(id, schedule_id))));
    ctx.store
        .expect_get_subgroup()
        .returning(move |id, _| Ok(Some(subgroup(id, schedule_id))));
    ctx.store.expect_get_classroom_type().returning(|id, _| {
        Ok(Some(DbClassroomType {
            id,
            name: "Gym".to_string(),
            schedule_id: Uuid::new_v4(),
        }))
    });
    ctx.store
        .expect_find_lesson_by_name()
        .returning(|_, _| Ok(None));
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lessons",
        Some(token),
        Some(json!({
            "name": "Algebra",
            "amount_of_hours": 30,
            "lesson_type_id": Uuid::new_v4(),
            "subgroup_id": Uuid::new_v4(),
            "classroom_type_ids": [Uuid::new_v4()],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["ClassroomType must be in the same Schedule as Lesson"]
    );
}

fn lesson(id: Uuid, schedule_id: Uuid) -> DbLesson {
    DbLesson {
        id,
        name: "Algebra".to_string(),
        current_hours: 0,
        amount_of_hours: 30,
        lesson_type_id: Uuid::new_v4(),
        subgroup_id: Uuid::new_v4(),
        schedule_id,
    }
}

#[tokio::test]
async fn test_update_rejects_lesson_type_of_another_schedule() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let (id, lesson_type_id) = (Uuid::new_v4(), Uuid::new_v4());
    let schedule_id = Uuid::new_v4();
    ctx.store
        .expect_get_lesson()
        .returning(move |id, _| Ok(Some(lesson(id, schedule_id))));
    ctx.store
        .expect_get_lesson_type()
        .returning(|id, _| Ok(Some(lesson_type(id, Uuid::new_v4()))));
    ctx.store.expect_update_lesson().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/lessons/{}", id),
        Some(token),
        Some(json!({ "lesson_type_id": lesson_type_id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["LessonType must be in the same Schedule as Lesson"]
    );
}

#[tokio::test]
async fn test_update_checks_amount_before_references() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let id = Uuid::new_v4();
    ctx.store
        .expect_get_lesson()
        .returning(|id, _| Ok(Some(lesson(id, Uuid::new_v4()))));
    ctx.store.expect_get_lesson_type().never();
    ctx.store.expect_update_lesson().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/lessons/{}", id),
        Some(token),
        Some(json!({ "amount_of_hours": 0, "lesson_type_id": Uuid::new_v4() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec!["AmountOfHours parameter is invalid"]);
}

#[tokio::test]
async fn test_update_keeps_classroom_types_when_not_given() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let (id, schedule_id, type_id) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    ctx.store
        .expect_get_lesson()
        .returning(move |id, _| Ok(Some(lesson(id, schedule_id))));
    ctx.store
        .expect_update_lesson()
        .times(1)
        .returning(move |id, _, _| {
            Ok(Some(DbLesson {
                amount_of_hours: 40,
                ..lesson(id, schedule_id)
            }))
        });
    ctx.store.expect_set_lesson_classroom_types().never();
    ctx.store
        .expect_lesson_classroom_type_ids()
        .returning(move |_| Ok(vec![type_id]));

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/lessons/{}", id),
        Some(token),
        Some(json!({ "amount_of_hours": 40 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount_of_hours"], 40);
    assert_eq!(body["classroom_type_ids"], json!([type_id]));
}
