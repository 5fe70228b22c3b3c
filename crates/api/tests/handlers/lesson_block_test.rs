use axum::http::StatusCode;
use chrono::NaiveDate;
use mockall::predicate::eq;
use planner_db::models::{DbLesson, DbLessonBlock};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{date, messages, school_year, send, TestContext};

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

fn block(
    lesson_id: Uuid,
    schedule_id: Uuid,
    day: NaiveDate,
    start: i32,
    end: i32,
) -> DbLessonBlock {
    DbLessonBlock {
        id: Uuid::new_v4(),
        lesson_date: day,
        lesson_start: start,
        lesson_end: end,
        lesson_id,
        classroom_id: None,
        teacher_id: None,
        schedule_id,
    }
}

/// A signed-in context whose schedule has eight lesson periods.
fn with_schedule(schedule_id: Uuid) -> TestContext {
    let mut ctx = TestContext::new().signed_in();
    ctx.store
        .expect_get_lesson()
        .returning(move |id, _| Ok(Some(lesson(id, schedule_id))));
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(move |_, _| Ok(Some(school_year(schedule_id))));
    ctx.store.expect_count_lesson_periods().returning(|_| Ok(8));
    ctx
}

#[tokio::test]
async fn test_create_refreshes_current_hours() {
    let schedule_id = Uuid::new_v4();
    let lesson_id = Uuid::new_v4();
    let mut ctx = with_schedule(schedule_id);
    ctx.store
        .expect_create_lesson_block()
        .times(1)
        .returning(move |request| {
            Ok(block(
                request.lesson_id,
                schedule_id,
                request.lesson_date,
                request.lesson_start,
                request.lesson_end,
            ))
        });
    // (1, 3) already exists; the new block covers (5, 5)
    ctx.store
        .expect_sum_lesson_block_hours()
        .with(eq(lesson_id))
        .returning(|_| Ok(Some(4)));
    ctx.store
        .expect_set_current_hours()
        .with(eq(lesson_id), eq(4))
        .times(1)
        .returning(|_, _| Ok(()));
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lesson-blocks",
        Some(token),
        Some(json!({
            "lesson_date": "2025-01-13",
            "lesson_start": 5,
            "lesson_end": 5,
            "lesson_id": lesson_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["lesson_start"], 5);
}

#[tokio::test]
async fn test_weekend_and_missing_period_are_rejected() {
    let mut ctx = with_schedule(Uuid::new_v4());
    ctx.store.expect_create_lesson_block().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lesson-blocks",
        Some(token),
        Some(json!({
            "lesson_date": "2025-01-11",
            "lesson_start": 7,
            "lesson_end": 9,
            "lesson_id": Uuid::new_v4(),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            "LessonEnd parameter is invalid",
            "Lessons cannot occur on Saturday",
        ]
    );
}

#[tokio::test]
async fn test_reversed_periods_are_rejected() {
    let mut ctx = with_schedule(Uuid::new_v4());
    ctx.store.expect_create_lesson_block().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lesson-blocks",
        Some(token),
        Some(json!({
            "lesson_date": "2025-01-13",
            "lesson_start": 4,
            "lesson_end": 2,
            "lesson_id": Uuid::new_v4(),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["The end time cannot happen before the start time"]
    );
}

#[tokio::test]
async fn test_deleting_last_block_zeroes_hours() {
    let mut ctx = TestContext::new().signed_in();
    let (lesson_id, schedule_id) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store
        .expect_get_lesson_block()
        .returning(move |_, _| Ok(Some(block(lesson_id, schedule_id, date(2025, 1, 13), 1, 3))));
    ctx.store
        .expect_delete_lesson_block()
        .times(1)
        .returning(|_, _| Ok(true));
    ctx.store
        .expect_sum_lesson_block_hours()
        .returning(|_| Ok(None));
    ctx.store
        .expect_set_current_hours()
        .with(eq(lesson_id), eq(0))
        .times(1)
        .returning(|_, _| Ok(()));
    let token = ctx.token;

    let (status, _) = send(
        ctx.app(),
        "DELETE",
        &format!("/api/lesson-blocks/{}", Uuid::new_v4()),
        Some(token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_deleting_invisible_block_leaves_hours_alone() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store
        .expect_get_lesson_block()
        .returning(|_, _| Ok(None));
    ctx.store.expect_delete_lesson_block().never();
    ctx.store.expect_set_current_hours().never();
    let token = ctx.token;

    let (status, _) = send(
        ctx.app(),
        "DELETE",
        &format!("/api/lesson-blocks/{}", Uuid::new_v4()),
        Some(token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}
