use axum::http::StatusCode;
use chrono::NaiveTime;
use planner_db::models::DbLessonPeriod;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, school_year, send, TestContext};

fn period(id: Uuid, hour: u32, minute: u32, settings_id: Uuid) -> DbLessonPeriod {
    DbLessonPeriod {
        id,
        start_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        schedule_settings_id: settings_id,
    }
}

#[tokio::test]
async fn test_create_rejects_overlapping_period() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let schedule_id = Uuid::new_v4();
    let settings = school_year(schedule_id);
    let settings_id = settings.id;
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(move |_, _| Ok(Some(settings.clone())));
    ctx.store
        .expect_lesson_periods_of()
        .returning(move |_| Ok(vec![period(Uuid::new_v4(), 8, 0, settings_id)]));
    ctx.store.expect_create_lesson_period().never();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/lesson-periods",
        Some(token),
        Some(json!({ "start": "08:30:00", "schedule_id": schedule_id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec!["LessonPeriods cannot overlap"]);
}

#[tokio::test]
async fn test_moving_period_ignores_itself() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let settings = school_year(Uuid::new_v4());
    let settings_id = settings.id;
    let id = Uuid::new_v4();
    ctx.store
        .expect_get_lesson_period()
        .returning(move |id, _| Ok(Some(period(id, 8, 0, settings_id))));
    ctx.store
        .expect_get_settings()
        .returning(move |_, _| Ok(Some(settings.clone())));
    ctx.store.expect_lesson_periods_of().returning(move |_| {
        Ok(vec![
            period(id, 8, 0, settings_id),
            period(Uuid::new_v4(), 9, 0, settings_id),
        ])
    });
    ctx.store
        .expect_update_lesson_period()
        .times(1)
        .returning(move |id, _, _| Ok(Some(period(id, 8, 10, settings_id))));

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/lesson-periods/{}", id),
        Some(token),
        Some(json!({ "start": "08:10:00" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start"], "08:10:00");
}

#[tokio::test]
async fn test_moving_period_onto_neighbour_is_rejected() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let settings = school_year(Uuid::new_v4());
    let settings_id = settings.id;
    let id = Uuid::new_v4();
    ctx.store
        .expect_get_lesson_period()
        .returning(move |id, _| Ok(Some(period(id, 8, 0, settings_id))));
    ctx.store
        .expect_get_settings()
        .returning(move |_, _| Ok(Some(settings.clone())));
    ctx.store.expect_lesson_periods_of().returning(move |_| {
        Ok(vec![
            period(id, 8, 0, settings_id),
            period(Uuid::new_v4(), 9, 0, settings_id),
        ])
    });
    ctx.store.expect_update_lesson_period().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/lesson-periods/{}", id),
        Some(token),
        Some(json!({ "start": "08:30:00" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec!["LessonPeriods cannot overlap"]);
}
