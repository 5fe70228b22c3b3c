use axum::http::StatusCode;
use mockall::predicate::eq;
use planner_core::scope::Scope;
use chrono::NaiveTime;
use planner_db::models::{DbLessonPeriod, DbSchedule};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, school_year, send, TestContext};

#[tokio::test]
async fn test_list_rejects_every_bad_parameter() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store.expect_list_schedules().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "GET",
        "/api/schedules?per_page=-5&page=3&sort_by=bogus&sort_order=up",
        Some(token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            "PerPage parameter is invalid",
            "Page parameter is invalid",
            "SortOrder parameter is invalid",
            "SortBy parameter is invalid",
        ]
    );
}

#[tokio::test]
async fn test_foreign_schedule_is_not_found() {
    let mut ctx = TestContext::new().signed_in();
    let (token, user_id) = (ctx.token, ctx.user_id);
    let id = Uuid::new_v4();
    ctx.store
        .expect_get_schedule()
        .with(eq(id), eq(Scope::OwnedBy(user_id)))
        .returning(|_, _| Ok(None));

    let (status, body) = send(
        ctx.app(),
        "GET",
        &format!("/api/schedules/{}", id),
        Some(token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(messages(&body), vec!["Schedule was not found"]);
}

#[tokio::test]
async fn test_admin_reads_any_schedule() {
    let mut ctx = TestContext::new().signed_in_as("Admin");
    let token = ctx.token;
    let (id, owner) = (Uuid::new_v4(), Uuid::new_v4());
    ctx.store
        .expect_get_schedule()
        .with(eq(id), eq(Scope::Unrestricted))
        .returning(move |id, _| {
            Ok(Some(DbSchedule {
                id,
                name: "Fall".to_string(),
                user_id: owner,
            }))
        });

    let (status, body) = send(
        ctx.app(),
        "GET",
        &format!("/api/schedules/{}", id),
        Some(token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], owner.to_string());
}

#[tokio::test]
async fn test_deleting_invisible_schedule_is_a_no_op() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    ctx.store
        .expect_delete_schedule()
        .times(1)
        .returning(|_, _| Ok(false));

    let (status, _) = send(
        ctx.app(),
        "DELETE",
        &format!("/api/schedules/{}", Uuid::new_v4()),
        Some(token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_rejects_taken_name_and_bad_hour() {
    let mut ctx = TestContext::new().signed_in();
    let (token, user_id) = (ctx.token, ctx.user_id);
    ctx.store
        .expect_find_schedule_by_name()
        .withf(move |id, name| *id == user_id && name.to_string() == "Fall")
        .returning(move |_, name| {
            Ok(Some(DbSchedule {
                id: Uuid::new_v4(),
                name: name.to_string(),
                user_id,
            }))
        });
    ctx.store.expect_create_schedule().never();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/schedules",
        Some(token),
        Some(json!({
            "name": "Fall",
            "school_hour": 0,
            "school_year_start": "2024-09-01",
            "school_year_end": "2025-06-30",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            "There is already a Schedule with the name Fall",
            "SchoolHour parameter is invalid",
        ]
    );
}

#[tokio::test]
async fn test_narrowing_year_past_day_offs_is_rejected() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let schedule_id = Uuid::new_v4();
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(move |_, _| Ok(Some(school_year(schedule_id))));
    ctx.store
        .expect_count_day_offs_outside()
        .returning(|_, _, _| Ok(2));
    ctx.store
        .expect_count_lesson_blocks_outside()
        .returning(|_, _, _| Ok(0));
    ctx.store.expect_update_settings().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/schedules/{}/settings", schedule_id),
        Some(token),
        Some(json!({ "school_year_end": "2025-05-31" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["There are DayOffs outside of provided range. Please change them first"]
    );
}

#[tokio::test]
async fn test_narrowing_year_past_lesson_blocks_is_rejected() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let schedule_id = Uuid::new_v4();
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(move |_, _| Ok(Some(school_year(schedule_id))));
    ctx.store
        .expect_count_day_offs_outside()
        .returning(|_, _, _| Ok(0));
    ctx.store
        .expect_count_lesson_blocks_outside()
        .with(eq(schedule_id), mockall::predicate::always(), mockall::predicate::always())
        .returning(|_, _, _| Ok(1));
    ctx.store.expect_update_settings().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/schedules/{}/settings", schedule_id),
        Some(token),
        Some(json!({ "school_year_start": "2024-10-01" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["There are LessonBlocks outside of provided range. Please change them first"]
    );
}

#[tokio::test]
async fn test_longer_school_hour_must_not_overlap_periods() {
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
        .with(eq(settings_id))
        .returning(move |_| {
            Ok([(8, 0), (8, 50)]
                .into_iter()
                .map(|(hour, minute)| DbLessonPeriod {
                    id: Uuid::new_v4(),
                    start_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
                    schedule_settings_id: settings_id,
                })
                .collect())
        });
    ctx.store.expect_update_settings().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/schedules/{}/settings", schedule_id),
        Some(token),
        Some(json!({ "school_hour": 60 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), vec!["LessonPeriods cannot overlap"]);
}

#[tokio::test]
async fn test_freeing_a_day_with_lessons_is_rejected() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let schedule_id = Uuid::new_v4();
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(move |_, _| Ok(Some(school_year(schedule_id))));
    ctx.store
        .expect_count_lesson_blocks_off_school_days()
        .withf(move |id, days| *id == schedule_id && days.to_string() == "1111000")
        .returning(|_, _| Ok(3));
    ctx.store.expect_update_settings().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/schedules/{}/settings", schedule_id),
        Some(token),
        Some(json!({ "school_days": "1111000" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["There are LessonBlocks on days that are not school days. Please change them first"]
    );
}

#[tokio::test]
async fn test_shorter_school_hour_skips_period_check() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    let schedule_id = Uuid::new_v4();
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(move |_, _| Ok(Some(school_year(schedule_id))));
    ctx.store.expect_lesson_periods_of().never();
    ctx.store
        .expect_update_settings()
        .times(1)
        .returning(move |_, _, _| {
            let mut settings = school_year(schedule_id);
            settings.school_hour = 30;
            Ok(Some(settings))
        });

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/schedules/{}/settings", schedule_id),
        Some(token),
        Some(json!({ "school_hour": 30 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["school_hour"], 30);
}
