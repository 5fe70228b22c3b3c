use axum::http::StatusCode;
use planner_db::models::DbDayOff;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{date, messages, school_year, send, TestContext};

fn signed_in_with_year(schedule_id: Uuid) -> TestContext {
    let mut ctx = TestContext::new().signed_in();
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(move |_, _| Ok(Some(school_year(schedule_id))));
    ctx
}

#[tokio::test]
async fn test_reversed_range_is_rejected() {
    let schedule_id = Uuid::new_v4();
    let mut ctx = signed_in_with_year(schedule_id);
    ctx.store.expect_create_day_off().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/day-offs",
        Some(token),
        Some(json!({
            "name": "Winter break",
            "from": "2025-01-10",
            "to": "2025-01-05",
            "schedule_id": schedule_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["The end date cannot happen before the start date"]
    );
}

#[tokio::test]
async fn test_range_outside_school_year_is_rejected() {
    let schedule_id = Uuid::new_v4();
    let mut ctx = signed_in_with_year(schedule_id);
    ctx.store.expect_create_day_off().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/day-offs",
        Some(token),
        Some(json!({
            "name": "Summer",
            "from": "2025-06-20",
            "to": "2025-07-10",
            "schedule_id": schedule_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["Date must be in between 01/09/2024 and 30/06/2025"]
    );
}

#[tokio::test]
async fn test_missing_end_makes_single_day() {
    let schedule_id = Uuid::new_v4();
    let mut ctx = signed_in_with_year(schedule_id);
    let day = date(2024, 11, 11);
    ctx.store
        .expect_create_day_off()
        .withf(move |_, name, from, to| {
            name.to_string() == "Independence Day" && *from == day && *to == day
        })
        .times(1)
        .returning(|settings_id, name, from, to| {
            Ok(DbDayOff {
                id: Uuid::new_v4(),
                name: name.to_string(),
                from_date: from,
                to_date: to,
                schedule_settings_id: settings_id,
            })
        });
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/day-offs",
        Some(token),
        Some(json!({
            "name": "Independence Day",
            "from": "2024-11-11",
            "schedule_id": schedule_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["from"], "2024-11-11");
    assert_eq!(body["to"], "2024-11-11");
}

#[tokio::test]
async fn test_unknown_schedule_is_a_violation() {
    let mut ctx = TestContext::new().signed_in();
    ctx.store
        .expect_get_settings_by_schedule()
        .returning(|_, _| Ok(None));
    let token = ctx.token;
    let schedule_id = Uuid::new_v4();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/day-offs",
        Some(token),
        Some(json!({ "name": "Holiday", "from": "2024-12-24", "schedule_id": schedule_id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![format!("Schedule with id {} was not found", schedule_id)]
    );
}

#[tokio::test]
async fn test_update_checks_effective_range() {
    let schedule_id = Uuid::new_v4();
    let mut ctx = TestContext::new().signed_in();
    let settings = school_year(schedule_id);
    let settings_id = settings.id;
    let id = Uuid::new_v4();
    ctx.store.expect_get_day_off().returning(move |id, _| {
        Ok(Some(DbDayOff {
            id,
            name: "Break".to_string(),
            from_date: date(2025, 2, 10),
            to_date: date(2025, 2, 14),
            schedule_settings_id: settings_id,
        }))
    });
    ctx.store
        .expect_get_settings()
        .returning(move |_, _| Ok(Some(settings.clone())));
    ctx.store.expect_update_day_off().never();
    let token = ctx.token;

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/day-offs/{}", id),
        Some(token),
        Some(json!({ "from": "2025-02-20" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec!["The end date cannot happen before the start date"]
    );
}
