use axum::http::StatusCode;
use planner_db::models::DbUser;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, send, TestContext};

#[tokio::test]
async fn test_register_reports_every_problem() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_user_by_login().returning(|login, _| {
        Ok(Some(DbUser {
            id: Uuid::new_v4(),
            login: login.to_string(),
            custom_url: "taken".to_string(),
        }))
    });
    ctx.store
        .expect_find_user_by_custom_url()
        .returning(|_, _| Ok(None));
    ctx.store.expect_create_user().never();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/users",
        None,
        Some(json!({ "login": "bad login", "custom_url": "free", "password": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            "There is already a User with the name bad login",
            "Password cannot be shorter than 8 characters",
            "Password must contain at least one of the following: SmallLetter, BigLetter, Digit, Symbol",
            "Login can only contain the following: SmallLetters, BigLetters, Digits",
        ]
    );
}

#[tokio::test]
async fn test_register_creates_user() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_user_by_login().returning(|_, _| Ok(None));
    ctx.store
        .expect_find_user_by_custom_url()
        .returning(|_, _| Ok(None));
    ctx.store
        .expect_create_user()
        .withf(|request, hash| request.login == "marek" && hash.starts_with("$argon2"))
        .times(1)
        .returning(|request, _| {
            Ok(DbUser {
                id: Uuid::new_v4(),
                login: request.login.clone(),
                custom_url: request.custom_url.clone(),
            })
        });

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/users",
        None,
        Some(json!({ "login": "marek", "custom_url": "marek1", "password": "sssSSS1!" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["login"], "marek");
    assert_eq!(body["custom_url"], "marek1");
}

#[tokio::test]
async fn test_other_users_account_is_not_found() {
    let mut ctx = TestContext::new().signed_in();
    let token = ctx.token;
    ctx.store.expect_get_user().returning(|_, _| Ok(None));
    let uri = format!("/api/users/{}", Uuid::new_v4());

    let (status, _) = send(ctx.app(), "GET", &uri, Some(token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn user(id: Uuid, login: &str, custom_url: &str) -> DbUser {
    DbUser {
        id,
        login: login.to_string(),
        custom_url: custom_url.to_string(),
    }
}

#[tokio::test]
async fn test_update_reports_every_problem() {
    let mut ctx = TestContext::new().signed_in();
    let (token, user_id) = (ctx.token, ctx.user_id);
    ctx.store
        .expect_get_user()
        .returning(move |id, _| Ok(Some(user(id, "marek", "marek1"))));
    ctx.store
        .expect_find_user_by_login()
        .withf(move |_, exclude| *exclude == Some(user_id))
        .returning(|_, _| Ok(None));
    ctx.store
        .expect_find_user_by_custom_url()
        .withf(move |_, exclude| *exclude == Some(user_id))
        .returning(|url, _| Ok(Some(user(Uuid::new_v4(), "other", url))));
    ctx.store.expect_update_user().never();

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/users/{}", user_id),
        Some(token),
        Some(json!({ "login": "bad login", "custom_url": "taken" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            "Login can only contain the following: SmallLetters, BigLetters, Digits",
            "There is already a URL with the name taken",
        ]
    );
}

#[tokio::test]
async fn test_update_keeps_own_login() {
    let mut ctx = TestContext::new().signed_in();
    let (token, user_id) = (ctx.token, ctx.user_id);
    ctx.store
        .expect_get_user()
        .returning(move |id, _| Ok(Some(user(id, "marek", "marek1"))));
    // The user's own row is excluded, so their current login is free
    ctx.store
        .expect_find_user_by_login()
        .withf(move |login, exclude| login.to_string() == "marek" && *exclude == Some(user_id))
        .returning(|_, _| Ok(None));
    ctx.store
        .expect_update_user()
        .times(1)
        .returning(|id, _, _| Ok(Some(user(id, "marek", "marek1"))));

    let (status, body) = send(
        ctx.app(),
        "PATCH",
        &format!("/api/users/{}", user_id),
        Some(token),
        Some(json!({ "login": "marek" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["login"], "marek");
}
