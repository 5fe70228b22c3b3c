use axum::http::StatusCode;
use chrono::Utc;
use planner_api::middleware::auth::hash_password;
use planner_db::models::{DbCredentials, DbSession};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{messages, send, TestContext};

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let ctx = TestContext::new();
    let uri = format!("/api/schedules/{}", Uuid::new_v4());

    let (status, body) = send(ctx.app(), "GET", &uri, None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn test_unknown_or_expired_session_is_unauthorized() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_session().returning(|_| Ok(None));
    ctx.store.expect_list_schedules().never();
    let token = ctx.token;

    let (status, _) = send(ctx.app(), "GET", "/api/schedules", Some(token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let mut ctx = TestContext::new();
    let user_id = ctx.user_id;
    let hash = hash_password("sssSSS1!").unwrap();
    ctx.store.expect_find_credentials().returning(move |_| {
        Ok(Some(DbCredentials {
            user_id,
            password_hash: hash.clone(),
            role: "User".to_string(),
        }))
    });
    ctx.store.expect_create_session().never();

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "login": "marek", "password": "sssSSS1?" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        messages(&body),
        vec!["Authentication error: Invalid login or password"]
    );
}

#[tokio::test]
async fn test_login_opens_session() {
    let mut ctx = TestContext::new();
    let (user_id, token) = (ctx.user_id, ctx.token);
    let hash = hash_password("sssSSS1!").unwrap();
    ctx.store.expect_find_credentials().returning(move |_| {
        Ok(Some(DbCredentials {
            user_id,
            password_hash: hash.clone(),
            role: "User".to_string(),
        }))
    });
    ctx.store
        .expect_create_session()
        .withf(move |id, expires_at| *id == user_id && *expires_at > Utc::now())
        .times(1)
        .returning(move |user_id, expires_at| {
            Ok(DbSession {
                token,
                user_id,
                role: "User".to_string(),
                expires_at,
            })
        });

    let (status, body) = send(
        ctx.app(),
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "login": "marek", "password": "sssSSS1!" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], token.to_string());
}

#[tokio::test]
async fn test_logout_drops_session() {
    let mut ctx = TestContext::new();
    let token = ctx.token;
    ctx.store
        .expect_delete_session()
        .withf(move |t| *t == token)
        .times(1)
        .returning(|_| Ok(()));

    let (status, _) = send(ctx.app(), "POST", "/api/auth/logout", Some(token), None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}
