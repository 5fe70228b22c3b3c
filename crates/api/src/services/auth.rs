use chrono::{Duration, Utc};
use planner_core::{
    errors::{PlannerError, PlannerResult},
    models::auth::{LoginRequest, LoginResponse},
};
use planner_db::repositories::SessionRepository;
use uuid::Uuid;

use crate::middleware::auth;

fn invalid_credentials() -> PlannerError {
    PlannerError::Authentication("Invalid login or password".to_string())
}

/// Checks the credentials and opens a session lasting `ttl`.
pub async fn login<S>(
    store: &S,
    request: &LoginRequest,
    ttl: Duration,
) -> PlannerResult<LoginResponse>
where
    S: SessionRepository + ?Sized,
{
    let credentials = store
        .find_credentials(&request.login)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !auth::verify_password(&request.password, &credentials.password_hash)? {
        return Err(invalid_credentials());
    }

    let session = store
        .create_session(credentials.user_id, Utc::now() + ttl)
        .await?;
    tracing::info!("User {} logged in", credentials.user_id);

    Ok(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
    })
}

pub async fn logout<S>(store: &S, token: Uuid) -> PlannerResult<()>
where
    S: SessionRepository + ?Sized,
{
    store.delete_session(token).await?;
    Ok(())
}
