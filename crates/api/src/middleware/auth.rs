//! # Authentication Module
//!
//! Password hashing with Argon2 and bearer-token resolution.
//!
//! A login issues an opaque session token. Every protected handler takes an
//! [`AuthActor`], which looks the token up and yields the caller's id and
//! role; missing, malformed, unknown or expired tokens are rejected with 401.

use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use eyre::Result;
use planner_core::{
    errors::PlannerError,
    scope::{Actor, Role},
};
use planner_db::repositories::SessionRepository;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Hashes a password using the Argon2 algorithm
///
/// A fresh random salt is generated for every call; the result is a PHC
/// string holding algorithm, parameters, salt and hash.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks `password` against a stored PHC hash string.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Extracts the session token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// The authenticated caller of a request
#[derive(Debug, Clone, Copy)]
pub struct AuthActor(pub Actor);

#[async_trait::async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            AppError(PlannerError::Authentication(
                "Missing or malformed bearer token".to_string(),
            ))
        })?;

        let session = state.store.find_session(token).await?.ok_or_else(|| {
            AppError(PlannerError::Authentication(
                "Session is invalid or has expired".to_string(),
            ))
        })?;

        Ok(AuthActor(Actor::new(
            session.user_id,
            Role::from_name(&session.role),
        )))
    }
}
