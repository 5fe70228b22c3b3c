use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use uuid::Uuid;

use crate::{
    PgStore,
    models::{DbCredentials, DbSession},
};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_credentials(&self, login: &str) -> Result<Option<DbCredentials>>;

    /// Expired sessions of every user are dropped on the way.
    async fn create_session(&self, user_id: Uuid, expires_at: DateTime<Utc>) -> Result<DbSession>;

    /// Only sessions that have not expired yet are returned.
    async fn find_session(&self, token: Uuid) -> Result<Option<DbSession>>;

    async fn delete_session(&self, token: Uuid) -> Result<()>;
}

#[async_trait]
impl SessionRepository for PgStore {
    async fn find_credentials(&self, login: &str) -> Result<Option<DbCredentials>> {
        let credentials = sqlx::query_as::<_, DbCredentials>(
            r#"
            SELECT a.user_id, a.password_hash, a.role
            FROM auth a
            JOIN users u ON u.id = a.user_id
            WHERE u.login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(self.pool())
        .await?;

        Ok(credentials)
    }

    async fn create_session(&self, user_id: Uuid, expires_at: DateTime<Utc>) -> Result<DbSession> {
        tracing::debug!("Creating session for user: {}", user_id);

        let pruned = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(self.pool())
            .await?
            .rows_affected();
        if pruned > 0 {
            tracing::debug!("Pruned {} expired sessions", pruned);
        }

        let session = sqlx::query_as::<_, DbSession>(
            r#"
            WITH inserted AS (
                INSERT INTO sessions (token, user_id, expires_at)
                VALUES ($1, $2, $3)
                RETURNING token, user_id, expires_at
            )
            SELECT i.token, i.user_id, a.role, i.expires_at
            FROM inserted i
            JOIN auth a ON a.user_id = i.user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(self.pool())
        .await?;

        Ok(session)
    }

    async fn find_session(&self, token: Uuid) -> Result<Option<DbSession>> {
        let session = sqlx::query_as::<_, DbSession>(
            r#"
            SELECT se.token, se.user_id, a.role, se.expires_at
            FROM sessions se
            JOIN auth a ON a.user_id = se.user_id
            WHERE se.token = $1 AND se.expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool())
        .await?;

        Ok(session)
    }

    async fn delete_session(&self, token: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
