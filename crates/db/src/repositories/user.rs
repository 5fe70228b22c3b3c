use async_trait::async_trait;
use eyre::Result;
use planner_core::{models::user::CreateUserRequest, scope::Scope, update::FieldUpdates};
use uuid::Uuid;

use crate::{
    PgStore,
    models::DbUser,
    query::{self, Table},
};

/// A user owns themselves, so the owner column is the row id.
const USERS: Table = Table {
    name: "users",
    alias: "u",
    columns: "u.id, u.login, u.custom_url",
    joins: "",
    parent: None,
    owner_column: "u.id",
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: Uuid, scope: Scope) -> Result<Option<DbUser>>;

    /// Unscoped; `exclude` skips the user being updated.
    async fn find_user_by_login(&self, login: &str, exclude: Option<Uuid>)
    -> Result<Option<DbUser>>;

    async fn find_user_by_custom_url(
        &self,
        custom_url: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<DbUser>>;

    /// Inserts the user together with its credentials.
    async fn create_user(&self, request: &CreateUserRequest, password_hash: &str)
    -> Result<DbUser>;

    async fn update_user(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbUser>>;

    async fn delete_user(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl UserRepository for PgStore {
    async fn get_user(&self, id: Uuid, scope: Scope) -> Result<Option<DbUser>> {
        tracing::debug!("Getting user by id: {}", id);
        query::fetch_one(self.pool(), &USERS, id, scope).await
    }

    async fn find_user_by_login(
        &self,
        login: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, login, custom_url
            FROM users
            WHERE login = $1 AND ($2::uuid IS NULL OR id <> $2)
            "#,
        )
        .bind(login)
        .bind(exclude)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    async fn find_user_by_custom_url(
        &self,
        custom_url: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, login, custom_url
            FROM users
            WHERE custom_url = $1 AND ($2::uuid IS NULL OR id <> $2)
            "#,
        )
        .bind(custom_url)
        .bind(exclude)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    async fn create_user(
        &self,
        request: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<DbUser> {
        let id = Uuid::new_v4();
        tracing::debug!("Creating user: id={}, login={}", id, request.login);

        let user = sqlx::query_as::<_, DbUser>(
            r#"
            WITH new_user AS (
                INSERT INTO users (id, login, custom_url)
                VALUES ($1, $2, $3)
                RETURNING id, login, custom_url
            ), credentials AS (
                INSERT INTO auth (user_id, password_hash, role)
                SELECT u.id, $4, 'User' FROM new_user u
            )
            SELECT id, login, custom_url FROM new_user
            "#,
        )
        .bind(id)
        .bind(&request.login)
        .bind(&request.custom_url)
        .bind(password_hash)
        .fetch_one(self.pool())
        .await?;

        Ok(user)
    }

    async fn update_user(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbUser>> {
        tracing::debug!("Updating user: id={}, fields={}", id, updates.len());
        query::update_one(self.pool(), &USERS, id, updates, scope).await
    }

    async fn delete_user(&self, id: Uuid, scope: Scope) -> Result<bool> {
        tracing::debug!("Deleting user: id={}", id);
        query::delete_one(self.pool(), &USERS, id, scope).await
    }
}
