use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::group::CreateGroupRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbGroup,
    query::{self, Parent, Table},
};

const GROUPS: Table = Table {
    name: "groups",
    alias: "g",
    columns: "g.id, g.name, g.student_count, g.schedule_id",
    joins: "JOIN schedules s ON s.id = g.schedule_id",
    parent: Some(Parent {
        from: "schedules s",
        link: "s.id = g.schedule_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn get_group(&self, id: Uuid, scope: Scope) -> Result<Option<DbGroup>>;

    async fn list_groups(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbGroup>>;

    async fn find_group_by_name(&self, schedule_id: Uuid, name: &str) -> Result<Option<DbGroup>>;

    async fn create_group(&self, request: &CreateGroupRequest) -> Result<DbGroup>;

    async fn update_group(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbGroup>>;

    async fn delete_group(&self, id: Uuid, scope: Scope) -> Result<bool>;

    /// Largest student count among the group's subgroups, if it has any.
    async fn max_subgroup_student_count(&self, group_id: Uuid) -> Result<Option<i32>>;
}

#[async_trait]
impl GroupRepository for PgStore {
    async fn get_group(&self, id: Uuid, scope: Scope) -> Result<Option<DbGroup>> {
        query::fetch_one(self.pool(), &GROUPS, id, scope).await
    }

    async fn list_groups(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbGroup>> {
        query::fetch_page(
            self.pool(),
            &GROUPS,
            Some(("g.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_group_by_name(&self, schedule_id: Uuid, name: &str) -> Result<Option<DbGroup>> {
        let group = sqlx::query_as::<_, DbGroup>(
            r#"
            SELECT id, name, student_count, schedule_id
            FROM groups
            WHERE schedule_id = $1 AND name = $2
            "#,
        )
        .bind(schedule_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(group)
    }

    async fn create_group(&self, request: &CreateGroupRequest) -> Result<DbGroup> {
        let group = sqlx::query_as::<_, DbGroup>(
            r#"
            INSERT INTO groups (id, name, student_count, schedule_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, student_count, schedule_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.student_count)
        .bind(request.schedule_id)
        .fetch_one(self.pool())
        .await?;

        Ok(group)
    }

    async fn update_group(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbGroup>> {
        query::update_one(self.pool(), &GROUPS, id, updates, scope).await
    }

    async fn delete_group(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &GROUPS, id, scope).await
    }

    async fn max_subgroup_student_count(&self, group_id: Uuid) -> Result<Option<i32>> {
        let max = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(student_count) FROM subgroups WHERE group_id = $1",
        )
        .bind(group_id)
        .fetch_one(self.pool())
        .await?;

        Ok(max)
    }
}
