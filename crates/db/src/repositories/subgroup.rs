use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::group::CreateSubgroupRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbSubgroup,
    query::{self, Parent, Table},
};

const SUBGROUPS: Table = Table {
    name: "subgroups",
    alias: "sg",
    columns: "sg.id, sg.name, sg.student_count, sg.group_id, g.schedule_id",
    joins: "JOIN groups g ON g.id = sg.group_id JOIN schedules s ON s.id = g.schedule_id",
    parent: Some(Parent {
        from: "groups g JOIN schedules s ON s.id = g.schedule_id",
        link: "g.id = sg.group_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait SubgroupRepository: Send + Sync {
    async fn get_subgroup(&self, id: Uuid, scope: Scope) -> Result<Option<DbSubgroup>>;

    async fn list_subgroups(
        &self,
        group_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbSubgroup>>;

    async fn find_subgroup_by_name(&self, group_id: Uuid, name: &str)
    -> Result<Option<DbSubgroup>>;

    async fn create_subgroup(&self, request: &CreateSubgroupRequest) -> Result<DbSubgroup>;

    async fn update_subgroup(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbSubgroup>>;

    async fn delete_subgroup(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl SubgroupRepository for PgStore {
    async fn get_subgroup(&self, id: Uuid, scope: Scope) -> Result<Option<DbSubgroup>> {
        query::fetch_one(self.pool(), &SUBGROUPS, id, scope).await
    }

    async fn list_subgroups(
        &self,
        group_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbSubgroup>> {
        query::fetch_page(
            self.pool(),
            &SUBGROUPS,
            Some(("sg.group_id", group_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_subgroup_by_name(
        &self,
        group_id: Uuid,
        name: &str,
    ) -> Result<Option<DbSubgroup>> {
        let subgroup = sqlx::query_as::<_, DbSubgroup>(
            r#"
            SELECT sg.id, sg.name, sg.student_count, sg.group_id, g.schedule_id
            FROM subgroups sg
            JOIN groups g ON g.id = sg.group_id
            WHERE sg.group_id = $1 AND sg.name = $2
            "#,
        )
        .bind(group_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(subgroup)
    }

    async fn create_subgroup(&self, request: &CreateSubgroupRequest) -> Result<DbSubgroup> {
        let subgroup = sqlx::query_as::<_, DbSubgroup>(
            r#"
            WITH inserted AS (
                INSERT INTO subgroups (id, name, student_count, group_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, student_count, group_id
            )
            SELECT i.id, i.name, i.student_count, i.group_id, g.schedule_id
            FROM inserted i
            JOIN groups g ON g.id = i.group_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.student_count)
        .bind(request.group_id)
        .fetch_one(self.pool())
        .await?;

        Ok(subgroup)
    }

    async fn update_subgroup(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbSubgroup>> {
        query::update_one(self.pool(), &SUBGROUPS, id, updates, scope).await
    }

    async fn delete_subgroup(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &SUBGROUPS, id, scope).await
    }
}
