use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::classroom::CreateClassroomTypeRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbClassroomType,
    query::{self, Parent, Table},
};

const CLASSROOM_TYPES: Table = Table {
    name: "classroom_types",
    alias: "ct",
    columns: "ct.id, ct.name, ct.schedule_id",
    joins: "JOIN schedules s ON s.id = ct.schedule_id",
    parent: Some(Parent {
        from: "schedules s",
        link: "s.id = ct.schedule_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait ClassroomTypeRepository: Send + Sync {
    async fn get_classroom_type(&self, id: Uuid, scope: Scope)
    -> Result<Option<DbClassroomType>>;

    async fn list_classroom_types(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbClassroomType>>;

    async fn find_classroom_type_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
    ) -> Result<Option<DbClassroomType>>;

    async fn create_classroom_type(
        &self,
        request: &CreateClassroomTypeRequest,
    ) -> Result<DbClassroomType>;

    async fn update_classroom_type(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbClassroomType>>;

    async fn delete_classroom_type(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl ClassroomTypeRepository for PgStore {
    async fn get_classroom_type(
        &self,
        id: Uuid,
        scope: Scope,
    ) -> Result<Option<DbClassroomType>> {
        query::fetch_one(self.pool(), &CLASSROOM_TYPES, id, scope).await
    }

    async fn list_classroom_types(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbClassroomType>> {
        query::fetch_page(
            self.pool(),
            &CLASSROOM_TYPES,
            Some(("ct.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_classroom_type_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
    ) -> Result<Option<DbClassroomType>> {
        let classroom_type = sqlx::query_as::<_, DbClassroomType>(
            r#"
            SELECT id, name, schedule_id
            FROM classroom_types
            WHERE schedule_id = $1 AND name = $2
            "#,
        )
        .bind(schedule_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(classroom_type)
    }

    async fn create_classroom_type(
        &self,
        request: &CreateClassroomTypeRequest,
    ) -> Result<DbClassroomType> {
        let classroom_type = sqlx::query_as::<_, DbClassroomType>(
            r#"
            INSERT INTO classroom_types (id, name, schedule_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, schedule_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.schedule_id)
        .fetch_one(self.pool())
        .await?;

        Ok(classroom_type)
    }

    async fn update_classroom_type(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbClassroomType>> {
        query::update_one(self.pool(), &CLASSROOM_TYPES, id, updates, scope).await
    }

    async fn delete_classroom_type(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &CLASSROOM_TYPES, id, scope).await
    }
}
