use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::classroom::CreateClassroomRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbClassroom,
    query::{self, Parent, Table},
};

const CLASSROOMS: Table = Table {
    name: "classrooms",
    alias: "c",
    columns: "c.id, c.name, c.capacity, c.schedule_id",
    joins: "JOIN schedules s ON s.id = c.schedule_id",
    parent: Some(Parent {
        from: "schedules s",
        link: "s.id = c.schedule_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait ClassroomRepository: Send + Sync {
    async fn get_classroom(&self, id: Uuid, scope: Scope) -> Result<Option<DbClassroom>>;

    async fn list_classrooms(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbClassroom>>;

    async fn find_classroom_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
    ) -> Result<Option<DbClassroom>>;

    /// Inserts the classroom row only; its types are set separately.
    async fn create_classroom(&self, request: &CreateClassroomRequest) -> Result<DbClassroom>;

    async fn update_classroom(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbClassroom>>;

    async fn delete_classroom(&self, id: Uuid, scope: Scope) -> Result<bool>;

    async fn classroom_type_ids(&self, classroom_id: Uuid) -> Result<Vec<Uuid>>;

    /// Replaces the whole set of types of a classroom.
    async fn set_classroom_types(&self, classroom_id: Uuid, type_ids: &[Uuid]) -> Result<()>;
}

#[async_trait]
impl ClassroomRepository for PgStore {
    async fn get_classroom(&self, id: Uuid, scope: Scope) -> Result<Option<DbClassroom>> {
        query::fetch_one(self.pool(), &CLASSROOMS, id, scope).await
    }

    async fn list_classrooms(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbClassroom>> {
        query::fetch_page(
            self.pool(),
            &CLASSROOMS,
            Some(("c.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_classroom_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
    ) -> Result<Option<DbClassroom>> {
        let classroom = sqlx::query_as::<_, DbClassroom>(
            r#"
            SELECT id, name, capacity, schedule_id
            FROM classrooms
            WHERE schedule_id = $1 AND name = $2
            "#,
        )
        .bind(schedule_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(classroom)
    }

    async fn create_classroom(&self, request: &CreateClassroomRequest) -> Result<DbClassroom> {
        let classroom = sqlx::query_as::<_, DbClassroom>(
            r#"
            INSERT INTO classrooms (id, name, capacity, schedule_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, capacity, schedule_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.capacity)
        .bind(request.schedule_id)
        .fetch_one(self.pool())
        .await?;

        Ok(classroom)
    }

    async fn update_classroom(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbClassroom>> {
        query::update_one(self.pool(), &CLASSROOMS, id, updates, scope).await
    }

    async fn delete_classroom(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &CLASSROOMS, id, scope).await
    }

    async fn classroom_type_ids(&self, classroom_id: Uuid) -> Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT classroom_type_id
            FROM classroom_classroom_types
            WHERE classroom_id = $1
            ORDER BY classroom_type_id
            "#,
        )
        .bind(classroom_id)
        .fetch_all(self.pool())
        .await?;

        Ok(ids)
    }

    async fn set_classroom_types(&self, classroom_id: Uuid, type_ids: &[Uuid]) -> Result<()> {
        sqlx::query("DELETE FROM classroom_classroom_types WHERE classroom_id = $1")
            .bind(classroom_id)
            .execute(self.pool())
            .await?;

        sqlx::query(
            r#"
            INSERT INTO classroom_classroom_types (classroom_id, classroom_type_id)
            SELECT $1, type_id FROM UNNEST($2::uuid[]) AS type_id
            "#,
        )
        .bind(classroom_id)
        .bind(type_ids)
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
