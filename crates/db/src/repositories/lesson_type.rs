use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::lesson_type::CreateLessonTypeRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbLessonType,
    query::{self, Parent, Table},
};

const LESSON_TYPES: Table = Table {
    name: "lesson_types",
    alias: "lt",
    columns: "lt.id, lt.name, lt.color, lt.schedule_id",
    joins: "JOIN schedules s ON s.id = lt.schedule_id",
    parent: Some(Parent {
        from: "schedules s",
        link: "s.id = lt.schedule_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait LessonTypeRepository: Send + Sync {
    async fn get_lesson_type(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonType>>;

    async fn list_lesson_types(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLessonType>>;

    async fn find_lesson_type_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
    ) -> Result<Option<DbLessonType>>;

    async fn create_lesson_type(&self, request: &CreateLessonTypeRequest) -> Result<DbLessonType>;

    async fn update_lesson_type(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLessonType>>;

    async fn delete_lesson_type(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl LessonTypeRepository for PgStore {
    async fn get_lesson_type(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonType>> {
        query::fetch_one(self.pool(), &LESSON_TYPES, id, scope).await
    }

    async fn list_lesson_types(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLessonType>> {
        query::fetch_page(
            self.pool(),
            &LESSON_TYPES,
            Some(("lt.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_lesson_type_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
    ) -> Result<Option<DbLessonType>> {
        let lesson_type = sqlx::query_as::<_, DbLessonType>(
            r#"
            SELECT id, name, color, schedule_id
            FROM lesson_types
            WHERE schedule_id = $1 AND name = $2
            "#,
        )
        .bind(schedule_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(lesson_type)
    }

    async fn create_lesson_type(&self, request: &CreateLessonTypeRequest) -> Result<DbLessonType> {
        let lesson_type = sqlx::query_as::<_, DbLessonType>(
            r#"
            INSERT INTO lesson_types (id, name, color, schedule_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, color, schedule_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.color)
        .bind(request.schedule_id)
        .fetch_one(self.pool())
        .await?;

        Ok(lesson_type)
    }

    async fn update_lesson_type(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLessonType>> {
        query::update_one(self.pool(), &LESSON_TYPES, id, updates, scope).await
    }

    async fn delete_lesson_type(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &LESSON_TYPES, id, scope).await
    }
}
