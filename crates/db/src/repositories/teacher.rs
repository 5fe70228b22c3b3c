use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::teacher::CreateTeacherRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbTeacher,
    query::{self, Parent, Table},
};

const TEACHERS: Table = Table {
    name: "teachers",
    alias: "t",
    columns: "t.id, t.name, t.surname, t.schedule_id",
    joins: "JOIN schedules s ON s.id = t.schedule_id",
    parent: Some(Parent {
        from: "schedules s",
        link: "s.id = t.schedule_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn get_teacher(&self, id: Uuid, scope: Scope) -> Result<Option<DbTeacher>>;

    async fn list_teachers(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbTeacher>>;

    /// A teacher is identified by name and surname within a schedule.
    async fn find_teacher_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
        surname: &str,
    ) -> Result<Option<DbTeacher>>;

    async fn create_teacher(&self, request: &CreateTeacherRequest) -> Result<DbTeacher>;

    async fn update_teacher(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbTeacher>>;

    async fn delete_teacher(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl TeacherRepository for PgStore {
    async fn get_teacher(&self, id: Uuid, scope: Scope) -> Result<Option<DbTeacher>> {
        query::fetch_one(self.pool(), &TEACHERS, id, scope).await
    }

    async fn list_teachers(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbTeacher>> {
        query::fetch_page(
            self.pool(),
            &TEACHERS,
            Some(("t.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_teacher_by_name(
        &self,
        schedule_id: Uuid,
        name: &str,
        surname: &str,
    ) -> Result<Option<DbTeacher>> {
        let teacher = sqlx::query_as::<_, DbTeacher>(
            r#"
            SELECT id, name, surname, schedule_id
            FROM teachers
            WHERE schedule_id = $1 AND name = $2 AND surname = $3
            "#,
        )
        .bind(schedule_id)
        .bind(name)
        .bind(surname)
        .fetch_optional(self.pool())
        .await?;

        Ok(teacher)
    }

    async fn create_teacher(&self, request: &CreateTeacherRequest) -> Result<DbTeacher> {
        let teacher = sqlx::query_as::<_, DbTeacher>(
            r#"
            INSERT INTO teachers (id, name, surname, schedule_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, surname, schedule_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.surname)
        .bind(request.schedule_id)
        .fetch_one(self.pool())
        .await?;

        Ok(teacher)
    }

    async fn update_teacher(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbTeacher>> {
        query::update_one(self.pool(), &TEACHERS, id, updates, scope).await
    }

    async fn delete_teacher(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &TEACHERS, id, scope).await
    }
}
