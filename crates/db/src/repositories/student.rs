use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::group::CreateStudentRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbStudent,
    query::{self, Parent, Table},
};

const STUDENTS: Table = Table {
    name: "students",
    alias: "st",
    columns: "st.id, st.album_number, st.group_id, g.schedule_id",
    joins: "JOIN groups g ON g.id = st.group_id JOIN schedules s ON s.id = g.schedule_id",
    parent: Some(Parent {
        from: "groups g JOIN schedules s ON s.id = g.schedule_id",
        link: "g.id = st.group_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn get_student(&self, id: Uuid, scope: Scope) -> Result<Option<DbStudent>>;

    async fn list_students(
        &self,
        group_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbStudent>>;

    /// Album numbers are unique across every group of a schedule.
    async fn find_student_by_album_number(
        &self,
        schedule_id: Uuid,
        album_number: &str,
    ) -> Result<Option<DbStudent>>;

    async fn create_student(&self, request: &CreateStudentRequest) -> Result<DbStudent>;

    async fn update_student(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbStudent>>;

    async fn delete_student(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl StudentRepository for PgStore {
    async fn get_student(&self, id: Uuid, scope: Scope) -> Result<Option<DbStudent>> {
        query::fetch_one(self.pool(), &STUDENTS, id, scope).await
    }

    async fn list_students(
        &self,
        group_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbStudent>> {
        query::fetch_page(
            self.pool(),
            &STUDENTS,
            Some(("st.group_id", group_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_student_by_album_number(
        &self,
        schedule_id: Uuid,
        album_number: &str,
    ) -> Result<Option<DbStudent>> {
        let student = sqlx::query_as::<_, DbStudent>(
            r#"
            SELECT st.id, st.album_number, st.group_id, g.schedule_id
            FROM students st
            JOIN groups g ON g.id = st.group_id
            WHERE g.schedule_id = $1 AND st.album_number = $2
            "#,
        )
        .bind(schedule_id)
        .bind(album_number)
        .fetch_optional(self.pool())
        .await?;

        Ok(student)
    }

    async fn create_student(&self, request: &CreateStudentRequest) -> Result<DbStudent> {
        let student = sqlx::query_as::<_, DbStudent>(
            r#"
            WITH inserted AS (
                INSERT INTO students (id, album_number, group_id)
                VALUES ($1, $2, $3)
                RETURNING id, album_number, group_id
            )
            SELECT i.id, i.album_number, i.group_id, g.schedule_id
            FROM inserted i
            JOIN groups g ON g.id = i.group_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.album_number)
        .bind(request.group_id)
        .fetch_one(self.pool())
        .await?;

        Ok(student)
    }

    async fn update_student(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbStudent>> {
        query::update_one(self.pool(), &STUDENTS, id, updates, scope).await
    }

    async fn delete_student(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &STUDENTS, id, scope).await
    }
}
