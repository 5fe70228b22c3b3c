use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::lesson::CreateLessonRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbLesson,
    query::{self, Parent, Table},
};

const LESSONS: Table = Table {
    name: "lessons",
    alias: "l",
    columns: "l.id, l.name, l.current_hours, l.amount_of_hours, l.lesson_type_id, \
              l.subgroup_id, g.schedule_id",
    joins: "JOIN subgroups sg ON sg.id = l.subgroup_id \
            JOIN groups g ON g.id = sg.group_id \
            JOIN schedules s ON s.id = g.schedule_id",
    parent: Some(Parent {
        from: "subgroups sg JOIN groups g ON g.id = sg.group_id \
               JOIN schedules s ON s.id = g.schedule_id",
        link: "sg.id = l.subgroup_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn get_lesson(&self, id: Uuid, scope: Scope) -> Result<Option<DbLesson>>;

    async fn list_lessons(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLesson>>;

    async fn find_lesson_by_name(&self, schedule_id: Uuid, name: &str) -> Result<Option<DbLesson>>;

    /// Inserts the lesson row with no hours taught yet.
    async fn create_lesson(&self, request: &CreateLessonRequest) -> Result<DbLesson>;

    async fn update_lesson(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLesson>>;

    async fn delete_lesson(&self, id: Uuid, scope: Scope) -> Result<bool>;

    async fn lesson_classroom_type_ids(&self, lesson_id: Uuid) -> Result<Vec<Uuid>>;

    /// Replaces the whole set of classroom types of a lesson.
    async fn set_lesson_classroom_types(&self, lesson_id: Uuid, type_ids: &[Uuid]) -> Result<()>;

    /// Periods covered by all blocks of a lesson; `None` when it has no blocks.
    async fn sum_lesson_block_hours(&self, lesson_id: Uuid) -> Result<Option<i64>>;

    async fn set_current_hours(&self, lesson_id: Uuid, hours: i32) -> Result<()>;
}

#[async_trait]
impl LessonRepository for PgStore {
    async fn get_lesson(&self, id: Uuid, scope: Scope) -> Result<Option<DbLesson>> {
        query::fetch_one(self.pool(), &LESSONS, id, scope).await
    }

    async fn list_lessons(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLesson>> {
        query::fetch_page(
            self.pool(),
            &LESSONS,
            Some(("g.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn find_lesson_by_name(&self, schedule_id: Uuid, name: &str) -> Result<Option<DbLesson>> {
        let lesson = sqlx::query_as::<_, DbLesson>(
            r#"
            SELECT l.id, l.name, l.current_hours, l.amount_of_hours, l.lesson_type_id,
                   l.subgroup_id, g.schedule_id
            FROM lessons l
            JOIN subgroups sg ON sg.id = l.subgroup_id
            JOIN groups g ON g.id = sg.group_id
            WHERE g.schedule_id = $1 AND l.name = $2
            "#,
        )
        .bind(schedule_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(lesson)
    }

    async fn create_lesson(&self, request: &CreateLessonRequest) -> Result<DbLesson> {
        let id = Uuid::new_v4();
        tracing::debug!("Creating lesson: id={}, name={}", id, request.name);

        let lesson = sqlx::query_as::<_, DbLesson>(
            r#"
            WITH inserted AS (
                INSERT INTO lessons
                    (id, name, current_hours, amount_of_hours, lesson_type_id, subgroup_id)
                VALUES ($1, $2, 0, $3, $4, $5)
                RETURNING id, name, current_hours, amount_of_hours, lesson_type_id, subgroup_id
            )
            SELECT i.id, i.name, i.current_hours, i.amount_of_hours, i.lesson_type_id,
                   i.subgroup_id, g.schedule_id
            FROM inserted i
            JOIN subgroups sg ON sg.id = i.subgroup_id
            JOIN groups g ON g.id = sg.group_id
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(request.amount_of_hours)
        .bind(request.lesson_type_id)
        .bind(request.subgroup_id)
        .fetch_one(self.pool())
        .await?;

        Ok(lesson)
    }

    async fn update_lesson(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLesson>> {
        query::update_one(self.pool(), &LESSONS, id, updates, scope).await
    }

    async fn delete_lesson(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &LESSONS, id, scope).await
    }

    async fn lesson_classroom_type_ids(&self, lesson_id: Uuid) -> Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT classroom_type_id
            FROM lesson_classroom_types
            WHERE lesson_id = $1
            ORDER BY classroom_type_id
            "#,
        )
        .bind(lesson_id)
        .fetch_all(self.pool())
        .await?;

        Ok(ids)
    }

    async fn set_lesson_classroom_types(&self, lesson_id: Uuid, type_ids: &[Uuid]) -> Result<()> {
        sqlx::query("DELETE FROM lesson_classroom_types WHERE lesson_id = $1")
            .bind(lesson_id)
            .execute(self.pool())
            .await?;

        sqlx::query(
            r#"
            INSERT INTO lesson_classroom_types (lesson_id, classroom_type_id)
            SELECT $1, type_id FROM UNNEST($2::uuid[]) AS type_id
            "#,
        )
        .bind(lesson_id)
        .bind(type_ids)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    async fn sum_lesson_block_hours(&self, lesson_id: Uuid) -> Result<Option<i64>> {
        let hours = sqlx::query_scalar::<_, Option<i64>>(
            r#"
            SELECT SUM(lesson_end - lesson_start + 1)
            FROM lesson_blocks
            WHERE lesson_id = $1
            "#,
        )
        .bind(lesson_id)
        .fetch_one(self.pool())
        .await?;

        Ok(hours)
    }

    async fn set_current_hours(&self, lesson_id: Uuid, hours: i32) -> Result<()> {
        tracing::debug!("Setting current hours: lesson_id={}, hours={}", lesson_id, hours);

        sqlx::query("UPDATE lessons SET current_hours = $2 WHERE id = $1")
            .bind(lesson_id)
            .bind(hours)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
