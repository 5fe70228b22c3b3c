use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::lesson::CreateLessonBlockRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbLessonBlock,
    query::{self, Parent, Table},
};

const LESSON_BLOCKS: Table = Table {
    name: "lesson_blocks",
    alias: "lb",
    columns: "lb.id, lb.lesson_date, lb.lesson_start, lb.lesson_end, lb.lesson_id, \
              lb.classroom_id, lb.teacher_id, g.schedule_id",
    joins: "JOIN lessons l ON l.id = lb.lesson_id \
            JOIN subgroups sg ON sg.id = l.subgroup_id \
            JOIN groups g ON g.id = sg.group_id \
            JOIN schedules s ON s.id = g.schedule_id",
    parent: Some(Parent {
        from: "lessons l JOIN subgroups sg ON sg.id = l.subgroup_id \
               JOIN groups g ON g.id = sg.group_id \
               JOIN schedules s ON s.id = g.schedule_id",
        link: "l.id = lb.lesson_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait LessonBlockRepository: Send + Sync {
    async fn get_lesson_block(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonBlock>>;

    async fn list_lesson_blocks(
        &self,
        lesson_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLessonBlock>>;

    async fn create_lesson_block(
        &self,
        request: &CreateLessonBlockRequest,
    ) -> Result<DbLessonBlock>;

    async fn update_lesson_block(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLessonBlock>>;

    async fn delete_lesson_block(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl LessonBlockRepository for PgStore {
    async fn get_lesson_block(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonBlock>> {
        query::fetch_one(self.pool(), &LESSON_BLOCKS, id, scope).await
    }

    async fn list_lesson_blocks(
        &self,
        lesson_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLessonBlock>> {
        query::fetch_page(
            self.pool(),
            &LESSON_BLOCKS,
            Some(("lb.lesson_id", lesson_id)),
            scope,
            page,
        )
        .await
    }

    async fn create_lesson_block(
        &self,
        request: &CreateLessonBlockRequest,
    ) -> Result<DbLessonBlock> {
        let id = Uuid::new_v4();
        tracing::debug!(
            "Creating lesson block: id={}, lesson_id={}, date={}",
            id,
            request.lesson_id,
            request.lesson_date
        );

        let block = sqlx::query_as::<_, DbLessonBlock>(
            r#"
            WITH inserted AS (
                INSERT INTO lesson_blocks
                    (id, lesson_date, lesson_start, lesson_end, lesson_id, classroom_id, teacher_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, lesson_date, lesson_start, lesson_end, lesson_id,
                          classroom_id, teacher_id
            )
            SELECT i.id, i.lesson_date, i.lesson_start, i.lesson_end, i.lesson_id,
                   i.classroom_id, i.teacher_id, g.schedule_id
            FROM inserted i
            JOIN lessons l ON l.id = i.lesson_id
            JOIN subgroups sg ON sg.id = l.subgroup_id
            JOIN groups g ON g.id = sg.group_id
            "#,
        )
        .bind(id)
        .bind(request.lesson_date)
        .bind(request.lesson_start)
        .bind(request.lesson_end)
        .bind(request.lesson_id)
        .bind(request.classroom_id)
        .bind(request.teacher_id)
        .fetch_one(self.pool())
        .await?;

        Ok(block)
    }

    async fn update_lesson_block(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLessonBlock>> {
        query::update_one(self.pool(), &LESSON_BLOCKS, id, updates, scope).await
    }

    async fn delete_lesson_block(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &LESSON_BLOCKS, id, scope).await
    }
}
