use async_trait::async_trait;
use chrono::NaiveTime;
use eyre::Result;
use planner_core::{
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbLessonPeriod,
    query::{self, Parent, Table},
};

const LESSON_PERIODS: Table = Table {
    name: "lesson_periods",
    alias: "lp",
    columns: "lp.id, lp.start_time, lp.schedule_settings_id",
    joins: "JOIN schedule_settings ss ON ss.id = lp.schedule_settings_id \
            JOIN schedules s ON s.id = ss.schedule_id",
    parent: Some(Parent {
        from: "schedule_settings ss JOIN schedules s ON s.id = ss.schedule_id",
        link: "ss.id = lp.schedule_settings_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait LessonPeriodRepository: Send + Sync {
    async fn get_lesson_period(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonPeriod>>;

    async fn list_lesson_periods(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLessonPeriod>>;

    /// Every period of one settings row, ordered by start time.
    async fn lesson_periods_of(&self, settings_id: Uuid) -> Result<Vec<DbLessonPeriod>>;

    async fn count_lesson_periods(&self, settings_id: Uuid) -> Result<i64>;

    async fn create_lesson_period(
        &self,
        settings_id: Uuid,
        start: NaiveTime,
    ) -> Result<DbLessonPeriod>;

    async fn update_lesson_period(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLessonPeriod>>;

    async fn delete_lesson_period(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl LessonPeriodRepository for PgStore {
    async fn get_lesson_period(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonPeriod>> {
        query::fetch_one(self.pool(), &LESSON_PERIODS, id, scope).await
    }

    async fn list_lesson_periods(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbLessonPeriod>> {
        query::fetch_page(
            self.pool(),
            &LESSON_PERIODS,
            Some(("ss.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn lesson_periods_of(&self, settings_id: Uuid) -> Result<Vec<DbLessonPeriod>> {
        let periods = sqlx::query_as::<_, DbLessonPeriod>(
            r#"
            SELECT id, start_time, schedule_settings_id
            FROM lesson_periods
            WHERE schedule_settings_id = $1
            ORDER BY start_time ASC
            "#,
        )
        .bind(settings_id)
        .fetch_all(self.pool())
        .await?;

        Ok(periods)
    }

    async fn count_lesson_periods(&self, settings_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM lesson_periods WHERE schedule_settings_id = $1",
        )
        .bind(settings_id)
        .fetch_one(self.pool())
        .await?;

        Ok(count)
    }

    async fn create_lesson_period(
        &self,
        settings_id: Uuid,
        start: NaiveTime,
    ) -> Result<DbLessonPeriod> {
        let id = Uuid::new_v4();
        tracing::debug!("Creating lesson period: id={}, start={}", id, start);

        let period = sqlx::query_as::<_, DbLessonPeriod>(
            r#"
            INSERT INTO lesson_periods (id, start_time, schedule_settings_id)
            VALUES ($1, $2, $3)
            RETURNING id, start_time, schedule_settings_id
            "#,
        )
        .bind(id)
        .bind(start)
        .bind(settings_id)
        .fetch_one(self.pool())
        .await?;

        Ok(period)
    }

    async fn update_lesson_period(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbLessonPeriod>> {
        query::update_one(self.pool(), &LESSON_PERIODS, id, updates, scope).await
    }

    async fn delete_lesson_period(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &LESSON_PERIODS, id, scope).await
    }
}
