use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use planner_core::{scope::Scope, update::FieldUpdates};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbScheduleSettings,
    query::{self, Parent, Table},
};

const SETTINGS: Table = Table {
    name: "schedule_settings",
    alias: "ss",
    columns: "ss.id, ss.schedule_id, ss.school_hour, ss.school_year_start, ss.school_year_end, ss.school_days",
    joins: "JOIN schedules s ON s.id = ss.schedule_id",
    parent: Some(Parent {
        from: "schedules s",
        link: "s.id = ss.schedule_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait ScheduleSettingsRepository: Send + Sync {
    async fn get_settings_by_schedule(
        &self,
        schedule_id: Uuid,
        scope: Scope,
    ) -> Result<Option<DbScheduleSettings>>;

    async fn get_settings(&self, id: Uuid, scope: Scope) -> Result<Option<DbScheduleSettings>>;

    async fn update_settings(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbScheduleSettings>>;

    /// Day offs of these settings that are not fully inside `start..=end`.
    async fn count_day_offs_outside(
        &self,
        settings_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64>;

    /// Lesson blocks of this schedule dated outside `start..=end`.
    async fn count_lesson_blocks_outside(
        &self,
        schedule_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64>;

    /// Lesson blocks of this schedule falling on a day `school_days` marks free.
    async fn count_lesson_blocks_off_school_days(
        &self,
        schedule_id: Uuid,
        school_days: &str,
    ) -> Result<i64>;
}

#[async_trait]
impl ScheduleSettingsRepository for PgStore {
    async fn get_settings_by_schedule(
        &self,
        schedule_id: Uuid,
        scope: Scope,
    ) -> Result<Option<DbScheduleSettings>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM {} {} {} WHERE ss.schedule_id = ",
            SETTINGS.columns, SETTINGS.name, SETTINGS.alias, SETTINGS.joins
        ));
        builder.push_bind(schedule_id);
        query::push_scope(&mut builder, scope, SETTINGS.owner_column);

        let settings = builder
            .build_query_as::<DbScheduleSettings>()
            .fetch_optional(self.pool())
            .await?;

        Ok(settings)
    }

    async fn get_settings(&self, id: Uuid, scope: Scope) -> Result<Option<DbScheduleSettings>> {
        query::fetch_one(self.pool(), &SETTINGS, id, scope).await
    }

    async fn update_settings(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbScheduleSettings>> {
        tracing::debug!("Updating schedule settings: id={}, fields={}", id, updates.len());
        query::update_one(self.pool(), &SETTINGS, id, updates, scope).await
    }

    async fn count_day_offs_outside(
        &self,
        settings_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM day_offs
            WHERE schedule_settings_id = $1 AND (from_date < $2 OR to_date > $3)
            "#,
        )
        .bind(settings_id)
        .bind(start)
        .bind(end)
        .fetch_one(self.pool())
        .await?;

        Ok(count)
    }

    async fn count_lesson_blocks_outside(
        &self,
        schedule_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM lesson_blocks lb
            JOIN lessons l ON l.id = lb.lesson_id
            JOIN subgroups sg ON sg.id = l.subgroup_id
            JOIN groups g ON g.id = sg.group_id
            WHERE g.schedule_id = $1 AND (lb.lesson_date < $2 OR lb.lesson_date > $3)
            "#,
        )
        .bind(schedule_id)
        .bind(start)
        .bind(end)
        .fetch_one(self.pool())
        .await?;

        Ok(count)
    }

    async fn count_lesson_blocks_off_school_days(
        &self,
        schedule_id: Uuid,
        school_days: &str,
    ) -> Result<i64> {
        // ISODOW runs 1 (Monday) to 7, matching the flag positions
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM lesson_blocks lb
            JOIN lessons l ON l.id = lb.lesson_id
            JOIN subgroups sg ON sg.id = l.subgroup_id
            JOIN groups g ON g.id = sg.group_id
            WHERE g.schedule_id = $1
              AND SUBSTRING($2 FROM EXTRACT(ISODOW FROM lb.lesson_date)::int FOR 1) <> '1'
            "#,
        )
        .bind(schedule_id)
        .bind(school_days)
        .fetch_one(self.pool())
        .await?;

        Ok(count)
    }
}
