use async_trait::async_trait;
use eyre::Result;
use planner_core::{
    models::schedule::CreateScheduleRequest,
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use super::SCHEDULE_OWNER;
use crate::{
    PgStore,
    models::DbSchedule,
    query::{self, Table},
};

const SCHEDULES: Table = Table {
    name: "schedules",
    alias: "s",
    columns: "s.id, s.name, s.user_id",
    joins: "",
    parent: None,
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn get_schedule(&self, id: Uuid, scope: Scope) -> Result<Option<DbSchedule>>;

    async fn list_schedules(&self, scope: Scope, page: &Pagination) -> Result<Page<DbSchedule>>;

    /// Names are unique per owner.
    async fn find_schedule_by_name(&self, user_id: Uuid, name: &str)
    -> Result<Option<DbSchedule>>;

    /// Inserts the schedule and its settings row.
    async fn create_schedule(
        &self,
        user_id: Uuid,
        request: &CreateScheduleRequest,
        school_days: &str,
    ) -> Result<DbSchedule>;

    async fn update_schedule(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbSchedule>>;

    async fn delete_schedule(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl ScheduleRepository for PgStore {
    async fn get_schedule(&self, id: Uuid, scope: Scope) -> Result<Option<DbSchedule>> {
        tracing::debug!("Getting schedule by id: {}", id);
        query::fetch_one(self.pool(), &SCHEDULES, id, scope).await
    }

    async fn list_schedules(&self, scope: Scope, page: &Pagination) -> Result<Page<DbSchedule>> {
        query::fetch_page(self.pool(), &SCHEDULES, None, scope, page).await
    }

    async fn find_schedule_by_name(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<Option<DbSchedule>> {
        let schedule = sqlx::query_as::<_, DbSchedule>(
            r#"
            SELECT id, name, user_id
            FROM schedules
            WHERE user_id = $1 AND name = $2
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(schedule)
    }

    async fn create_schedule(
        &self,
        user_id: Uuid,
        request: &CreateScheduleRequest,
        school_days: &str,
    ) -> Result<DbSchedule> {
        let id = Uuid::new_v4();
        tracing::debug!(
            "Creating schedule: id={}, name={}, user_id={}",
            id,
            request.name,
            user_id
        );

        // One statement, so a schedule never exists without its settings
        let schedule = sqlx::query_as::<_, DbSchedule>(
            r#"
            WITH schedule AS (
                INSERT INTO schedules (id, name, user_id)
                VALUES ($1, $2, $3)
                RETURNING id, name, user_id
            ), settings AS (
                INSERT INTO schedule_settings
                    (id, schedule_id, school_hour, school_year_start, school_year_end, school_days)
                SELECT $4, s.id, $5, $6, $7, $8 FROM schedule s
            )
            SELECT id, name, user_id FROM schedule
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(user_id)
        .bind(Uuid::new_v4())
        .bind(request.school_hour)
        .bind(request.school_year_start)
        .bind(request.school_year_end)
        .bind(school_days)
        .fetch_one(self.pool())
        .await?;

        Ok(schedule)
    }

    async fn update_schedule(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbSchedule>> {
        tracing::debug!("Updating schedule: id={}, fields={}", id, updates.len());
        query::update_one(self.pool(), &SCHEDULES, id, updates, scope).await
    }

    async fn delete_schedule(&self, id: Uuid, scope: Scope) -> Result<bool> {
        tracing::debug!("Deleting schedule: id={}", id);
        query::delete_one(self.pool(), &SCHEDULES, id, scope).await
    }
}
