use async_trait::async_trait;
use chrono::NaiveDate;
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
    models::DbDayOff,
    query::{self, Parent, Table},
};

const DAY_OFFS: Table = Table {
    name: "day_offs",
    alias: "d",
    columns: "d.id, d.name, d.from_date, d.to_date, d.schedule_settings_id",
    joins: "JOIN schedule_settings ss ON ss.id = d.schedule_settings_id \
            JOIN schedules s ON s.id = ss.schedule_id",
    parent: Some(Parent {
        from: "schedule_settings ss JOIN schedules s ON s.id = ss.schedule_id",
        link: "ss.id = d.schedule_settings_id",
    }),
    owner_column: SCHEDULE_OWNER,
};

#[async_trait]
pub trait DayOffRepository: Send + Sync {
    async fn get_day_off(&self, id: Uuid, scope: Scope) -> Result<Option<DbDayOff>>;

    async fn list_day_offs(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbDayOff>>;

    async fn create_day_off(
        &self,
        settings_id: Uuid,
        name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<DbDayOff>;

    async fn update_day_off(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbDayOff>>;

    async fn delete_day_off(&self, id: Uuid, scope: Scope) -> Result<bool>;
}

#[async_trait]
impl DayOffRepository for PgStore {
    async fn get_day_off(&self, id: Uuid, scope: Scope) -> Result<Option<DbDayOff>> {
        query::fetch_one(self.pool(), &DAY_OFFS, id, scope).await
    }

    async fn list_day_offs(
        &self,
        schedule_id: Uuid,
        scope: Scope,
        page: &Pagination,
    ) -> Result<Page<DbDayOff>> {
        query::fetch_page(
            self.pool(),
            &DAY_OFFS,
            Some(("ss.schedule_id", schedule_id)),
            scope,
            page,
        )
        .await
    }

    async fn create_day_off(
        &self,
        settings_id: Uuid,
        name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<DbDayOff> {
        let id = Uuid::new_v4();
        tracing::debug!("Creating day off: id={}, from={}, to={}", id, from, to);

        let day_off = sqlx::query_as::<_, DbDayOff>(
            r#"
            INSERT INTO day_offs (id, name, from_date, to_date, schedule_settings_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, from_date, to_date, schedule_settings_id
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(from)
        .bind(to)
        .bind(settings_id)
        .fetch_one(self.pool())
        .await?;

        Ok(day_off)
    }

    async fn update_day_off(
        &self,
        id: Uuid,
        updates: &FieldUpdates,
        scope: Scope,
    ) -> Result<Option<DbDayOff>> {
        query::update_one(self.pool(), &DAY_OFFS, id, updates, scope).await
    }

    async fn delete_day_off(&self, id: Uuid, scope: Scope) -> Result<bool> {
        query::delete_one(self.pool(), &DAY_OFFS, id, scope).await
    }
}
