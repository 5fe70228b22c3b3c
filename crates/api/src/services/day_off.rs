use planner_core::{
    errors::{PlannerResult, Violation},
    models::day_off::{CreateDayOffRequest, DayOff, UpdateDayOffRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
    validation,
};
use planner_db::repositories::{DayOffRepository, ScheduleSettingsRepository};
use uuid::Uuid;

use super::{found, pagination};

pub const SORTABLE: &[&str] = &["id", "name", "from_date", "to_date"];

/// A missing `to` makes a single-day day off.
pub async fn create_day_off<S>(
    store: &S,
    actor: Actor,
    request: &CreateDayOffRequest,
) -> PlannerResult<DayOff>
where
    S: DayOffRepository + ScheduleSettingsRepository + ?Sized,
{
    let settings = store
        .get_settings_by_schedule(request.schedule_id, actor.scope())
        .await?
        .ok_or_else(|| Violation::not_found("Schedule", request.schedule_id))?;

    let from = request.from;
    let to = request.to.unwrap_or(from);
    validation::date_range(
        from,
        to,
        settings.school_year_start,
        settings.school_year_end,
    )?;

    let day_off = store
        .create_day_off(settings.id, &request.name, from, to)
        .await?;

    Ok(day_off.into())
}

pub async fn get_day_off<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<DayOff>
where
    S: DayOffRepository + ?Sized,
{
    let day_off = store.get_day_off(id, actor.scope()).await?;
    Ok(found(day_off, "DayOff")?.into())
}

pub async fn list_day_offs<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<DayOff>>
where
    S: DayOffRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let day_offs = store
        .list_day_offs(schedule_id, actor.scope(), &page)
        .await?;
    Ok(day_offs.map(DayOff::from))
}

/// The range is checked on its effective bounds, old values filling the gaps.
pub async fn update_day_off<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateDayOffRequest,
) -> PlannerResult<DayOff>
where
    S: DayOffRepository + ScheduleSettingsRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_day_off(id, scope).await?, "DayOff")?;

    if request.from.is_some() || request.to.is_some() {
        let settings = found(
            store.get_settings(current.schedule_settings_id, scope).await?,
            "ScheduleSettings",
        )?;
        validation::date_range(
            request.from.unwrap_or(current.from_date),
            request.to.unwrap_or(current.to_date),
            settings.school_year_start,
            settings.school_year_end,
        )?;
    }

    let updates = FieldUpdates::new()
        .set("name", request.name.clone())
        .set("from_date", request.from)
        .set("to_date", request.to);
    let day_off = store.update_day_off(id, &updates, scope).await?;

    Ok(found(day_off, "DayOff")?.into())
}

pub async fn delete_day_off<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: DayOffRepository + ?Sized,
{
    store.delete_day_off(id, actor.scope()).await?;
    Ok(())
}
