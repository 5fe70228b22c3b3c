use chrono::NaiveTime;
use planner_core::{
    errors::{PlannerResult, Violation},
    models::lesson_period::{CreateLessonPeriodRequest, LessonPeriod, UpdateLessonPeriodRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
    validation,
};
use planner_db::{
    models::DbScheduleSettings,
    repositories::{LessonPeriodRepository, ScheduleSettingsRepository},
};
use uuid::Uuid;

use super::{found, pagination};

pub const SORTABLE: &[&str] = &["id", "start_time"];

/// Rejects `start` when another period of the schedule begins less than
/// one school hour away from it.
async fn check_overlap<S>(
    store: &S,
    settings: &DbScheduleSettings,
    start: NaiveTime,
    ignore: Option<Uuid>,
) -> PlannerResult<()>
where
    S: LessonPeriodRepository + ?Sized,
{
    let periods = store.lesson_periods_of(settings.id).await?;
    let overlaps = periods
        .iter()
        .filter(|period| Some(period.id) != ignore)
        .any(|period| validation::periods_overlap(start, period.start_time, settings.school_hour));

    if overlaps {
        return Err(Violation::TimeOverlap("LessonPeriod".to_string()).into());
    }
    Ok(())
}

pub async fn create_lesson_period<S>(
    store: &S,
    actor: Actor,
    request: &CreateLessonPeriodRequest,
) -> PlannerResult<LessonPeriod>
where
    S: LessonPeriodRepository + ScheduleSettingsRepository + ?Sized,
{
    let settings = store
        .get_settings_by_schedule(request.schedule_id, actor.scope())
        .await?
        .ok_or_else(|| Violation::not_found("Schedule", request.schedule_id))?;

    check_overlap(store, &settings, request.start, None).await?;

    let period = store
        .create_lesson_period(settings.id, request.start)
        .await?;
    Ok(period.into())
}

pub async fn get_lesson_period<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<LessonPeriod>
where
    S: LessonPeriodRepository + ?Sized,
{
    let period = store.get_lesson_period(id, actor.scope()).await?;
    Ok(found(period, "LessonPeriod")?.into())
}

pub async fn list_lesson_periods<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<LessonPeriod>>
where
    S: LessonPeriodRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let periods = store
        .list_lesson_periods(schedule_id, actor.scope(), &page)
        .await?;
    Ok(periods.map(LessonPeriod::from))
}

pub async fn update_lesson_period<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateLessonPeriodRequest,
) -> PlannerResult<LessonPeriod>
where
    S: LessonPeriodRepository + ScheduleSettingsRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_lesson_period(id, scope).await?, "LessonPeriod")?;

    if let Some(start) = request.start {
        let settings = found(
            store.get_settings(current.schedule_settings_id, scope).await?,
            "ScheduleSettings",
        )?;
        check_overlap(store, &settings, start, Some(id)).await?;
    }

    let updates = FieldUpdates::new().set("start_time", request.start);
    let period = store.update_lesson_period(id, &updates, scope).await?;

    Ok(found(period, "LessonPeriod")?.into())
}

pub async fn delete_lesson_period<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: LessonPeriodRepository + ?Sized,
{
    store.delete_lesson_period(id, actor.scope()).await?;
    Ok(())
}
