use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::schedule::{ScheduleSettings, UpdateScheduleSettingsRequest},
    scope::Actor,
    update::FieldUpdates,
    validation,
};
use planner_db::repositories::{LessonPeriodRepository, ScheduleSettingsRepository};
use uuid::Uuid;

use super::{found, positive};

pub async fn get_settings<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
) -> PlannerResult<ScheduleSettings>
where
    S: ScheduleSettingsRepository + ?Sized,
{
    let settings = store
        .get_settings_by_schedule(schedule_id, actor.scope())
        .await?;
    Ok(found(settings, "ScheduleSettings")?.into())
}

/// A narrowed school year must still contain every day off and lesson block.
/// A longer school hour must not make lesson periods overlap, and lesson
/// blocks must stay on school days.
pub async fn update_settings<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    request: &UpdateScheduleSettingsRequest,
) -> PlannerResult<ScheduleSettings>
where
    S: ScheduleSettingsRepository + LessonPeriodRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(
        store.get_settings_by_schedule(schedule_id, scope).await?,
        "ScheduleSettings",
    )?;

    let mut errors = ValidationErrors::new();

    if let Some(school_hour) = request.school_hour {
        positive(school_hour, "SchoolHour", &mut errors);

        if school_hour > current.school_hour {
            let starts = store
                .lesson_periods_of(current.id)
                .await?
                .into_iter()
                .map(|period| period.start_time)
                .collect::<Vec<_>>();
            errors.check(
                validation::any_overlap(&starts, school_hour),
                Violation::TimeOverlap("LessonPeriod".to_string()),
            );
        }
    }
    if let Some(school_days) = &request.school_days {
        if !validation::valid_school_days(school_days) {
            errors.push(Violation::bad_parameter("SchoolDays"));
        } else if *school_days != current.school_days {
            let blocks = store
                .count_lesson_blocks_off_school_days(current.schedule_id, school_days)
                .await?;
            errors.check(
                blocks > 0,
                Violation::OffSchoolDays("LessonBlocks".to_string()),
            );
        }
    }

    let start = request.school_year_start.unwrap_or(current.school_year_start);
    let end = request.school_year_end.unwrap_or(current.school_year_end);
    let range_changed =
        request.school_year_start.is_some() || request.school_year_end.is_some();

    if start > end {
        errors.push(Violation::DateOrder);
    } else if range_changed {
        let day_offs = store.count_day_offs_outside(current.id, start, end).await?;
        errors.check(day_offs > 0, Violation::OutOfRange("DayOffs".to_string()));

        let blocks = store
            .count_lesson_blocks_outside(current.schedule_id, start, end)
            .await?;
        errors.check(blocks > 0, Violation::OutOfRange("LessonBlocks".to_string()));
    }

    errors.into_result()?;

    let updates = FieldUpdates::new()
        .set("school_hour", request.school_hour)
        .set("school_year_start", request.school_year_start)
        .set("school_year_end", request.school_year_end)
        .set("school_days", request.school_days.clone());
    let settings = store.update_settings(current.id, &updates, scope).await?;

    Ok(found(settings, "ScheduleSettings")?.into())
}
