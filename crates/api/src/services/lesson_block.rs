use chrono::{Datelike, NaiveDate};
use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::lesson::{CreateLessonBlockRequest, LessonBlock, UpdateLessonBlockRequest},
    pagination::{Page, PageQuery},
    scope::{Actor, Scope},
    update::FieldUpdates,
    validation,
};
use planner_db::repositories::{
    ClassroomRepository, LessonPeriodRepository, LessonRepository, LessonBlockRepository,
    ScheduleSettingsRepository, TeacherRepository,
};
use uuid::Uuid;

use super::{found, lesson::recompute_current_hours, pagination, positive};

pub const SORTABLE: &[&str] = &["id", "lesson_date", "lesson_start", "lesson_end"];

/// Where a block sits: its day and the first and last lesson period it covers.
struct Placement {
    date: NaiveDate,
    start: i32,
    end: i32,
}

/// Checks a placement against the lesson's schedule: period bounds, school
/// year and school days.
async fn check_placement<S>(
    store: &S,
    placement: &Placement,
    schedule_id: Uuid,
    scope: Scope,
    errors: &mut ValidationErrors,
) -> PlannerResult<()>
where
    S: ScheduleSettingsRepository + LessonPeriodRepository + ?Sized,
{
    positive(placement.start, "LessonStart", errors);
    if placement.end < placement.start {
        errors.push(Violation::TimeOrder);
    }

    let settings = found(
        store.get_settings_by_schedule(schedule_id, scope).await?,
        "ScheduleSettings",
    )?;

    let periods = store.count_lesson_periods(settings.id).await?;
    errors.check(
        i64::from(placement.end) > periods,
        Violation::bad_parameter("LessonEnd"),
    );

    if let Err(violation) = validation::within_school_year(
        placement.date,
        settings.school_year_start,
        settings.school_year_end,
    ) {
        errors.push(violation);
    }
    if !validation::is_school_day(&settings.school_days, placement.date) {
        errors.push(Violation::BadWeekDay(
            validation::weekday_name(placement.date.weekday()).to_string(),
        ));
    }

    Ok(())
}

async fn check_classroom<S>(
    store: &S,
    classroom_id: Uuid,
    schedule_id: Option<Uuid>,
    scope: Scope,
    errors: &mut ValidationErrors,
) -> PlannerResult<()>
where
    S: ClassroomRepository + ?Sized,
{
    match store.get_classroom(classroom_id, scope).await? {
        None => errors.push(Violation::not_found("Classroom", classroom_id)),
        Some(classroom) => errors.check(
            schedule_id.is_some_and(|schedule_id| classroom.schedule_id != schedule_id),
            Violation::wrong_set("Classroom", "Lesson"),
        ),
    }
    Ok(())
}

async fn check_teacher<S>(
    store: &S,
    teacher_id: Uuid,
    schedule_id: Option<Uuid>,
    scope: Scope,
    errors: &mut ValidationErrors,
) -> PlannerResult<()>
where
    S: TeacherRepository + ?Sized,
{
    match store.get_teacher(teacher_id, scope).await? {
        None => errors.push(Violation::not_found("Teacher", teacher_id)),
        Some(teacher) => errors.check(
            schedule_id.is_some_and(|schedule_id| teacher.schedule_id != schedule_id),
            Violation::wrong_set("Teacher", "Lesson"),
        ),
    }
    Ok(())
}

pub async fn create_lesson_block<S>(
    store: &S,
    actor: Actor,
    request: &CreateLessonBlockRequest,
) -> PlannerResult<LessonBlock>
where
    S: LessonBlockRepository
        + LessonRepository
        + LessonPeriodRepository
        + ScheduleSettingsRepository
        + ClassroomRepository
        + TeacherRepository
        + ?Sized,
{
    let scope = actor.scope();
    let mut errors = ValidationErrors::new();

    let lesson = store.get_lesson(request.lesson_id, scope).await?;
    let schedule_id = lesson.as_ref().map(|lesson| lesson.schedule_id);

    match schedule_id {
        None => errors.push(Violation::not_found("Lesson", request.lesson_id)),
        Some(schedule_id) => {
            let placement = Placement {
                date: request.lesson_date,
                start: request.lesson_start,
                end: request.lesson_end,
            };
            check_placement(store, &placement, schedule_id, scope, &mut errors).await?;
        }
    }

    if let Some(classroom_id) = request.classroom_id {
        check_classroom(store, classroom_id, schedule_id, scope, &mut errors).await?;
    }
    if let Some(teacher_id) = request.teacher_id {
        check_teacher(store, teacher_id, schedule_id, scope, &mut errors).await?;
    }

    errors.into_result()?;

    let block = store.create_lesson_block(request).await?;
    recompute_current_hours(store, block.lesson_id).await?;

    Ok(block.into())
}

pub async fn get_lesson_block<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<LessonBlock>
where
    S: LessonBlockRepository + ?Sized,
{
    let block = store.get_lesson_block(id, actor.scope()).await?;
    Ok(found(block, "LessonBlock")?.into())
}

pub async fn list_lesson_blocks<S>(
    store: &S,
    actor: Actor,
    lesson_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<LessonBlock>>
where
    S: LessonBlockRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let blocks = store
        .list_lesson_blocks(lesson_id, actor.scope(), &page)
        .await?;
    Ok(blocks.map(LessonBlock::from))
}

/// The placement is checked on its effective values, old values filling the gaps.
pub async fn update_lesson_block<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateLessonBlockRequest,
) -> PlannerResult<LessonBlock>
where
    S: LessonBlockRepository
        + LessonRepository
        + LessonPeriodRepository
        + ScheduleSettingsRepository
        + ClassroomRepository
        + TeacherRepository
        + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_lesson_block(id, scope).await?, "LessonBlock")?;
    let mut errors = ValidationErrors::new();

    let moved = request.lesson_date.is_some()
        || request.lesson_start.is_some()
        || request.lesson_end.is_some();
    if moved {
        let placement = Placement {
            date: request.lesson_date.unwrap_or(current.lesson_date),
            start: request.lesson_start.unwrap_or(current.lesson_start),
            end: request.lesson_end.unwrap_or(current.lesson_end),
        };
        check_placement(store, &placement, current.schedule_id, scope, &mut errors).await?;
    }

    if let Some(Some(classroom_id)) = request.classroom_id {
        check_classroom(store, classroom_id, Some(current.schedule_id), scope, &mut errors)
            .await?;
    }
    if let Some(Some(teacher_id)) = request.teacher_id {
        check_teacher(store, teacher_id, Some(current.schedule_id), scope, &mut errors).await?;
    }

    errors.into_result()?;

    let updates = FieldUpdates::new()
        .set("lesson_date", request.lesson_date)
        .set("lesson_start", request.lesson_start)
        .set("lesson_end", request.lesson_end)
        .set_nullable_id("classroom_id", request.classroom_id)
        .set_nullable_id("teacher_id", request.teacher_id);
    let block = found(
        store.update_lesson_block(id, &updates, scope).await?,
        "LessonBlock",
    )?;

    recompute_current_hours(store, block.lesson_id).await?;

    Ok(block.into())
}

/// Deleting a block nobody can see is a no-op.
pub async fn delete_lesson_block<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: LessonBlockRepository + LessonRepository + ?Sized,
{
    let scope = actor.scope();
    let Some(block) = store.get_lesson_block(id, scope).await? else {
        return Ok(());
    };

    if store.delete_lesson_block(id, scope).await? {
        recompute_current_hours(store, block.lesson_id).await?;
    }
    Ok(())
}
