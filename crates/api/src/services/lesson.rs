use planner_core::{
    errors::{PlannerError, PlannerResult, ValidationErrors, Violation},
    models::lesson::{CreateLessonRequest, Lesson, UpdateLessonRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
};
use planner_db::repositories::{
    ClassroomTypeRepository, LessonRepository, LessonTypeRepository, SubgroupRepository,
};
use uuid::Uuid;

use super::{classroom_type::check_classroom_types, found, pagination};

pub const SORTABLE: &[&str] = &["id", "name", "current_hours", "amount_of_hours"];

/// Recounts the periods covered by every block of a lesson and stores the total.
///
/// A lesson without blocks has taught zero hours. The total is stored even
/// when it exceeds `amount_of_hours`.
pub async fn recompute_current_hours<S>(store: &S, lesson_id: Uuid) -> PlannerResult<i32>
where
    S: LessonRepository + ?Sized,
{
    let total = store.sum_lesson_block_hours(lesson_id).await?.unwrap_or(0);
    let hours = i32::try_from(total).map_err(|_| {
        PlannerError::Unexpected(eyre::eyre!(
            "lesson {} covers {} hours, which does not fit a column",
            lesson_id,
            total
        ))
    })?;

    store.set_current_hours(lesson_id, hours).await?;
    tracing::debug!("Lesson {} now has {} hours", lesson_id, hours);

    Ok(hours)
}

pub async fn create_lesson<S>(
    store: &S,
    actor: Actor,
    request: &CreateLessonRequest,
) -> PlannerResult<Lesson>
where
    S: LessonRepository
        + LessonTypeRepository
        + SubgroupRepository
        + ClassroomTypeRepository
        + ?Sized,
{
    if request.amount_of_hours < 1 {
        return Err(Violation::bad_parameter("AmountOfHours").into());
    }

    let scope = actor.scope();
    let mut errors = ValidationErrors::new();

    let lesson_type = store.get_lesson_type(request.lesson_type_id, scope).await?;
    if lesson_type.is_none() {
        errors.push(Violation::not_found("LessonType", request.lesson_type_id));
    }
    let subgroup = store.get_subgroup(request.subgroup_id, scope).await?;
    if subgroup.is_none() {
        errors.push(Violation::not_found("Subgroup", request.subgroup_id));
    }

    if let (Some(lesson_type), Some(subgroup)) = (&lesson_type, &subgroup) {
        errors.check(
            lesson_type.schedule_id != subgroup.schedule_id,
            Violation::wrong_set("Subgroup", "LessonType"),
        );
    }

    let schedule_id = subgroup.as_ref().map(|subgroup| subgroup.schedule_id);
    check_classroom_types(
        store,
        &request.classroom_type_ids,
        schedule_id,
        "Lesson",
        scope,
        &mut errors,
    )
    .await?;

    if let Some(schedule_id) = schedule_id {
        let taken = store.find_lesson_by_name(schedule_id, &request.name).await?;
        errors.check(
            taken.is_some(),
            Violation::already_exists("Lesson", &request.name),
        );
    }

    errors.into_result()?;

    let lesson = store.create_lesson(request).await?;
    if !request.classroom_type_ids.is_empty() {
        store
            .set_lesson_classroom_types(lesson.id, &request.classroom_type_ids)
            .await?;
    }

    Ok(lesson.into_lesson(request.classroom_type_ids.clone()))
}

pub async fn get_lesson<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<Lesson>
where
    S: LessonRepository + ?Sized,
{
    let lesson = found(store.get_lesson(id, actor.scope()).await?, "Lesson")?;
    let type_ids = store.lesson_classroom_type_ids(lesson.id).await?;
    Ok(lesson.into_lesson(type_ids))
}

pub async fn list_lessons<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<Lesson>>
where
    S: LessonRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let lessons = store.list_lessons(schedule_id, actor.scope(), &page).await?;

    let mut items = Vec::with_capacity(lessons.items.len());
    for lesson in lessons.items {
        let type_ids = store.lesson_classroom_type_ids(lesson.id).await?;
        items.push(lesson.into_lesson(type_ids));
    }

    Ok(Page {
        items,
        total_count: lessons.total_count,
    })
}

/// The subgroup of a lesson is fixed; everything it references must stay in
/// the lesson's schedule.
pub async fn update_lesson<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateLessonRequest,
) -> PlannerResult<Lesson>
where
    S: LessonRepository + LessonTypeRepository + ClassroomTypeRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_lesson(id, scope).await?, "Lesson")?;

    if request.amount_of_hours.is_some_and(|hours| hours < 1) {
        return Err(Violation::bad_parameter("AmountOfHours").into());
    }

    let mut errors = ValidationErrors::new();

    if let Some(lesson_type_id) = request.lesson_type_id {
        match store.get_lesson_type(lesson_type_id, scope).await? {
            None => errors.push(Violation::not_found("LessonType", lesson_type_id)),
            Some(lesson_type) => errors.check(
                lesson_type.schedule_id != current.schedule_id,
                Violation::wrong_set("LessonType", "Lesson"),
            ),
        }
    }
    if let Some(type_ids) = &request.classroom_type_ids {
        check_classroom_types(
            store,
            type_ids,
            Some(current.schedule_id),
            "Lesson",
            scope,
            &mut errors,
        )
        .await?;
    }
    if let Some(name) = &request.name {
        let taken = store.find_lesson_by_name(current.schedule_id, name).await?;
        errors.check(
            taken.is_some_and(|other| other.id != id),
            Violation::already_exists("Lesson", name),
        );
    }

    errors.into_result()?;

    let updates = FieldUpdates::new()
        .set("name", request.name.clone())
        .set("amount_of_hours", request.amount_of_hours)
        .set("lesson_type_id", request.lesson_type_id);
    let lesson = found(store.update_lesson(id, &updates, scope).await?, "Lesson")?;

    let type_ids = match &request.classroom_type_ids {
        Some(type_ids) => {
            store.set_lesson_classroom_types(id, type_ids).await?;
            type_ids.clone()
        }
        None => store.lesson_classroom_type_ids(id).await?,
    };

    Ok(lesson.into_lesson(type_ids))
}

pub async fn delete_lesson<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: LessonRepository + ?Sized,
{
    store.delete_lesson(id, actor.scope()).await?;
    Ok(())
}
