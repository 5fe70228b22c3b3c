use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::lesson_type::{CreateLessonTypeRequest, LessonType, UpdateLessonTypeRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
};
use planner_db::repositories::{LessonTypeRepository, ScheduleRepository};
use uuid::Uuid;

use super::{found, pagination, referenced_schedule};

pub const SORTABLE: &[&str] = &["id", "name", "color"];

pub async fn create_lesson_type<S>(
    store: &S,
    actor: Actor,
    request: &CreateLessonTypeRequest,
) -> PlannerResult<LessonType>
where
    S: LessonTypeRepository + ScheduleRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    if referenced_schedule(store, request.schedule_id, actor.scope(), &mut errors)
        .await?
        .is_some()
    {
        let taken = store
            .find_lesson_type_by_name(request.schedule_id, &request.name)
            .await?;
        errors.check(
            taken.is_some(),
            Violation::already_exists("LessonType", &request.name),
        );
    }
    errors.into_result()?;

    let lesson_type = store.create_lesson_type(request).await?;
    Ok(lesson_type.into())
}

pub async fn get_lesson_type<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<LessonType>
where
    S: LessonTypeRepository + ?Sized,
{
    let lesson_type = store.get_lesson_type(id, actor.scope()).await?;
    Ok(found(lesson_type, "LessonType")?.into())
}

pub async fn list_lesson_types<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<LessonType>>
where
    S: LessonTypeRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let lesson_types = store
        .list_lesson_types(schedule_id, actor.scope(), &page)
        .await?;
    Ok(lesson_types.map(LessonType::from))
}

pub async fn update_lesson_type<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateLessonTypeRequest,
) -> PlannerResult<LessonType>
where
    S: LessonTypeRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_lesson_type(id, scope).await?, "LessonType")?;

    if let Some(name) = &request.name {
        let taken = store
            .find_lesson_type_by_name(current.schedule_id, name)
            .await?;
        if taken.is_some_and(|other| other.id != id) {
            return Err(Violation::already_exists("LessonType", name).into());
        }
    }

    let updates = FieldUpdates::new()
        .set("name", request.name.clone())
        .set("color", request.color);
    let lesson_type = store.update_lesson_type(id, &updates, scope).await?;

    Ok(found(lesson_type, "LessonType")?.into())
}

pub async fn delete_lesson_type<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: LessonTypeRepository + ?Sized,
{
    store.delete_lesson_type(id, actor.scope()).await?;
    Ok(())
}
