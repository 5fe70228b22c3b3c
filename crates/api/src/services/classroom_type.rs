use std::collections::HashSet;

use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::classroom::{ClassroomType, CreateClassroomTypeRequest, UpdateClassroomTypeRequest},
    pagination::{Page, PageQuery},
    scope::{Actor, Scope},
    update::FieldUpdates,
    validation,
};
use planner_db::repositories::{ClassroomTypeRepository, ScheduleRepository};
use uuid::Uuid;

use super::{found, pagination, referenced_schedule};

pub const SORTABLE: &[&str] = &["id", "name"];

/// Checks a list of classroom type ids attached to a classroom or lesson:
/// no repeats, every id visible, and (when `schedule_id` is known) every
/// type from that schedule.
pub(crate) async fn check_classroom_types<S>(
    store: &S,
    ids: &[Uuid],
    schedule_id: Option<Uuid>,
    owner_kind: &str,
    scope: Scope,
    errors: &mut ValidationErrors,
) -> PlannerResult<()>
where
    S: ClassroomTypeRepository + ?Sized,
{
    errors.extend(validation::duplicate_ids("ClassroomType", ids));

    let mut seen = HashSet::new();
    for id in ids.iter().filter(|id| seen.insert(**id)) {
        match store.get_classroom_type(*id, scope).await? {
            None => errors.push(Violation::not_found("ClassroomType", *id)),
            Some(classroom_type) => errors.check(
                schedule_id.is_some_and(|schedule_id| classroom_type.schedule_id != schedule_id),
                Violation::wrong_set("ClassroomType", owner_kind),
            ),
        }
    }

    Ok(())
}

pub async fn create_classroom_type<S>(
    store: &S,
    actor: Actor,
    request: &CreateClassroomTypeRequest,
) -> PlannerResult<ClassroomType>
where
    S: ClassroomTypeRepository + ScheduleRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    if referenced_schedule(store, request.schedule_id, actor.scope(), &mut errors)
        .await?
        .is_some()
    {
        let taken = store
            .find_classroom_type_by_name(request.schedule_id, &request.name)
            .await?;
        errors.check(
            taken.is_some(),
            Violation::already_exists("ClassroomType", &request.name),
        );
    }
    errors.into_result()?;

    let classroom_type = store.create_classroom_type(request).await?;
    Ok(classroom_type.into())
}

pub async fn get_classroom_type<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
) -> PlannerResult<ClassroomType>
where
    S: ClassroomTypeRepository + ?Sized,
{
    let classroom_type = store.get_classroom_type(id, actor.scope()).await?;
    Ok(found(classroom_type, "ClassroomType")?.into())
}

pub async fn list_classroom_types<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<ClassroomType>>
where
    S: ClassroomTypeRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let classroom_types = store
        .list_classroom_types(schedule_id, actor.scope(), &page)
        .await?;
    Ok(classroom_types.map(ClassroomType::from))
}

pub async fn update_classroom_type<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateClassroomTypeRequest,
) -> PlannerResult<ClassroomType>
where
    S: ClassroomTypeRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_classroom_type(id, scope).await?, "ClassroomType")?;

    if let Some(name) = &request.name {
        let taken = store
            .find_classroom_type_by_name(current.schedule_id, name)
            .await?;
        if taken.is_some_and(|other| other.id != id) {
            return Err(Violation::already_exists("ClassroomType", name).into());
        }
    }

    let updates = FieldUpdates::new().set("name", request.name.clone());
    let classroom_type = store.update_classroom_type(id, &updates, scope).await?;

    Ok(found(classroom_type, "ClassroomType")?.into())
}

pub async fn delete_classroom_type<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: ClassroomTypeRepository + ?Sized,
{
    store.delete_classroom_type(id, actor.scope()).await?;
    Ok(())
}
