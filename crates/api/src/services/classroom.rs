use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::classroom::{Classroom, CreateClassroomRequest, UpdateClassroomRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
};
use planner_db::repositories::{ClassroomRepository, ClassroomTypeRepository, ScheduleRepository};
use uuid::Uuid;

use super::{
    classroom_type::check_classroom_types, found, pagination, positive, referenced_schedule,
};

pub const SORTABLE: &[&str] = &["id", "name", "capacity"];

pub async fn create_classroom<S>(
    store: &S,
    actor: Actor,
    request: &CreateClassroomRequest,
) -> PlannerResult<Classroom>
where
    S: ClassroomRepository + ClassroomTypeRepository + ScheduleRepository + ?Sized,
{
    let scope = actor.scope();
    let mut errors = ValidationErrors::new();

    positive(request.capacity, "Capacity", &mut errors);

    let schedule = referenced_schedule(store, request.schedule_id, scope, &mut errors).await?;
    if schedule.is_some() {
        let taken = store
            .find_classroom_by_name(request.schedule_id, &request.name)
            .await?;
        errors.check(
            taken.is_some(),
            Violation::already_exists("Classroom", &request.name),
        );
    }

    check_classroom_types(
        store,
        &request.classroom_type_ids,
        schedule.map(|schedule| schedule.id),
        "Classroom",
        scope,
        &mut errors,
    )
    .await?;

    errors.into_result()?;

    let classroom = store.create_classroom(request).await?;
    if !request.classroom_type_ids.is_empty() {
        store
            .set_classroom_types(classroom.id, &request.classroom_type_ids)
            .await?;
    }

    Ok(classroom.into_classroom(request.classroom_type_ids.clone()))
}

pub async fn get_classroom<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<Classroom>
where
    S: ClassroomRepository + ?Sized,
{
    let classroom = found(store.get_classroom(id, actor.scope()).await?, "Classroom")?;
    let type_ids = store.classroom_type_ids(classroom.id).await?;
    Ok(classroom.into_classroom(type_ids))
}

pub async fn list_classrooms<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<Classroom>>
where
    S: ClassroomRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let classrooms = store
        .list_classrooms(schedule_id, actor.scope(), &page)
        .await?;

    let mut items = Vec::with_capacity(classrooms.items.len());
    for classroom in classrooms.items {
        let type_ids = store.classroom_type_ids(classroom.id).await?;
        items.push(classroom.into_classroom(type_ids));
    }

    Ok(Page {
        items,
        total_count: classrooms.total_count,
    })
}

pub async fn update_classroom<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateClassroomRequest,
) -> PlannerResult<Classroom>
where
    S: ClassroomRepository + ClassroomTypeRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_classroom(id, scope).await?, "Classroom")?;
    let mut errors = ValidationErrors::new();

    if let Some(capacity) = request.capacity {
        positive(capacity, "Capacity", &mut errors);
    }
    if let Some(name) = &request.name {
        let taken = store
            .find_classroom_by_name(current.schedule_id, name)
            .await?;
        errors.check(
            taken.is_some_and(|other| other.id != id),
            Violation::already_exists("Classroom", name),
        );
    }
    if let Some(type_ids) = &request.classroom_type_ids {
        check_classroom_types(
            store,
            type_ids,
            Some(current.schedule_id),
            "Classroom",
            scope,
            &mut errors,
        )
        .await?;
    }

    errors.into_result()?;

    let updates = FieldUpdates::new()
        .set("name", request.name.clone())
        .set("capacity", request.capacity);
    let classroom = found(
        store.update_classroom(id, &updates, scope).await?,
        "Classroom",
    )?;

    let type_ids = match &request.classroom_type_ids {
        Some(type_ids) => {
            store.set_classroom_types(id, type_ids).await?;
            type_ids.clone()
        }
        None => store.classroom_type_ids(id).await?,
    };

    Ok(classroom.into_classroom(type_ids))
}

pub async fn delete_classroom<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: ClassroomRepository + ?Sized,
{
    store.delete_classroom(id, actor.scope()).await?;
    Ok(())
}
