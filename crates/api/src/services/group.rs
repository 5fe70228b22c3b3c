use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::group::{CreateGroupRequest, Group, UpdateGroupRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
};
use planner_db::repositories::{GroupRepository, ScheduleRepository};
use uuid::Uuid;

use super::{found, pagination, positive, referenced_schedule};

pub const SORTABLE: &[&str] = &["id", "name", "student_count"];

pub async fn create_group<S>(
    store: &S,
    actor: Actor,
    request: &CreateGroupRequest,
) -> PlannerResult<Group>
where
    S: GroupRepository + ScheduleRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    positive(request.student_count, "StudentCount", &mut errors);

    if referenced_schedule(store, request.schedule_id, actor.scope(), &mut errors)
        .await?
        .is_some()
    {
        let taken = store
            .find_group_by_name(request.schedule_id, &request.name)
            .await?;
        errors.check(
            taken.is_some(),
            Violation::already_exists("Group", &request.name),
        );
    }
    errors.into_result()?;

    let group = store.create_group(request).await?;
    Ok(group.into())
}

pub async fn get_group<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<Group>
where
    S: GroupRepository + ?Sized,
{
    let group = store.get_group(id, actor.scope()).await?;
    Ok(found(group, "Group")?.into())
}

pub async fn list_groups<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<Group>>
where
    S: GroupRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let groups = store.list_groups(schedule_id, actor.scope(), &page).await?;
    Ok(groups.map(Group::from))
}

/// A group cannot shrink below its largest subgroup.
pub async fn update_group<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateGroupRequest,
) -> PlannerResult<Group>
where
    S: GroupRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_group(id, scope).await?, "Group")?;
    let mut errors = ValidationErrors::new();

    if let Some(student_count) = request.student_count {
        positive(student_count, "StudentCount", &mut errors);

        let largest = store.max_subgroup_student_count(id).await?;
        errors.check(
            largest.is_some_and(|largest| largest > student_count),
            Violation::TooManyStudents,
        );
    }
    if let Some(name) = &request.name {
        let taken = store.find_group_by_name(current.schedule_id, name).await?;
        errors.check(
            taken.is_some_and(|other| other.id != id),
            Violation::already_exists("Group", name),
        );
    }

    errors.into_result()?;

    let updates = FieldUpdates::new()
        .set("name", request.name.clone())
        .set("student_count", request.student_count);
    let group = store.update_group(id, &updates, scope).await?;

    Ok(found(group, "Group")?.into())
}

pub async fn delete_group<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: GroupRepository + ?Sized,
{
    store.delete_group(id, actor.scope()).await?;
    Ok(())
}
