use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::group::{CreateSubgroupRequest, Subgroup, UpdateSubgroupRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
};
use planner_db::repositories::{GroupRepository, SubgroupRepository};
use uuid::Uuid;

use super::{found, pagination, positive};

pub const SORTABLE: &[&str] = &["id", "name", "student_count"];

pub async fn create_subgroup<S>(
    store: &S,
    actor: Actor,
    request: &CreateSubgroupRequest,
) -> PlannerResult<Subgroup>
where
    S: SubgroupRepository + GroupRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    positive(request.student_count, "StudentCount", &mut errors);

    match store.get_group(request.group_id, actor.scope()).await? {
        None => errors.push(Violation::not_found("Group", request.group_id)),
        Some(group) => {
            errors.check(
                request.student_count > group.student_count,
                Violation::TooManyStudents,
            );

            let taken = store
                .find_subgroup_by_name(group.id, &request.name)
                .await?;
            errors.check(
                taken.is_some(),
                Violation::already_exists("Subgroup", &request.name),
            );
        }
    }
    errors.into_result()?;

    let subgroup = store.create_subgroup(request).await?;
    Ok(subgroup.into())
}

pub async fn get_subgroup<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<Subgroup>
where
    S: SubgroupRepository + ?Sized,
{
    let subgroup = store.get_subgroup(id, actor.scope()).await?;
    Ok(found(subgroup, "Subgroup")?.into())
}

pub async fn list_subgroups<S>(
    store: &S,
    actor: Actor,
    group_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<Subgroup>>
where
    S: SubgroupRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let subgroups = store
        .list_subgroups(group_id, actor.scope(), &page)
        .await?;
    Ok(subgroups.map(Subgroup::from))
}

pub async fn update_subgroup<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateSubgroupRequest,
) -> PlannerResult<Subgroup>
where
    S: SubgroupRepository + GroupRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_subgroup(id, scope).await?, "Subgroup")?;
    let mut errors = ValidationErrors::new();

    if let Some(student_count) = request.student_count {
        positive(student_count, "StudentCount", &mut errors);

        let group = found(store.get_group(current.group_id, scope).await?, "Group")?;
        errors.check(
            student_count > group.student_count,
            Violation::TooManyStudents,
        );
    }
    if let Some(name) = &request.name {
        let taken = store
            .find_subgroup_by_name(current.group_id, name)
            .await?;
        errors.check(
            taken.is_some_and(|other| other.id != id),
            Violation::already_exists("Subgroup", name),
        );
    }

    errors.into_result()?;

    let updates = FieldUpdates::new()
        .set("name", request.name.clone())
        .set("student_count", request.student_count);
    let subgroup = store.update_subgroup(id, &updates, scope).await?;

    Ok(found(subgroup, "Subgroup")?.into())
}

pub async fn delete_subgroup<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: SubgroupRepository + ?Sized,
{
    store.delete_subgroup(id, actor.scope()).await?;
    Ok(())
}
