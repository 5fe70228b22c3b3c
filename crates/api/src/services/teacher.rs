use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::teacher::{CreateTeacherRequest, Teacher, UpdateTeacherRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
};
use planner_db::repositories::{ScheduleRepository, TeacherRepository};
use uuid::Uuid;

use super::{found, pagination, referenced_schedule};

pub const SORTABLE: &[&str] = &["id", "name", "surname"];

pub async fn create_teacher<S>(
    store: &S,
    actor: Actor,
    request: &CreateTeacherRequest,
) -> PlannerResult<Teacher>
where
    S: TeacherRepository + ScheduleRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    if referenced_schedule(store, request.schedule_id, actor.scope(), &mut errors)
        .await?
        .is_some()
    {
        let taken = store
            .find_teacher_by_name(request.schedule_id, &request.name, &request.surname)
            .await?;
        errors.check(
            taken.is_some(),
            Violation::already_exists(
                "Teacher",
                format!("{} {}", request.name, request.surname),
            ),
        );
    }
    errors.into_result()?;

    let teacher = store.create_teacher(request).await?;
    Ok(teacher.into())
}

pub async fn get_teacher<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<Teacher>
where
    S: TeacherRepository + ?Sized,
{
    let teacher = store.get_teacher(id, actor.scope()).await?;
    Ok(found(teacher, "Teacher")?.into())
}

pub async fn list_teachers<S>(
    store: &S,
    actor: Actor,
    schedule_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<Teacher>>
where
    S: TeacherRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let teachers = store
        .list_teachers(schedule_id, actor.scope(), &page)
        .await?;
    Ok(teachers.map(Teacher::from))
}

pub async fn update_teacher<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateTeacherRequest,
) -> PlannerResult<Teacher>
where
    S: TeacherRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_teacher(id, scope).await?, "Teacher")?;

    if request.name.is_some() || request.surname.is_some() {
        let name = request.name.as_deref().unwrap_or(&current.name);
        let surname = request.surname.as_deref().unwrap_or(&current.surname);
        let taken = store
            .find_teacher_by_name(current.schedule_id, name, surname)
            .await?;
        if taken.is_some_and(|other| other.id != id) {
            return Err(
                Violation::already_exists("Teacher", format!("{} {}", name, surname)).into(),
            );
        }
    }

    let updates = FieldUpdates::new()
        .set("name", request.name.clone())
        .set("surname", request.surname.clone());
    let teacher = store.update_teacher(id, &updates, scope).await?;

    Ok(found(teacher, "Teacher")?.into())
}

pub async fn delete_teacher<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: TeacherRepository + ?Sized,
{
    store.delete_teacher(id, actor.scope()).await?;
    Ok(())
}
