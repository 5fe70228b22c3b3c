use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::group::{CreateStudentRequest, Student, UpdateStudentRequest},
    pagination::{Page, PageQuery},
    scope::Actor,
    update::FieldUpdates,
};
use planner_db::repositories::{GroupRepository, StudentRepository};
use uuid::Uuid;

use super::{found, pagination};

pub const SORTABLE: &[&str] = &["id", "album_number"];

pub async fn create_student<S>(
    store: &S,
    actor: Actor,
    request: &CreateStudentRequest,
) -> PlannerResult<Student>
where
    S: StudentRepository + GroupRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    match store.get_group(request.group_id, actor.scope()).await? {
        None => errors.push(Violation::not_found("Group", request.group_id)),
        Some(group) => {
            let taken = store
                .find_student_by_album_number(group.schedule_id, &request.album_number)
                .await?;
            errors.check(
                taken.is_some(),
                Violation::already_exists("Student", &request.album_number),
            );
        }
    }
    errors.into_result()?;

    let student = store.create_student(request).await?;
    Ok(student.into())
}

pub async fn get_student<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<Student>
where
    S: StudentRepository + ?Sized,
{
    let student = store.get_student(id, actor.scope()).await?;
    Ok(found(student, "Student")?.into())
}

pub async fn list_students<S>(
    store: &S,
    actor: Actor,
    group_id: Uuid,
    query: &PageQuery,
) -> PlannerResult<Page<Student>>
where
    S: StudentRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let students = store
        .list_students(group_id, actor.scope(), &page)
        .await?;
    Ok(students.map(Student::from))
}

pub async fn update_student<S>(
    store: &S,
    actor: Actor,
    id: Uuid,
    request: &UpdateStudentRequest,
) -> PlannerResult<Student>
where
    S: StudentRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_student(id, scope).await?, "Student")?;

    if let Some(album_number) = &request.album_number {
        let taken = store
            .find_student_by_album_number(current.schedule_id, album_number)
            .await?;
        if taken.is_some_and(|other| other.id != id) {
            return Err(Violation::already_exists("Student", album_number).into());
        }
    }

    let updates = FieldUpdates::new().set("album_number", request.album_number.clone());
    let student = store.update_student(id, &updates, scope).await?;

    Ok(found(student, "Student")?.into())
}

pub async fn delete_student<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: StudentRepository + ?Sized,
{
    store.delete_student(id, actor.scope()).await?;
    Ok(())
}
