use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::schedule::{
        CreateScheduleRequest, DEFAULT_SCHOOL_DAYS, Schedule, UpdateScheduleRequest,
    },
    pagination::{Page, PageQuery},
    scope::Actor,
    settings::PolicySettings,
    update::FieldUpdates,
    validation,
};
use planner_db::repositories::ScheduleRepository;
use uuid::Uuid;

use super::{found, pagination, positive};

pub const SORTABLE: &[&str] = &["id", "name"];

fn check_name(name: &str, policy: &PolicySettings, errors: &mut ValidationErrors) {
    errors.extend(validation::allowed_characters(
        "Name",
        name,
        policy.schedule_name_characters.as_deref(),
    ));
}

/// Creates a schedule owned by the caller together with its settings.
pub async fn create_schedule<S>(
    store: &S,
    actor: Actor,
    policy: &PolicySettings,
    request: &CreateScheduleRequest,
) -> PlannerResult<Schedule>
where
    S: ScheduleRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    check_name(&request.name, policy, &mut errors);
    let taken = store.find_schedule_by_name(actor.id, &request.name).await?;
    errors.check(
        taken.is_some(),
        Violation::already_exists("Schedule", &request.name),
    );

    positive(request.school_hour, "SchoolHour", &mut errors);
    errors.check(
        request.school_year_start > request.school_year_end,
        Violation::DateOrder,
    );

    let school_days = request
        .school_days
        .as_deref()
        .unwrap_or(DEFAULT_SCHOOL_DAYS);
    errors.check(
        !validation::valid_school_days(school_days),
        Violation::bad_parameter("SchoolDays"),
    );
    errors.into_result()?;

    let schedule = store
        .create_schedule(actor.id, request, school_days)
        .await?;
    tracing::info!("Created schedule {} for user {}", schedule.id, actor.id);

    Ok(schedule.into())
}

pub async fn get_schedule<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<Schedule>
where
    S: ScheduleRepository + ?Sized,
{
    let schedule = store.get_schedule(id, actor.scope()).await?;
    Ok(found(schedule, "Schedule")?.into())
}

pub async fn list_schedules<S>(
    store: &S,
    actor: Actor,
    query: &PageQuery,
) -> PlannerResult<Page<Schedule>>
where
    S: ScheduleRepository + ?Sized,
{
    let page = pagination(query, SORTABLE)?;
    let schedules = store.list_schedules(actor.scope(), &page).await?;
    Ok(schedules.map(Schedule::from))
}

pub async fn update_schedule<S>(
    store: &S,
    actor: Actor,
    policy: &PolicySettings,
    id: Uuid,
    request: &UpdateScheduleRequest,
) -> PlannerResult<Schedule>
where
    S: ScheduleRepository + ?Sized,
{
    let scope = actor.scope();
    let current = found(store.get_schedule(id, scope).await?, "Schedule")?;

    if let Some(name) = &request.name {
        let mut errors = ValidationErrors::new();
        check_name(name, policy, &mut errors);
        let taken = store.find_schedule_by_name(current.user_id, name).await?;
        errors.check(
            taken.is_some_and(|other| other.id != id),
            Violation::already_exists("Schedule", name),
        );
        errors.into_result()?;
    }

    let updates = FieldUpdates::new().set("name", request.name.clone());
    let schedule = store.update_schedule(id, &updates, scope).await?;

    Ok(found(schedule, "Schedule")?.into())
}

pub async fn delete_schedule<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: ScheduleRepository + ?Sized,
{
    store.delete_schedule(id, actor.scope()).await?;
    Ok(())
}
