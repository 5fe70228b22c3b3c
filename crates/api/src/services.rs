//! Request orchestration, one module per entity.
//!
//! A service validates its input, resolves every referenced row inside the
//! caller's scope and only then writes. Violations are collected into one
//! batch; a check that depends on a referenced row runs only once that row
//! has been found. Referenced rows that cannot be seen are reported as
//! violations, while the target row of a get/update yields `NotFound`.

pub mod auth;
pub mod classroom;
pub mod classroom_type;
pub mod day_off;
pub mod group;
pub mod lesson;
pub mod lesson_block;
pub mod lesson_period;
pub mod lesson_type;
pub mod schedule;
pub mod schedule_settings;
pub mod student;
pub mod subgroup;
pub mod teacher;
pub mod user;

use planner_core::{
    errors::{PlannerError, PlannerResult, ValidationErrors, Violation},
    pagination::{PageQuery, Pagination},
    scope::Scope,
};
use planner_db::{models::DbSchedule, repositories::ScheduleRepository};
use uuid::Uuid;

/// Validates list parameters against the sortable columns of an entity.
pub fn pagination(query: &PageQuery, sortable: &[&str]) -> PlannerResult<Pagination> {
    let page = Pagination::from(query);
    page.validate(sortable)?;
    Ok(page)
}

/// Resolves a referenced schedule, recording a violation when it is not visible.
pub(crate) async fn referenced_schedule<S>(
    store: &S,
    schedule_id: Uuid,
    scope: Scope,
    errors: &mut ValidationErrors,
) -> PlannerResult<Option<DbSchedule>>
where
    S: ScheduleRepository + ?Sized,
{
    let schedule = store.get_schedule(schedule_id, scope).await?;
    if schedule.is_none() {
        errors.push(Violation::not_found("Schedule", schedule_id));
    }
    Ok(schedule)
}

/// Unwraps the target row of a get or update.
pub(crate) fn found<T>(row: Option<T>, kind: &str) -> PlannerResult<T> {
    row.ok_or_else(|| PlannerError::not_found(kind))
}

pub(crate) fn positive(value: i32, parameter: &str, errors: &mut ValidationErrors) {
    errors.check(value < 1, Violation::bad_parameter(parameter));
}
