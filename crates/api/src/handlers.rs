//! HTTP handlers, one module per resource.
//!
//! Handlers only translate between HTTP and the services: they pull the
//! actor, path, query and body out of the request, call the matching
//! service and pick the status code.

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
pub mod student;
pub mod subgroup;
pub mod teacher;
pub mod user;
