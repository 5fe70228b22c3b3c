//! # Planner core
//!
//! Domain types and the validation rules shared by every entity:
//! character policies, pagination, authorization scoping and the
//! error taxonomy returned to clients.

pub mod character;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod scope;
pub mod settings;
pub mod update;
pub mod validation;
