//! Route tables, merged into one router by [`crate::app`].

pub mod auth;
pub mod health;
pub mod resources;
pub mod schedule;
pub mod user;
