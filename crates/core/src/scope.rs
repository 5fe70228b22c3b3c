//! # Authorization scoping
//!
//! Every request runs on behalf of an [`Actor`]. Admins see every row;
//! everyone else only sees rows whose owning schedule belongs to them.
//! The storage layer turns a [`Scope`] into a single predicate appended
//! to the query, so there is one SQL text per operation regardless of role.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Only the exact name `Admin` grants unrestricted access.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Admin" => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated caller of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    pub fn scope(&self) -> Scope {
        match self.role {
            Role::Admin => Scope::Unrestricted,
            Role::User => Scope::OwnedBy(self.id),
        }
    }
}

/// Row visibility for a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// No ownership filter
    Unrestricted,
    /// Only rows owned by this user id
    OwnedBy(Uuid),
}

impl Scope {
    pub fn owner(&self) -> Option<Uuid> {
        match self {
            Scope::Unrestricted => None,
            Scope::OwnedBy(id) => Some(*id),
        }
    }
}
