use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A single user-correctable rule violation.
///
/// The `Display` output is the message sent back to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{0} parameter is invalid")]
    BadParameter(String),

    #[error("There is already a {kind} with the name {value}")]
    AlreadyExists { kind: String, value: String },

    #[error("{kind} with id {id} was not found")]
    ResourceNotFound { kind: String, id: Uuid },

    #[error("{field} can only contain the following: {classes}")]
    CantContain { field: String, classes: String },

    #[error("Password cannot be shorter than {0} characters")]
    ShortPassword(usize),

    #[error("Password cannot be longer than {0} characters")]
    LongPassword(usize),

    #[error("Password must contain at least one of the following: {0}")]
    PasswordMustContain(String),

    #[error("The end date cannot happen before the start date")]
    DateOrder,

    #[error("The end time cannot happen before the start time")]
    TimeOrder,

    #[error("Date must be in between {start} and {end}")]
    DateOutOfRange { start: String, end: String },

    #[error("There are {0} outside of provided range. Please change them first")]
    OutOfRange(String),

    #[error("There are {0} on days that are not school days. Please change them first")]
    OffSchoolDays(String),

    #[error("Cannot add multiple {kind} with the value {value}")]
    DuplicateData { kind: String, value: String },

    #[error("{item} must be in the same {set} as {other}")]
    WrongSet {
        item: String,
        set: String,
        other: String,
    },

    #[error("Student count in a subgroup cannot be greater than the student count in a group")]
    TooManyStudents,

    #[error("{0}s cannot overlap")]
    TimeOverlap(String),

    #[error("Lessons cannot occur on {0}")]
    BadWeekDay(String),
}

impl Violation {
    pub fn bad_parameter(name: &str) -> Self {
        Violation::BadParameter(name.to_string())
    }

    pub fn already_exists(kind: &str, value: impl fmt::Display) -> Self {
        Violation::AlreadyExists {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }

    pub fn not_found(kind: &str, id: Uuid) -> Self {
        Violation::ResourceNotFound {
            kind: kind.to_string(),
            id,
        }
    }

    pub fn wrong_set(item: &str, other: &str) -> Self {
        Violation::WrongSet {
            item: item.to_string(),
            set: "Schedule".to_string(),
            other: other.to_string(),
        }
    }
}

/// Message body element of an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// A batch of violations collected before any write happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Records `violation` when `failed` holds.
    pub fn check(&mut self, failed: bool, violation: Violation) {
        if failed {
            self.0.push(violation);
        }
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.0.extend(violations);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn messages(&self) -> Vec<ErrorMessage> {
        self.0
            .iter()
            .map(|v| ErrorMessage {
                message: v.to_string(),
            })
            .collect()
    }

    /// Turns a non-empty batch into an error.
    pub fn into_result(self) -> PlannerResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(PlannerError::Validation(self))
        }
    }
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Covers both missing rows and rows outside the caller's scope.
    #[error("{0} was not found")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("An unexpected error occurred")]
    Unexpected(#[from] eyre::Report),
}

impl PlannerError {
    pub fn not_found(kind: &str) -> Self {
        PlannerError::NotFound(kind.to_string())
    }
}

impl From<Violation> for PlannerError {
    fn from(violation: Violation) -> Self {
        PlannerError::Validation(violation.into())
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
