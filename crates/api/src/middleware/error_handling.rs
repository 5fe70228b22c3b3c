//! # Error Handling Middleware
//!
//! Maps [`PlannerError`] to HTTP status codes and a uniform JSON body:
//!
//! ```json
//! { "status": 400, "errors": [{ "message": "PerPage parameter is invalid" }] }
//! ```
//!
//! Validation failures carry every collected violation. Unexpected errors
//! are logged and answered with a generic message only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use planner_core::errors::{ErrorMessage, PlannerError};
use serde::Serialize;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps [`PlannerError`] and implements `IntoResponse`, so
/// handlers can use `?` on service results.
#[derive(Debug)]
pub struct AppError(pub PlannerError);

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub errors: Vec<ErrorMessage>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlannerError::Validation(_) => StatusCode::BAD_REQUEST,
            PlannerError::NotFound(_) => StatusCode::NOT_FOUND,
            PlannerError::Authentication(_) => StatusCode::UNAUTHORIZED,
            PlannerError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let errors = match &self.0 {
            PlannerError::Validation(violations) => violations.messages(),
            PlannerError::Unexpected(report) => {
                tracing::error!("Unexpected error: {:?}", report);
                vec![message(&self.0)]
            }
            _ => vec![message(&self.0)],
        };

        let body = Json(ErrorBody {
            status: status.as_u16(),
            errors,
        });

        (status, body).into_response()
    }
}

fn message(err: &PlannerError) -> ErrorMessage {
    ErrorMessage {
        message: err.to_string(),
    }
}

impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        AppError(err)
    }
}

/// Storage and infrastructure failures surface as unexpected errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PlannerError::Unexpected(err))
    }
}

pub fn map_error(err: PlannerError) -> Response {
    AppError(err).into_response()
}
