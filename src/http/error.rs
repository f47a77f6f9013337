//! Translation of failures into HTTP responses.

use crate::job::{domain::JobDomainError, ports::JobRepositoryError, services::JobTrackerError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by handlers.
///
/// The display text becomes the `detail` field of the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or violated a field constraint.
    #[error("{0}")]
    Validation(String),
    /// The addressed job does not exist.
    #[error("Job not found")]
    NotFound,
    /// The store failed. The cause is logged, never returned.
    #[error("internal server error")]
    Internal(#[source] JobRepositoryError),
}

impl ApiError {
    /// Returns the status code sent for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            tracing::error!(error = %cause, "job store request failed");
        }
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<JobTrackerError> for ApiError {
    fn from(err: JobTrackerError) -> Self {
        match err {
            JobTrackerError::NotFound(_) => Self::NotFound,
            JobTrackerError::Repository(cause) => Self::Internal(cause),
        }
    }
}

impl From<JobDomainError> for ApiError {
    fn from(err: JobDomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
