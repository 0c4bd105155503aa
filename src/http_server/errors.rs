//! HTTP API errors
//!
//! The request-handling layer is the only place where an internal error is
//! translated into a user-facing response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path identity segment is not an integer
    #[error("Invalid id_number: {0}")]
    InvalidIdentity(String),

    /// Creation payload is missing a mandatory field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Creation payload field has the wrong type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No employee with the requested identity
    #[error("No employee with id_number {0}")]
    NotFound(i64),

    /// An employee with this identity already exists
    #[error("Employee with id_number {0} already exists")]
    Conflict(i64),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Durable medium failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidIdentity(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateId(id) => ApiError::Conflict(id),
            other => ApiError::Storage(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidIdentity("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound(99).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict(1).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Storage("disk".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err = ApiError::from(RepositoryError::DuplicateId(7));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_response_body() {
        let err = ApiError::NotFound(42);
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 404);
        assert!(body.error.contains("42"));
    }
}
