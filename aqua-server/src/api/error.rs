//! REST API error envelope
//!
//! Every handler failure serializes as
//! `{ "error": { "code", "message", "field"? } }` with the status code
//! implied by the variant.

use aqua_core::ErrorLocation;
use aqua_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Outer wrapper: clients always receive `{ "error": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable code such as "NOT_FOUND" or "VALIDATION_ERROR"
    pub code: String,
    pub message: String,
    /// The offending field, populated only for field-level validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Handler errors, one variant per HTTP status the API produces
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Request rejected by validation (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Uniqueness conflict, currently only duplicate emails (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The full error with location goes to the log, not the client.
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert storage errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        match e {
            DbError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::DuplicateEmail { .. } => ApiError::Conflict {
                message: "Email already registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { source, .. } => match source {
                sqlx::Error::RowNotFound => ApiError::NotFound {
                    message: "Resource not found".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                // Clients get a generic message; the detail is in the log.
                _ => ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            },
            DbError::Initialization { message, .. } => ApiError::Internal {
                message: format!("Database initialization error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
