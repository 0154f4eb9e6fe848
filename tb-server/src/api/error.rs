//! REST API error types
//!
//! Every error renders into the task-board response envelope
//! `{"success": false, "error": ...}` (or `"errors"` for field-level
//! validation failures) with the matching HTTP status code.

use tb_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One entry of the `errors` array on a validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Field-level validation failure (400)
    #[error("Validation failed: {errors:?} {location}")]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Duplicate singleton, duplicate membership, or
    /// delete-while-referenced (400, per the API contract)
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

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        ApiError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": message }),
            ),
            ApiError::Validation { errors, .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "errors": errors }),
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": message }),
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
///
/// A malformed identifier in a path is a malformed required field.
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            errors: vec![FieldError::new("id", format!("Invalid id format: {}", e))],
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Log the database error for debugging
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx { source, .. } => match source {
                sqlx::Error::RowNotFound => ApiError::NotFound {
                    message: "Resource not found".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            },
            DbError::Migration { message, .. } => ApiError::Internal {
                message: format!("Database migration error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Initialization { message, .. } => ApiError::Internal {
                message: format!("Database initialization error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
