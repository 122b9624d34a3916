//! Error handling module for moviestore
//!
//! This module defines the application-level error type, its mapping to HTTP
//! status codes and the JSON error body returned to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for moviestore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for moviestore
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store failures that are not classified by the model layer
    #[error("Database error: {0}")]
    Database(String),

    /// The requested resource does not exist
    #[error("the requested resource could not be found")]
    NotFound,

    /// An update lost an optimistic-concurrency race
    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    /// Field-level validation failures
    #[error("Validation failed for {} field(s)", .0.len())]
    FailedValidation(HashMap<String, String>),

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a database error
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Error::Database(msg.into())
    }

    /// Create a bad request error
    pub fn bad_request<S: Into<String>>(msg: S) -> Self {
        Error::BadRequest(msg.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::EditConflict => StatusCode::CONFLICT,
            Error::FailedValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Config(_)
            | Error::Database(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic error responses in Axum
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "the server encountered a problem and could not process your request".to_string()
        } else {
            self.to_string()
        };

        // Validation failures carry the field map as the whole error
        let error = match &self {
            Error::FailedValidation(fields) => json!(fields),
            _ => json!({
                "message": message,
                "type": error_type(&self),
                "status": status.as_u16(),
            }),
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(error = ?self, "Internal server error");
            },
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                tracing::warn!(error = ?self, "Client error");
            },
            _ => {
                tracing::info!(error = %self, "Request error");
            },
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Get a string representation of the error type
fn error_type(error: &Error) -> &'static str {
    match error {
        Error::Config(_) => "configuration_error",
        Error::Database(_) => "database_error",
        Error::NotFound => "not_found",
        Error::EditConflict => "edit_conflict",
        Error::FailedValidation(_) => "failed_validation",
        Error::BadRequest(_) => "bad_request",
        Error::Internal(_) => "internal_error",
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Convert from a failed schema bootstrap
impl From<sqlx::migrate::MigrateError> for Error {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Error::Database(format!("Failed to apply schema: {}", err))
    }
}
