//! Model-layer abstractions for moviestore
//!
//! This module defines the `MovieModel` contract shared by the store-backed
//! and mock implementations, together with the closed set of errors the model
//! layer can report.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::models::Movie;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors surfaced by the model layer
///
/// Only `RecordNotFound` and `EditConflict` are classified. `Timeout` and
/// `Database` are opaque store failures passed through unchanged.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The requested row does not exist, or the id can never exist
    #[error("record not found")]
    RecordNotFound,

    /// The update's version precondition was not satisfied
    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    /// The operation did not finish before its deadline
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// Any other store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ModelError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ModelError::RecordNotFound)
    }

    /// Check if this is an edit conflict
    pub fn is_edit_conflict(&self) -> bool {
        matches!(self, ModelError::EditConflict)
    }
}

/// Convert model errors to application errors
impl From<ModelError> for crate::error::Error {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::RecordNotFound => crate::error::Error::NotFound,
            ModelError::EditConflict => crate::error::Error::EditConflict,
            _ => crate::error::Error::database(err.to_string()),
        }
    }
}

/// CRUD contract over movie records
///
/// Implementations hold no per-request state and are safe to share across
/// tasks. Dropping a returned future cancels the operation.
#[async_trait]
pub trait MovieModel: Send + Sync {
    /// Persist a new movie, writing the store-assigned `id`, `created_at`
    /// and `version` back into `movie`
    async fn insert(&self, movie: &mut Movie) -> ModelResult<()>;

    /// Fetch a movie by id
    async fn get(&self, id: i64) -> ModelResult<Movie>;

    /// Overwrite a movie if its stored version still equals `movie.version`,
    /// then advance `movie.version` to the new value
    async fn update(&self, movie: &mut Movie) -> ModelResult<()>;

    /// Remove a movie by id
    async fn delete(&self, id: i64) -> ModelResult<()>;
}
