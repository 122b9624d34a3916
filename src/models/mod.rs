//! Data models for moviestore
//!
//! This module contains the movie entity, its request payloads and the
//! field-validation engine applied before anything is written to the store.

pub mod movie;
pub mod validation;

// Re-export commonly used types
pub use movie::{validate_movie, Movie, MovieInput, MovieUpdate, Runtime};
pub use validation::{unique, Validator};
