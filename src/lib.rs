//! moviestore library
//!
//! Record management for movies: field validation, a swappable model layer
//! with store-backed and mock implementations, and an HTTP surface over it.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use db::{MockMovieModel, ModelError, ModelResult, Models, MovieModel, PgMovieModel};
pub use models::{validate_movie, Movie, MovieInput, MovieUpdate, Runtime, Validator};

// Re-export API server functions
pub use api::server::{create_router, create_server, shutdown_signal};
