//! Database module for moviestore
//!
//! This module provides database connectivity, the movie model contract and
//! its two implementations, and the `Models` aggregator that callers depend on.

pub mod mock_repo;
pub mod movie_repo;
pub mod pool;
pub mod repository;

use std::sync::Arc;
use std::time::Duration;

// Re-export commonly used types
pub use mock_repo::MockMovieModel;
pub use movie_repo::PgMovieModel;
pub use pool::{create_pool, DbPool};
pub use repository::{ModelError, ModelResult, MovieModel};

use sqlx::migrate::Migrator;

/// Embedded schema for the `movies` table
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply the embedded schema
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// The model implementations in use by the process
///
/// Built once at startup and shared by cloning; callers never see which
/// implementation is behind `movies`.
#[derive(Clone)]
pub struct Models {
    /// Movie records
    pub movies: Arc<dyn MovieModel>,
}

impl Models {
    /// Wire the store-backed models against `pool`
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self {
        Self {
            movies: Arc::new(PgMovieModel::with_timeout(pool, query_timeout)),
        }
    }

    /// Wire the fixed-behavior mock models
    pub fn mock() -> Self {
        Self {
            movies: Arc::new(MockMovieModel::new()),
        }
    }
}

impl std::fmt::Debug for Models {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Models").finish_non_exhaustive()
    }
}
