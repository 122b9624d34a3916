//! Fixed-behavior movie model for exercising callers without a store

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    db::repository::{ModelError, ModelResult, MovieModel},
    models::{Movie, Runtime},
};

/// Id of the only movie the mock knows about
pub const MOCK_MOVIE_ID: i64 = 1;

/// Deterministic stand-in for the store-backed model
///
/// `get` and `delete` only succeed for [`MOCK_MOVIE_ID`]. `insert` and
/// `update` always succeed and leave the movie untouched, so no id or
/// version is assigned.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockMovieModel;

impl MockMovieModel {
    /// Create a mock model
    pub fn new() -> Self {
        Self
    }

    /// The movie returned by `get(MOCK_MOVIE_ID)`
    ///
    /// Version is 1 so that version checks against the mock see a stored row.
    pub fn sample_movie() -> Movie {
        Movie {
            id: MOCK_MOVIE_ID,
            created_at: Utc::now(),
            title: "Test Mock".to_string(),
            year: 2023,
            runtime: Runtime(105),
            genres: vec![String::new()],
            version: 1,
        }
    }
}

#[async_trait]
impl MovieModel for MockMovieModel {
    async fn insert(&self, _movie: &mut Movie) -> ModelResult<()> {
        Ok(())
    }

    async fn get(&self, id: i64) -> ModelResult<Movie> {
        match id {
            MOCK_MOVIE_ID => Ok(Self::sample_movie()),
            _ => Err(ModelError::RecordNotFound),
        }
    }

    async fn update(&self, _movie: &mut Movie) -> ModelResult<()> {
        Ok(())
    }

    async fn delete(&self, id: i64) -> ModelResult<()> {
        match id {
            MOCK_MOVIE_ID => Ok(()),
            _ => Err(ModelError::RecordNotFound),
        }
    }
}
