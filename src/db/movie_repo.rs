//! PostgreSQL implementation of the movie model
//!
//! Every operation is a single statement against the `movies` table, bounded
//! by a per-operation deadline. Updates are one conditional write keyed on
//! `id` and `version`.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Row};
use std::future::Future;
use std::time::Duration;

use crate::{
    db::{
        repository::{ModelError, ModelResult, MovieModel},
        DbPool,
    },
    models::Movie,
};

/// Default deadline applied to each store operation
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Store-backed `MovieModel`
#[derive(Debug, Clone)]
pub struct PgMovieModel {
    pool: DbPool,
    query_timeout: Duration,
}

impl PgMovieModel {
    /// Create a model with the default per-operation deadline
    pub fn new(pool: DbPool) -> Self {
        Self::with_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    /// Create a model with a custom per-operation deadline
    pub fn with_timeout(pool: DbPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Per-operation deadline
    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Run `fut` under the deadline, reporting expiry as `operation`
    ///
    /// On expiry the future is dropped, which aborts the query and returns
    /// its connection to the pool.
    async fn with_deadline<T, F>(&self, operation: &'static str, fut: F) -> ModelResult<T>
    where
        F: Future<Output = ModelResult<T>> + Send,
    {
        tokio::time::timeout(self.query_timeout, fut)
            .await
            .map_err(|_| ModelError::Timeout {
                operation,
                after: self.query_timeout,
            })?
    }

    /// Convert a database row to Movie
    fn row_to_movie(row: &PgRow) -> ModelResult<Movie> {
        Ok(Movie {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            title: row.try_get("title")?,
            year: row.try_get("year")?,
            runtime: row.try_get("runtime")?,
            genres: row.try_get("genres")?,
            version: row.try_get("version")?,
        })
    }
}

#[async_trait]
impl MovieModel for PgMovieModel {
    async fn insert(&self, movie: &mut Movie) -> ModelResult<()> {
        let row = self
            .with_deadline("insert", async {
                let row = sqlx::query(
                    r#"
                    INSERT INTO movies (title, year, runtime, genres)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, created_at, version
                    "#,
                )
                .bind(&movie.title)
                .bind(movie.year)
                .bind(movie.runtime)
                .bind(&movie.genres)
                .fetch_one(&self.pool)
                .await?;

                Ok::<_, ModelError>(row)
            })
            .await?;

        movie.id = row.try_get("id")?;
        movie.created_at = row.try_get("created_at")?;
        movie.version = row.try_get("version")?;

        Ok(())
    }

    async fn get(&self, id: i64) -> ModelResult<Movie> {
        if id < 1 {
            return Err(ModelError::RecordNotFound);
        }

        self.with_deadline("get", async {
            let result = sqlx::query(
                r#"
                SELECT id, created_at, title, year, runtime, genres, version
                FROM movies
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(row) => Self::row_to_movie(&row),
                Err(sqlx::Error::RowNotFound) => Err(ModelError::RecordNotFound),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn update(&self, movie: &mut Movie) -> ModelResult<()> {
        let version = self
            .with_deadline("update", async {
                let result = sqlx::query_scalar::<_, i32>(
                    r#"
                    UPDATE movies
                    SET title = $1, year = $2, runtime = $3, genres = $4, version = version + 1
                    WHERE id = $5 AND version = $6
                    RETURNING version
                    "#,
                )
                .bind(&movie.title)
                .bind(movie.year)
                .bind(movie.runtime)
                .bind(&movie.genres)
                .bind(movie.id)
                .bind(movie.version)
                .fetch_one(&self.pool)
                .await;

                match result {
                    Ok(version) => Ok(version),
                    // Stale version or the row is gone
                    Err(sqlx::Error::RowNotFound) => Err(ModelError::EditConflict),
                    Err(e) => Err(e.into()),
                }
            })
            .await?;

        movie.version = version;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ModelResult<()> {
        if id < 1 {
            return Err(ModelError::RecordNotFound);
        }

        self.with_deadline("delete", async {
            let result = sqlx::query("DELETE FROM movies WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(ModelError::RecordNotFound);
            }

            Ok(())
        })
        .await
    }
}
