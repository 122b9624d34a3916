//! Movie data model for moviestore
//!
//! This module defines the persisted `Movie` entity, the runtime newtype with
//! its `"<n> mins"` JSON form, the request payloads that produce movies, and
//! the validation rules every movie must pass before it reaches the store.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::validation::{unique, Validator};

/// Maximum title length in bytes
pub const MAX_TITLE_BYTES: usize = 500;

/// Year of the earliest known motion picture
pub const MIN_YEAR: i32 = 1888;

/// Maximum number of genres per movie
pub const MAX_GENRES: usize = 5;

/// Error returned when a runtime string is not of the form `"<n> mins"`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid runtime format")]
pub struct InvalidRuntimeFormat;

/// Movie runtime in minutes
///
/// Encoded in JSON as `"<n> mins"` and stored as a plain integer column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct Runtime(pub i32);

impl Runtime {
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for Runtime {
    fn from(minutes: i32) -> Self {
        Runtime(minutes)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl FromStr for Runtime {
    type Err = InvalidRuntimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(' ').collect();
        if parts.len() != 2 || parts[1] != "mins" {
            return Err(InvalidRuntimeFormat);
        }

        parts[0]
            .parse::<i32>()
            .map(Runtime)
            .map_err(|_| InvalidRuntimeFormat)
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A movie record
///
/// `id`, `created_at` and `version` are assigned by the store. `version`
/// starts at 1 and is the optimistic-concurrency token for updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Movie {
    /// Store-assigned identifier
    pub id: i64,

    /// Insertion time, never exposed to clients
    #[serde(skip)]
    pub created_at: DateTime<Utc>,

    /// Movie title
    pub title: String,

    /// Release year
    #[serde(skip_serializing_if = "is_zero_year")]
    pub year: i32,

    /// Runtime in minutes
    #[serde(skip_serializing_if = "Runtime::is_zero")]
    pub runtime: Runtime,

    /// Genres, at most five and all distinct
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,

    /// Concurrency token, incremented on every update
    pub version: i32,
}

fn is_zero_year(year: &i32) -> bool {
    *year == 0
}

impl Movie {
    /// Create an unsaved movie
    pub fn new(
        title: impl Into<String>,
        year: i32,
        runtime: impl Into<Runtime>,
        genres: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            runtime: runtime.into(),
            genres,
            ..Default::default()
        }
    }
}

/// Apply the movie field rules to `movie`, recording every failure in `v`
///
/// Callers must check [`Validator::valid`] afterwards and must not pass an
/// invalid movie to the model layer.
pub fn validate_movie(v: &mut Validator, movie: &Movie) {
    let current_year = Utc::now().year();

    v.check(!movie.title.is_empty(), "title", "must be provided");
    v.check(
        movie.title.len() <= MAX_TITLE_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(movie.year != 0, "year", "must be provided");
    v.check(movie.year >= MIN_YEAR, "year", "must not be earlier than 1888");
    v.check(movie.year <= current_year, "year", "must not be in the future");

    v.check(movie.runtime.0 != 0, "runtime", "must be provided");
    v.check(movie.runtime.0 > 0, "runtime", "must be a positive integer");

    // An empty list and a missing list are the same thing here
    v.check(!movie.genres.is_empty(), "genres", "must be provided");
    v.check(
        movie.genres.len() <= MAX_GENRES,
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(unique(&movie.genres), "genres", "must not contain duplicate values");
}

/// Request payload for creating a movie
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub runtime: Runtime,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl From<MovieInput> for Movie {
    fn from(input: MovieInput) -> Self {
        Movie::new(input.title, input.year, input.runtime, input.genres)
    }
}

/// Request payload for a partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub runtime: Option<Runtime>,
    pub genres: Option<Vec<String>>,
}

impl MovieUpdate {
    /// Overwrite the fields of `movie` that are present in this update
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(runtime) = self.runtime {
            movie.runtime = runtime;
        }
        if let Some(genres) = self.genres {
            movie.genres = genres;
        }
    }
}
