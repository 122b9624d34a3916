//! Movie endpoints for moviestore
//!
//! Handlers decode and validate requests, then call the active movie model.
//! Model errors become HTTP responses through [`Error`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    api::{AppState, API_VERSION},
    error::{Error, Result},
    models::{validate_movie, Movie, MovieInput, MovieUpdate, Validator},
};

/// Header carrying the version a client expects to overwrite
pub const EXPECTED_VERSION_HEADER: &str = "x-expected-version";

/// Parse the `:id` path segment; anything that is not an integer is unknown
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| Error::NotFound)
}

fn decode<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| Error::bad_request(rejection.body_text()))
}

fn check(movie: &Movie) -> Result<()> {
    let mut v = Validator::new();
    validate_movie(&mut v, movie);
    v.into_result().map_err(Error::FailedValidation)
}

/// `POST /v1/movies`
pub async fn create_movie_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<MovieInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let mut movie = Movie::from(decode(payload)?);
    check(&movie)?;

    state.models.movies.insert(&mut movie).await?;

    let location = format!("/{}/movies/{}", API_VERSION, movie.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(json!({ "movie": movie })),
    ))
}

/// `GET /v1/movies/:id`
pub async fn show_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let movie = state.models.movies.get(parse_id(&id)?).await?;
    Ok(Json(json!({ "movie": movie })))
}

/// `PATCH /v1/movies/:id`
///
/// Absent fields keep their stored values. When the request carries an
/// `X-Expected-Version` header that does not match the stored version the
/// update is refused as a conflict before anything is written.
pub async fn update_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: std::result::Result<Json<MovieUpdate>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let mut movie = state.models.movies.get(parse_id(&id)?).await?;

    if let Some(expected) = headers.get(EXPECTED_VERSION_HEADER) {
        let expected = expected
            .to_str()
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| Error::bad_request("invalid X-Expected-Version header"))?;
        if expected != movie.version {
            return Err(Error::EditConflict);
        }
    }

    decode(payload)?.apply(&mut movie);
    check(&movie)?;

    state.models.movies.update(&mut movie).await?;

    Ok(Json(json!({ "movie": movie })))
}

/// `DELETE /v1/movies/:id`
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.models.movies.delete(parse_id(&id)?).await?;
    Ok(Json(json!({ "message": "movie successfully deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
        assert!(matches!(parse_id("abc"), Err(Error::NotFound)));
        assert!(matches!(parse_id("1.5"), Err(Error::NotFound)));
    }

    #[test]
    fn test_check_rejects_invalid_movie() {
        let movie = Movie::new("", 0, 0, Vec::new());
        match check(&movie) {
            Err(Error::FailedValidation(fields)) => assert_eq!(fields.len(), 4),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }
}
