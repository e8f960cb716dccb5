//! Handlers for the `/api/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use movies_core::error::CoreError;
use movies_db::models::movie::Movie;

use crate::error::{AppError, AppResult};
use crate::extract::{MovieId, SearchQuery, ValidMovie};
use crate::state::AppState;

/// GET /api/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.list().await?;
    Ok(Json(movies))
}

/// GET /api/movies/search?q=
///
/// Matches `q` anywhere in the title or genre, ignoring case.
pub async fn search(
    State(state): State<AppState>,
    SearchQuery(q): SearchQuery,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.search(&q).await?;

    tracing::debug!(query = %q, count = movies.len(), "Searched movies");

    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> AppResult<Json<Movie>> {
    let movie = state
        .movies
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// POST /api/movies
pub async fn create(
    State(state): State<AppState>,
    ValidMovie(input): ValidMovie,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = state.movies.create(&input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movies/{id}
///
/// Replaces all mutable fields; an absent `imageUrl` clears the stored one.
pub async fn update(
    State(state): State<AppState>,
    MovieId(id): MovieId,
    ValidMovie(input): ValidMovie,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.update(id, &input).await?;

    tracing::info!(movie_id = movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete(State(state): State<AppState>, MovieId(id): MovieId) -> AppResult<StatusCode> {
    state.movies.delete(id).await?;

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
