//! Request extractors that validate input before a handler runs.
//!
//! All of them reject with [`AppError`], so malformed ids, query strings and
//! bodies produce the same JSON error envelope as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie;
use movies_core::types::DbId;
use movies_db::models::movie::MovieInput;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Path id
// ---------------------------------------------------------------------------

/// A movie id taken from the `{id}` path segment.
///
/// Anything that does not parse as an integer is a 400.
#[derive(Debug, Clone, Copy)]
pub struct MovieId(pub DbId);

impl<S> FromRequestParts<S> for MovieId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        raw.parse::<DbId>()
            .map(MovieId)
            .map_err(|_| AppError::BadRequest("ID must be a number".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Search query
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/movies/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// The validated `q` parameter of a search request.
#[derive(Debug, Clone)]
pub struct SearchQuery(pub String);

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SearchParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let q = movie::search_query(params.q.as_deref())?;
        Ok(SearchQuery(q))
    }
}

// ---------------------------------------------------------------------------
// Movie body
// ---------------------------------------------------------------------------

/// Raw create/update payload as sent by the client.
///
/// Every field is optional here so that absent fields surface as a
/// validation message instead of a deserialization failure. The Spanish
/// keys of the first public version of the API are accepted as aliases.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[serde(alias = "titulo")]
    pub title: Option<String>,
    #[serde(alias = "genero")]
    pub genre: Option<String>,
    #[serde(alias = "anoLanzamiento")]
    pub release_year: Option<Value>,
    #[serde(alias = "urlImagen")]
    pub image_url: Option<String>,
}

impl MovieRequest {
    /// Validate and normalize the payload against the given calendar year.
    pub fn into_input(self, current_year: i32) -> Result<MovieInput, CoreError> {
        let title = movie::required_text(self.title.as_deref())?;
        let genre = movie::required_text(self.genre.as_deref())?;
        let release_year = movie::release_year(self.release_year.as_ref(), current_year)?;

        Ok(MovieInput {
            title,
            genre,
            release_year,
            image_url: movie::optional_text(self.image_url.as_deref()),
        })
    }
}

/// A validated movie payload for create and update.
#[derive(Debug, Clone)]
pub struct ValidMovie(pub MovieInput);

impl<S> FromRequest<S> for ValidMovie
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<MovieRequest>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let input = body.into_input(movie::current_year())?;
        Ok(ValidMovie(input))
    }
}
