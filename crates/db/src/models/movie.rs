//! Movie model and DTOs.
//!
//! Columns are snake_case in storage and camelCase on the wire; this struct
//! is the only place the two meet.

use movies_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub image_url: Option<String>,
}

/// Validated fields for creating or fully replacing a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieInput {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub image_url: Option<String>,
}
