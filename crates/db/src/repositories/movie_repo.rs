//! Repository for the `movies` table.

use movies_core::types::DbId;

use crate::error::RepoError;
use crate::models::movie::{Movie, MovieInput};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_year, image_url";

/// Provides CRUD and search operations for movies.
///
/// Cheap to clone; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct MovieRepo {
    pool: DbPool,
}

impl MovieRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List every movie, most recently created first.
    pub async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id DESC");
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(RepoError::storage("fetch movies"))
    }

    /// Find a movie by its ID. `None` means no such row.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, RepoError> {
        self.select_by_id(id, "fetch movie").await
    }

    /// Insert a new movie, then read it back by the generated ID.
    ///
    /// The two statements are not atomic.
    pub async fn create(&self, input: &MovieInput) -> Result<Movie, RepoError> {
        const OPERATION: &str = "create movie";

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO movies (title, genre, release_year, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.genre)
        .bind(input.release_year)
        .bind(&input.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::storage(OPERATION))?;

        self.select_by_id(id, OPERATION).await?.ok_or(RepoError::Storage {
            operation: OPERATION,
            source: sqlx::Error::RowNotFound,
        })
    }

    /// Replace all mutable fields of a movie and return the stored row.
    ///
    /// Fails with [`RepoError::NotFound`] when no row has the given `id`.
    pub async fn update(&self, id: DbId, input: &MovieInput) -> Result<Movie, RepoError> {
        const OPERATION: &str = "update movie";

        let result = sqlx::query(
            "UPDATE movies SET
                title = $2,
                genre = $3,
                release_year = $4,
                image_url = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.genre)
        .bind(input.release_year)
        .bind(&input.image_url)
        .execute(&self.pool)
        .await
        .map_err(RepoError::storage(OPERATION))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }

        // A concurrent delete can land between the two statements.
        self.select_by_id(id, OPERATION)
            .await?
            .ok_or(RepoError::NotFound(id))
    }

    /// Delete a movie by ID.
    ///
    /// Fails with [`RepoError::NotFound`] when no row has the given `id`.
    pub async fn delete(&self, id: DbId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepoError::storage("delete movie"))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    /// Case-insensitive substring search over title and genre, newest first.
    pub async fn search(&self, text: &str) -> Result<Vec<Movie>, RepoError> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE title ILIKE $1 OR genre ILIKE $1
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(contains_pattern(text))
            .fetch_all(&self.pool)
            .await
            .map_err(RepoError::storage("search movies"))
    }

    async fn select_by_id(
        &self,
        id: DbId,
        operation: &'static str,
    ) -> Result<Option<Movie>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepoError::storage(operation))
    }
}

/// Build a `LIKE` pattern matching `text` anywhere, with its own wildcards escaped.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
