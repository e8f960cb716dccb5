use movies_core::types::DbId;

/// Failure raised by a repository operation.
///
/// Storage failures carry the operation that failed so the HTTP layer can
/// report it without seeing the underlying driver error.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Movie with id {0} not found")]
    NotFound(DbId),

    #[error("Failed to {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl RepoError {
    /// Returns a closure wrapping a [`sqlx::Error`] as a storage failure of `operation`.
    pub fn storage(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| RepoError::Storage { operation, source }
    }
}
