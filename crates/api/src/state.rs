use movies_db::repositories::MovieRepo;
use movies_db::DbPool;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and the repository are both handles onto the
/// same set of connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the health check.
    pub pool: DbPool,
    /// Movie data access.
    pub movies: MovieRepo,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let movies = MovieRepo::new(pool.clone());
        Self { pool, movies }
    }
}
