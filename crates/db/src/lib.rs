//! PostgreSQL access for the movie catalog.
//!
//! The pool is an explicit handle: the binary builds it once at startup,
//! hands clones to the repository and the health check, and closes it on
//! shutdown.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::DatabaseConfig;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the database configuration.
///
/// No connection is opened here; the first acquire (normally the startup
/// [`test_connectivity`] check) does that. Acquisitions beyond
/// `max_connections` wait until a connection is returned.
pub fn create_pool(config: &DatabaseConfig) -> DbPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

/// Acquire a connection and immediately release it.
///
/// Never fails: any network or authentication error is logged and reported
/// as `false`.
pub async fn test_connectivity(pool: &DbPool) -> bool {
    match pool.acquire().await {
        Ok(conn) => {
            drop(conn);
            tracing::debug!("Database connectivity check passed");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database connectivity check failed");
            false
        }
    }
}

/// Close every connection and reject further acquisitions.
pub async fn close(pool: &DbPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}
