//! Database connection pool management
//!
//! The repositories only borrow a pool; building one is the caller's
//! responsibility and these helpers exist for callers and tests.

use lunchly_core::DbConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a PostgreSQL connection pool from configuration.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(&config.database_url, config.max_connections).await
}

/// Create a PostgreSQL connection pool with an explicit URL and size.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to postgres");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
