//! Database configuration

use std::env;

/// Default maximum connections for the pool.
/// Kept low for a small single-instance web app.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings consumed by the storage layer.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/lunchly".to_string()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DbConfig {
    /// Configuration for an explicit database URL, with default pool size.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
