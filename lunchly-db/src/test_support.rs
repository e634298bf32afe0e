//! Shared setup for database-backed tests.
//!
//! Run against a scratch database:
//! `DATABASE_URL=postgres://localhost/lunchly_test cargo test -p lunchly-db -- --ignored`

use sqlx::PgPool;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id BIGSERIAL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    phone TEXT,
    notes TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS reservations (
    id BIGSERIAL PRIMARY KEY,
    customer_id BIGINT NOT NULL REFERENCES customers ON DELETE CASCADE,
    start_at TIMESTAMPTZ NOT NULL,
    num_guests INT NOT NULL,
    notes TEXT NOT NULL DEFAULT ''
);
"#;

/// Connect to the test database and make sure the schema exists.
pub async fn connect() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = crate::pool::create_pool_with_options(&url, 5)
        .await
        .expect("pool creation failed");

    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("schema setup failed");
    }

    pool
}
