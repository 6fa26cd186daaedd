//! PostgreSQL persistence for applications.
//!
//! Exposes the pool helpers used at startup, the row model, the
//! repository, and [`PgApplicationStore`], the adapter the submission
//! pipeline talks to.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::PgApplicationStore;

pub type DbPool = sqlx::PgPool;

/// How long a caller waits for a free connection before the pool reports
/// `PoolTimedOut`. Kept well under the HTTP request timeout so exhaustion
/// reaches the caller as a connection failure.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
