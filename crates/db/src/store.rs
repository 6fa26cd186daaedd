//! [`ApplicationStore`] backed by PostgreSQL.

use async_trait::async_trait;
use recruit_core::application::{Application, NewApplication};
use recruit_core::error::StoreError;
use recruit_core::store::ApplicationStore;

use crate::repositories::ApplicationRepo;
use crate::DbPool;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Unique constraint on `applications.roll_number`.
pub const ROLL_NUMBER_CONSTRAINT: &str = "uq_applications_roll_number";

/// SQLSTATEs for an administrator or crash shutdown of the server.
const SERVER_SHUTDOWN_CODES: [&str; 3] = ["57P01", "57P02", "57P03"];

#[derive(Debug, Clone)]
pub struct PgApplicationStore {
    pool: DbPool,
}

impl PgApplicationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn roll_number_exists(&self, roll_number: &str) -> Result<bool, StoreError> {
        ApplicationRepo::exists_by_roll_number(&self.pool, roll_number)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn insert(&self, application: &NewApplication) -> Result<Application, StoreError> {
        ApplicationRepo::create(&self.pool, application)
            .await
            .map(Application::from)
            .map_err(classify_sqlx_error)
    }

    async fn list_newest_first(&self) -> Result<Vec<Application>, StoreError> {
        let rows = ApplicationRepo::list_newest_first(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(Application::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

/// Classify a sqlx error into the store's failure taxonomy.
///
/// - A unique violation on the roll number constraint is `DuplicateKey`.
/// - I/O, TLS, pool exhaustion/closure, SQLSTATE class `08` and server
///   shutdown codes are `ConnectionFailure`.
/// - Everything else is `Other`, carrying the driver message.
pub fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            match code.as_deref() {
                Some(UNIQUE_VIOLATION) if db_err.constraint() == Some(ROLL_NUMBER_CONSTRAINT) => {
                    StoreError::DuplicateKey
                }
                Some(c) if c.starts_with("08") || SERVER_SHUTDOWN_CODES.contains(&c) => {
                    StoreError::ConnectionFailure(err.to_string())
                }
                _ => StoreError::Other(err.to_string()),
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::ConnectionFailure(err.to_string()),
        _ => StoreError::Other(err.to_string()),
    }
}
