//! Storage seams used by the submission pipeline and the listing.

use async_trait::async_trait;

use crate::application::{Application, NewApplication};
use crate::error::StoreError;

/// Persistent storage for applications.
///
/// Implementations acquire a connection per call and release it on every
/// exit path. No call spans a transaction with another.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Whether a record with exactly this roll number exists.
    ///
    /// Advisory only: the unique constraint enforced by [`insert`](Self::insert)
    /// is authoritative.
    async fn roll_number_exists(&self, roll_number: &str) -> Result<bool, StoreError>;

    /// Insert one record and return it with its generated id and timestamps.
    async fn insert(&self, application: &NewApplication) -> Result<Application, StoreError>;

    /// Every record, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Application>, StoreError>;

    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Something holding a derived view of the listing that must be dropped
/// once a new record is written.
#[async_trait]
pub trait ListingInvalidator: Send + Sync {
    async fn invalidate(&self);
}
