/// Application primary keys are UUIDs assigned by PostgreSQL.
pub type ApplicationId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
