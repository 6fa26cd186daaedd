/// Failure reported by an [`ApplicationStore`](crate::store::ApplicationStore).
///
/// Storage adapters classify their driver errors into these variants
/// themselves, so callers never inspect driver messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The unique constraint on the roll number was violated.
    #[error("Duplicate roll number")]
    DuplicateKey,

    /// The store is unreachable or the connection could not be established.
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// Any other storage-level failure. The detail is for diagnostics only.
    #[error("Storage failure: {0}")]
    Other(String),
}
