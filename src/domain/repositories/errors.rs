use thiserror::Error;

/// Errors reported by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness rule was violated by a write
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// The backing store failed for an infrastructure reason
    #[error("Store failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
