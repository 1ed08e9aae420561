//! Store adapter error taxonomy.

use folio_types::ValidationError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the content store adapter.
///
/// Nothing here is retried by the adapter itself; retry policy belongs
/// to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store's own access control rejected the operation, e.g. a
    /// row-level security check because the caller is not the recorded
    /// owner.
    #[error("store denied the operation: {0}")]
    Denied(String),

    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A mutation matched no row.
    #[error("no row matched the requested id")]
    NotFound,

    #[error("store payload could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
