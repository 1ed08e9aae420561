//! Admin console error types.

use folio_store::StoreError;
use folio_types::ValidationError;
use thiserror::Error;

/// Result type for console operations.
pub type AdminResult<T> = Result<T, AdminError>;

/// Errors surfaced by the admin console.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The caller is not the owner. Nothing was sent to the store, and
    /// this is never retried.
    #[error("not authorized: owner session required")]
    Unauthorized,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AdminError {
    fn from(e: StoreError) -> Self {
        // Validation failures keep their identity even when the
        // repository reports them.
        match e {
            StoreError::Validation(v) => Self::Validation(v),
            other => Self::Store(other),
        }
    }
}

/// Errors surfaced by the upload relay. Shown inline on the upload
/// control; already-saved fields stay valid.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("sign in required to upload files")]
    AuthRequired,

    #[error("upload request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("storage returned {status}: {message}")]
    Storage { status: u16, message: String },
}
