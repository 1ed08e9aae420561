//! Auth error types.

use thiserror::Error;

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors surfaced by the auth client and the bootstrap gate.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Wrong email/password or an unconfirmed account.
    #[error("authentication failed: {0}")]
    Credentials(String),

    /// The bootstrap gate refused account creation: an owner exists.
    #[error("signup is closed: the owner account already exists")]
    SignupClosed,

    /// The admin account-count query needs the service key.
    #[error("service key not configured for admin operations")]
    MissingServiceKey,

    #[error("auth service returned {status}: {message}")]
    Api { status: u16, message: String },
}
