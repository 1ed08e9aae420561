//! Owner bootstrap gate for the folio content core.
//!
//! The site has exactly two lifetime states: Uninitialized (zero
//! accounts, signup open to claim ownership) and Owned (one account,
//! signup closed forever). This crate holds the auth service client,
//! the process-wide session value, and the gate that decides which
//! state applies, failing closed whenever it cannot tell.

pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod session;

pub use client::AuthClient;
pub use config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use gate::{OwnerGate, OwnerStatus};
pub use session::{Session, SessionState};
