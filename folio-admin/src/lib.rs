//! Admin console for the folio content core.
//!
//! Owner-gated create/update/delete across every entity, the contact
//! inbox, and the file upload relay. Every operation takes the session
//! explicitly and checks it before anything is sent to a collaborator.

pub mod console;
pub mod error;
pub mod upload;

pub use console::AdminConsole;
pub use error::{AdminError, AdminResult, UploadError};
pub use upload::{StorageClient, StorageConfig, UploadRelay};
