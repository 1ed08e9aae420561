//! Entity schema for the folio content core.
//!
//! Typed rows and drafts for every content collection, required-field
//! validation, the string coercions the admin forms rely on, and the
//! change event shape emitted by the notification channel.

pub mod coerce;
pub mod entities;
pub mod error;
pub mod event;
pub mod record;

pub use entities::*;
pub use error::ValidationError;
pub use event::{ChangeEvent, ChangeOp};
pub use record::{Draft, TableRecord};
