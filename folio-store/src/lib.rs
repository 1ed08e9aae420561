//! Content store adapter for the folio content core.
//!
//! Talks to the platform's table REST API with one typed CRUD surface
//! shared by every entity, translates store-level failures into the
//! adapter's error taxonomy, and publishes a change event after every
//! local mutation so live consumers can refresh.

pub mod config;
pub mod contact;
pub mod error;
pub mod notify;
pub mod repository;
pub mod table;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use notify::{ChangeFeed, ChangeHub};
pub use repository::Repository;
pub use table::{Query, TableClient};
