//! The generic-repository seam.
//!
//! Every entity participates in the same adapter by implementing these
//! two traits: the row contributes its table name and ordering, the draft
//! contributes validation. The store adapter supplies everything else
//! once, for all entities.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// A persisted row in one of the content tables.
pub trait TableRecord: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Table name in the persistent store.
    const TABLE: &'static str;

    /// Ordering expression for `list`: `display_order` ascending with
    /// creation order breaking ties, unless the entity overrides it.
    const ORDER_BY: &'static str = "display_order.asc,created_at.asc";
}

/// The writable shape of an entity, validated before any store write.
pub trait Draft: Serialize + Send + Sync {
    type Record: TableRecord;

    /// Checks that every required field is present and non-empty.
    ///
    /// A violation aborts the write before any request is issued and
    /// names all missing fields at once.
    fn validate(&self) -> Result<(), ValidationError>;
}
