//! Change events from the notification channel.

use serde::{Deserialize, Serialize};

/// Kind of row change observed on a watched table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// A single row change on a watched table.
///
/// The payload is intentionally coarse: consumers re-read whole
/// collections rather than patching fields, so the table name and the
/// kind of change are all that matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    pub op: ChangeOp,
}

impl ChangeEvent {
    pub fn new(table: impl Into<String>, op: ChangeOp) -> Self {
        Self {
            table: table.into(),
            op,
        }
    }
}
