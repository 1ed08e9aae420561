//! Draft validation errors.

use thiserror::Error;

/// A draft failed required-field validation.
///
/// Carries every missing field name so a form can flag them all in one
/// pass instead of one per submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field(s): {}", fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self { fields }
    }
}

/// Accumulates required-field checks for one draft.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags `name` when `value` is empty or whitespace.
    pub fn text(&mut self, name: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.missing.push(name);
        }
        self
    }

    /// Flags `name` when the value is absent entirely.
    pub fn present<T>(&mut self, name: &'static str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    /// Resolves to the full list of missing fields, or `Ok` when none.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::missing(self.missing))
        }
    }
}
