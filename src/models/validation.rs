//! Field validation for moviestore models
//!
//! A [`Validator`] accumulates field-level failures without short-circuiting,
//! so every violation found during one pass is reported together.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Accumulator of field name to human-readable message pairs
///
/// Created fresh for each validation pass and discarded once the caller has
/// inspected it. Only the first message recorded for a field is kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validator {
    errors: HashMap<String, String>,
}

impl Validator {
    /// Create an empty validator
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has a recorded message
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` under `field` unless the field already failed
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Record `message` under `field` when `ok` is false
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    /// Recorded failures
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Message recorded for a single field, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// `Ok(())` when valid, otherwise the recorded failures
    pub fn into_result(self) -> Result<(), HashMap<String, String>> {
        if self.valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "No validation errors");
        }

        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort();

        write!(f, "Validation failed with {} error(s):", fields.len())?;
        for (field, message) in fields {
            write!(f, "\n  - {}: {}", field, message)?;
        }
        Ok(())
    }
}

/// True when no two values are equal (case-sensitive)
pub fn unique(values: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value.as_str()))
}
