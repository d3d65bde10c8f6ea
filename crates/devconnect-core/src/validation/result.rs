//! Validation outcomes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::empty::{Emptiness, is_empty};
use super::input::RawInput;
use crate::error::DomainError;

/// Field-keyed error messages, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Emptiness for FieldErrors {
    fn is_empty_value(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Normalized field values of an input that passed validation.
#[derive(Debug, Clone, Default)]
pub struct Normalized(BTreeMap<&'static str, String>);

impl Normalized {
    /// Take a governed field's value out, leaving `""` behind.
    pub fn take(&mut self, field: &str) -> String {
        self.0
            .get_mut(field)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}

/// The outcome of running a validator over a [`RawInput`].
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    normalized: BTreeMap<&'static str, String>,
    errors: FieldErrors,
}

impl ValidationResult {
    /// Start a result by normalizing every governed field.
    pub(crate) fn normalize(input: &RawInput, fields: &[&'static str]) -> Self {
        Self {
            normalized: fields
                .iter()
                .map(|&field| (field, input.normalized(field)))
                .collect(),
            errors: FieldErrors::new(),
        }
    }

    /// Normalized value of a governed field; `""` for anything else.
    pub fn field(&self, field: &str) -> &str {
        self.normalized.get(field).map_or("", String::as_str)
    }

    /// Apply one rule: when `passed` is false, `message` becomes the field's error.
    pub(crate) fn check(&mut self, field: &'static str, passed: bool, message: &str) {
        if !passed {
            self.errors.set(field, message);
        }
    }

    /// Shorthand for the "must be supplied" rule.
    pub(crate) fn require(&mut self, field: &'static str, message: &str) {
        let present = !is_empty(self.field(field));
        self.check(field, present, message);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        is_empty(&self.errors)
    }

    pub fn into_result(self) -> Result<Normalized, DomainError> {
        if self.is_valid() {
            Ok(Normalized(self.normalized))
        } else {
            Err(DomainError::Validation(self.errors))
        }
    }
}
