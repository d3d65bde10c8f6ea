//! Untyped request input and per-field normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::empty::is_empty;

/// A raw request record as received from the client.
///
/// Fields are looked up by name; nothing is assumed about their types until a
/// validator or handler asks for a specific view of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput(Map<String, Value>);

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The field coerced to a string; absent or empty values become `""`.
    ///
    /// Non-string values keep their natural textual form so that length and
    /// equality rules still apply to them.
    pub fn normalized(&self, field: &str) -> String {
        match self.0.get(field) {
            Some(value) if !is_empty(value) => match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            _ => String::new(),
        }
    }

    /// The field as an optional string: `None` when it was not supplied.
    pub fn text(&self, field: &str) -> Option<String> {
        let value = self.normalized(field);
        (!value.is_empty()).then_some(value)
    }

    /// The field read as a checkbox-style flag.
    pub fn flag(&self, field: &str) -> bool {
        match self.0.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.as_str(), "true" | "on" | "1"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            _ => false,
        }
    }
}

impl From<Map<String, Value>> for RawInput {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for RawInput {
    /// Anything other than a JSON object carries no fields.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}
