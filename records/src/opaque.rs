//! Opaque structured values.
//!
//! Free-form maps such as `additional_public_data`, `restricted_data` and job
//! payloads/results have no schema on this side of the API. They are carried
//! as an [`OpaqueValue`] and rendered verbatim; callers never inspect their
//! contents to drive behavior.

#[cfg(test)]
#[path = "opaque_test.rs"]
mod opaque_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON value whose shape is owned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueValue(Value);

impl OpaqueValue {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Single-entry `{ "note": text }` map used by the passport form notes.
    #[must_use]
    pub fn note(text: &str) -> Self {
        Self(serde_json::json!({ "note": text }))
    }

    /// True for `null`, empty objects, empty arrays and empty strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(text) => text.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Indented JSON text for display in a `<pre>` block.
    #[must_use]
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// Top-level member lookup. Only used to offer downloads of export results.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for OpaqueValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
