//! Typed access to a tool call's JSON arguments.

use serde_json::{Map, Value};

use crate::error::ZoomError;

/// Read-only view over the `arguments` object of a tool call.
///
/// Missing keys and explicit `null` are treated the same way, so a host
/// that sends `"page_size": null` gets the declared default.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Arguments<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// Identifier argument that must be present.
    ///
    /// Zoom meeting IDs are integers, so numbers are accepted as well as strings.
    pub fn required_id(&self, key: &str) -> Result<String, ZoomError> {
        self.optional_id(key)
            .ok_or_else(|| ZoomError::missing_argument(key))
    }

    pub fn optional_id(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Scalar argument rendered for a query string, with a fallback
    pub fn scalar_or(&self, key: &str, default: impl ToString) -> String {
        self.optional_id(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Raw JSON value with a fallback
    pub fn value_or(&self, key: &str, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Copy of all arguments except `excluded`, keeping `null`s out
    pub fn without(&self, excluded: &str) -> Map<String, Value> {
        self.map
            .iter()
            .filter(|(key, value)| key.as_str() != excluded && !value.is_null())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
