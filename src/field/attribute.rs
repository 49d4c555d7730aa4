//! Key/value fields attached to a log record.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Reserved key for error attributes built with [`e`].
pub const ERROR_KEY: &str = "error";

/// One structured attribute of a log record.
///
/// Keys are not checked for uniqueness; every field given to a logger
/// call reaches the formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Field whose value is the `Display` text of `value`.
    pub fn display(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::new(key, value.to_string())
    }

    /// Field holding any serializable value.
    ///
    /// A value that fails to serialize is recorded as the serializer's
    /// error text.
    pub fn serialize<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| Value::String(e.to_string()));
        Self::new(key, value)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Value as plain text: strings unquoted, everything else as JSON.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Build a generic field.
pub fn f(key: impl Into<String>, value: impl Into<Value>) -> Field {
    Field::new(key, value)
}

/// Build an error field keyed by [`ERROR_KEY`] from the error's message.
///
/// Takes anything `Display`, so borrowed errors and `anyhow::Error` work
/// as well as `std::error::Error` types.
pub fn e(err: impl fmt::Display) -> Field {
    Field::new(ERROR_KEY, err.to_string())
}
