//! Property values held by a configuration namespace.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A primitive value attached to a property key.
///
/// Environment variables and command-line overrides always produce `Text`;
/// structured files keep their native scalar types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PropertyValue {
    /// String view of the value, used for coercion into typed settings.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            PropertyValue::Text(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Returns true for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, PropertyValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Integer(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}
