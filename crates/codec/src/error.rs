//! Error types for the codec model.
//!
//! Invariants:
//! - Every variant carries the offending input so callers can report it verbatim.

use thiserror::Error;

/// Errors raised while parsing codec settings or resolving codec types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("'{value}' is not a valid {expected}")]
    InvalidValue {
        value: String,
        expected: &'static str,
    },

    #[error("invalid date pattern '{pattern}': {reason}")]
    InvalidDatePattern { pattern: String, reason: String },

    #[error("no type registered under '{name}'")]
    TypeNotFound { name: String },
}

impl CodecError {
    pub(crate) fn invalid(value: &str, expected: &'static str) -> Self {
        CodecError::InvalidValue {
            value: value.to_string(),
            expected,
        }
    }
}
