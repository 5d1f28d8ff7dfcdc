//! Error types for settings binding, translation and the plugin bridge.
//!
//! Invariants:
//! - `PropertyBindingError` never aborts a translation; it is reported and
//!   the affected field stays unset.
//! - `TranslateError` always aborts before anything is committed to a codec.

use serde::Serialize;
use thiserror::Error;

/// A recognized key whose value could not be coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("cannot bind '{value}' to '{key}': expected {expected_type}")]
pub struct PropertyBindingError {
    pub key: String,
    pub expected_type: &'static str,
    pub value: String,
}

/// Failures that abort a translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error(
        "configuration namespace has not been captured; the environment-ready signal must be published before codecs are configured"
    )]
    ConfigurationNotCaptured,

    #[error("unknown property naming strategy '{name}'")]
    UnknownNamingStrategy { name: String },

    #[error("date format '{value}' is neither a known type nor a valid pattern: {reason}")]
    InvalidDateFormat { value: String, reason: String },
}

/// Failures raised by the plugin bridge.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("failed to configure data format '{format}'")]
    ConfigureFailed {
        format: String,
        #[source]
        source: TranslateError,
    },

    #[error("no data format named '{name}' has been discovered")]
    UnknownDataFormat { name: String },
}
