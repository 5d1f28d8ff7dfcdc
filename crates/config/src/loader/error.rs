//! Error types for namespace loading.
//!
//! Responsibilities:
//! - Define error variants for all namespace loading failures.
//!
//! Does NOT handle:
//! - Binding errors for individual properties (see `jsonbridge-plugin`).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, entries, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling a configuration namespace.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Config file not found at {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {message}")]
    ConfigFileParse { path: PathBuf, message: String },

    #[error("Unsupported config file format at {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid override '{entry}': expected KEY=VALUE")]
    InvalidOverride { entry: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
