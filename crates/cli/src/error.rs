//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration and translation errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-3 are reserved for specific error categories.

use jsonbridge_config::ConfigError;
use jsonbridge_plugin::{PluginError, TranslateError};

/// Structured exit codes for jsonbridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - unreadable config file or malformed override.
    ///
    /// Scripts should fix the file or the `--set` arguments.
    ConfigurationError = 2,

    /// Translation error - a property value could not configure the codec.
    ///
    /// Scripts should fix the offending property (naming strategy, date format).
    TranslationError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigurationError
    }
}

impl From<&TranslateError> for ExitCode {
    fn from(_: &TranslateError) -> Self {
        ExitCode::TranslationError
    }
}

impl From<&PluginError> for ExitCode {
    fn from(err: &PluginError) -> Self {
        match err {
            PluginError::ConfigureFailed { source, .. } => Self::from(source),
            PluginError::UnknownDataFormat { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<PluginError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<TranslateError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}
