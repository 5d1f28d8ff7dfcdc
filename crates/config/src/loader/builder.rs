//! Namespace loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `NamespaceLoader` for layered property loading.
//! - Stack defaults, config file, environment and overrides into a namespace.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Precedence, lowest to highest: defaults, config file, environment, overrides,
//!   regardless of the order in which builder methods are called.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DOTENV_DISABLED_ENV, OVERRIDES_SOURCE_NAME};
use crate::namespace::ConfigurationNamespace;
use crate::source::PropertySource;

/// Loader that assembles a `ConfigurationNamespace` from layered sources.
#[derive(Debug, Default)]
pub struct NamespaceLoader {
    config_path: Option<PathBuf>,
    defaults: Option<PropertySource>,
    file_source: Option<PropertySource>,
    env_source: Option<PropertySource>,
    override_source: Option<PropertySource>,
}

impl NamespaceLoader {
    /// Create a new namespace loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use an explicit config file instead of the platform default.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Programmatic defaults, overridden by every other layer.
    pub fn with_defaults(mut self, defaults: PropertySource) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Read the config file.
    ///
    /// Uses the explicit path if one was set (via builder or
    /// `JSONBRIDGE_CONFIG_PATH` picked up by `from_env`), otherwise the platform
    /// default, which may be absent.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read the process environment.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Apply `key=value` overrides (highest precedence).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` for malformed entries.
    pub fn with_overrides<I, S>(mut self, overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = PropertySource::from_overrides(OVERRIDES_SOURCE_NAME, overrides)?;
        if !source.is_empty() {
            self.override_source = Some(source);
        }
        Ok(self)
    }

    /// Build the namespace.
    pub fn build(self) -> ConfigurationNamespace {
        let mut namespace = ConfigurationNamespace::new();
        for source in [
            self.defaults,
            self.file_source,
            self.env_source,
            self.override_source,
        ]
        .into_iter()
        .flatten()
        {
            namespace.push_source(source);
        }
        namespace
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_file_source(&mut self, source: Option<PropertySource>) {
        self.file_source = source;
    }

    pub(crate) fn set_env_source(&mut self, source: Option<PropertySource>) {
        self.env_source = source;
    }
}
