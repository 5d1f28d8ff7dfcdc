//! Namespace loader for files, environment variables and overrides.
//!
//! Responsibilities:
//! - Load properties from `.env` files, a JSON/YAML config file, environment
//!   variables and `key=value` overrides.
//! - Provide a builder-pattern `NamespaceLoader` that stacks those layers into
//!   a `ConfigurationNamespace`.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Capturing the namespace (see `snapshot.rs`).
//! - Interpreting properties (see `jsonbridge-plugin`).
//!
//! Invariants / Assumptions:
//! - Precedence, lowest to highest: defaults, config file, environment, overrides.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::NamespaceLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::load_file_source;
