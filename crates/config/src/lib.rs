//! Configuration namespace for jsonbridge.
//!
//! This crate gathers flat, dotted key/value properties from files, environment
//! variables and command-line overrides into a [`ConfigurationNamespace`], and
//! captures an immutable snapshot of it when the host signals that the
//! environment is ready.

pub mod constants;
mod lifecycle;
mod loader;
pub mod name;
mod namespace;
mod path;
mod snapshot;
mod source;
mod value;

pub use constants::DEFAULT_PREFIX;
pub use lifecycle::{EnvironmentEvents, EnvironmentListener};
pub use loader::{ConfigError, NamespaceLoader, env_var_or_none, load_file_source};
pub use namespace::{ConfigurationNamespace, PrefixedProperty, ResolvedProperty};
pub use path::default_config_path;
pub use snapshot::{ConfigSnapshotCapturer, SnapshotHandle};
pub use source::PropertySource;
pub use value::PropertyValue;
