//! Environment variable source for the namespace.
//!
//! Responsibilities:
//! - Turn the process environment into a property source.
//! - Pick up `JSONBRIDGE_CONFIG_PATH` when no path was set explicitly.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from config files (see file.rs).
//! - .env file loading (handled by NamespaceLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Variables that are not valid Unicode are skipped.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::path::PathBuf;

use super::builder::NamespaceLoader;
use crate::constants::{CONFIG_PATH_ENV, ENV_SOURCE_NAME};
use crate::source::PropertySource;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply the process environment to the loader.
pub fn apply_env(loader: &mut NamespaceLoader) {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    let source = PropertySource::from_env_vars(ENV_SOURCE_NAME, vars);
    tracing::debug!(properties = source.len(), "Loaded environment properties");
    loader.set_env_source(Some(source));

    // Config path from environment (only if not already set via CLI)
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none(CONFIG_PATH_ENV)
    {
        loader.set_config_path(Some(PathBuf::from(config_path)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_JSONBRIDGE_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_JSONBRIDGE_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(
                env_var_or_none(key2),
                Some("test-value".to_string()),
                "Non-empty env var should return Some(trimmed value)"
            );
        });
    }
}
