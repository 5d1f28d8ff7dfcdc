//! Centralized constants for the jsonbridge workspace.
//!
//! Source names mirror the layers a namespace is assembled from, so they show
//! up verbatim in logs and in `jsonbridge properties` output.

// =============================================================================
// Binding
// =============================================================================

/// Key prefix under which all JSON serialization properties live.
pub const DEFAULT_PREFIX: &str = "codec.json";

// =============================================================================
// Property Source Names
// =============================================================================

/// Name of the lowest-precedence source holding programmatic defaults.
pub const DEFAULTS_SOURCE_NAME: &str = "defaultProperties";

/// Name of the source built from process environment variables.
pub const ENV_SOURCE_NAME: &str = "systemEnvironment";

/// Name of the source built from `--set key=value` overrides.
pub const OVERRIDES_SOURCE_NAME: &str = "commandLineArgs";

// =============================================================================
// Files & Environment
// =============================================================================

/// Application name used for platform configuration directories.
pub const APP_NAME: &str = "jsonbridge";

/// File name of the default configuration file inside the config directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "application.json";

/// Environment variable that points at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "JSONBRIDGE_CONFIG_PATH";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";
