//! Shared test utilities for jsonbridge integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write throwaway config files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The platform default config file is never present under the temp `HOME`.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `jsonbridge` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `HOME` and `XDG_CONFIG_HOME` point into `home`, so no user config file is read.
/// - Host variables that would change the outcome are cleared.
pub fn jsonbridge_cmd(home: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jsonbridge");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.current_dir(home.path());
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));

    // Clear potential host leakage
    cmd.env_remove("JSONBRIDGE_CONFIG_PATH")
        .env_remove("JSONBRIDGE_PREFIX")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `name` inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
