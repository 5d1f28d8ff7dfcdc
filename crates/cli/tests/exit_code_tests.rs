//! Integration tests for structured exit codes.
//!
//! These tests verify that jsonbridge returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{jsonbridge_cmd, write_config};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_success_returns_exit_code_0() {
    let home = TempDir::new().unwrap();
    jsonbridge_cmd(&home).arg("show").assert().code(0);
}

#[test]
fn test_missing_explicit_config_file_returns_exit_code_2() {
    let home = TempDir::new().unwrap();
    jsonbridge_cmd(&home)
        .args(["--config-path", "does-not-exist.json", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_unparseable_config_file_returns_exit_code_2() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "application.json", "{ not json");
    jsonbridge_cmd(&home)
        .arg("--config-path")
        .arg(&path)
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_malformed_override_returns_exit_code_2() {
    let home = TempDir::new().unwrap();
    jsonbridge_cmd(&home)
        .args(["--set", "no-equals-sign", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_unknown_naming_strategy_returns_exit_code_3() {
    let home = TempDir::new().unwrap();
    jsonbridge_cmd(&home)
        .args([
            "--set",
            "codec.json.property-naming-strategy=NOT_A_STRATEGY",
            "show",
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("NOT_A_STRATEGY"));
}

#[test]
fn test_invalid_date_format_returns_exit_code_3() {
    let home = TempDir::new().unwrap();
    jsonbridge_cmd(&home)
        .args(["--set", "codec.json.date-format=com.example.Missing", "show"])
        .assert()
        .code(3);
}

#[test]
fn test_parse_only_date_pattern_is_a_configuration_failure() {
    let home = TempDir::new().unwrap();
    jsonbridge_cmd(&home)
        .args(["--set", "codec.json.date-format=%Y-%m-%d %#z", "show"])
        .assert()
        .code(3);
}

#[test]
fn test_binding_errors_alone_do_not_fail() {
    let home = TempDir::new().unwrap();
    jsonbridge_cmd(&home)
        .args(["--set", "codec.json.serialization.indent-output=maybe", "show"])
        .assert()
        .code(0);
}
