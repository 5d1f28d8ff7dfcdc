//! Architecture tests for the dependency direction between workspace crates.
//!
//! Invariants:
//! - `jsonbridge-config` and `jsonbridge-codec` are leaves: neither knows the other.
//! - `jsonbridge-plugin` may use both leaves but never the CLI.
//! - Nothing depends on `jsonbridge-cli`.
//! - Library crates never write to stdout; it belongs to CLI command output.

mod common;

use std::fs;
use std::path::Path;

use common::{find_rust_files, find_workspace_root, member_dirs};

/// (crate directory, workspace crates it may depend on)
const ALLOWED: &[(&str, &[&str])] = &[
    ("config", &[]),
    ("codec", &[]),
    ("plugin", &["jsonbridge-config", "jsonbridge-codec"]),
    ("cli", &["jsonbridge-config", "jsonbridge-codec", "jsonbridge-plugin"]),
];

const LIBRARY_CRATES: &[&str] = &["config", "codec", "plugin"];

fn workspace_deps(manifest: &Path) -> Vec<String> {
    let content = fs::read_to_string(manifest).expect("Failed to read Cargo.toml");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("name"))
        .filter_map(|line| line.split_once('=').map(|(key, _)| key.trim()))
        .filter(|key| key.starts_with("jsonbridge-"))
        .map(str::to_string)
        .collect()
}

#[test]
fn workspace_crates_depend_downwards_only() {
    let root = find_workspace_root();
    let mut violations = Vec::new();

    for dir in member_dirs(&root) {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let Some((_, allowed)) = ALLOWED.iter().find(|(crate_dir, _)| *crate_dir == name) else {
            violations.push(format!("crates/{name}: not listed in ALLOWED"));
            continue;
        };
        for dep in workspace_deps(&dir.join("Cargo.toml")) {
            if !allowed.contains(&dep.as_str()) {
                violations.push(format!("crates/{name}: must not depend on {dep}"));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "\nCrate layering violations:\n  {}\n",
        violations.join("\n  ")
    );
}

#[test]
fn library_crates_do_not_print_to_stdout() {
    let root = find_workspace_root();
    let mut violations = Vec::new();

    for crate_dir in LIBRARY_CRATES {
        let src = root.join("crates").join(crate_dir).join("src");
        for file in find_rust_files(&src) {
            let content = fs::read_to_string(&file).unwrap_or_default();
            for (number, line) in content.lines().enumerate() {
                let code = line.trim_start();
                if !code.starts_with("//") && (code.contains("println!(") || code.contains("print!(")) {
                    violations.push(format!("{}:{}", file.display(), number + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "\nLibrary code writes to stdout (log with tracing instead):\n  {}\n",
        violations.join("\n  ")
    );
}

#[test]
fn tests_use_tempfile_for_scratch_files() {
    let root = find_workspace_root();
    let violations: Vec<String> = find_rust_files(&root.join("crates"))
        .into_iter()
        .filter(|file| {
            let content = fs::read_to_string(file).unwrap_or_default();
            content.contains("#[test]") && content.contains(concat!("std::env::", "temp_dir()"))
        })
        .map(|file| file.display().to_string())
        .collect();

    assert!(
        violations.is_empty(),
        "\nTests create scratch files outside tempfile's RAII types:\n  {}\n",
        violations.join("\n  ")
    );
}
