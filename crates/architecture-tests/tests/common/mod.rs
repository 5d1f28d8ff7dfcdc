//! Shared helpers for architecture tests.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn find_workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .find(|dir| {
            fs::read_to_string(dir.join("Cargo.toml"))
                .is_ok_and(|content| content.contains("[workspace]"))
        })
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

/// All .rs files under `dir`, skipping build output and this crate.
pub fn find_rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Workspace member directories under `crates/`, excluding this crate.
#[allow(dead_code)]
pub fn member_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root.join("crates"))
        .expect("crates/ directory must be readable")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.join("Cargo.toml").exists())
        .filter(|path| path.file_name().is_some_and(|name| name != "architecture-tests"))
        .collect();
    dirs.sort();
    dirs
}
