//! Config file source for the namespace.
//!
//! Responsibilities:
//! - Read JSON or YAML config files and flatten them into a property source.
//! - Resolve the config file path (explicit path or platform default).
//!
//! Does NOT handle:
//! - Environment variables (see env.rs).
//! - Writing config files.
//!
//! Invariants:
//! - A missing default config file is not an error; a missing explicit one is.
//! - The file format is chosen by extension only.

use std::path::Path;

use serde_json::Value;

use super::builder::NamespaceLoader;
use super::error::ConfigError;
use crate::path::default_config_path;
use crate::source::PropertySource;

enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    fn detect(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None,
        }
    }
}

/// Read a config file into a property source named after its path.
///
/// # Errors
///
/// Returns an error if the extension is not supported, the file cannot be read,
/// or its content does not parse.
pub fn load_file_source(path: &Path) -> Result<PropertySource, ConfigError> {
    let format = FileFormat::detect(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = match format {
        FileFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
        FileFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
    }
    .map_err(|message| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        message,
    })?;

    let source = PropertySource::from_document(format!("file [{}]", path.display()), &document);
    tracing::debug!(
        path = %path.display(),
        properties = source.len(),
        "Loaded config file"
    );
    Ok(source)
}

/// Apply the config file to the loader.
pub fn apply_file(loader: &mut NamespaceLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => (
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
            false,
        ),
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileNotFound { path });
        }
        tracing::debug!(path = %path.display(), "No default config file present");
        return Ok(());
    }

    loader.set_file_source(Some(load_file_source(&path)?));
    Ok(())
}
