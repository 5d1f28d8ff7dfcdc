//! Host start-up: load the namespace and signal that the environment is ready.
//!
//! Responsibilities:
//! - Assemble the configuration namespace from file, environment and overrides.
//! - Publish the environment-ready event so the snapshot capturer records it.
//!
//! Does NOT handle:
//! - Plugin pre-init or codec translation (see `commands`).
//!
//! Invariants:
//! - The snapshot is captured before any command reads it.

use std::sync::Arc;

use anyhow::{Context, Result};
use jsonbridge_config::{
    ConfigSnapshotCapturer, ConfigurationNamespace, EnvironmentEvents, NamespaceLoader,
    SnapshotHandle,
};

use crate::args::Cli;

/// The captured environment handed to every command.
pub(crate) struct Environment {
    pub namespace: Arc<ConfigurationNamespace>,
    pub snapshot: SnapshotHandle,
}

pub(crate) fn prepare(cli: &Cli) -> Result<Environment> {
    let mut loader = NamespaceLoader::new();
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    let namespace = loader
        .from_env()
        .from_file()
        .context("Failed to load configuration file")?
        .with_overrides(&cli.overrides)
        .context("Failed to apply --set overrides")?
        .build();

    tracing::debug!(
        sources = namespace.sources().len(),
        properties = namespace.len(),
        "Configuration namespace assembled"
    );

    let capturer = Arc::new(ConfigSnapshotCapturer::new());
    let snapshot = capturer.handle();
    let namespace = EnvironmentEvents::new()
        .with_listener(capturer)
        .publish_environment_ready(namespace);

    Ok(Environment {
        namespace,
        snapshot,
    })
}
