//! Capture of the configuration namespace at "environment ready" time.
//!
//! Responsibilities:
//! - Store an immutable, shared snapshot of the namespace when the host
//!   signals that the environment is prepared.
//! - Hand out a cloneable [`SnapshotHandle`] that later consumers (codec
//!   configurators) read from.
//!
//! Does NOT handle:
//! - Deciding when the environment is ready (see `lifecycle.rs`).
//! - Interpreting the captured properties.
//!
//! Invariants:
//! - A captured namespace is never mutated; readers share it through `Arc`.
//! - Publication is an atomic `ArcSwapOption` store, so every read that
//!   follows a capture observes it without taking a lock.
//! - Capturing again replaces the snapshot (last write wins).
//! - An uncaptured handle reports `None`; callers decide how to fail.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::lifecycle::EnvironmentListener;
use crate::namespace::ConfigurationNamespace;

/// Shared, read-mostly reference to the captured namespace.
///
/// Clones observe the same slot, so a handle can be passed to a configurator
/// at registration time and read long after the capture happened.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    slot: Arc<ArcSwapOption<ConfigurationNamespace>>,
}

impl SnapshotHandle {
    /// Create a handle with nothing captured yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that already holds `namespace`.
    pub fn captured(namespace: ConfigurationNamespace) -> Self {
        let handle = Self::new();
        handle.publish(Arc::new(namespace));
        handle
    }

    /// The captured namespace, if any.
    pub fn current(&self) -> Option<Arc<ConfigurationNamespace>> {
        self.slot.load_full()
    }

    pub fn is_captured(&self) -> bool {
        self.current().is_some()
    }

    fn publish(&self, namespace: Arc<ConfigurationNamespace>) -> bool {
        self.slot.swap(Some(namespace)).is_some()
    }
}

/// Lifecycle listener that snapshots the namespace once it is prepared.
#[derive(Debug, Default)]
pub struct ConfigSnapshotCapturer {
    handle: SnapshotHandle,
}

impl ConfigSnapshotCapturer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle through which the captured namespace is read later.
    pub fn handle(&self) -> SnapshotHandle {
        self.handle.clone()
    }
}

impl EnvironmentListener for ConfigSnapshotCapturer {
    fn on_environment_ready(&self, namespace: &Arc<ConfigurationNamespace>) {
        tracing::debug!(
            sources = namespace.sources().len(),
            properties = namespace.len(),
            "Capturing configuration namespace snapshot"
        );
        if self.handle.publish(Arc::clone(namespace)) {
            tracing::debug!("Replaced a previously captured namespace snapshot");
        }
    }
}
