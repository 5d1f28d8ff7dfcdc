//! "Environment prepared" lifecycle signal.
//!
//! Responsibilities:
//! - Define the listener contract invoked once the namespace is fully assembled.
//! - Deliver the signal to every registered listener in registration order.
//!
//! Does NOT handle:
//! - Assembling the namespace (see `loader`).
//!
//! Invariants:
//! - The namespace is frozen into an `Arc` before any listener sees it.

use std::sync::Arc;

use crate::namespace::ConfigurationNamespace;

/// Receives the fully resolved namespace before any application wiring exists.
pub trait EnvironmentListener: Send + Sync {
    fn on_environment_ready(&self, namespace: &Arc<ConfigurationNamespace>);
}

/// Registry of environment listeners.
#[derive(Default)]
pub struct EnvironmentEvents {
    listeners: Vec<Arc<dyn EnvironmentListener>>,
}

impl EnvironmentEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn EnvironmentListener>) {
        self.listeners.push(listener);
    }

    pub fn with_listener(mut self, listener: Arc<dyn EnvironmentListener>) -> Self {
        self.add_listener(listener);
        self
    }

    /// Freeze `namespace` and notify every listener.
    pub fn publish_environment_ready(
        &self,
        namespace: ConfigurationNamespace,
    ) -> Arc<ConfigurationNamespace> {
        let namespace = Arc::new(namespace);
        tracing::debug!(
            listeners = self.listeners.len(),
            "Publishing environment-ready event"
        );
        for listener in &self.listeners {
            listener.on_environment_ready(&namespace);
        }
        namespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ConfigSnapshotCapturer;
    use crate::source::PropertySource;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<usize>>,
    }

    impl EnvironmentListener for Recorder {
        fn on_environment_ready(&self, namespace: &Arc<ConfigurationNamespace>) {
            self.seen.lock().unwrap().push(namespace.len());
        }
    }

    #[test]
    fn test_publish_reaches_every_listener() {
        let capturer = Arc::new(ConfigSnapshotCapturer::new());
        let recorder = Arc::new(Recorder::default());
        let events = EnvironmentEvents::new()
            .with_listener(capturer.clone())
            .with_listener(recorder.clone());

        let published = events.publish_environment_ready(
            ConfigurationNamespace::new().with_source(PropertySource::new("t").with_property("a", "b")),
        );

        assert_eq!(*recorder.seen.lock().unwrap(), vec![1]);
        let captured = capturer.handle().current().unwrap();
        assert!(Arc::ptr_eq(&captured, &published));
    }
}
