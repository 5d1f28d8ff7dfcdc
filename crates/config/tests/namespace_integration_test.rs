//! Integration tests for namespace loading and snapshot capture.
//!
//! These tests drive the public API the way a host process does: assemble the
//! namespace, publish the environment-ready event, then read the snapshot back
//! through a handle obtained before the capture.

use std::sync::Arc;

use jsonbridge_config::{
    ConfigSnapshotCapturer, ConfigurationNamespace, DEFAULT_PREFIX, EnvironmentEvents,
    NamespaceLoader, PropertySource, PropertyValue,
};

#[test]
fn test_capture_through_lifecycle_events() {
    let capturer = Arc::new(ConfigSnapshotCapturer::new());
    let handle = capturer.handle();
    let events = EnvironmentEvents::new().with_listener(capturer);

    assert!(!handle.is_captured());

    let namespace = NamespaceLoader::new()
        .with_defaults(PropertySource::new("defaults").with_property("codec.json.locale", "en_GB"))
        .with_overrides(["codec.json.serialization.INDENT_OUTPUT=true"])
        .unwrap()
        .build();
    events.publish_environment_ready(namespace);

    let snapshot = handle.current().expect("namespace should be captured");
    let entries = snapshot.entries_under(DEFAULT_PREFIX);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, &PropertyValue::from("en_GB"));
    assert_eq!(entries[1].path, vec!["serialization", "INDENT_OUTPUT"]);
}

#[test]
fn test_snapshot_is_isolated_from_later_namespaces() {
    let capturer = ConfigSnapshotCapturer::new();
    let handle = capturer.handle();

    let mut namespace = ConfigurationNamespace::new()
        .with_source(PropertySource::new("a").with_property("codec.json.locale", "en_US"));
    EnvironmentEvents::new()
        .with_listener(Arc::new(capturer))
        .publish_environment_ready(namespace.clone());

    // Mutating the caller's copy after publication does not reach the snapshot.
    namespace.push_source(PropertySource::new("b").with_property("codec.json.locale", "de_DE"));

    let snapshot = handle.current().unwrap();
    assert_eq!(snapshot.get("codec.json.locale"), Some(&PropertyValue::from("en_US")));
    assert_eq!(snapshot.sources().len(), 1);
}
