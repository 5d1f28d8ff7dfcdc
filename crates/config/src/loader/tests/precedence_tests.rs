//! Layer precedence tests for the namespace loader.
//!
//! Responsibilities:
//! - Verify defaults < config file < environment < overrides.
//! - Verify builder call order does not change precedence.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use super::env_lock;
use crate::constants::{DEFAULTS_SOURCE_NAME, ENV_SOURCE_NAME, OVERRIDES_SOURCE_NAME};
use crate::loader::builder::NamespaceLoader;
use crate::loader::error::ConfigError;
use crate::value::PropertyValue;
use crate::source::PropertySource;

fn defaults() -> PropertySource {
    PropertySource::new(DEFAULTS_SOURCE_NAME)
        .with_property("codec.json.locale", "en_US")
        .with_property("codec.json.time-zone", "UTC")
        .with_property("codec.json.date-format", "%Y")
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("application.json");
    fs::write(
        &path,
        r#"{"codec": {"json": {"locale": "de_DE", "time-zone": "+01:00", "date-format": "%d"}}}"#,
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("CODEC_JSON_TIME_ZONE", Some("+02:00")),
            ("CODEC_JSON_DATE_FORMAT", Some("%m")),
        ],
        || {
            // Overrides are applied first on purpose: call order must not matter.
            let namespace = NamespaceLoader::new()
                .with_overrides(["codec.json.dateFormat=%H"])
                .unwrap()
                .with_defaults(defaults())
                .with_config_path(path.clone())
                .from_env()
                .from_file()
                .unwrap()
                .build();

            let locale = namespace.resolve("codec.json.locale").unwrap();
            assert_eq!(locale.value, &PropertyValue::from("de_DE"));
            assert!(locale.source.starts_with("file ["));

            let zone = namespace.resolve("codec.json.time-zone").unwrap();
            assert_eq!(zone.value, &PropertyValue::from("+02:00"));
            assert_eq!(zone.source, ENV_SOURCE_NAME);

            let format = namespace.resolve("codec.json.date-format").unwrap();
            assert_eq!(format.value, &PropertyValue::from("%H"));
            assert_eq!(format.source, OVERRIDES_SOURCE_NAME);
        },
    );
}

#[test]
fn test_defaults_only() {
    let namespace = NamespaceLoader::new().with_defaults(defaults()).build();
    assert_eq!(namespace.sources().len(), 1);
    assert_eq!(namespace.get("codec.json.locale"), Some(&PropertyValue::from("en_US")));
}

#[test]
fn test_empty_overrides_add_no_source() {
    let namespace = NamespaceLoader::new()
        .with_overrides(Vec::<String>::new())
        .unwrap()
        .build();
    assert!(namespace.sources().is_empty());
}

#[test]
fn test_malformed_override_is_rejected() {
    let result = NamespaceLoader::new().with_overrides(["codec.json.locale"]);
    assert!(matches!(result, Err(ConfigError::InvalidOverride { .. })));
}
