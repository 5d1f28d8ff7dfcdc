//! Tests for the plugin-host boundary: discovery, pre-init and configurators.

use std::sync::{Arc, Mutex};

use jsonbridge_codec::{Inclusion, SerializationFeature};
use jsonbridge_config::{
    ConfigSnapshotCapturer, ConfigurationNamespace, EnvironmentEvents, EnvironmentListener,
    PropertySource,
};
use jsonbridge_plugin::{
    DataFormat, DataFormatConfigurator, DataFormats, DiscoveryScope, EngineConfiguration,
    JSON_DATA_FORMAT, JsonDataFormat, JsonDataFormatProvider, JsonFormatPlugin, PluginError,
    TranslateError,
};

fn namespace() -> ConfigurationNamespace {
    ConfigurationNamespace::new().with_source(
        PropertySource::new("applicationConfig")
            .with_property("codec.json.default-property-inclusion", "non_null")
            .with_property("codec.json.serialization.indent-output", "true"),
    )
}

#[test]
fn test_startup_sequence_configures_discovered_codec() {
    let capturer = Arc::new(ConfigSnapshotCapturer::new());
    let events = EnvironmentEvents::new().with_listener(capturer.clone());
    events.publish_environment_ready(namespace());

    let mut engine =
        EngineConfiguration::new().with_plugin(Arc::new(JsonFormatPlugin::with_snapshot(capturer.handle())));
    engine.run_pre_init().unwrap();

    let json = engine
        .data_formats()
        .get_as::<JsonDataFormat>(JSON_DATA_FORMAT)
        .unwrap();
    let config = json.codec().config();
    assert_eq!(config.inclusion(), Inclusion::NonNull);
    assert!(config.is_enabled(SerializationFeature::IndentOutput));
    assert_eq!(engine.data_formats().names(), [JSON_DATA_FORMAT]);
}

#[test]
fn test_pre_init_before_capture_fails() {
    let capturer = ConfigSnapshotCapturer::new();
    let mut engine =
        EngineConfiguration::new().with_plugin(Arc::new(JsonFormatPlugin::with_snapshot(capturer.handle())));

    let err = engine.run_pre_init().unwrap_err();
    assert!(matches!(
        err,
        PluginError::ConfigureFailed {
            ref format,
            source: TranslateError::ConfigurationNotCaptured,
        } if format == JSON_DATA_FORMAT
    ));
    assert!(engine.data_formats().is_empty());
}

#[test]
fn test_every_new_instance_is_configured() {
    let capturer = ConfigSnapshotCapturer::new();
    let plugin = JsonFormatPlugin::with_snapshot(capturer.handle());
    let mut formats = DataFormats::new();

    capturer.on_environment_ready(&Arc::new(namespace()));
    assert_eq!(formats.load_data_formats(plugin.scope()).unwrap(), 1);

    let fresh = formats.instantiate(JSON_DATA_FORMAT).unwrap();
    let fresh = fresh.as_any().downcast_ref::<JsonDataFormat>().unwrap();
    assert_eq!(fresh.codec().config().inclusion(), Inclusion::NonNull);

    let published = formats.get(JSON_DATA_FORMAT).unwrap();
    assert!(!std::ptr::eq(
        published.as_any().downcast_ref::<JsonDataFormat>().unwrap(),
        fresh
    ));
}

#[test]
fn test_instantiate_unknown_format() {
    let err = DataFormats::new().instantiate("application/xml").unwrap_err();
    assert!(matches!(err, PluginError::UnknownDataFormat { ref name } if name == "application/xml"));
}

#[derive(Debug, Default)]
struct XmlDataFormat;

impl DataFormat for XmlDataFormat {
    fn name(&self) -> &str {
        "application/xml"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug)]
struct XmlProvider;

impl jsonbridge_plugin::DataFormatProvider for XmlProvider {
    fn data_format_name(&self) -> &str {
        "application/xml"
    }

    fn create_instance(&self) -> Arc<dyn DataFormat> {
        Arc::new(XmlDataFormat)
    }
}

struct RecordingConfigurator {
    seen: Arc<Mutex<Vec<String>>>,
}

impl DataFormatConfigurator<JsonDataFormat> for RecordingConfigurator {
    fn configure(&self, format: &JsonDataFormat) -> Result<(), TranslateError> {
        self.seen.lock().unwrap().push(format.name().to_string());
        Ok(())
    }
}

#[test]
fn test_configurators_only_see_their_format_type() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let scope = DiscoveryScope::new("test")
        .with_provider(JsonDataFormatProvider)
        .with_provider(XmlProvider)
        .with_configurator::<JsonDataFormat, _>(RecordingConfigurator { seen: seen.clone() });

    let mut formats = DataFormats::new();
    assert_eq!(formats.load_data_formats(&scope).unwrap(), 2);

    assert_eq!(*seen.lock().unwrap(), vec![JSON_DATA_FORMAT.to_string()]);
    assert!(formats.get_as::<XmlDataFormat>("application/xml").is_some());
    assert!(formats.get_as::<JsonDataFormat>("application/xml").is_none());
}
