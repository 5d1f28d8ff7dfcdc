//! Minimal engine configuration host and the JSON format plugin.

use std::fmt;
use std::sync::Arc;

use jsonbridge_config::SnapshotHandle;

use crate::error::PluginError;
use crate::plugin::data_format::{JsonCodecConfigurator, JsonDataFormat, JsonDataFormatProvider};
use crate::plugin::discovery::{DataFormats, DiscoveryScope};
use crate::translator::SerializationConfigTranslator;

/// A plugin with work to do before the engine starts.
pub trait PreInitializable: Send + Sync {
    /// # Errors
    ///
    /// An error aborts engine start-up.
    fn pre_init(&self, engine: &mut EngineConfiguration) -> Result<(), PluginError>;
}

/// Engine configuration as seen by plugins during pre-init.
#[derive(Default)]
pub struct EngineConfiguration {
    plugins: Vec<Arc<dyn PreInitializable>>,
    data_formats: DataFormats,
}

impl EngineConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_plugin(&mut self, plugin: Arc<dyn PreInitializable>) {
        self.plugins.push(plugin);
    }

    pub fn with_plugin(mut self, plugin: Arc<dyn PreInitializable>) -> Self {
        self.add_plugin(plugin);
        self
    }

    /// Run every plugin's pre-init hook in registration order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing plugin and returns its error.
    pub fn run_pre_init(&mut self) -> Result<(), PluginError> {
        let plugins = self.plugins.clone();
        tracing::debug!(plugins = plugins.len(), "Running plugin pre-init hooks");
        for plugin in plugins {
            plugin.pre_init(self)?;
        }
        Ok(())
    }

    pub fn data_formats(&self) -> &DataFormats {
        &self.data_formats
    }

    pub fn data_formats_mut(&mut self) -> &mut DataFormats {
        &mut self.data_formats
    }
}

impl fmt::Debug for EngineConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfiguration")
            .field("plugins", &self.plugins.len())
            .field("data_formats", &self.data_formats)
            .finish()
    }
}

/// Plugin that discovers data formats from its scope during pre-init.
#[derive(Debug, Clone)]
pub struct JsonFormatPlugin {
    scope: DiscoveryScope,
}

impl JsonFormatPlugin {
    pub const SCOPE_NAME: &'static str = "jsonbridge";

    pub fn new(scope: DiscoveryScope) -> Self {
        Self { scope }
    }

    /// The JSON provider plus a codec configurator reading `snapshot`.
    pub fn with_snapshot(snapshot: SnapshotHandle) -> Self {
        Self::with_translator(SerializationConfigTranslator::new(snapshot))
    }

    pub fn with_translator(translator: SerializationConfigTranslator) -> Self {
        Self::new(
            DiscoveryScope::new(Self::SCOPE_NAME)
                .with_provider(JsonDataFormatProvider)
                .with_configurator::<JsonDataFormat, _>(JsonCodecConfigurator::new(translator)),
        )
    }

    pub fn scope(&self) -> &DiscoveryScope {
        &self.scope
    }
}

impl PreInitializable for JsonFormatPlugin {
    fn pre_init(&self, engine: &mut EngineConfiguration) -> Result<(), PluginError> {
        engine.data_formats_mut().load_data_formats(&self.scope)?;
        Ok(())
    }
}
