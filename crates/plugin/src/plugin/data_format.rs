//! Data formats, their providers and configurators.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use jsonbridge_codec::JsonCodec;
use jsonbridge_config::SnapshotHandle;

use crate::error::TranslateError;
use crate::translator::SerializationConfigTranslator;

/// Name under which the JSON data format is registered.
pub const JSON_DATA_FORMAT: &str = "application/json";

/// A named (de)serialization format owned by the plugin host.
pub trait DataFormat: Any + Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Downcasting hook for typed configurators.
    fn as_any(&self) -> &dyn Any;
}

/// Creates data-format instances on behalf of the host.
pub trait DataFormatProvider: Debug + Send + Sync {
    fn data_format_name(&self) -> &str;

    fn create_instance(&self) -> Arc<dyn DataFormat>;
}

/// Adjusts each instance of data format `F` the host creates.
pub trait DataFormatConfigurator<F: DataFormat>: Send + Sync {
    /// # Errors
    ///
    /// Any error aborts publication of the instance.
    fn configure(&self, format: &F) -> Result<(), TranslateError>;
}

/// The JSON data format: a thin owner of one `JsonCodec`.
#[derive(Debug, Default)]
pub struct JsonDataFormat {
    codec: JsonCodec,
}

impl JsonDataFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codec(&self) -> &JsonCodec {
        &self.codec
    }
}

impl DataFormat for JsonDataFormat {
    fn name(&self) -> &str {
        JSON_DATA_FORMAT
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDataFormatProvider;

impl DataFormatProvider for JsonDataFormatProvider {
    fn data_format_name(&self) -> &str {
        JSON_DATA_FORMAT
    }

    fn create_instance(&self) -> Arc<dyn DataFormat> {
        Arc::new(JsonDataFormat::new())
    }
}

/// Configures every JSON codec from the captured namespace.
#[derive(Debug, Clone)]
pub struct JsonCodecConfigurator {
    translator: SerializationConfigTranslator,
}

impl JsonCodecConfigurator {
    pub fn new(translator: SerializationConfigTranslator) -> Self {
        Self { translator }
    }

    /// Configurator translating from `snapshot` with default settings.
    pub fn from_snapshot(snapshot: SnapshotHandle) -> Self {
        Self::new(SerializationConfigTranslator::new(snapshot))
    }

    pub fn translator(&self) -> &SerializationConfigTranslator {
        &self.translator
    }
}

impl DataFormatConfigurator<JsonDataFormat> for JsonCodecConfigurator {
    fn configure(&self, format: &JsonDataFormat) -> Result<(), TranslateError> {
        tracing::debug!(format = format.name(), "Configuring JSON data format");
        self.translator.translate(format.codec()).map(|_| ())
    }
}
