//! Bridge between the captured configuration namespace and JSON codecs.
//!
//! Two phases run at different points of process lifetime:
//! - early, a `ConfigSnapshotCapturer` (from `jsonbridge-config`) stores the
//!   resolved namespace in a `SnapshotHandle`;
//! - later, whenever the plugin host creates a JSON codec, the
//!   [`SerializationConfigTranslator`] binds the recognized keys into
//!   [`SerializationSettings`], applies them to a `CodecBuilder` and commits the
//!   result onto the codec.
//!
//! The plugin-host side (data-format discovery, configurator registration,
//! pre-init hook) lives in [`plugin`].

mod applier;
mod binder;
mod error;
pub mod plugin;
mod resolve;
mod settings;
mod translator;

pub use applier::{SerializationConfigApplier, compatibility_modules};
pub use binder::{BoundSettings, SettingsBinder};
pub use error::{PluginError, PropertyBindingError, TranslateError};
pub use plugin::{
    DataFormat, DataFormatConfigurator, DataFormatProvider, DataFormats, DiscoveryScope,
    EngineConfiguration, JSON_DATA_FORMAT, JsonCodecConfigurator, JsonDataFormat,
    JsonDataFormatProvider, JsonFormatPlugin, PreInitializable,
};
pub use resolve::{DateFormatResolution, NamingResolution};
pub use settings::SerializationSettings;
pub use translator::{SerializationConfigTranslator, TranslationReport};
