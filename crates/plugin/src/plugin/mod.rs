//! Plugin-host boundary.
//!
//! Responsibilities:
//! - Model the host's data-format subsystem: providers create data formats,
//!   configurators adjust every instance a provider creates.
//! - Discover providers and configurators from an explicit `DiscoveryScope`
//!   during the host's pre-init phase.
//! - Wire the JSON codec configurator to a `SnapshotHandle` at registration
//!   time.
//!
//! Does NOT handle:
//! - Translation itself (see `SerializationConfigTranslator`).
//!
//! Invariants:
//! - A configurator only ever sees data formats of the type it was
//!   registered for.
//! - A data format is published only after every applicable configurator
//!   succeeded on it.

mod data_format;
mod discovery;
mod engine;

pub use data_format::{
    DataFormat, DataFormatConfigurator, DataFormatProvider, JSON_DATA_FORMAT,
    JsonCodecConfigurator, JsonDataFormat, JsonDataFormatProvider,
};
pub use discovery::{DataFormats, DiscoveryScope};
pub use engine::{EngineConfiguration, JsonFormatPlugin, PreInitializable};
