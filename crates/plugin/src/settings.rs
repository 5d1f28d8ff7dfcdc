//! Structured serialization settings bound from the namespace.

use serde::Serialize;
use std::collections::BTreeMap;

use jsonbridge_codec::{
    DeserializationFeature, GeneratorFeature, Inclusion, Locale, MapperFeature, ParserFeature,
    SerializationFeature, TimeZone,
};

/// Settings recognized under the codec prefix.
///
/// Every field is optional: an unset field means "leave the codec's own
/// value", which is different from setting it to the codec default. Feature
/// maps record only keys that were present, with their explicit value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SerializationSettings {
    pub default_property_inclusion: Option<Inclusion>,
    pub time_zone: Option<TimeZone>,
    pub deserialization: BTreeMap<DeserializationFeature, bool>,
    pub serialization: BTreeMap<SerializationFeature, bool>,
    pub mapper: BTreeMap<MapperFeature, bool>,
    pub parser: BTreeMap<ParserFeature, bool>,
    pub generator: BTreeMap<GeneratorFeature, bool>,
    /// A date-format type reference or a date pattern.
    pub date_format: Option<String>,
    /// A naming-strategy type reference or a constant name.
    pub property_naming_strategy: Option<String>,
    pub locale: Option<Locale>,
}

impl SerializationSettings {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.default_property_inclusion.is_none()
            && self.time_zone.is_none()
            && self.deserialization.is_empty()
            && self.serialization.is_empty()
            && self.mapper.is_empty()
            && self.parser.is_empty()
            && self.generator.is_empty()
            && self.date_format.is_none()
            && self.property_naming_strategy.is_none()
            && self.locale.is_none()
    }
}
