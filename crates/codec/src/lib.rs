//! JSON codec configuration model.
//!
//! This crate models the configurable surface of a JSON codec: inclusion
//! policy, time zone, locale, feature toggles, date formats, property naming
//! strategies and modules. A [`CodecBuilder`] accumulates settings and commits
//! them onto a live [`JsonCodec`] in one step.
//!
//! The codec's actual reading and writing of JSON is out of scope; consumers
//! read the committed [`CodecConfig`] to drive it.

mod builder;
mod codec;
mod config;
pub mod date_format;
mod error;
pub mod feature;
mod inclusion;
mod locale;
pub mod module;
pub mod naming;
mod registry;
mod time_zone;

pub use builder::CodecBuilder;
pub use codec::JsonCodec;
pub use config::{CodecConfig, CodecSummary};
pub use date_format::{
    DateFormat, PatternDateFormat, Rfc3339DateFormat, SharedDateFormat, StdDateFormat,
};
pub use error::CodecError;
pub use feature::{
    DeserializationFeature, Feature, FeatureCategory, GeneratorFeature, MapperFeature,
    ParserFeature, SerializationFeature,
};
pub use inclusion::Inclusion;
pub use locale::Locale;
pub use module::{
    CreatorMode, DateTimeModule, Module, ModuleContext, OptionalTypesModule,
    ParameterNamesModule, TypeSupport,
};
pub use naming::{NamingStrategy, PropertyNamingStrategy, StandardNamingStrategy};
pub use registry::TypeRegistry;
pub use time_zone::TimeZone;

/// Comparison key for constant names: uppercase alphanumerics only, so
/// `non-null`, `nonNull` and `NON_NULL` compare equal.
pub(crate) fn constant_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
