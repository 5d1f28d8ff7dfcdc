//! Application of bound settings onto a codec builder.
//!
//! Responsibilities:
//! - Issue one builder call per set field; leave unset fields alone.
//! - Resolve date-format and naming-strategy values through their ordered
//!   strategies.
//! - Always queue the compatibility modules.
//!
//! Does NOT handle:
//! - Committing the builder onto a codec (see `translator.rs`).
//!
//! Invariants:
//! - Every feature-map entry becomes an explicit enable or disable call;
//!   `false` is never treated as absence.
//! - A pattern date format is seeded with the configured time zone, or the
//!   codec default zone when none is configured.
//! - On error the builder may hold part of the settings; callers must discard
//!   it rather than commit it.

use std::collections::BTreeMap;
use std::sync::Arc;

use jsonbridge_codec::{
    CodecBuilder, CodecConfig, CreatorMode, DateTimeModule, Feature, Module,
    OptionalTypesModule, ParameterNamesModule, TypeRegistry,
};

use crate::error::TranslateError;
use crate::resolve::{resolve_date_format, resolve_naming_strategy};
use crate::settings::SerializationSettings;

/// The modules every configured codec carries, in installation order.
pub fn compatibility_modules() -> Vec<Arc<dyn Module>> {
    vec![
        Arc::new(ParameterNamesModule::new(CreatorMode::Default)),
        Arc::new(OptionalTypesModule),
        Arc::new(DateTimeModule),
    ]
}

/// Turns `SerializationSettings` into builder calls.
#[derive(Debug, Clone)]
pub struct SerializationConfigApplier {
    types: Arc<TypeRegistry>,
}

impl Default for SerializationConfigApplier {
    fn default() -> Self {
        Self::new(Arc::new(TypeRegistry::with_builtins()))
    }
}

impl SerializationConfigApplier {
    /// Resolve type references against `types`.
    pub fn new(types: Arc<TypeRegistry>) -> Self {
        Self { types }
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Apply every set field of `settings` to `builder`.
    ///
    /// # Errors
    ///
    /// - `TranslateError::InvalidDateFormat` if the date format is neither a
    ///   registered type nor a valid pattern.
    /// - `TranslateError::UnknownNamingStrategy` if the naming strategy is
    ///   neither a registered type nor a known constant.
    pub fn apply(
        &self,
        settings: &SerializationSettings,
        builder: &mut CodecBuilder,
    ) -> Result<(), TranslateError> {
        if let Some(inclusion) = settings.default_property_inclusion {
            builder.serialization_inclusion(inclusion);
        }
        if let Some(zone) = settings.time_zone {
            builder.time_zone(zone);
        }

        apply_features(builder, &settings.deserialization);
        apply_features(builder, &settings.serialization);
        apply_features(builder, &settings.mapper);
        apply_features(builder, &settings.parser);
        apply_features(builder, &settings.generator);

        if let Some(value) = settings.date_format.as_deref() {
            let zone = settings
                .time_zone
                .unwrap_or_else(|| CodecConfig::default().time_zone());
            let format = resolve_date_format(value, zone, &self.types).map_err(|exhausted| {
                TranslateError::InvalidDateFormat {
                    value: value.to_string(),
                    reason: exhausted.last_reason(),
                }
            })?;
            builder.date_format(format);
        }

        if let Some(value) = settings.property_naming_strategy.as_deref() {
            let strategy = resolve_naming_strategy(value, &self.types).map_err(|_| {
                TranslateError::UnknownNamingStrategy {
                    name: value.to_string(),
                }
            })?;
            builder.property_naming_strategy(strategy);
        }

        builder.modules_to_install(compatibility_modules());

        if let Some(locale) = &settings.locale {
            builder.locale(locale.clone());
        }

        Ok(())
    }
}

fn apply_features<F>(builder: &mut CodecBuilder, features: &BTreeMap<F, bool>)
where
    F: Copy + Into<Feature>,
{
    for (&feature, &enabled) in features {
        if enabled {
            builder.feature_to_enable(feature);
        } else {
            builder.feature_to_disable(feature);
        }
    }
}
