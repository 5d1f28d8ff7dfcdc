//! Binding of prefixed namespace properties into `SerializationSettings`.
//!
//! Responsibilities:
//! - Select the properties under the codec prefix and map them onto settings
//!   fields with relaxed name matching.
//! - Coerce values: text to boolean, to enum constants, to time zones and
//!   locales; nested keys to per-category feature maps.
//!
//! Does NOT handle:
//! - Date-format and naming-strategy resolution (values stay raw strings here).
//! - Applying settings to a codec (see `applier.rs`).
//!
//! Invariants:
//! - Unknown keys under the prefix are ignored.
//! - Blank values leave their field unset.
//! - A value that cannot be coerced leaves its field unset, yields one
//!   `PropertyBindingError`, and never stops the remaining keys from binding.
//! - Feature entries naming no known feature of their category are reported
//!   the same way and skipped.

use serde::Serialize;

use jsonbridge_codec::{Feature, FeatureCategory, Inclusion, Locale, TimeZone};
use jsonbridge_config::name::canonical;
use jsonbridge_config::{ConfigurationNamespace, DEFAULT_PREFIX, PrefixedProperty, PropertyValue};

use crate::error::PropertyBindingError;
use crate::settings::SerializationSettings;

/// Result of one binding pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoundSettings {
    pub settings: SerializationSettings,
    pub errors: Vec<PropertyBindingError>,
}

/// Binds settings from the properties under one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsBinder {
    prefix: String,
}

impl Default for SettingsBinder {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarField {
    Inclusion,
    TimeZone,
    DateFormat,
    NamingStrategy,
    Locale,
}

impl ScalarField {
    fn from_path(path: &[String]) -> Option<Self> {
        match canonical(&path.concat()).as_str() {
            "defaultpropertyinclusion" => Some(Self::Inclusion),
            "timezone" => Some(Self::TimeZone),
            "dateformat" => Some(Self::DateFormat),
            "propertynamingstrategy" => Some(Self::NamingStrategy),
            "locale" => Some(Self::Locale),
            _ => None,
        }
    }
}

impl SettingsBinder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Bind every recognized property under the prefix.
    pub fn bind(&self, namespace: &ConfigurationNamespace) -> BoundSettings {
        let mut bound = BoundSettings::default();

        for property in namespace.entries_under(&self.prefix) {
            if property.value.is_blank() {
                continue;
            }
            if let Err(error) = bind_property(&property, &mut bound.settings) {
                tracing::warn!(
                    key = %error.key,
                    value = %error.value,
                    expected = error.expected_type,
                    source = property.source,
                    "Skipping codec property that cannot be bound"
                );
                bound.errors.push(error);
            }
        }

        tracing::debug!(
            prefix = %self.prefix,
            empty = bound.settings.is_empty(),
            errors = bound.errors.len(),
            "Bound serialization settings"
        );
        bound
    }
}

fn bind_property(
    property: &PrefixedProperty<'_>,
    settings: &mut SerializationSettings,
) -> Result<(), PropertyBindingError> {
    if let Some(field) = ScalarField::from_path(&property.path) {
        return bind_scalar(field, property, settings);
    }

    let category = property
        .path
        .first()
        .and_then(|segment| FeatureCategory::from_name(segment));
    match category {
        Some(category) if property.path.len() > 1 => {
            let name = property.path[1..].join("_");
            let feature = category
                .feature(&name)
                .ok_or_else(|| binding_error(property, feature_type(category)))?;
            let enabled = coerce_bool(property.value).ok_or_else(|| binding_error(property, "boolean"))?;
            insert_feature(settings, feature, enabled);
            Ok(())
        }
        _ => {
            tracing::debug!(key = property.key, "Ignoring unrecognized codec property");
            Ok(())
        }
    }
}

fn bind_scalar(
    field: ScalarField,
    property: &PrefixedProperty<'_>,
    settings: &mut SerializationSettings,
) -> Result<(), PropertyBindingError> {
    let text = property.value.as_text();
    let text = text.trim();
    match field {
        ScalarField::Inclusion => {
            let inclusion = text
                .parse::<Inclusion>()
                .map_err(|_| binding_error(property, "inclusion policy"))?;
            settings.default_property_inclusion = Some(inclusion);
        }
        ScalarField::TimeZone => {
            let zone = text
                .parse::<TimeZone>()
                .map_err(|_| binding_error(property, "time zone"))?;
            settings.time_zone = Some(zone);
        }
        ScalarField::Locale => {
            let locale = text
                .parse::<Locale>()
                .map_err(|_| binding_error(property, "locale"))?;
            settings.locale = Some(locale);
        }
        ScalarField::DateFormat => settings.date_format = Some(text.to_string()),
        ScalarField::NamingStrategy => settings.property_naming_strategy = Some(text.to_string()),
    }
    Ok(())
}

fn insert_feature(settings: &mut SerializationSettings, feature: Feature, enabled: bool) {
    match feature {
        Feature::Deserialization(f) => {
            settings.deserialization.insert(f, enabled);
        }
        Feature::Serialization(f) => {
            settings.serialization.insert(f, enabled);
        }
        Feature::Mapper(f) => {
            settings.mapper.insert(f, enabled);
        }
        Feature::Parser(f) => {
            settings.parser.insert(f, enabled);
        }
        Feature::Generator(f) => {
            settings.generator.insert(f, enabled);
        }
    }
}

fn coerce_bool(value: &PropertyValue) -> Option<bool> {
    match value {
        PropertyValue::Bool(b) => Some(*b),
        PropertyValue::Integer(1) => Some(true),
        PropertyValue::Integer(0) => Some(false),
        PropertyValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Some(true),
            "false" | "off" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn feature_type(category: FeatureCategory) -> &'static str {
    match category {
        FeatureCategory::Deserialization => "deserialization feature",
        FeatureCategory::Serialization => "serialization feature",
        FeatureCategory::Mapper => "mapper feature",
        FeatureCategory::Parser => "parser feature",
        FeatureCategory::Generator => "generator feature",
    }
}

fn binding_error(property: &PrefixedProperty<'_>, expected_type: &'static str) -> PropertyBindingError {
    PropertyBindingError {
        key: property.key.to_string(),
        expected_type,
        value: property.value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonbridge_codec::{DeserializationFeature, MapperFeature, SerializationFeature};
    use jsonbridge_config::PropertySource;

    fn namespace(entries: &[(&str, PropertyValue)]) -> ConfigurationNamespace {
        let mut source = PropertySource::new("test");
        for (key, value) in entries {
            source.insert(*key, value.clone());
        }
        ConfigurationNamespace::new().with_source(source)
    }

    fn text(value: &str) -> PropertyValue {
        PropertyValue::from(value)
    }

    #[test]
    fn test_no_prefixed_keys_binds_nothing() {
        let ns = namespace(&[("server.port", text("8080")), ("codec.yaml.locale", text("en"))]);
        let bound = SettingsBinder::default().bind(&ns);
        assert!(bound.settings.is_empty());
        assert!(bound.errors.is_empty());
    }

    #[test]
    fn test_scalar_fields_with_relaxed_names() {
        let ns = namespace(&[
            ("codec.json.default-property-inclusion", text("non_null")),
            ("codec.json.timeZone", text("+02:00")),
            ("CODEC.JSON.LOCALE", text("en-gb")),
            ("codec.json.date.format", text("%Y-%m-%d")),
            ("codec.json.property_naming_strategy", text("SNAKE_CASE")),
        ]);
        let settings = SettingsBinder::default().bind(&ns).settings;

        assert_eq!(settings.default_property_inclusion, Some(Inclusion::NonNull));
        assert_eq!(settings.time_zone, Some("+02:00".parse().unwrap()));
        assert_eq!(settings.locale.map(|l| l.to_string()).as_deref(), Some("en_GB"));
        assert_eq!(settings.date_format.as_deref(), Some("%Y-%m-%d"));
        assert_eq!(settings.property_naming_strategy.as_deref(), Some("SNAKE_CASE"));
    }

    #[test]
    fn test_region_time_zone_binds() {
        let ns = namespace(&[("codec.json.time-zone", text("America/New_York"))]);
        let bound = SettingsBinder::default().bind(&ns);

        assert!(bound.errors.is_empty());
        let zone = bound.settings.time_zone.unwrap();
        assert_eq!(zone.to_string(), "America/New_York");
        assert!(zone.region().is_some());
    }

    #[test]
    fn test_feature_maps_from_every_key_shape() {
        let ns = namespace(&[
            ("codec.json.serialization.INDENT_OUTPUT", PropertyValue::Bool(true)),
            ("codec.json.deserialization[fail-on-unknown-properties]", text("false")),
            ("codec.json.mapper.sort.properties.alphabetically", text("ON")),
        ]);
        let settings = SettingsBinder::default().bind(&ns).settings;

        assert_eq!(settings.serialization.get(&SerializationFeature::IndentOutput), Some(&true));
        assert_eq!(
            settings.deserialization.get(&DeserializationFeature::FailOnUnknownProperties),
            Some(&false)
        );
        assert_eq!(
            settings.mapper.get(&MapperFeature::SortPropertiesAlphabetically),
            Some(&true)
        );
    }

    #[test]
    fn test_bad_values_are_reported_and_rest_still_binds() {
        let ns = namespace(&[
            ("codec.json.time-zone", text("Mars/Olympus")),
            ("codec.json.serialization.INDENT_OUTPUT", text("maybe")),
            ("codec.json.serialization.NOT_A_FEATURE", text("true")),
            ("codec.json.locale", text("fr_FR")),
        ]);
        let bound = SettingsBinder::default().bind(&ns);

        assert_eq!(bound.settings.time_zone, None);
        assert!(bound.settings.serialization.is_empty());
        assert!(bound.settings.locale.is_some());

        let expected: Vec<_> = bound.errors.iter().map(|e| e.expected_type).collect();
        assert_eq!(expected, vec!["time zone", "boolean", "serialization feature"]);
        assert_eq!(bound.errors[0].key, "codec.json.time-zone");
        assert_eq!(bound.errors[0].value, "Mars/Olympus");
    }

    #[test]
    fn test_blank_and_unknown_keys_are_ignored() {
        let ns = namespace(&[
            ("codec.json.locale", text("  ")),
            ("codec.json.modules[0]", text("custom")),
            ("codec.json.serialization", text("true")),
        ]);
        let bound = SettingsBinder::default().bind(&ns);
        assert!(bound.settings.is_empty());
        assert!(bound.errors.is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let ns = namespace(&[("app.json.locale", text("it")), ("codec.json.locale", text("de"))]);
        let settings = SettingsBinder::new("app.json").bind(&ns).settings;
        assert_eq!(settings.locale.map(|l| l.to_string()).as_deref(), Some("it"));
    }

    #[test]
    fn test_later_source_wins_across_key_spellings() {
        let ns = ConfigurationNamespace::new()
            .with_source(PropertySource::new("file").with_property("codec.json.serialization.indent-output", true))
            .with_source(
                PropertySource::new("env").with_property("codec.json.serialization.indent.output", "false"),
            );
        let settings = SettingsBinder::default().bind(&ns).settings;
        assert_eq!(settings.serialization.get(&SerializationFeature::IndentOutput), Some(&false));
    }
}
