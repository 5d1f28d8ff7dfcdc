//! Public-API tests for configuring a codec through the builder.

use std::sync::Arc;

use chrono::{TimeZone as _, Utc};
use jsonbridge_codec::{
    CodecBuilder, CodecConfig, CreatorMode, DateTimeModule, FeatureCategory, GeneratorFeature,
    Inclusion, JsonCodec, Locale, Module, OptionalTypesModule, ParameterNamesModule,
    PatternDateFormat, SerializationFeature, StandardNamingStrategy, TimeZone, TypeSupport,
};

fn compatibility_modules() -> Vec<Arc<dyn Module>> {
    vec![
        Arc::new(ParameterNamesModule::new(CreatorMode::Default)),
        Arc::new(OptionalTypesModule),
        Arc::new(DateTimeModule),
    ]
}

#[test]
fn test_full_configuration_round_trip_through_summary() {
    let zone: TimeZone = "+01:00".parse().unwrap();
    let mut builder = CodecBuilder::new();
    builder
        .modules_to_install(compatibility_modules())
        .serialization_inclusion(Inclusion::NonAbsent)
        .time_zone(zone)
        .locale("de_DE".parse::<Locale>().unwrap())
        .date_format(Arc::new(
            PatternDateFormat::new("%d.%m.%Y", TimeZone::utc()).unwrap(),
        ))
        .feature_to_enable(SerializationFeature::IndentOutput)
        .feature_to_disable(GeneratorFeature::QuoteFieldNames)
        .property_naming_strategy(StandardNamingStrategy::KebabCase.shared());

    let codec = JsonCodec::new();
    builder.configure(&codec);
    let config = codec.config();

    assert_eq!(config.modules(), ["parameter-names", "optional-types", "date-time"]);
    assert_eq!(config.creator_mode(), Some(CreatorMode::Default));
    assert!(config.supports(TypeSupport::OptionalValues));
    assert!(config.supports(TypeSupport::DateTime));
    assert_eq!(config.locale().map(ToString::to_string).as_deref(), Some("de_DE"));

    let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 30, 0).single().unwrap();
    assert_eq!(config.date_format().format(instant), "01.01.2024");

    let summary = config.summary();
    assert_eq!(summary.time_zone, "+01:00");
    assert_eq!(summary.date_format_time_zone, "+01:00");
    assert_eq!(summary.naming_strategy.as_deref(), Some("KEBAB_CASE"));
    assert_eq!(
        summary.features[&FeatureCategory::Serialization]["WRITE_DATES_AS_TIMESTAMPS"],
        false
    );
    assert_eq!(summary.features[&FeatureCategory::Generator]["QUOTE_FIELD_NAMES"], false);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["inclusion"], "NON_ABSENT");
    assert_eq!(json["features"]["serialization"]["INDENT_OUTPUT"], true);
    assert_eq!(json["type_support"][0], "parameter-names");
}

#[test]
fn test_same_builder_on_two_codecs_gives_equal_summaries() {
    let mut builder = CodecBuilder::new();
    builder
        .modules_to_install(compatibility_modules())
        .feature_to_enable(SerializationFeature::OrderMapEntriesByKeys);

    let first = JsonCodec::new();
    let second = JsonCodec::with_config(CodecConfig::default());
    builder.configure(&first);
    builder.configure(&second);

    assert_eq!(first.config().summary(), second.config().summary());
}

#[test]
fn test_reconfigure_keeps_unrelated_settings() {
    let codec = JsonCodec::new();
    CodecBuilder::new()
        .serialization_inclusion(Inclusion::NonNull)
        .configure(&codec);
    CodecBuilder::new()
        .feature_to_enable(SerializationFeature::IndentOutput)
        .configure(&codec);

    let config = codec.config();
    assert_eq!(config.inclusion(), Inclusion::NonNull);
    assert!(config.is_enabled(SerializationFeature::IndentOutput));
}
