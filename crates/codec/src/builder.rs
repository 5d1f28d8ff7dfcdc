//! Builder that accumulates codec settings and commits them in one step.
//!
//! Responsibilities:
//! - Record settings without touching any codec.
//! - Replay them onto a base configuration in a fixed order and swap the
//!   result into a codec.
//!
//! Invariants:
//! - Unset settings leave the codec's current value alone.
//! - Replay order: modules, date format, locale, time zone, inclusion,
//!   features, naming strategy. Later steps may refine earlier ones (a time
//!   zone re-seeds the date format, an explicit feature overrides the
//!   date-format side effect).
//! - The last call for the same feature wins.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::codec::JsonCodec;
use crate::config::CodecConfig;
use crate::date_format::SharedDateFormat;
use crate::feature::Feature;
use crate::inclusion::Inclusion;
use crate::locale::Locale;
use crate::module::Module;
use crate::naming::NamingStrategy;
use crate::time_zone::TimeZone;

#[derive(Clone, Default)]
pub struct CodecBuilder {
    inclusion: Option<Inclusion>,
    time_zone: Option<TimeZone>,
    locale: Option<Locale>,
    date_format: Option<SharedDateFormat>,
    naming_strategy: Option<NamingStrategy>,
    features: BTreeMap<Feature, bool>,
    modules: Vec<Arc<dyn Module>>,
}

impl CodecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serialization_inclusion(&mut self, inclusion: Inclusion) -> &mut Self {
        self.inclusion = Some(inclusion);
        self
    }

    pub fn time_zone(&mut self, zone: TimeZone) -> &mut Self {
        self.time_zone = Some(zone);
        self
    }

    pub fn locale(&mut self, locale: Locale) -> &mut Self {
        self.locale = Some(locale);
        self
    }

    pub fn date_format(&mut self, format: SharedDateFormat) -> &mut Self {
        self.date_format = Some(format);
        self
    }

    pub fn property_naming_strategy(&mut self, strategy: NamingStrategy) -> &mut Self {
        self.naming_strategy = Some(strategy);
        self
    }

    pub fn feature_to_enable(&mut self, feature: impl Into<Feature>) -> &mut Self {
        self.features.insert(feature.into(), true);
        self
    }

    pub fn feature_to_disable(&mut self, feature: impl Into<Feature>) -> &mut Self {
        self.features.insert(feature.into(), false);
        self
    }

    /// Queue modules for installation; duplicates by name install once.
    pub fn modules_to_install<I>(&mut self, modules: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        self.modules.extend(modules);
        self
    }

    pub fn configured_inclusion(&self) -> Option<Inclusion> {
        self.inclusion
    }

    pub fn configured_time_zone(&self) -> Option<TimeZone> {
        self.time_zone
    }

    pub fn configured_locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn configured_date_format(&self) -> Option<&SharedDateFormat> {
        self.date_format.as_ref()
    }

    pub fn configured_naming_strategy(&self) -> Option<&NamingStrategy> {
        self.naming_strategy.as_ref()
    }

    /// Explicit feature calls recorded so far (`true` = enable).
    pub fn configured_features(&self) -> &BTreeMap<Feature, bool> {
        &self.features
    }

    pub fn configured_modules(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    /// True if nothing at all has been recorded.
    pub fn is_empty(&self) -> bool {
        self.inclusion.is_none()
            && self.time_zone.is_none()
            && self.locale.is_none()
            && self.date_format.is_none()
            && self.naming_strategy.is_none()
            && self.features.is_empty()
            && self.modules.is_empty()
    }

    /// Replay the recorded settings on top of `base`.
    pub fn build_config(&self, base: &CodecConfig) -> CodecConfig {
        let mut config = base.clone();

        for module in &self.modules {
            config.register_module(module.as_ref());
        }
        if let Some(format) = &self.date_format {
            config.set_date_format(Arc::clone(format));
        }
        if let Some(locale) = &self.locale {
            config.locale = Some(locale.clone());
        }
        if let Some(zone) = self.time_zone {
            config.set_time_zone(zone);
        }
        if let Some(inclusion) = self.inclusion {
            config.inclusion = inclusion;
        }
        for (&feature, &enabled) in &self.features {
            config.set_feature(feature, enabled);
        }
        if let Some(strategy) = &self.naming_strategy {
            config.naming_strategy = Some(Arc::clone(strategy));
        }

        config
    }

    /// Commit the recorded settings onto `codec`.
    ///
    /// Concurrent readers of the codec observe either the previous or the new
    /// configuration, never a mix.
    pub fn configure(&self, codec: &JsonCodec) {
        codec.update(|current| self.build_config(current));
        tracing::debug!(
            features = self.features.len(),
            modules = self.modules.len(),
            "Committed codec configuration"
        );
    }
}

impl fmt::Debug for CodecBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecBuilder")
            .field("inclusion", &self.inclusion)
            .field("time_zone", &self.time_zone)
            .field("locale", &self.locale)
            .field("date_format", &self.date_format.as_ref().map(|d| d.name()))
            .field(
                "naming_strategy",
                &self.naming_strategy.as_ref().map(|n| n.name().to_string()),
            )
            .field("features", &self.features)
            .field("modules", &self.configured_modules())
            .finish()
    }
}
