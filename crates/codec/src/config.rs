//! Committed codec configuration.
//!
//! Responsibilities:
//! - Hold the effective settings of one codec instance.
//! - Answer feature queries against per-feature defaults.
//! - Produce a serializable, comparable summary.
//!
//! Invariants:
//! - A `CodecConfig` is never mutated once committed; `JsonCodec` swaps in a
//!   new value instead.
//! - Setting a date format disables `WRITE_DATES_AS_TIMESTAMPS`; explicit
//!   feature toggles applied afterwards still win.
//! - Setting a time zone re-seeds the current date format with that zone.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::date_format::{SharedDateFormat, StdDateFormat};
use crate::feature::{Feature, FeatureCategory, SerializationFeature};
use crate::inclusion::Inclusion;
use crate::locale::Locale;
use crate::module::{CreatorMode, Module, ModuleContext, TypeSupport};
use crate::naming::NamingStrategy;
use crate::time_zone::TimeZone;

#[derive(Debug, Clone)]
pub struct CodecConfig {
    pub(crate) inclusion: Inclusion,
    pub(crate) time_zone: TimeZone,
    pub(crate) locale: Option<Locale>,
    pub(crate) features: BTreeMap<Feature, bool>,
    pub(crate) date_format: SharedDateFormat,
    pub(crate) naming_strategy: Option<NamingStrategy>,
    pub(crate) modules: Vec<&'static str>,
    pub(crate) creator_mode: Option<CreatorMode>,
    pub(crate) type_support: BTreeSet<TypeSupport>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            inclusion: Inclusion::default(),
            time_zone: TimeZone::utc(),
            locale: None,
            features: BTreeMap::new(),
            date_format: Arc::new(StdDateFormat::new()),
            naming_strategy: None,
            modules: Vec::new(),
            creator_mode: None,
            type_support: BTreeSet::new(),
        }
    }
}

impl CodecConfig {
    pub fn inclusion(&self) -> Inclusion {
        self.inclusion
    }

    pub fn time_zone(&self) -> TimeZone {
        self.time_zone
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn date_format(&self) -> &SharedDateFormat {
        &self.date_format
    }

    pub fn naming_strategy(&self) -> Option<&NamingStrategy> {
        self.naming_strategy.as_ref()
    }

    /// Names of installed modules, in installation order.
    pub fn modules(&self) -> &[&'static str] {
        &self.modules
    }

    pub fn creator_mode(&self) -> Option<CreatorMode> {
        self.creator_mode
    }

    pub fn supports(&self, support: TypeSupport) -> bool {
        self.type_support.contains(&support)
    }

    /// Effective state of `feature`: its explicit setting, else its default.
    pub fn is_enabled(&self, feature: impl Into<Feature>) -> bool {
        let feature = feature.into();
        self.features
            .get(&feature)
            .copied()
            .unwrap_or_else(|| feature.enabled_by_default())
    }

    /// Features set explicitly, as opposed to left at their defaults.
    pub fn explicit_features(&self) -> &BTreeMap<Feature, bool> {
        &self.features
    }

    pub(crate) fn set_feature(&mut self, feature: Feature, enabled: bool) {
        self.features.insert(feature, enabled);
    }

    pub(crate) fn set_date_format(&mut self, format: SharedDateFormat) {
        self.date_format = format;
        self.set_feature(SerializationFeature::WriteDatesAsTimestamps.into(), false);
    }

    pub(crate) fn set_time_zone(&mut self, zone: TimeZone) {
        self.time_zone = zone;
        self.date_format = self.date_format.with_time_zone(zone);
    }

    /// Install `module` unless one with the same name is already present.
    pub(crate) fn register_module(&mut self, module: &dyn Module) -> bool {
        if self.modules.contains(&module.name()) {
            return false;
        }
        module.setup(&mut ModuleContext::new(self));
        self.modules.push(module.name());
        true
    }

    /// Serializable view of every setting, with features fully resolved.
    pub fn summary(&self) -> CodecSummary {
        let features = FeatureCategory::ALL
            .iter()
            .map(|&category| {
                let states = category
                    .features()
                    .into_iter()
                    .map(|f| (f.constant_name(), self.is_enabled(f)))
                    .collect();
                (category, states)
            })
            .collect();

        CodecSummary {
            inclusion: self.inclusion,
            time_zone: self.time_zone.to_string(),
            locale: self.locale.as_ref().map(ToString::to_string),
            date_format: self.date_format.name(),
            date_format_time_zone: self.date_format.time_zone().to_string(),
            naming_strategy: self.naming_strategy.as_ref().map(|n| n.name().to_string()),
            modules: self.modules.iter().map(|m| m.to_string()).collect(),
            creator_mode: self.creator_mode,
            type_support: self.type_support.iter().copied().collect(),
            features,
        }
    }
}

/// Plain-data snapshot of a `CodecConfig`.
///
/// Two codecs configured the same way produce equal summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecSummary {
    pub inclusion: Inclusion,
    pub time_zone: String,
    pub locale: Option<String>,
    pub date_format: String,
    pub date_format_time_zone: String,
    pub naming_strategy: Option<String>,
    pub modules: Vec<String>,
    pub creator_mode: Option<CreatorMode>,
    pub type_support: Vec<TypeSupport>,
    pub features: BTreeMap<FeatureCategory, BTreeMap<&'static str, bool>>,
}
