//! Codec extension modules.
//!
//! A module contributes type support to a codec when it is registered. The
//! three modules here are the compatibility set every configured codec
//! carries: constructor parameter names, optional value types and date/time
//! types.

use serde::Serialize;
use std::fmt::Debug;

use crate::config::CodecConfig;

/// Extension installed into a codec configuration.
pub trait Module: Debug + Send + Sync {
    /// Unique name; registering a module twice under one name is a no-op.
    fn name(&self) -> &'static str;

    fn setup(&self, context: &mut ModuleContext<'_>);
}

/// What a module may change while being set up.
pub struct ModuleContext<'a> {
    config: &'a mut CodecConfig,
}

impl<'a> ModuleContext<'a> {
    pub(crate) fn new(config: &'a mut CodecConfig) -> Self {
        Self { config }
    }

    pub fn set_creator_mode(&mut self, mode: CreatorMode) {
        self.config.creator_mode = Some(mode);
    }

    pub fn add_type_support(&mut self, support: TypeSupport) {
        self.config.type_support.insert(support);
    }
}

/// How constructor parameters are matched to properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreatorMode {
    /// Let the codec decide per constructor.
    #[default]
    Default,
    /// Single-argument constructors take the whole value.
    Delegating,
    /// Arguments bind to named properties.
    Properties,
    Disabled,
}

/// Value families a codec knows how to read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeSupport {
    ParameterNames,
    OptionalValues,
    DateTime,
}

/// Binds constructor parameters by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterNamesModule {
    mode: CreatorMode,
}

impl ParameterNamesModule {
    pub fn new(mode: CreatorMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CreatorMode {
        self.mode
    }
}

impl Module for ParameterNamesModule {
    fn name(&self) -> &'static str {
        "parameter-names"
    }

    fn setup(&self, context: &mut ModuleContext<'_>) {
        context.set_creator_mode(self.mode);
        context.add_type_support(TypeSupport::ParameterNames);
    }
}

/// Optional values: absent is written as `null` or skipped per inclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalTypesModule;

impl Module for OptionalTypesModule {
    fn name(&self) -> &'static str {
        "optional-types"
    }

    fn setup(&self, context: &mut ModuleContext<'_>) {
        context.add_type_support(TypeSupport::OptionalValues);
    }
}

/// Dates, times, instants and durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeModule;

impl Module for DateTimeModule {
    fn name(&self) -> &'static str {
        "date-time"
    }

    fn setup(&self, context: &mut ModuleContext<'_>) {
        context.add_type_support(TypeSupport::DateTime);
    }
}
