//! Ordered resolution of date-format and naming-strategy values.
//!
//! A configured value may name a registered type or be interpreted directly
//! (a date pattern, a naming constant). Each interpretation is a strategy;
//! strategies run in a fixed order and the first success wins. A failed
//! strategy is logged at `debug` and the next one is tried.
//!
//! Invariants:
//! - Type references are always tried first.
//! - Exhausting every strategy is reported with the failures of all of them,
//!   never silently replaced by a default.

use std::fmt::Debug;
use std::sync::Arc;

use jsonbridge_codec::{
    CodecError, NamingStrategy, PatternDateFormat, SharedDateFormat, StandardNamingStrategy,
    TimeZone, TypeRegistry,
};

/// Ways a date-format value can be interpreted, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormatResolution {
    /// The value names a date-format type in the registry.
    TypeReference,
    /// The value is a date pattern, formatted in the given zone.
    Pattern,
}

impl DateFormatResolution {
    pub const ORDER: &'static [DateFormatResolution] = &[
        DateFormatResolution::TypeReference,
        DateFormatResolution::Pattern,
    ];

    fn attempt(
        self,
        value: &str,
        zone: TimeZone,
        types: &TypeRegistry,
    ) -> Result<SharedDateFormat, CodecError> {
        match self {
            DateFormatResolution::TypeReference => types.instantiate_date_format(value),
            DateFormatResolution::Pattern => {
                PatternDateFormat::new(value, zone).map(|f| Arc::new(f) as SharedDateFormat)
            }
        }
    }
}

/// Ways a naming-strategy value can be interpreted, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingResolution {
    /// The value names a naming-strategy type in the registry.
    TypeReference,
    /// The value is one of the well-known constant names.
    Constant,
}

impl NamingResolution {
    pub const ORDER: &'static [NamingResolution] =
        &[NamingResolution::TypeReference, NamingResolution::Constant];

    fn attempt(self, value: &str, types: &TypeRegistry) -> Result<NamingStrategy, CodecError> {
        match self {
            NamingResolution::TypeReference => types.instantiate_naming_strategy(value),
            NamingResolution::Constant => StandardNamingStrategy::from_constant_name(value)
                .map(StandardNamingStrategy::shared)
                .ok_or_else(|| CodecError::InvalidValue {
                    value: value.to_string(),
                    expected: "naming strategy constant",
                }),
        }
    }
}

/// Every strategy failed; failures are listed in resolution order.
#[derive(Debug)]
pub(crate) struct Exhausted {
    pub(crate) failures: Vec<CodecError>,
}

impl Exhausted {
    /// Reason given by the last strategy tried.
    pub(crate) fn last_reason(&self) -> String {
        self.failures
            .last()
            .map(ToString::to_string)
            .unwrap_or_else(|| "no resolution strategy applies".to_string())
    }
}

fn first_resolved<S, T>(
    order: &[S],
    value: &str,
    mut attempt: impl FnMut(S) -> Result<T, CodecError>,
) -> Result<T, Exhausted>
where
    S: Copy + Debug,
{
    let mut failures = Vec::new();
    for &strategy in order {
        match attempt(strategy) {
            Ok(resolved) => {
                tracing::debug!(value, ?strategy, "Resolved codec setting");
                return Ok(resolved);
            }
            Err(error) => {
                tracing::debug!(value, ?strategy, %error, "Resolution strategy did not apply");
                failures.push(error);
            }
        }
    }
    Err(Exhausted { failures })
}

pub(crate) fn resolve_date_format(
    value: &str,
    zone: TimeZone,
    types: &TypeRegistry,
) -> Result<SharedDateFormat, Exhausted> {
    first_resolved(DateFormatResolution::ORDER, value, |strategy| {
        strategy.attempt(value, zone, types)
    })
}

pub(crate) fn resolve_naming_strategy(
    value: &str,
    types: &TypeRegistry,
) -> Result<NamingStrategy, Exhausted> {
    first_resolved(NamingResolution::ORDER, value, |strategy| {
        strategy.attempt(value, types)
    })
}
