//! Date formatters used when dates are written as text.
//!
//! Responsibilities:
//! - Define the `DateFormat` contract a codec formats instants with.
//! - Provide the default ISO-8601 formatter, an RFC 3339 formatter and a
//!   pattern formatter driven by `strftime`-style patterns.
//!
//! Does NOT handle:
//! - Choosing between a type reference and a pattern (see the resolution
//!   strategies in `jsonbridge-plugin`).
//!
//! Invariants:
//! - A formatter is immutable; changing its zone yields a new formatter.
//! - `PatternDateFormat` only exists for patterns that parsed cleanly,
//!   contain at least one date or time field and render without error.
//! - Formatting never panics.

use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{Debug, Write};
use std::sync::Arc;

use crate::error::CodecError;
use crate::time_zone::TimeZone;

/// Formats instants for the codec.
pub trait DateFormat: Debug + Send + Sync {
    /// Human-readable identity, shown in summaries.
    fn name(&self) -> String;

    fn time_zone(&self) -> TimeZone;

    /// Same formatter, rendering in `zone`.
    fn with_time_zone(&self, zone: TimeZone) -> SharedDateFormat;

    fn format(&self, instant: DateTime<Utc>) -> String;
}

pub type SharedDateFormat = Arc<dyn DateFormat>;

const STD_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Appended to every rejection reason.
const PATTERN_SYNTAX_HINT: &str = "expected strftime specifiers such as %Y-%m-%d %H:%M:%S";

/// The codec's default text format: ISO-8601 with milliseconds and offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdDateFormat {
    zone: TimeZone,
}

impl StdDateFormat {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DateFormat for StdDateFormat {
    fn name(&self) -> String {
        "std".to_string()
    }

    fn time_zone(&self) -> TimeZone {
        self.zone
    }

    fn with_time_zone(&self, zone: TimeZone) -> SharedDateFormat {
        Arc::new(Self { zone })
    }

    fn format(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.zone.offset_at(instant))
            .format(STD_PATTERN)
            .to_string()
    }
}

/// RFC 3339 with seconds precision; UTC renders as `Z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rfc3339DateFormat {
    zone: TimeZone,
}

impl Rfc3339DateFormat {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DateFormat for Rfc3339DateFormat {
    fn name(&self) -> String {
        "rfc3339".to_string()
    }

    fn time_zone(&self) -> TimeZone {
        self.zone
    }

    fn with_time_zone(&self, zone: TimeZone) -> SharedDateFormat {
        Arc::new(Self { zone })
    }

    fn format(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.zone.offset_at(instant))
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Formatter driven by a `strftime`-style pattern such as `%Y-%m-%d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDateFormat {
    pattern: String,
    zone: TimeZone,
}

impl PatternDateFormat {
    /// # Errors
    ///
    /// Returns `CodecError::InvalidDatePattern` if the pattern is empty, has
    /// an unknown or parse-only specifier, contains no date or time field at
    /// all, or fails to render.
    pub fn new(pattern: impl Into<String>, zone: TimeZone) -> Result<Self, CodecError> {
        let pattern = pattern.into();
        let reject = |reason: &str| CodecError::InvalidDatePattern {
            pattern: pattern.clone(),
            reason: format!("{reason} ({PATTERN_SYNTAX_HINT})"),
        };

        if pattern.trim().is_empty() {
            return Err(reject("pattern is empty"));
        }
        let mut has_field = false;
        for item in StrftimeItems::new(&pattern) {
            match item {
                Item::Error => return Err(reject("unrecognized format specifier")),
                Item::Fixed(Fixed::Internal(_)) => {
                    return Err(reject("specifier can only be used for parsing"));
                }
                Item::Numeric(..) | Item::Fixed(_) => has_field = true,
                _ => {}
            }
        }
        if !has_field {
            return Err(reject("pattern contains no date or time field"));
        }

        if render(&pattern, zone, DateTime::<Utc>::default()).is_none() {
            return Err(reject("pattern cannot be rendered"));
        }
        Ok(Self { pattern, zone })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl DateFormat for PatternDateFormat {
    fn name(&self) -> String {
        format!("pattern:{}", self.pattern)
    }

    fn time_zone(&self) -> TimeZone {
        self.zone
    }

    fn with_time_zone(&self, zone: TimeZone) -> SharedDateFormat {
        Arc::new(Self {
            pattern: self.pattern.clone(),
            zone,
        })
    }

    fn format(&self, instant: DateTime<Utc>) -> String {
        render(&self.pattern, self.zone, instant).unwrap_or_else(|| {
            tracing::warn!(pattern = %self.pattern, "Date pattern failed to render, using RFC 3339");
            instant
                .with_timezone(&self.zone.offset_at(instant))
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        })
    }
}

/// `None` when chrono reports an item it cannot render.
fn render(pattern: &str, zone: TimeZone, instant: DateTime<Utc>) -> Option<String> {
    let local = instant.with_timezone(&zone.offset_at(instant));
    let mut rendered = String::new();
    write!(rendered, "{}", local.format(pattern)).ok()?;
    Some(rendered)
}
