//! Default property inclusion policy.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constant_key;
use crate::error::CodecError;

/// Which property values the codec writes by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Inclusion {
    /// Write every property.
    #[default]
    Always,
    /// Skip `null` values.
    NonNull,
    /// Skip `null` and absent optional values.
    NonAbsent,
    /// Skip `null`, absent and empty values.
    NonEmpty,
    /// Skip values equal to their type's default.
    NonDefault,
    /// Defer to per-type and per-property settings.
    UseDefaults,
}

impl Inclusion {
    pub const ALL: &'static [Inclusion] = &[
        Inclusion::Always,
        Inclusion::NonNull,
        Inclusion::NonAbsent,
        Inclusion::NonEmpty,
        Inclusion::NonDefault,
        Inclusion::UseDefaults,
    ];

    pub const fn constant_name(self) -> &'static str {
        match self {
            Inclusion::Always => "ALWAYS",
            Inclusion::NonNull => "NON_NULL",
            Inclusion::NonAbsent => "NON_ABSENT",
            Inclusion::NonEmpty => "NON_EMPTY",
            Inclusion::NonDefault => "NON_DEFAULT",
            Inclusion::UseDefaults => "USE_DEFAULTS",
        }
    }
}

impl fmt::Display for Inclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant_name())
    }
}

impl FromStr for Inclusion {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = constant_key(s);
        Self::ALL
            .iter()
            .copied()
            .find(|i| constant_key(i.constant_name()) == wanted)
            .ok_or_else(|| CodecError::invalid(s, "inclusion policy"))
    }
}
