//! Property naming strategies.
//!
//! A naming strategy maps a logical property name (written in lower camel
//! case, e.g. `firstName`) to the name used on the wire.
//!
//! Invariants:
//! - Strategies are stateless and shareable across threads.
//! - `LowerCamelCase` is the identity mapping.

use std::fmt::Debug;
use std::sync::Arc;

use crate::constant_key;

/// Maps logical property names to wire names.
pub trait PropertyNamingStrategy: Debug + Send + Sync {
    /// Name reported in summaries and logs.
    fn name(&self) -> &str;

    fn translate(&self, property: &str) -> String;
}

/// Shared naming strategy as committed on a codec.
pub type NamingStrategy = Arc<dyn PropertyNamingStrategy>;

/// The built-in strategies, addressable by constant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardNamingStrategy {
    /// `firstName`
    LowerCamelCase,
    /// `FirstName`
    UpperCamelCase,
    /// `first_name`
    SnakeCase,
    /// `FIRST_NAME`
    UpperSnakeCase,
    /// `firstname`
    LowerCase,
    /// `first-name`
    KebabCase,
    /// `first.name`
    LowerDotCase,
}

/// Older constant names still accepted on input.
const ALIASES: &[(&str, StandardNamingStrategy)] = &[
    (
        "CAMEL_CASE_TO_LOWER_CASE_WITH_UNDERSCORES",
        StandardNamingStrategy::SnakeCase,
    ),
    (
        "PASCAL_CASE_TO_CAMEL_CASE",
        StandardNamingStrategy::UpperCamelCase,
    ),
];

impl StandardNamingStrategy {
    pub const ALL: &'static [StandardNamingStrategy] = &[
        StandardNamingStrategy::LowerCamelCase,
        StandardNamingStrategy::UpperCamelCase,
        StandardNamingStrategy::SnakeCase,
        StandardNamingStrategy::UpperSnakeCase,
        StandardNamingStrategy::LowerCase,
        StandardNamingStrategy::KebabCase,
        StandardNamingStrategy::LowerDotCase,
    ];

    pub const fn constant_name(self) -> &'static str {
        match self {
            StandardNamingStrategy::LowerCamelCase => "LOWER_CAMEL_CASE",
            StandardNamingStrategy::UpperCamelCase => "UPPER_CAMEL_CASE",
            StandardNamingStrategy::SnakeCase => "SNAKE_CASE",
            StandardNamingStrategy::UpperSnakeCase => "UPPER_SNAKE_CASE",
            StandardNamingStrategy::LowerCase => "LOWER_CASE",
            StandardNamingStrategy::KebabCase => "KEBAB_CASE",
            StandardNamingStrategy::LowerDotCase => "LOWER_DOT_CASE",
        }
    }

    /// Find a strategy by constant name (or legacy alias), ignoring case and
    /// separators.
    pub fn from_constant_name(name: &str) -> Option<Self> {
        let wanted = constant_key(name);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .map(|s| (s.constant_name(), *s))
            .chain(ALIASES.iter().copied())
            .find(|(constant, _)| constant_key(constant) == wanted)
            .map(|(_, strategy)| strategy)
    }

    pub fn shared(self) -> NamingStrategy {
        Arc::new(self)
    }
}

impl PropertyNamingStrategy for StandardNamingStrategy {
    fn name(&self) -> &str {
        self.constant_name()
    }

    fn translate(&self, property: &str) -> String {
        match self {
            StandardNamingStrategy::LowerCamelCase => property.to_string(),
            StandardNamingStrategy::LowerCase => property.to_lowercase(),
            StandardNamingStrategy::UpperCamelCase => {
                let mut chars = property.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            StandardNamingStrategy::SnakeCase => join_lower(property, "_"),
            StandardNamingStrategy::KebabCase => join_lower(property, "-"),
            StandardNamingStrategy::LowerDotCase => join_lower(property, "."),
            StandardNamingStrategy::UpperSnakeCase => join_lower(property, "_").to_uppercase(),
        }
    }
}

fn join_lower(property: &str, separator: &str) -> String {
    split_words(property)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Split on separators and case boundaries; runs of capitals stay together
/// (`URLValue` -> `URL`, `Value`).
fn split_words(property: &str) -> Vec<String> {
    let chars: Vec<char> = property.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
