//! Type references for date formats and naming strategies.
//!
//! A type reference is an exact, case-sensitive name such as
//! `jsonbridge_codec::Rfc3339DateFormat`. The registry maps those names to
//! constructors, so configuration can select an implementation by name.
//!
//! Invariants:
//! - Lookups never fall back to relaxed matching; a miss is always
//!   `CodecError::TypeNotFound`.
//! - Registering a name twice replaces the earlier constructor.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::date_format::{Rfc3339DateFormat, SharedDateFormat, StdDateFormat};
use crate::error::CodecError;
use crate::naming::{NamingStrategy, StandardNamingStrategy};

type DateFormatFactory = Arc<dyn Fn() -> SharedDateFormat + Send + Sync>;
type NamingFactory = Arc<dyn Fn() -> NamingStrategy + Send + Sync>;

const NAMING_TYPES: &[(&str, StandardNamingStrategy)] = &[
    ("jsonbridge_codec::naming::LowerCamelCaseStrategy", StandardNamingStrategy::LowerCamelCase),
    ("jsonbridge_codec::naming::UpperCamelCaseStrategy", StandardNamingStrategy::UpperCamelCase),
    ("jsonbridge_codec::naming::SnakeCaseStrategy", StandardNamingStrategy::SnakeCase),
    ("jsonbridge_codec::naming::UpperSnakeCaseStrategy", StandardNamingStrategy::UpperSnakeCase),
    ("jsonbridge_codec::naming::LowerCaseStrategy", StandardNamingStrategy::LowerCase),
    ("jsonbridge_codec::naming::KebabCaseStrategy", StandardNamingStrategy::KebabCase),
    ("jsonbridge_codec::naming::LowerDotCaseStrategy", StandardNamingStrategy::LowerDotCase),
];

/// Named constructors for pluggable codec types.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    date_formats: BTreeMap<String, DateFormatFactory>,
    naming_strategies: BTreeMap<String, NamingFactory>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the formats and strategies this crate ships.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_date_format("jsonbridge_codec::StdDateFormat", || {
            Arc::new(StdDateFormat::new())
        });
        registry.register_date_format("jsonbridge_codec::Rfc3339DateFormat", || {
            Arc::new(Rfc3339DateFormat::new())
        });
        for &(name, strategy) in NAMING_TYPES {
            registry.register_naming_strategy(name, move || strategy.shared());
        }
        registry
    }

    pub fn register_date_format<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> SharedDateFormat + Send + Sync + 'static,
    {
        self.date_formats.insert(name.into(), Arc::new(factory));
    }

    pub fn register_naming_strategy<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> NamingStrategy + Send + Sync + 'static,
    {
        self.naming_strategies.insert(name.into(), Arc::new(factory));
    }

    /// # Errors
    ///
    /// Returns `CodecError::TypeNotFound` if no date format is registered
    /// under exactly `name`.
    pub fn instantiate_date_format(&self, name: &str) -> Result<SharedDateFormat, CodecError> {
        self.date_formats
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| CodecError::TypeNotFound {
                name: name.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `CodecError::TypeNotFound` if no naming strategy is registered
    /// under exactly `name`.
    pub fn instantiate_naming_strategy(&self, name: &str) -> Result<NamingStrategy, CodecError> {
        self.naming_strategies
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| CodecError::TypeNotFound {
                name: name.to_string(),
            })
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("date_formats", &self.date_formats.keys().collect::<Vec<_>>())
            .field(
                "naming_strategies",
                &self.naming_strategies.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_format::PatternDateFormat;
    use crate::time_zone::TimeZone;

    #[test]
    fn test_builtins_resolve_by_exact_name() {
        let registry = TypeRegistry::with_builtins();
        let format = registry
            .instantiate_date_format("jsonbridge_codec::Rfc3339DateFormat")
            .unwrap();
        assert_eq!(format.name(), "rfc3339");

        let naming = registry
            .instantiate_naming_strategy("jsonbridge_codec::naming::KebabCaseStrategy")
            .unwrap();
        assert_eq!(naming.name(), "KEBAB_CASE");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = TypeRegistry::with_builtins();
        let err = registry
            .instantiate_date_format("JSONBRIDGE_CODEC::RFC3339DATEFORMAT")
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::TypeNotFound {
                name: "JSONBRIDGE_CODEC::RFC3339DATEFORMAT".to_string()
            }
        );
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = TypeRegistry::new();
        assert!(registry.instantiate_date_format("app::Compact").is_err());

        registry.register_date_format("app::Compact", || {
            Arc::new(PatternDateFormat::new("%Y%m%d", TimeZone::utc()).unwrap())
        });
        let format = registry.instantiate_date_format("app::Compact").unwrap();
        assert_eq!(format.name(), "pattern:%Y%m%d");
    }
}
