//! The merged configuration namespace.
//!
//! Responsibilities:
//! - Keep property sources in precedence order (later sources win).
//! - Resolve keys with relaxed name matching across all sources.
//! - Enumerate the resolved properties under a key prefix.
//!
//! Does NOT handle:
//! - Loading sources (see `loader`).
//! - Interpreting values (see the settings binder in `jsonbridge-plugin`).
//!
//! Invariants:
//! - Two keys denote the same property when their canonical forms are equal,
//!   so `codec.json.date-format` and `CODEC_JSON_DATE_FORMAT` collide and the
//!   later source decides the value.
//! - `entries_under` reports each property once, at the position of its first
//!   appearance, with the value and source name of its last appearance.

use std::collections::HashMap;

use crate::name::{canonical, strip_prefix};
use crate::source::PropertySource;
use crate::value::PropertyValue;

/// A resolved property with the name of the source that supplied it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProperty<'a> {
    pub key: &'a str,
    pub value: &'a PropertyValue,
    pub source: &'a str,
}

/// A resolved property found under a prefix, with the key segments that
/// follow the prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixedProperty<'a> {
    pub key: &'a str,
    pub path: Vec<String>,
    pub value: &'a PropertyValue,
    pub source: &'a str,
}

/// Ordered collection of property sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationNamespace {
    sources: Vec<PropertySource>,
}

impl ConfigurationNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with higher precedence than every existing one.
    pub fn push_source(&mut self, source: PropertySource) {
        tracing::debug!(
            source = source.name(),
            properties = source.len(),
            "Adding property source"
        );
        self.sources.push(source);
    }

    /// Builder-style variant of [`push_source`](Self::push_source).
    pub fn with_source(mut self, source: PropertySource) -> Self {
        self.push_source(source);
        self
    }

    pub fn sources(&self) -> &[PropertySource] {
        &self.sources
    }

    /// Total number of entries across all sources, duplicates included.
    pub fn len(&self) -> usize {
        self.sources.iter().map(PropertySource::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a key with relaxed matching.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.resolve(key).map(|p| p.value)
    }

    /// Look up a key with relaxed matching, reporting the winning source.
    pub fn resolve(&self, key: &str) -> Option<ResolvedProperty<'_>> {
        let wanted = canonical(key);
        self.sources
            .iter()
            .rev()
            .find_map(|source| {
                source
                    .entries()
                    .filter(|(k, _)| canonical(k) == wanted)
                    .last()
                    .map(|(k, v)| ResolvedProperty {
                        key: k,
                        value: v,
                        source: source.name(),
                    })
            })
    }

    /// All resolved properties whose key lies under `prefix`.
    pub fn entries_under(&self, prefix: &str) -> Vec<PrefixedProperty<'_>> {
        let mut resolved: Vec<PrefixedProperty<'_>> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for source in &self.sources {
            for (key, value) in source.entries() {
                let Some(path) = strip_prefix(key, prefix) else {
                    continue;
                };
                if path.is_empty() {
                    continue;
                }
                let property = PrefixedProperty {
                    key,
                    path,
                    value,
                    source: source.name(),
                };
                match positions.get(&canonical(key)) {
                    Some(&index) => resolved[index] = property,
                    None => {
                        positions.insert(canonical(key), resolved.len());
                        resolved.push(property);
                    }
                }
            }
        }
        resolved
    }
}
