//! Property sources: named, ordered key/value layers.
//!
//! Responsibilities:
//! - Hold one layer of flat properties (file, environment, overrides, defaults).
//! - Build layers from environment variables, `key=value` overrides and
//!   structured JSON/YAML documents (flattened into dotted keys).
//!
//! Does NOT handle:
//! - Reading files from disk (see `loader/file.rs`).
//! - Precedence between layers (see `namespace.rs`).
//!
//! Invariants:
//! - Entry order is insertion order; re-inserting an existing key replaces its
//!   value in place.
//! - Blank environment variables are treated as unset and never recorded.

use serde_json::Value;

use crate::loader::ConfigError;
use crate::name::env_var_to_key;
use crate::value::PropertyValue;

/// One named layer of configuration properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySource {
    name: String,
    entries: Vec<(String, PropertyValue)>,
}

impl PropertySource {
    /// Create an empty source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builder-style insert.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a source from environment-style `(NAME, value)` pairs.
    ///
    /// `CODEC_JSON_LOCALE=de_DE` becomes `codec.json.locale = "de_DE"`.
    pub fn from_env_vars<I, K, V>(name: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut source = Self::new(name);
        for (var, value) in vars {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            let key = env_var_to_key(var.as_ref());
            if !key.is_empty() {
                source.insert(key, value);
            }
        }
        source
    }

    /// Build a source from `key=value` overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` for an entry without `=` or with
    /// an empty key.
    pub fn from_overrides<I, S>(name: impl Into<String>, overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut source = Self::new(name);
        for entry in overrides {
            let entry = entry.as_ref();
            let (key, value) = entry
                .split_once('=')
                .map(|(k, v)| (k.trim(), v.trim()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| ConfigError::InvalidOverride {
                    entry: entry.to_string(),
                })?;
            source.insert(key, value);
        }
        Ok(source)
    }

    /// Build a source from a structured document, flattening nested objects
    /// into dotted keys and arrays into `key[index]` entries.
    pub fn from_document(name: impl Into<String>, document: &Value) -> Self {
        let mut source = Self::new(name);
        flatten_into("", document, &mut source);
        source
    }
}

fn flatten_into(prefix: &str, value: &Value, source: &mut PropertySource) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, child, source);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(&format!("{prefix}[{index}]"), child, source);
            }
        }
        scalar if !prefix.is_empty() => source.insert(prefix, scalar_value(scalar)),
        _ => {}
    }
}

fn scalar_value(value: &Value) -> PropertyValue {
    match value {
        Value::Bool(b) => PropertyValue::Bool(*b),
        Value::Number(n) => n
            .as_i64()
            .map(PropertyValue::Integer)
            .or_else(|| n.as_f64().map(PropertyValue::Float))
            .unwrap_or_else(|| PropertyValue::Text(n.to_string())),
        Value::String(s) => PropertyValue::Text(s.clone()),
        // Explicit nulls bind as empty text, which every typed field treats as unset.
        _ => PropertyValue::Text(String::new()),
    }
}
