//! Translation of the captured namespace into a configured codec.
//!
//! Responsibilities:
//! - Read the snapshot handle it was given at registration time.
//! - Bind settings, apply them to a fresh builder and commit the builder onto
//!   the target codec.
//!
//! Does NOT handle:
//! - Capturing the namespace (see `ConfigSnapshotCapturer`).
//! - Deciding when codecs are created (see `plugin.rs`).
//!
//! Invariants:
//! - Nothing reaches the codec unless the whole translation succeeded.
//! - Translating the same snapshot onto two codecs yields equal
//!   configurations.

use std::sync::Arc;

use serde::Serialize;

use jsonbridge_codec::{CodecBuilder, JsonCodec, TypeRegistry};
use jsonbridge_config::SnapshotHandle;

use crate::applier::SerializationConfigApplier;
use crate::binder::{BoundSettings, SettingsBinder};
use crate::error::{PropertyBindingError, TranslateError};

/// Outcome of a successful translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TranslationReport {
    /// Properties that were skipped because their values could not be bound.
    pub binding_errors: Vec<PropertyBindingError>,
}

#[derive(Debug, Clone)]
pub struct SerializationConfigTranslator {
    snapshot: SnapshotHandle,
    binder: SettingsBinder,
    applier: SerializationConfigApplier,
}

impl SerializationConfigTranslator {
    /// Translator reading `snapshot` under the default prefix with the
    /// built-in type registry.
    pub fn new(snapshot: SnapshotHandle) -> Self {
        Self {
            snapshot,
            binder: SettingsBinder::default(),
            applier: SerializationConfigApplier::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.binder = SettingsBinder::new(prefix);
        self
    }

    pub fn with_type_registry(mut self, types: Arc<TypeRegistry>) -> Self {
        self.applier = SerializationConfigApplier::new(types);
        self
    }

    pub fn prefix(&self) -> &str {
        self.binder.prefix()
    }

    /// Bind settings from the captured namespace without touching any codec.
    ///
    /// # Errors
    ///
    /// Returns `TranslateError::ConfigurationNotCaptured` if nothing has been
    /// captured yet.
    pub fn bind(&self) -> Result<BoundSettings, TranslateError> {
        let namespace = self
            .snapshot
            .current()
            .ok_or(TranslateError::ConfigurationNotCaptured)?;
        Ok(self.binder.bind(&namespace))
    }

    /// Build the codec settings from the captured namespace.
    ///
    /// # Errors
    ///
    /// Propagates `bind` and `SerializationConfigApplier::apply` errors.
    pub fn build(&self) -> Result<(CodecBuilder, TranslationReport), TranslateError> {
        let bound = self.bind()?;
        let mut builder = CodecBuilder::new();
        self.applier.apply(&bound.settings, &mut builder)?;
        Ok((
            builder,
            TranslationReport {
                binding_errors: bound.errors,
            },
        ))
    }

    /// Configure `codec` from the captured namespace.
    ///
    /// # Errors
    ///
    /// - `TranslateError::ConfigurationNotCaptured` if the environment-ready
    ///   signal has not been delivered yet.
    /// - `TranslateError::UnknownNamingStrategy` or
    ///   `TranslateError::InvalidDateFormat` for unresolvable values.
    ///
    /// The codec is left untouched on error.
    pub fn translate(&self, codec: &JsonCodec) -> Result<TranslationReport, TranslateError> {
        let (builder, report) = self.build().inspect_err(|error| {
            tracing::error!(%error, prefix = self.prefix(), "Codec configuration aborted");
        })?;
        builder.configure(codec);
        tracing::info!(
            prefix = self.prefix(),
            skipped = report.binding_errors.len(),
            "Configured JSON codec from captured configuration"
        );
        Ok(report)
    }
}
