//! Discovery of data formats from an explicit scope.
//!
//! A `DiscoveryScope` plays the role of the loading context the host searches:
//! it lists the providers and configurators visible to one caller. Loading a
//! scope into `DataFormats` creates one configured instance per provider and
//! remembers providers and configurators so later instances are configured
//! the same way.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{PluginError, TranslateError};
use crate::plugin::data_format::{DataFormat, DataFormatConfigurator, DataFormatProvider};

/// Type-erased configurator; `None` means "not my data format type".
trait ErasedConfigurator: Send + Sync {
    fn configure_any(&self, format: &dyn DataFormat) -> Option<Result<(), TranslateError>>;

    fn target(&self) -> &'static str;
}

struct TypedConfigurator<F, C> {
    configurator: C,
    format: PhantomData<fn(&F)>,
}

impl<F, C> ErasedConfigurator for TypedConfigurator<F, C>
where
    F: DataFormat,
    C: DataFormatConfigurator<F>,
{
    fn configure_any(&self, format: &dyn DataFormat) -> Option<Result<(), TranslateError>> {
        format
            .as_any()
            .downcast_ref::<F>()
            .map(|typed| self.configurator.configure(typed))
    }

    fn target(&self) -> &'static str {
        std::any::type_name::<F>()
    }
}

/// Providers and configurators visible to one caller.
#[derive(Clone)]
pub struct DiscoveryScope {
    name: String,
    providers: Vec<Arc<dyn DataFormatProvider>>,
    configurators: Vec<Arc<dyn ErasedConfigurator>>,
}

impl DiscoveryScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            providers: Vec::new(),
            configurators: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_provider(mut self, provider: impl DataFormatProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Register `configurator` for every instance of data format `F`.
    pub fn with_configurator<F, C>(mut self, configurator: C) -> Self
    where
        F: DataFormat,
        C: DataFormatConfigurator<F> + 'static,
    {
        self.configurators.push(Arc::new(TypedConfigurator {
            configurator,
            format: PhantomData,
        }));
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.data_format_name()).collect()
    }

    pub fn configurator_count(&self) -> usize {
        self.configurators.len()
    }
}

impl fmt::Debug for DiscoveryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryScope")
            .field("name", &self.name)
            .field("providers", &self.provider_names())
            .field(
                "configurators",
                &self.configurators.iter().map(|c| c.target()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The host's registry of discovered data formats.
#[derive(Default)]
pub struct DataFormats {
    providers: BTreeMap<String, Arc<dyn DataFormatProvider>>,
    configurators: Vec<Arc<dyn ErasedConfigurator>>,
    formats: BTreeMap<String, Arc<dyn DataFormat>>,
}

impl DataFormats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover every provider in `scope` and publish one configured instance
    /// per provider. Returns the number of data formats loaded.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::ConfigureFailed` if a configurator rejects an
    /// instance; nothing from `scope` is published in that case.
    pub fn load_data_formats(&mut self, scope: &DiscoveryScope) -> Result<usize, PluginError> {
        tracing::debug!(
            scope = scope.name(),
            providers = scope.providers.len(),
            configurators = scope.configurators.len(),
            "Loading data formats"
        );

        let mut configurators = self.configurators.clone();
        configurators.extend(scope.configurators.iter().cloned());

        let mut created = Vec::with_capacity(scope.providers.len());
        for provider in &scope.providers {
            let format = create_configured(provider.as_ref(), &configurators)?;
            created.push((Arc::clone(provider), format));
        }

        self.configurators = configurators;
        let loaded = created.len();
        for (provider, format) in created {
            let name = provider.data_format_name().to_string();
            if self.formats.insert(name.clone(), format).is_some() {
                tracing::debug!(format = %name, "Replaced previously loaded data format");
            }
            self.providers.insert(name, provider);
        }

        tracing::info!(scope = scope.name(), loaded, "Loaded data formats");
        Ok(loaded)
    }

    /// The published instance registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn DataFormat>> {
        self.formats.get(name).cloned()
    }

    /// The published instance under `name`, if it is of type `F`.
    pub fn get_as<F: DataFormat>(&self, name: &str) -> Option<&F> {
        self.formats
            .get(name)
            .and_then(|format| format.as_any().downcast_ref::<F>())
    }

    pub fn names(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Create and configure a fresh instance of a discovered data format.
    ///
    /// # Errors
    ///
    /// - `PluginError::UnknownDataFormat` if no provider for `name` was loaded.
    /// - `PluginError::ConfigureFailed` if a configurator rejects the instance.
    pub fn instantiate(&self, name: &str) -> Result<Arc<dyn DataFormat>, PluginError> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| PluginError::UnknownDataFormat {
                name: name.to_string(),
            })?;
        create_configured(provider.as_ref(), &self.configurators)
    }
}

impl fmt::Debug for DataFormats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFormats")
            .field("formats", &self.names())
            .field("configurators", &self.configurators.len())
            .finish()
    }
}

fn create_configured(
    provider: &dyn DataFormatProvider,
    configurators: &[Arc<dyn ErasedConfigurator>],
) -> Result<Arc<dyn DataFormat>, PluginError> {
    let format = provider.create_instance();
    let mut applied = 0usize;
    for configurator in configurators {
        if let Some(result) = configurator.configure_any(format.as_ref()) {
            result.map_err(|source| PluginError::ConfigureFailed {
                format: provider.data_format_name().to_string(),
                source,
            })?;
            applied += 1;
        }
    }
    tracing::debug!(
        format = provider.data_format_name(),
        configurators = applied,
        "Created data format instance"
    );
    Ok(format)
}
