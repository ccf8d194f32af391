use std::collections::HashMap;

use async_trait::async_trait;

use super::provider::{ProviderError, StateProvider};

/// Backend-agnostic provider configuration.
///
/// `backend` must match the [`ProviderFactory::backend_name`] of a
/// registered factory. `connection_string` is passed through to that
/// factory unchanged and its meaning is backend-specific.
///
/// | backend  | connection_string examples                 |
/// |----------|--------------------------------------------|
/// | `sqlite` | `states.db`, `:memory:`                    |
/// | `http`   | `https://state-analytica.example.com`      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"sqlite"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub connection_string: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: ":memory:".to_string(),
        }
    }
}

/// One implementation per provider backend. Each backend crate exports a
/// unit struct implementing this trait, registered with a
/// [`ProviderRegistry`] at startup.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Opens the backend and returns a ready-to-use provider.
    async fn create(
        &self,
        config: &ProviderConfig,
    ) -> Result<Box<dyn StateProvider>, ProviderError>;
}

/// Registry of [`ProviderFactory`] instances, keyed by backend name.
pub struct ProviderRegistry {
    factories: HashMap<&'static str, Box<dyn ProviderFactory>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a backend factory, replacing any factory with the same
    /// [`ProviderFactory::backend_name`].
    pub fn register(
        &mut self,
        factory: Box<dyn ProviderFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatches to the factory matching `config.backend`.
    ///
    /// # Errors
    /// * [`ProviderError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &ProviderConfig,
    ) -> Result<Box<dyn StateProvider>, ProviderError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                ProviderError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        tracing::debug!(backend = %config.backend, "creating state provider");
        factory.create(config).await
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
