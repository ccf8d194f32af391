use async_trait::async_trait;
use thiserror::Error;

use crate::models::StateProfile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("State not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Read-only source of state profiles.
#[async_trait]
pub trait StateProvider: Send + Sync {
    /// Every available state, sorted by name.
    async fn list_states(&self) -> Result<Vec<StateProfile>, ProviderError>;

    /// Looks up one state by exact name.
    ///
    /// The default implementation scans [`StateProvider::list_states`];
    /// backends with an index should override it.
    async fn get_state(
        &self,
        name: &str,
    ) -> Result<StateProfile, ProviderError> {
        self.list_states()
            .await?
            .into_iter()
            .find(|state| state.name == name)
            .ok_or(ProviderError::NotFound)
    }
}

/// Writable store of state profiles, keyed by name.
#[async_trait]
pub trait StateRepository: StateProvider {
    /// Inserts the profile, replacing any existing profile with the same name.
    async fn upsert_state(
        &self,
        state: &StateProfile,
    ) -> Result<(), ProviderError>;

    async fn delete_state(
        &self,
        name: &str,
    ) -> Result<(), ProviderError>;
}
