//! Read-only state provider backed by the State Analytica web API.

use analytica_core::db::{ProviderConfig, ProviderFactory};
use analytica_core::{ProviderError, StateProfile, StateProvider};
use async_trait::async_trait;

use crate::payload::{RecordsPayload, convert_records};

/// Path of the read endpoint, relative to the service base URL.
pub const READ_STATES_PATH: &str = "/api/states/read";

/// Fetches every state from `GET {base_url}/api/states/read`.
pub struct HttpStateProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStateProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn read_url(&self) -> String {
        format!("{}{}", self.base_url, READ_STATES_PATH)
    }
}

/// Decodes a read-endpoint body into profiles sorted by name.
///
/// # Errors
///
/// Returns [`ProviderError::Decode`] if the body is neither an array of
/// records nor a `{ "data": [...] }` envelope.
pub fn decode_states(body: &[u8]) -> Result<Vec<StateProfile>, ProviderError> {
    let payload: RecordsPayload =
        serde_json::from_slice(body).map_err(|e| ProviderError::Decode(e.to_string()))?;

    let (mut profiles, _warnings) = convert_records(payload.into_records());
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}

/// Maps a non-2xx response status to [`ProviderError::Connection`].
pub fn check_status(
    url: &str,
    status: reqwest::StatusCode,
) -> Result<(), ProviderError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ProviderError::Connection(format!("GET {} returned {}", url, status)))
    }
}

#[async_trait]
impl StateProvider for HttpStateProvider {
    async fn list_states(&self) -> Result<Vec<StateProfile>, ProviderError> {
        let url = self.read_url();
        tracing::debug!(%url, "fetching states");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        check_status(&url, response.status())?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        decode_states(&body)
    }
}

/// [`ProviderFactory`] for the `"http"` backend; `connection_string` is the
/// service base URL.
pub struct HttpProviderFactory;

#[async_trait]
impl ProviderFactory for HttpProviderFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn create(
        &self,
        config: &ProviderConfig,
    ) -> Result<Box<dyn StateProvider>, ProviderError> {
        let base_url = config.connection_string.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ProviderError::Configuration(format!(
                "http backend needs an http(s) base URL, got '{}'",
                base_url
            )));
        }
        Ok(Box::new(HttpStateProvider::new(base_url)))
    }
}
