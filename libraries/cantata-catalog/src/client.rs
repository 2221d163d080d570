//! Catalog service client.

use crate::error::{CatalogError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service
    pub base_url: String,

    /// API key appended to every request, if the service requires one
    pub api_key: Option<String>,

    /// Channel id used by the "own playlists" and "latest uploads"
    /// operations
    pub own_channel_id: Option<String>,
}

impl CatalogConfig {
    /// Create a configuration with just a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            own_channel_id: None,
        }
    }

    /// Attach an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Attach the own-channel id.
    pub fn with_own_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.own_channel_id = Some(channel_id.into());
        self
    }
}

/// Client for the media catalog service.
///
/// Provides search and listing operations (the session core's "track
/// source") and implements `TrackResolver` (see `resolve.rs`). All
/// operations are plain request/response; the client holds no state
/// beyond its configuration.
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client, validating and normalizing the base URL.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Cantata/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: CatalogConfig { base_url, ..config },
        })
    }

    /// Base URL of the service.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn own_channel_id(&self) -> Result<&str> {
        self.config
            .own_channel_id
            .as_deref()
            .ok_or(CatalogError::NotConfigured("own channel id"))
    }

    /// GET `path` with `params` and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(url = %url, params = params.len(), "catalog request");

        let mut request = self.http.get(&url).query(params);
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CatalogError::ParseError(format!("{url}: {e}")))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
