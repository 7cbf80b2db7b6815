/*
[INPUT]:  HTTP configuration (API key, base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for identity API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{BridgeError, Result};

/// Base URL for the identity API
const DEFAULT_BASE_URL: &str = "https://api.walletauth.dev";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the identity API
///
/// Every request carries the publishable API key as a bearer token.
#[derive(Debug)]
pub struct IdentityClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl IdentityClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(api_key, config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL (tests, staging)
    pub fn with_config_and_base_url(
        api_key: impl Into<String>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(BridgeError::Config("API key must not be empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_key,
        })
    }

    /// Build full URL for an endpoint
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder with bearer auth for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .bearer_auth(&self.api_key))
    }

    /// Send a request and deserialize the JSON response body
    ///
    /// Non-2xx responses become `BridgeError::Api` carrying the status code
    /// and the raw response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BridgeError::api_error(status, message));
        }

        Ok(response.json().await?)
    }

    /// Send a request and discard the response body
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BridgeError::api_error(status, message));
        }

        Ok(())
    }
}
