//! Transport: one authenticated GET per call.

use async_trait::async_trait;
use reqwest::{Client, Url};
use watapi_core::{ApiKey, ClientConfig, scrub_key};

use crate::error::ClientError;

/// Fetches raw response bodies for endpoint paths.
///
/// `path` is relative to the service root, e.g. `courses/CS/136.json`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the body at `path`.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ClientError>;
}

/// Transport over HTTPS with `reqwest`.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    api_key: ApiKey,
}

impl HttpTransport {
    /// Create a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        // `Url::join` replaces the last segment unless the base ends in `/`.
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url).map_err(|err| ClientError::Url {
            path: String::new(),
            message: err.to_string(),
        })?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Full request URL for `path`, including the `key` query parameter.
    ///
    /// # Errors
    ///
    /// Returns error if `path` cannot be joined onto the base URL.
    pub fn build_url(&self, path: &str) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ClientError::Url {
                path: path.to_string(),
                message: err.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose());
        Ok(url)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let url = self.build_url(path)?;
        tracing::debug!(path, "sending request");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                tracing::debug!(path, error = %err, "could not read error body");
                String::new()
            });
            tracing::warn!(path, status = status.as_u16(), "request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body: scrub_key(&body, &self.api_key),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(path, len = body.len(), "received response");
        Ok(body.to_vec())
    }
}
