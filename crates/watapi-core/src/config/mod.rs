//! Client configuration loading and validation.
//!
//! Configuration is either built in code or read from a JSON5 file:
//!
//! ```json5
//! {
//!   apiKey: "0123456789abcdef",
//!   // optional
//!   baseUrl: "https://api.uwaterloo.ca/v2/",
//!   timeoutSecs: 30,
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::secrets::ApiKey;

/// Service root of the Open Data API.
pub const DEFAULT_BASE_URL: &str = "https://api.uwaterloo.ca/v2/";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON5 parsing error.
    #[error("Parse error: {0}")]
    Parse(#[from] json5::Error),

    /// Config validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing required field.
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Settings shared by every request a client makes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Key sent with every request.
    pub api_key: ApiKey,

    /// Service root. Always ends with `/` once validated.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Configuration for the public service with the given key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }

    /// Point the client at another service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = with_trailing_slash(base_url.into());
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from a JSON5 file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json5(&content)
    }

    /// Parse configuration from JSON5 text.
    ///
    /// # Errors
    ///
    /// Returns error if the text cannot be parsed or validated.
    pub fn from_json5(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = json5::from_str(content)?;
        config.base_url = with_trailing_slash(config.base_url);
        config.validate()?;
        tracing::debug!(base_url = %config.base_url, "loaded client config");
        Ok(config)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the key is blank, the base URL does not parse as an
    /// http(s) URL with a host, or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_blank() {
            return Err(ConfigError::MissingField("apiKey".to_string()));
        }

        let url = Url::parse(&self.base_url).map_err(|err| {
            ConfigError::Validation(format!("Base URL '{}' is invalid: {err}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "Base URL '{}' must use http or https",
                self.base_url
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::Validation(format!(
                "Base URL '{}' has no host",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
