//! Client errors.

use thiserror::Error;
use watapi_core::{ConfigError, DecodeError, ParseError};

/// Failure of a request to the Open Data API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body with credentials scrubbed.
        body: String,
    },

    /// The request URL could not be built.
    #[error("Invalid URL for '{path}': {message}")]
    Url {
        /// Endpoint path relative to the base URL.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The body is not JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The body is not a valid response envelope.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        Self::Network(err.without_url())
    }
}

impl From<watapi_core::Error> for ClientError {
    fn from(err: watapi_core::Error) -> Self {
        match err {
            watapi_core::Error::Parse(err) => Self::Parse(err),
            watapi_core::Error::Decode(err) => Self::Decode(err),
        }
    }
}
