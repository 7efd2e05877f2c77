//! The API client.

use std::sync::Arc;

use watapi_core::{ClientConfig, Response};

use crate::error::ClientError;
use crate::transport::{HttpTransport, Transport};

/// Client for the Open Data API.
///
/// Cheap to clone; clones share one transport.
#[derive(Clone)]
pub struct WatClient {
    transport: Arc<dyn Transport>,
}

impl WatClient {
    /// Create a client that talks HTTP to the configured service.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Fetch `path` and decode the response envelope.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the body is not JSON, or the
    /// envelope is malformed.
    pub async fn get(&self, path: &str) -> Result<Response, ClientError> {
        let body = self.transport.fetch(path).await?;
        let response = Response::from_slice(&body)?;

        if !response.metadata.is_success() {
            tracing::debug!(
                path,
                status = response.metadata.status_code,
                message = %response.metadata.message,
                "API reported failure"
            );
        }
        Ok(response)
    }
}

impl std::fmt::Debug for WatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatClient").finish_non_exhaustive()
    }
}
