//! API metadata and server status.

use watapi_core::Response;

use super::{Api, Server};
use crate::error::ClientError;

impl Api<'_> {
    /// Request counts for the configured key.
    pub async fn usage(self) -> Result<Response, ClientError> {
        self.client.get("api/usage.json").await
    }

    /// Every service the API offers.
    pub async fn services(self) -> Result<Response, ClientError> {
        self.client.get("api/services.json").await
    }

    /// Every method of every service.
    pub async fn methods(self) -> Result<Response, ClientError> {
        self.client.get("api/methods.json").await
    }

    /// Released API versions.
    pub async fn versions(self) -> Result<Response, ClientError> {
        self.client.get("api/versions.json").await
    }

    /// Changes to the API.
    pub async fn changelog(self) -> Result<Response, ClientError> {
        self.client.get("api/changelog.json").await
    }
}

impl Server<'_> {
    /// Current server time.
    pub async fn time(self) -> Result<Response, ClientError> {
        self.client.get("server/time.json").await
    }

    /// Error codes the server can return.
    pub async fn codes(self) -> Result<Response, ClientError> {
        self.client.get("server/codes.json").await
    }
}
