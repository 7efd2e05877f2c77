//! Directory and resources.

use watapi_core::Response;

use super::{Directory, Resources};
use crate::error::ClientError;

path_segments! {
    /// Resources served under `resources/`.
    ResourceType {
        /// Tutors by course.
        Tutors => "tutors",
        /// Campus printers.
        Printers => "printers",
        /// Employer information sessions.
        Infosessions => "infosessions",
        /// Goose nesting locations.
        Goosewatch => "goosewatch",
        /// Public sector salary disclosure.
        Sunshinelist => "sunshinelist",
    }
}

impl Directory<'_> {
    /// Directory entry for a WatIAM user id.
    pub async fn user(self, watiam_id: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("directory/{watiam_id}.json")).await
    }
}

impl Resources<'_> {
    /// Resources of one kind.
    pub async fn list(self, resource_type: ResourceType) -> Result<Response, ClientError> {
        self.client
            .get(&format!("resources/{resource_type}.json"))
            .await
    }
}
