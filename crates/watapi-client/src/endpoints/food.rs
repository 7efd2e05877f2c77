//! Food services.

use watapi_core::Response;

use super::FoodServices;
use crate::error::ClientError;

impl FoodServices<'_> {
    /// This week's menu.
    pub async fn menu(self) -> Result<Response, ClientError> {
        self.client.get("foodservices/menu.json").await
    }

    /// Menu for an ISO week of `year`.
    pub async fn menu_for(self, year: u32, week: u32) -> Result<Response, ClientError> {
        self.client
            .get(&format!("foodservices/{year}/{week}/menu.json"))
            .await
    }

    /// This week's notes.
    pub async fn notes(self) -> Result<Response, ClientError> {
        self.client.get("foodservices/notes.json").await
    }

    /// Notes for an ISO week of `year`.
    pub async fn notes_for(self, year: u32, week: u32) -> Result<Response, ClientError> {
        self.client
            .get(&format!("foodservices/{year}/{week}/notes.json"))
            .await
    }

    /// Diet types.
    pub async fn diets(self) -> Result<Response, ClientError> {
        self.client.get("foodservices/diets.json").await
    }

    /// Outlets and the meals they serve.
    pub async fn outlets(self) -> Result<Response, ClientError> {
        self.client.get("foodservices/outlets.json").await
    }

    /// Outlet locations and opening hours.
    pub async fn locations(self) -> Result<Response, ClientError> {
        self.client.get("foodservices/locations.json").await
    }

    /// Vendors that accept WatCard.
    pub async fn watcard(self) -> Result<Response, ClientError> {
        self.client.get("foodservices/watcard.json").await
    }

    /// This week's announcements.
    pub async fn announcements(self) -> Result<Response, ClientError> {
        self.client.get("foodservices/announcements.json").await
    }

    /// Announcements for an ISO week of `year`.
    pub async fn announcements_for(self, year: u32, week: u32) -> Result<Response, ClientError> {
        self.client
            .get(&format!("foodservices/{year}/{week}/announcements.json"))
            .await
    }

    /// Nutrition information for a product.
    pub async fn product(self, id: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("foodservices/products/{id}.json"))
            .await
    }
}
