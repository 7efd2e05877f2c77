//! Blogs, events, news, opportunities and site services.

use watapi_core::Response;

use super::{Blogs, Events, Feds, News, Opportunities, Services};
use crate::error::ClientError;

impl Blogs<'_> {
    /// Posts on a blog site.
    pub async fn posts(self, site: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("blogs/{site}.json")).await
    }

    /// One blog post.
    pub async fn post(self, site: &str, post_id: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("blogs/{site}/{post_id}.json")).await
    }
}

impl Events<'_> {
    /// Upcoming events across every site.
    pub async fn all(self) -> Result<Response, ClientError> {
        self.client.get("events.json").await
    }

    /// Upcoming events on one site.
    pub async fn by_site(self, site: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("events/{site}.json")).await
    }

    /// One event.
    pub async fn event(self, site: &str, event_id: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("events/{site}/{event_id}.json"))
            .await
    }

    /// Statutory and university holidays.
    pub async fn holidays(self) -> Result<Response, ClientError> {
        self.client.get("events/holidays.json").await
    }
}

impl Feds<'_> {
    /// Upcoming Feds events.
    pub async fn events(self) -> Result<Response, ClientError> {
        self.client.get("feds/events.json").await
    }

    /// One Feds event.
    pub async fn event(self, id: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("feds/events/{id}.json")).await
    }

    /// Feds outlets and their hours.
    pub async fn locations(self) -> Result<Response, ClientError> {
        self.client.get("feds/locations.json").await
    }
}

impl News<'_> {
    /// Recent news across every site.
    pub async fn all(self) -> Result<Response, ClientError> {
        self.client.get("news.json").await
    }

    /// Recent news on one site.
    pub async fn by_site(self, site: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("news/{site}.json")).await
    }

    /// One news item.
    pub async fn item(self, site: &str, news_id: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("news/{site}/{news_id}.json")).await
    }
}

impl Opportunities<'_> {
    /// Open positions across every site.
    pub async fn all(self) -> Result<Response, ClientError> {
        self.client.get("opportunities.json").await
    }

    /// Open positions on one site.
    pub async fn by_site(self, site: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("opportunities/{site}.json")).await
    }

    /// One job description.
    pub async fn job(self, site: &str, job_id: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("opportunities/{site}/{job_id}.json"))
            .await
    }
}

impl Services<'_> {
    /// Services offered by a site.
    pub async fn by_site(self, site: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("services/{site}.json")).await
    }
}
