//! Endpoint catalog.
//!
//! Endpoints are grouped the way the Open Data API groups them. Each group
//! borrows the client, builds a path relative to the service root and
//! issues one GET through [`WatClient::get`]:
//!
//! ```no_run
//! # async fn run(client: watapi_client::WatClient) -> Result<(), watapi_client::ClientError> {
//! let schedule = client.courses().schedule("CS", "136").await?;
//! for section in schedule.data.as_array().unwrap_or_default() {
//!     println!("{}", section["section"].as_str().unwrap_or("?"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Identifiers are interpolated into paths as given. Every endpoint fails
//! the same ways [`WatClient::get`] does.

#![allow(clippy::missing_errors_doc)]

/// Declares a closed set of path segments.
macro_rules! path_segments {
    (
        $(#[$doc:meta])*
        $name:ident { $($(#[$vdoc:meta])* $variant:ident => $segment:literal),+ $(,)? }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vdoc])* $variant,)+
        }

        impl $name {
            /// Every variant, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Path segment naming this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $segment,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod academics;
mod api;
mod campus;
mod food;
mod news;
mod people;

pub use academics::CodeType;
pub use campus::{MeterType, PoiType};
pub use people::ResourceType;

use crate::client::WatClient;

macro_rules! endpoint_groups {
    ($($(#[$doc:meta])* $method:ident => $group:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy)]
            pub struct $group<'a> {
                client: &'a WatClient,
            }
        )*

        impl WatClient {
            $(
                $(#[$doc])*
                #[must_use]
                pub const fn $method(&self) -> $group<'_> {
                    $group { client: self }
                }
            )*
        }
    };
}

endpoint_groups! {
    /// API metadata and usage.
    api => Api,
    /// Graduate and undergraduate awards.
    awards => Awards,
    /// Campus blogs.
    blogs => Blogs,
    /// Buildings and rooms.
    buildings => Buildings,
    /// Code tables.
    codes => Codes,
    /// Course catalog and schedules.
    courses => Courses,
    /// People directory.
    directory => Directory,
    /// Campus events and holidays.
    events => Events,
    /// Feds (student federation) events and locations.
    feds => Feds,
    /// Food services menus and outlets.
    food_services => FoodServices,
    /// Campus news.
    news => News,
    /// Job opportunities.
    opportunities => Opportunities,
    /// Parking lots.
    parking => Parking,
    /// Points of interest.
    points_of_interest => PointsOfInterest,
    /// Miscellaneous resources.
    resources => Resources,
    /// Server status.
    server => Server,
    /// Site services.
    services => Services,
    /// Academic terms.
    terms => Terms,
    /// Grand River Transit data.
    transit => Transit,
    /// Weather station readings.
    weather => Weather,
}
