//! # watapi Client
//!
//! Async client for the University of Waterloo Open Data API.
//!
//! ```no_run
//! use watapi_client::{ClientConfig, WatClient};
//!
//! # async fn run() -> Result<(), watapi_client::ClientError> {
//! let client = WatClient::new(&ClientConfig::new("0123456789abcdef"))?;
//! let menu = client.food_services().menu().await?;
//! println!("{}", menu.data["outlets"][0]["outlet_name"].as_str().unwrap_or("-"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
pub mod endpoints;
mod error;
pub mod transport;

pub use client::WatClient;
pub use endpoints::{CodeType, MeterType, PoiType, ResourceType};
pub use error::ClientError;
pub use transport::{HttpTransport, Transport};
pub use watapi_core::{ClientConfig, Json, Response};
