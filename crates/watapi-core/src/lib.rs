//! # watapi Core
//!
//! JSON value model and response envelope for the University of Waterloo
//! Open Data API.
//!
//! This crate provides:
//! - A dynamically typed [`Json`] value with total, non-panicking lookups
//! - Parsing from bytes or text and indented rendering
//! - Literal construction through `From` impls and the [`json!`] macro
//! - Decoding of the `{meta, data}` [`Response`] envelope
//! - Client configuration (JSON5 format) and API key handling

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod json;
pub mod response;
pub mod secrets;

mod error;

pub use config::{ClientConfig, ConfigError};
pub use error::Error;
pub use json::{Json, JsonKind, Map, Native, ParseError};
pub use response::{DecodeError, Metadata, Response};
pub use secrets::{ApiKey, scrub_key, scrub_secrets};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::json;
    pub use crate::json::{Json, JsonKind};
    pub use crate::response::{Metadata, Response};
}
