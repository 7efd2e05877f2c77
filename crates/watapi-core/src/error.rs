//! Crate-level error type.

use thiserror::Error;

use crate::json::ParseError;
use crate::response::DecodeError;

/// Failure turning a response body into a [`Response`](crate::Response).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The body is not JSON.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The body is JSON but not a valid envelope.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
