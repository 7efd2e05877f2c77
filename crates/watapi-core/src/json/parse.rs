//! Decoding raw bytes and text into [`Json`].
//!
//! Tokenization is delegated to `serde_json`; the decoded tree is then
//! classified like any other native value. A decode failure is a hard
//! [`ParseError`] for the caller, unlike the quiet `Invalid` sentinel used
//! for lookups inside an existing tree.

use std::str::FromStr;

use serde_json::error::Category;
use thiserror::Error;

use super::Json;

/// Failure to decode a JSON document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Decoder message.
        message: String,
    },

    /// The input ended in the middle of a value.
    #[error("unexpected end of JSON input at line {line}, column {column}")]
    Eof {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
    },

    /// The input is well-formed but holds a value the decoder rejects.
    #[error("unsupported JSON value: {message}")]
    Data {
        /// Decoder message.
        message: String,
    },

    /// The text is not valid UTF-8.
    #[error("JSON text is not valid UTF-8: {message}")]
    Encoding {
        /// Description of the invalid sequence.
        message: String,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Eof => Self::Eof {
                line: err.line(),
                column: err.column(),
            },
            Category::Data => Self::Data {
                message: err.to_string(),
            },
            Category::Syntax | Category::Io => Self::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        }
    }
}

impl Json {
    /// Decode a JSON document from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the bytes are not a single well-formed JSON value.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        Ok(Self::classify(value))
    }

    /// Decode a JSON document from text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is not a single well-formed JSON value.
    pub fn parse_str(text: &str) -> Result<Self, ParseError> {
        Self::parse(text.as_bytes())
    }

    /// Decode an owned buffer that must be strict UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Encoding`] for invalid UTF-8, otherwise as [`Json::parse_str`].
    pub fn parse_utf8(bytes: Vec<u8>) -> Result<Self, ParseError> {
        let text = String::from_utf8(bytes).map_err(|err| ParseError::Encoding {
            message: err.utf8_error().to_string(),
        })?;
        Self::parse_str(&text)
    }
}

impl FromStr for Json {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_str(text)
    }
}
