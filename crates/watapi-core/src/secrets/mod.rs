//! Handling of the API key.
//!
//! - `ApiKey`: wrapper that keeps the key out of logs and debug output
//! - `scrub_secrets`: redact credentials from error text

use secrecy::{ExposeSecret, SecretBox};
use serde::{Deserialize, Deserializer};

/// Redaction marker written in place of secret values.
pub const REDACTED: &str = "[REDACTED]";

/// Open Data API key.
///
/// The inner value is wrapped with `secrecy::SecretBox` so it is never
/// printed by `Debug` or `Display`.
#[derive(Clone)]
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    /// Create a new API key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretBox::new(key.into().into_boxed_str()))
    }

    /// Expose the secret for building a request.
    ///
    /// Use sparingly - only when actually sending to the API.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Whether the key is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.expose().trim().is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey({REDACTED})")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Scrub secrets from error messages and logs.
///
/// Replaces values after known secret patterns with `[REDACTED]`.
///
/// # Arguments
///
/// * `text` - Text to scrub
/// * `patterns` - Patterns to look for (e.g., `["key=", "token="]`)
#[must_use]
pub fn scrub_secrets(text: &str, patterns: &[&str]) -> String {
    let mut result = text.to_string();

    for pattern in patterns {
        let mut search_start = 0;
        while let Some(start) = result[search_start..].find(pattern) {
            let abs_start = search_start + start + pattern.len();

            // Value ends at whitespace, a quote, or a query/list separator.
            let end = result[abs_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '&' | ','))
                .map_or(result.len(), |e| abs_start + e);

            result.replace_range(abs_start..end, REDACTED);
            search_start = abs_start + REDACTED.len();
        }
    }

    result
}

/// Scrub every literal occurrence of `key`, then the [`KEY_PATTERNS`].
#[must_use]
pub fn scrub_key(text: &str, key: &ApiKey) -> String {
    let text = if key.is_blank() {
        text.to_string()
    } else {
        text.replace(key.expose(), REDACTED)
    };
    scrub_secrets(&text, KEY_PATTERNS)
}

/// Query and header patterns that carry an API key.
pub const KEY_PATTERNS: &[&str] = &["key=", "token=", "secret=", "password=", "x-api-key: "];
