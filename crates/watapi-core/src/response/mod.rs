//! The `{meta, data}` envelope every API response is wrapped in.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::error::Error;
use crate::json::{Json, JsonKind};

/// Envelope fields that failed to decode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// A required field is absent.
    #[error("response is missing required field `{field}`")]
    MissingField {
        /// Dotted path of the field.
        field: &'static str,
    },

    /// A required field holds the wrong kind of value.
    #[error("response field `{field}` should be {expected}, found {found}")]
    WrongType {
        /// Dotted path of the field.
        field: &'static str,
        /// Kind the field must have.
        expected: JsonKind,
        /// Kind the field actually has.
        found: JsonKind,
    },

    /// The timestamp cannot be represented as a UTC instant.
    #[error("response timestamp {value} is out of range")]
    Timestamp {
        /// Raw seconds since the Unix epoch.
        value: f64,
    },
}

/// Decoded `meta` block of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// The raw `meta` object.
    pub json: Json,
    /// Status code reported by the API.
    pub status_code: i64,
    /// Time the response was generated.
    pub timestamp: DateTime<Utc>,
    /// Human readable status message.
    pub message: String,
    /// Identifier of the API method that served the request.
    pub method_id: i64,
}

impl Metadata {
    /// Whether the API reported a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

/// A decoded API response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Envelope metadata.
    pub metadata: Metadata,
    /// Endpoint-specific payload. `Invalid` if the envelope had no `data`.
    pub data: Json,
}

impl Response {
    /// Split a parsed document into metadata and payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if `meta` or one of its four required fields
    /// is missing or has the wrong type.
    pub fn decode(root: Json) -> Result<Self, DecodeError> {
        let (meta, data) = match root {
            Json::Object(mut map) => (
                map.remove("meta").unwrap_or(Json::Invalid),
                map.remove("data").unwrap_or(Json::Invalid),
            ),
            _ => (Json::Invalid, Json::Invalid),
        };

        required(&meta, "meta", JsonKind::Object, |_| Some(()))?;
        let status_code = required(&meta["status"], "meta.status", JsonKind::Number, Json::as_integer)?;
        let seconds = required(
            &meta["timestamp"],
            "meta.timestamp",
            JsonKind::Number,
            Json::as_double,
        )?;
        let message = required(&meta["message"], "meta.message", JsonKind::String, |value| {
            value.as_str().map(str::to_string)
        })?;
        let method_id = required(
            &meta["method_id"],
            "meta.method_id",
            JsonKind::Number,
            Json::as_integer,
        )?;

        let metadata = Metadata {
            status_code,
            timestamp: timestamp_from_secs(seconds)?,
            message,
            method_id,
            json: meta,
        };
        tracing::debug!(
            status = metadata.status_code,
            method_id = metadata.method_id,
            "decoded response envelope"
        );

        Ok(Self { metadata, data })
    }

    /// Parse a response body and decode its envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed JSON and [`Error::Decode`] for a
    /// malformed envelope.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let root = Json::parse(bytes)?;
        Ok(Self::decode(root)?)
    }
}

fn required<'a, T>(
    value: &'a Json,
    field: &'static str,
    expected: JsonKind,
    narrow: impl FnOnce(&'a Json) -> Option<T>,
) -> Result<T, DecodeError> {
    if value.is_invalid() {
        return Err(DecodeError::MissingField { field });
    }
    if value.kind() != expected {
        return Err(DecodeError::WrongType {
            field,
            expected,
            found: value.kind(),
        });
    }
    narrow(value).ok_or(DecodeError::WrongType {
        field,
        expected,
        found: value.kind(),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timestamp_from_secs(value: f64) -> Result<DateTime<Utc>, DecodeError> {
    if !value.is_finite() {
        return Err(DecodeError::Timestamp { value });
    }
    let whole = value.floor();
    // i64::MAX is not exactly representable; anything at or above 2^63 overflows.
    if whole < -9_223_372_036_854_775_808.0 || whole >= 9_223_372_036_854_775_808.0 {
        return Err(DecodeError::Timestamp { value });
    }
    let nanos = (((value - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos).ok_or(DecodeError::Timestamp { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;
    use pretty_assertions::assert_eq;

    fn envelope(meta: Json) -> Json {
        json!({"meta": meta, "data": {"x": 1}})
    }

    #[test]
    fn test_decode_envelope() {
        let root = Json::parse_str(
            r#"{"meta":{"status":200,"timestamp":1500000000,"message":"OK","method_id":7},"data":{"x":1}}"#,
        )
        .unwrap();
        let response = Response::decode(root).unwrap();

        assert_eq!(response.metadata.status_code, 200);
        assert_eq!(
            response.metadata.timestamp,
            DateTime::from_timestamp(1_500_000_000, 0).unwrap()
        );
        assert_eq!(response.metadata.message, "OK");
        assert_eq!(response.metadata.method_id, 7);
        assert_eq!(response.metadata.json["status"].as_integer(), Some(200));
        assert_eq!(response.data["x"].as_integer(), Some(1));
        assert!(response.metadata.is_success());
    }

    #[test]
    fn test_missing_fields_fail() {
        let err = Response::decode(envelope(json!({"status": 200}))).unwrap_err();
        assert_eq!(err, DecodeError::MissingField { field: "meta.timestamp" });

        let err = Response::decode(json!({"data": []})).unwrap_err();
        assert_eq!(err, DecodeError::MissingField { field: "meta" });

        let err = Response::decode(json!([1, 2])).unwrap_err();
        assert_eq!(err, DecodeError::MissingField { field: "meta" });
    }

    #[test]
    fn test_mistyped_fields_fail() {
        let err = Response::decode(envelope(json!({
            "status": "200",
            "timestamp": 0,
            "message": "OK",
            "method_id": 1,
        })))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::WrongType {
                field: "meta.status",
                expected: JsonKind::Number,
                found: JsonKind::String,
            }
        );

        let err = Response::decode(envelope(json!({
            "status": 200,
            "timestamp": 0,
            "message": null,
            "method_id": 1,
        })))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "response field `meta.message` should be string, found null"
        );

        let err = Response::decode(json!({"meta": [], "data": {}})).unwrap_err();
        assert!(matches!(err, DecodeError::WrongType { field: "meta", .. }));
    }

    #[test]
    fn test_fractional_and_out_of_range_timestamps() {
        let response = Response::decode(envelope(json!({
            "status": 204,
            "timestamp": 1_500_000_000.5,
            "message": "No Content",
            "method_id": 3,
        })))
        .unwrap();
        assert_eq!(
            response.metadata.timestamp,
            DateTime::from_timestamp(1_500_000_000, 500_000_000).unwrap()
        );

        let err = Response::decode(envelope(json!({
            "status": 200,
            "timestamp": 1e300,
            "message": "OK",
            "method_id": 3,
        })))
        .unwrap_err();
        assert!(matches!(err, DecodeError::Timestamp { .. }));
    }

    #[test]
    fn test_missing_data_is_invalid() {
        let response = Response::decode(json!({
            "meta": {"status": 404, "timestamp": 0, "message": "Not Found", "method_id": 0},
        }))
        .unwrap();
        assert!(response.data.is_invalid());
        assert!(!response.metadata.is_success());
    }

    #[test]
    fn test_from_slice_reports_parse_errors() {
        assert!(matches!(Response::from_slice(b"<html>"), Err(Error::Parse(_))));
        assert!(matches!(
            Response::from_slice(br#"{"meta": {}}"#),
            Err(Error::Decode(DecodeError::MissingField { field: "meta.status" }))
        ));
    }
}
