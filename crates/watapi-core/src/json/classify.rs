//! Classification of native values into [`Json`].
//!
//! Every construction path (decoder output, Rust literals, the `json!`
//! macro) funnels through [`Json::classify`], which applies one ordered
//! list of shape rules:
//!
//! 1. already JSON: passthrough
//! 2. a sequence of JSON values: `Array`
//! 3. a mapping to JSON values: `Object`
//! 4. raw bytes: full decode, `Invalid` on failure
//! 5. a sequence of anything: element-wise classification, `Array`
//! 6. a mapping to anything: value-wise classification, `Object`
//! 7. text: `String`
//! 8. boolean scalar: `Bool`; numeric scalar: `Number`
//! 9. absent: `Null`
//! 10. anything else: internal invariant violation, `Invalid`

use super::{Json, Map};

/// A native value awaiting classification into [`Json`].
#[derive(Debug, Clone)]
pub enum Native {
    /// A value that is already JSON.
    Json(Json),
    /// Bytes holding an encoded JSON document.
    Bytes(Vec<u8>),
    /// An ordered sequence.
    Seq(Vec<Native>),
    /// String-keyed entries. A repeated key keeps its last value.
    Map(Vec<(String, Native)>),
    /// Text.
    Str(String),
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(f64),
    /// No value.
    Absent,
    /// A decoder value JSON has no representation for.
    Unsupported(String),
}

impl Native {
    const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    fn into_json(self) -> Option<Json> {
        match self {
            Self::Json(json) => Some(json),
            _ => None,
        }
    }
}

impl Json {
    /// Classify a native value using the ordered shape rules of this module.
    ///
    /// Never fails: bytes that do not decode become `Invalid`.
    pub fn classify(native: impl Into<Native>) -> Self {
        match native.into() {
            Native::Json(json) => json,
            Native::Seq(items) if items.iter().all(Native::is_json) => {
                Self::Array(items.into_iter().filter_map(Native::into_json).collect())
            }
            Native::Map(entries) if entries.iter().all(|(_, value)| value.is_json()) => {
                Self::Object(
                    entries
                        .into_iter()
                        .filter_map(|(key, value)| value.into_json().map(|json| (key, json)))
                        .collect(),
                )
            }
            Native::Bytes(bytes) => Self::parse(&bytes).unwrap_or_else(|err| {
                tracing::debug!(error = %err, len = bytes.len(), "bytes did not decode as JSON");
                Self::Invalid
            }),
            Native::Seq(items) => Self::Array(items.into_iter().map(Self::classify).collect()),
            Native::Map(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::classify(value)))
                    .collect::<Map>(),
            ),
            Native::Str(text) => Self::String(text),
            Native::Bool(value) => Self::Bool(value),
            Native::Number(number) => Self::Number(number),
            Native::Absent => Self::Null,
            Native::Unsupported(what) => {
                tracing::warn!(value = %what, "native value has no JSON representation");
                debug_assert!(false, "native value has no JSON representation: {what}");
                Self::Invalid
            }
        }
    }
}

impl From<Json> for Native {
    fn from(json: Json) -> Self {
        Self::Json(json)
    }
}

impl From<serde_json::Value> for Native {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            serde_json::Value::Bool(value) => Self::Bool(value),
            serde_json::Value::Number(number) => number
                .as_f64()
                .map_or_else(|| Self::Unsupported(number.to_string()), Self::Number),
            serde_json::Value::String(text) => Self::Str(text),
            serde_json::Value::Array(items) => Self::Seq(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Native {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<String> for Native {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<&String> for Native {
    fn from(text: &String) -> Self {
        Self::Str(text.clone())
    }
}

impl From<bool> for Native {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<()> for Native {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

macro_rules! lossless_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Native {
                fn from(number: $ty) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

macro_rules! wide_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Native {
                #[allow(clippy::cast_precision_loss)]
                fn from(number: $ty) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

lossless_number!(i8, i16, i32, u8, u16, u32, f32, f64);
wide_number!(i64, u64, i128, u128, isize, usize);

impl<T: Into<Native>> From<Option<T>> for Native {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Native>> From<Vec<T>> for Native {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Native>> From<&[T]> for Native {
    fn from(items: &[T]) -> Self {
        Self::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Native>, const N: usize> From<[T; N]> for Native {
    fn from(items: [T; N]) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Native>> From<std::collections::HashMap<K, T>> for Native {
    fn from(map: std::collections::HashMap<K, T>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, T: Into<Native>> From<std::collections::BTreeMap<K, T>> for Native {
    fn from(map: std::collections::BTreeMap<K, T>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    #[test]
    fn test_passthrough_keeps_value() {
        let original = json!({"a": [1, 2]});
        assert_eq!(Json::classify(original.clone()), original);
    }

    #[test]
    fn test_map_of_json_values_becomes_object() {
        let native = Native::Map(vec![
            ("a".to_string(), Native::Json(Json::Null)),
            ("b".to_string(), Native::Json(json!([true]))),
        ]);
        let json = Json::classify(native);

        let object = json.as_object().expect("object");
        assert_eq!(object.len(), 2);
        assert_eq!(json["a"], Json::Null);
        assert_eq!(json["b"][0], Json::Bool(true));
    }

    #[test]
    fn test_seq_of_json_values_becomes_array() {
        let native = Native::Seq(vec![Native::Json(json!("x")), Native::Json(json!(2))]);
        assert_eq!(Json::classify(native), json!(["x", 2]));
    }

    #[test]
    fn test_mixed_seq_is_wrapped_element_wise() {
        let native = Native::Seq(vec![
            Native::Json(json!("x")),
            Native::Str("y".to_string()),
            Native::Seq(vec![Native::Number(1.5), Native::Absent]),
        ]);
        assert_eq!(Json::classify(native), json!(["x", "y", [1.5, null]]));
    }

    #[test]
    fn test_repeated_map_key_keeps_last_value() {
        let native = Native::Map(vec![
            ("k".to_string(), Native::Number(1.0)),
            ("k".to_string(), Native::Number(2.0)),
        ]);
        assert_eq!(Json::classify(native)["k"], json!(2));
    }

    #[test]
    fn test_bytes_decode_or_become_invalid() {
        let good = Json::classify(Native::Bytes(br#"{"x": [1, true]}"#.to_vec()));
        assert_eq!(good, json!({"x": [1, true]}));

        let bad = Json::classify(Native::Bytes(b"{not json".to_vec()));
        assert!(bad.is_invalid());
    }

    #[test]
    fn test_boolean_scalar_is_not_a_number() {
        assert_eq!(Json::classify(true), Json::Bool(true));
        assert_eq!(Json::classify(serde_json::json!(false)), Json::Bool(false));
        assert_eq!(Json::classify(serde_json::json!(1)), Json::Number(1.0));
    }

    #[test]
    fn test_integers_are_stored_as_doubles() {
        assert_eq!(Json::classify(7_u8), Json::Number(7.0));
        assert_eq!(Json::classify(-7_i64), Json::Number(-7.0));
        assert_eq!(Json::classify(2.5_f32), Json::Number(2.5));
    }

    #[test]
    fn test_absent_values_become_null() {
        assert_eq!(Json::classify(None::<i32>), Json::Null);
        assert_eq!(Json::classify(()), Json::Null);
        assert_eq!(Json::classify(serde_json::Value::Null), Json::Null);
    }

    #[test]
    fn test_decoder_tree_is_classified_recursively() {
        let decoded = serde_json::json!({
            "meta": {"status": 200},
            "data": [{"id": 1, "tags": ["a", null]}]
        });
        let json = Json::classify(decoded);

        assert_eq!(json["meta"]["status"].as_integer(), Some(200));
        assert_eq!(json["data"][0]["tags"][0].as_str(), Some("a"));
        assert!(json["data"][0]["tags"][1].is_null());
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "no JSON representation"))]
    fn test_unsupported_value_is_invalid() {
        let json = Json::classify(Native::Unsupported("opaque".to_string()));
        assert!(json.is_invalid());
    }
}
