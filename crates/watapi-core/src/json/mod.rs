//! Dynamically typed JSON values.
//!
//! [`Json`] is a closed union over every JSON shape plus an `Invalid`
//! sentinel. Lookups never fail loudly: indexing the wrong shape, a missing
//! key, or an out-of-range position all yield `Invalid`, so chained access
//! such as `root["data"]["courses"][0]["title"]` is always safe.
//!
//! `Invalid` is not JSON `null`. `null` is a value the document contains;
//! `Invalid` means there was nothing there to read.

mod classify;
mod convert;
mod macros;
mod parse;
mod render;

pub use classify::Native;
pub use parse::ParseError;
pub use render::DEFAULT_INDENT;

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

/// Map type backing [`Json::Object`]. Key order is unspecified.
pub type Map = HashMap<String, Json>;

static INVALID: Json = Json::Invalid;

/// A decoded JSON value.
///
/// Equality is structural, except that `Invalid` never compares equal to
/// anything, including another `Invalid`. For that reason `Json` implements
/// `PartialEq` but not `Eq`.
#[derive(Debug, Clone)]
pub enum Json {
    /// A JSON string.
    String(String),
    /// A JSON number. Integers and fractions share one `f64` representation.
    Number(f64),
    /// A JSON object.
    Object(Map),
    /// A JSON array.
    Array(Vec<Json>),
    /// A JSON boolean.
    Bool(bool),
    /// An explicit JSON `null`.
    Null,
    /// No value: the result of a failed lookup or a failed decode.
    Invalid,
}

/// Discriminant of a [`Json`] value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// [`Json::String`].
    String,
    /// [`Json::Number`].
    Number,
    /// [`Json::Object`].
    Object,
    /// [`Json::Array`].
    Array,
    /// [`Json::Bool`].
    Bool,
    /// [`Json::Null`].
    Null,
    /// [`Json::Invalid`].
    Invalid,
}

impl JsonKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Object => "object",
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Json {
    /// The variant tag of this value.
    #[must_use]
    pub const fn kind(&self) -> JsonKind {
        match self {
            Self::String(_) => JsonKind::String,
            Self::Number(_) => JsonKind::Number,
            Self::Object(_) => JsonKind::Object,
            Self::Array(_) => JsonKind::Array,
            Self::Bool(_) => JsonKind::Bool,
            Self::Null => JsonKind::Null,
            Self::Invalid => JsonKind::Invalid,
        }
    }

    /// The text of a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// A `Number` truncated toward zero.
    ///
    /// Values beyond the `i64` range saturate and `NaN` reads as `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(*number as i64),
            _ => None,
        }
    }

    /// The value of a `Number`.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The entries of an `Object`.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The elements of an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The value of a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether this is an explicit JSON `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this is the `Invalid` sentinel.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Look up `key` in an object. Same as `self[key]`.
    #[must_use]
    pub fn get(&self, key: &str) -> &Self {
        match self {
            Self::Object(map) => map.get(key).unwrap_or(&INVALID),
            _ => &INVALID,
        }
    }

    /// Look up position `index` in an array. Same as `self[index]`.
    #[must_use]
    pub fn at(&self, index: usize) -> &Self {
        match self {
            Self::Array(items) => items.get(index).unwrap_or(&INVALID),
            _ => &INVALID,
        }
    }
}

impl PartialEq for Json {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(lhs), Self::Bool(rhs)) => lhs == rhs,
            (Self::String(lhs), Self::String(rhs)) => lhs == rhs,
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Array(lhs), Self::Array(rhs)) => lhs == rhs,
            (Self::Object(lhs), Self::Object(rhs)) => lhs == rhs,
            // Invalid is absence, so it matches nothing.
            _ => false,
        }
    }
}

impl Index<&str> for Json {
    type Output = Self;

    fn index(&self, key: &str) -> &Self {
        self.get(key)
    }
}

impl Index<usize> for Json {
    type Output = Self;

    fn index(&self, index: usize) -> &Self {
        self.at(index)
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pretty() {
            Some(text) => f.write_str(&text),
            None => f.write_str("<invalid json>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    fn every_variant() -> Vec<Json> {
        vec![
            Json::String("text".to_string()),
            Json::Number(42.0),
            json!({"k": 1}),
            json!([1, 2]),
            Json::Bool(true),
            Json::Null,
            Json::Invalid,
        ]
    }

    #[test]
    fn test_keyed_access_is_total() {
        for value in every_variant() {
            let is_object = matches!(value, Json::Object(_));
            assert!(value["missing"].is_invalid());
            assert_eq!(value["k"].is_invalid(), !is_object);
        }
    }

    #[test]
    fn test_positional_access_is_total() {
        for value in every_variant() {
            let is_array = matches!(value, Json::Array(_));
            assert!(value[2].is_invalid());
            assert!(value[usize::MAX].is_invalid());
            assert_eq!(value[1].is_invalid(), !is_array);
        }
    }

    #[test]
    fn test_chained_lookup_on_missing_stays_invalid() {
        let root = json!({"data": {"courses": []}});
        assert!(root["a"]["b"]["c"].is_invalid());
        assert!(root["data"]["courses"][0]["title"].is_invalid());
        assert!(root[3]["data"].is_invalid());
    }

    #[test]
    fn test_null_vs_missing() {
        let with_null = json!({"a": null});
        let empty = json!({});

        assert_eq!(with_null["a"], Json::Null);
        assert!(empty["a"].is_invalid());
        assert_ne!(with_null["a"], empty["a"]);
        assert_ne!(empty["a"], with_null["a"]);
    }

    #[test]
    fn test_narrowing_is_exact() {
        for value in every_variant() {
            let kind = value.kind();
            assert_eq!(value.as_str().is_some(), kind == JsonKind::String);
            assert_eq!(value.as_integer().is_some(), kind == JsonKind::Number);
            assert_eq!(value.as_double().is_some(), kind == JsonKind::Number);
            assert_eq!(value.as_object().is_some(), kind == JsonKind::Object);
            assert_eq!(value.as_array().is_some(), kind == JsonKind::Array);
            assert_eq!(value.as_bool().is_some(), kind == JsonKind::Bool);
        }
    }

    #[test]
    fn test_as_integer_truncates_toward_zero() {
        assert_eq!(Json::Number(3.9).as_integer(), Some(3));
        assert_eq!(Json::Number(-3.9).as_integer(), Some(-3));
        assert_eq!(Json::Number(1e300).as_integer(), Some(i64::MAX));
        assert_eq!(Json::Number(f64::NAN).as_integer(), Some(0));
        assert_eq!(Json::String("7".to_string()).as_integer(), None);
    }

    #[test]
    fn test_invalid_is_never_equal() {
        assert_ne!(Json::Invalid, Json::Invalid);
        assert_ne!(Json::Invalid, Json::Null);
        assert_ne!(json!([1]), Json::Array(vec![Json::Invalid]));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(json!({"a": [1, "x", null]}), json!({"a": [1.0, "x", null]}));
        assert_ne!(json!({"a": [1]}), json!({"a": [1, 2]}));
        assert_ne!(Json::Number(1.0), Json::Bool(true));
        assert_ne!(json!("1"), json!(1));
    }

    #[test]
    fn test_display_of_invalid_root() {
        assert_eq!(Json::Invalid.to_string(), "<invalid json>");
        assert_eq!(json!(true).to_string(), "true");
    }
}
