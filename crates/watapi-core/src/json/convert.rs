//! Literal construction and serde integration.

use std::collections::{BTreeMap, HashMap};

use serde::ser::{Error as _, Serialize, Serializer};

use super::{Json, Map, Native};

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

macro_rules! from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Json {
                fn from(value: $ty) -> Self {
                    Self::classify(value)
                }
            }
        )*
    };
}

from_literal!(
    &str, String, &String, bool, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64, Native, serde_json::Value,
);

impl<T: Into<Native>> From<Option<T>> for Json {
    fn from(value: Option<T>) -> Self {
        Self::classify(value)
    }
}

impl<T: Into<Native>> From<Vec<T>> for Json {
    fn from(items: Vec<T>) -> Self {
        Self::classify(items)
    }
}

impl<T: Clone + Into<Native>> From<&[T]> for Json {
    fn from(items: &[T]) -> Self {
        Self::classify(items)
    }
}

impl<T: Into<Native>, const N: usize> From<[T; N]> for Json {
    fn from(items: [T; N]) -> Self {
        Self::classify(items)
    }
}

impl<K: Into<String>, T: Into<Native>> From<HashMap<K, T>> for Json {
    fn from(map: HashMap<K, T>) -> Self {
        Self::classify(map)
    }
}

impl<K: Into<String>, T: Into<Native>> From<BTreeMap<K, T>> for Json {
    fn from(map: BTreeMap<K, T>) -> Self {
        Self::classify(map)
    }
}

impl FromIterator<Self> for Json {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Self)> for Json {
    fn from_iter<I: IntoIterator<Item = (K, Self)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect::<Map>(),
        )
    }
}

impl Serialize for Json {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(text) => serializer.serialize_str(text),
            Self::Number(number) if number.fract() == 0.0 && number.abs() < MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*number as i64)
            }
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::Object(map) => serializer.collect_map(map),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Null => serializer.serialize_unit(),
            Self::Invalid => Err(S::Error::custom("cannot serialize an invalid JSON value")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalar_literals() {
        assert_eq!(Json::from("text"), Json::String("text".to_string()));
        assert_eq!(Json::from(String::from("owned")), Json::String("owned".to_string()));
        assert_eq!(Json::from(12), Json::Number(12.0));
        assert_eq!(Json::from(0.25), Json::Number(0.25));
        assert_eq!(Json::from(false), Json::Bool(false));
        assert_eq!(Json::from(()), Json::Null);
        assert_eq!(Json::from(None::<&str>), Json::Null);
        assert_eq!(Json::from(Some("x")), Json::String("x".to_string()));
    }

    #[test]
    fn test_collection_literals() {
        let array = Json::from(vec![1, 2, 3]);
        assert_eq!(array.as_array().map(<[Json]>::len), Some(3));

        let nested = Json::from(vec![vec!["a"], vec![]]);
        assert_eq!(nested[0][0].as_str(), Some("a"));
        assert_eq!(nested[1].as_array().map(<[Json]>::len), Some(0));

        let mut fields = BTreeMap::new();
        fields.insert("status", Some(200));
        fields.insert("missing", None);
        let object = Json::from(fields);
        assert_eq!(object["status"].as_integer(), Some(200));
        assert!(object["missing"].is_null());
    }

    #[test]
    fn test_heterogeneous_object_literal() {
        let mut fields: HashMap<&str, Native> = HashMap::new();
        fields.insert("name", "Engineering 5".into());
        fields.insert("floors", 7.into());
        fields.insert("open", true.into());
        fields.insert("rooms", vec!["1101", "2001"].into());
        fields.insert("notes", ().into());

        let building = Json::from(fields);
        assert_eq!(building["name"].as_str(), Some("Engineering 5"));
        assert_eq!(building["floors"].as_integer(), Some(7));
        assert_eq!(building["open"].as_bool(), Some(true));
        assert_eq!(building["rooms"][1].as_str(), Some("2001"));
        assert!(building["notes"].is_null());
    }

    #[test]
    fn test_from_iterator() {
        let array: Json = (1..=3).map(Json::from).collect();
        assert_eq!(array, json!([1, 2, 3]));

        let object: Json = [("a", json!(1)), ("b", json!(null))].into_iter().collect();
        assert_eq!(object, json!({"a": 1, "b": null}));
    }

    #[test]
    fn test_serialize_matches_json_text() {
        let value = json!({"term": 1179, "ratio": 0.5, "tags": ["a"], "open": true, "x": null});
        let encoded = serde_json::to_value(&value).expect("serialize");
        assert_eq!(
            encoded,
            serde_json::json!({"term": 1179, "ratio": 0.5, "tags": ["a"], "open": true, "x": null})
        );
        assert_eq!(serde_json::to_string(&json!(3)).expect("serialize"), "3");
    }

    #[test]
    fn test_serialize_rejects_invalid() {
        assert!(serde_json::to_string(&Json::Invalid).is_err());
        assert!(serde_json::to_string(&Json::Array(vec![Json::Invalid])).is_err());
    }
}
