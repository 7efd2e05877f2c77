//! The `json!` literal macro.

/// Build a [`Json`](crate::Json) value from JSON-like syntax.
///
/// Object and array literals nest freely; any other token sequence is an
/// expression converted with `Json::from`.
///
/// ```
/// use watapi_core::{json, Json};
///
/// let term = 1179;
/// let value = json!({
///     "term": term,
///     "subjects": ["CS", "MATH"],
///     "note": null,
/// });
/// assert_eq!(value["subjects"][1], Json::from("MATH"));
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Json::Null
    };

    ([]) => {
        $crate::Json::Array(::std::vec::Vec::new())
    };

    ([ $($tt:tt)+ ]) => {{
        let mut items = ::std::vec::Vec::new();
        $crate::json!(@array items () ($($tt)+));
        $crate::Json::Array(items)
    }};

    ({}) => {
        $crate::Json::Object($crate::json::Map::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut map = $crate::json::Map::new();
        $crate::json!(@object map ($($tt)+));
        $crate::Json::Object(map)
    }};

    (@array $items:ident () ()) => {};

    (@array $items:ident ($($elem:tt)+) ()) => {
        $items.push($crate::json!($($elem)+));
    };

    (@array $items:ident ($($elem:tt)+) (, $($rest:tt)*)) => {
        $items.push($crate::json!($($elem)+));
        $crate::json!(@array $items () ($($rest)*));
    };

    (@array $items:ident ($($elem:tt)*) ($next:tt $($rest:tt)*)) => {
        $crate::json!(@array $items ($($elem)* $next) ($($rest)*));
    };

    (@object $map:ident ()) => {};

    (@object $map:ident ($key:tt : $($rest:tt)+)) => {
        $crate::json!(@entry $map $key () ($($rest)+));
    };

    (@entry $map:ident $key:tt ($($value:tt)+) ()) => {
        $map.insert(::std::string::String::from($key), $crate::json!($($value)+));
    };

    (@entry $map:ident $key:tt ($($value:tt)+) (, $($rest:tt)*)) => {
        $map.insert(::std::string::String::from($key), $crate::json!($($value)+));
        $crate::json!(@object $map ($($rest)*));
    };

    (@entry $map:ident $key:tt ($($value:tt)*) ($next:tt $($rest:tt)*)) => {
        $crate::json!(@entry $map $key ($($value)* $next) ($($rest)*));
    };

    ($other:expr) => {
        $crate::Json::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Json, json};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalars() {
        assert_eq!(json!(null), Json::Null);
        assert_eq!(json!(true), Json::Bool(true));
        assert_eq!(json!(-1.5), Json::Number(-1.5));
        assert_eq!(json!("CS"), Json::String("CS".to_string()));
    }

    #[test]
    fn test_nested_literal() {
        let value = json!({
            "meta": {"status": 200, "message": "Request successful"},
            "data": [{"subject": "CS", "catalog_number": "136"}, [], {}],
        });

        assert_eq!(value["meta"]["status"].as_integer(), Some(200));
        assert_eq!(value["data"][0]["subject"].as_str(), Some("CS"));
        assert_eq!(value["data"][1], Json::Array(Vec::new()));
        assert_eq!(value["data"][2].as_object().map(|map| map.len()), Some(0));
    }

    #[test]
    fn test_expressions_and_trailing_commas() {
        let code = "MC";
        let rooms = vec![4020, 4021];
        let value = json!({
            "building": code,
            "rooms": rooms,
            "floors": 2 + 4,
            "open": [true, false,],
        });

        assert_eq!(value["building"].as_str(), Some("MC"));
        assert_eq!(value["rooms"][1].as_integer(), Some(4021));
        assert_eq!(value["floors"].as_integer(), Some(6));
        assert_eq!(value["open"].as_array().map(<[Json]>::len), Some(2));
    }

    #[test]
    fn test_computed_key() {
        let key = String::from("term");
        assert_eq!(json!({ key: 1179 })["term"].as_integer(), Some(1179));
    }
}
