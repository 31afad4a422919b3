//! Shared generators for property-based tests.

#![allow(dead_code)]

use json_optics::json::Json;
use proptest::prelude::*;

/// Generates a scalar JSON value.
pub fn scalar() -> impl Strategy<Value = Json> {
    prop_oneof![
        Just(Json::Null),
        any::<bool>().prop_map(Json::Bool),
        any::<i64>().prop_map(Json::from),
        (-1.0e9f64..1.0e9).prop_map(Json::from),
        "[a-z]{0,6}".prop_map(Json::from),
    ]
}

/// Generates an arbitrary JSON tree of bounded depth.
pub fn json() -> impl Strategy<Value = Json> {
    scalar().prop_recursive(3, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Json::Array),
            prop::collection::vec(("[a-d]", inner), 0..4).prop_map(Json::object),
        ]
    })
}

/// Generates an array of integers.
pub fn int_array() -> impl Strategy<Value = Json> {
    prop::collection::vec(any::<i32>(), 0..8)
        .prop_map(|elements| Json::array(elements.into_iter().map(Json::from)))
}

/// Generates documents shaped like `{"a": {"b": [..]}, "c": ..}`.
pub fn nested_document() -> impl Strategy<Value = Json> {
    (int_array(), scalar()).prop_map(|(numbers, other)| {
        Json::object([
            ("a", Json::object([("b", numbers)])),
            ("c", other),
        ])
    })
}
