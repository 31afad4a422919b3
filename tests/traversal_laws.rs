//! Property-based tests for Traversal laws.
//!
//! Traversal Laws:
//!
//! 1. **Modify Identity Law**: Applying the identity function via modify_all yields the original.
//!    ```text
//!    traversal.modify_all(source, |x| x) == source
//!    ```
//!
//! 2. **Modify Composition Law**: Consecutive modify_all calls are equivalent to a single composed call.
//!    ```text
//!    traversal.modify_all(traversal.modify_all(source, f), g) == traversal.modify_all(source, |x| g(f(x)))
//!    ```
//!
//! 3. **Get After Modify**: `get_all` after `modify_all` sees the modified foci in order.

#![forbid(unsafe_code)]

mod common;

use json_optics::json::Json;
use json_optics::optics::{Each, JsonEach, Traversal, filter_index};
use json_optics::path::JsonPath;
use proptest::prelude::*;

// =============================================================================
// JsonEach Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_json_each_modify_identity_law(json in common::json()) {
        prop_assert_eq!(JsonEach.modify_all(json.clone(), |child| child), json);
    }

    #[test]
    fn prop_json_each_modify_composition_law(json in common::json()) {
        let wrap = |child: Json| Json::array([child]);
        let tag = |child: Json| Json::object([("value", child)]);

        let left = JsonEach.modify_all(JsonEach.modify_all(json.clone(), wrap), tag);
        let right = JsonEach.modify_all(json, |child| tag(wrap(child)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_json_each_length_matches_children(json in common::json()) {
        let expected = match &json {
            Json::Array(elements) => elements.len(),
            Json::Object(object) => object.len(),
            _ => 0,
        };
        prop_assert_eq!(JsonEach.length(&json), expected);
    }
}

// =============================================================================
// Path Traversal Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_every_int_modify_identity_law(json in common::json()) {
        let ints = JsonPath::root().every().every().int();
        prop_assert_eq!(ints.modify_all(json.clone(), |n| n), json);
    }

    #[test]
    fn prop_every_float_modify_identity_law(
        values in prop::collection::vec(prop_oneof![-1.0e6f64..1.0e6, (-1000i32..1000).prop_map(f64::from)], 0..8)
    ) {
        let json = Json::array(values.into_iter().map(Json::from));
        let floats = JsonPath::root().every().float();
        prop_assert_eq!(floats.modify_all(json.clone(), |x| x), json);
    }

    #[test]
    fn prop_every_double_modify_identity_law(json in common::json()) {
        let doubles = JsonPath::root().every().double();
        prop_assert_eq!(doubles.modify_all(json.clone(), |x| x), json);
    }

    #[test]
    fn prop_every_int_modify_composition_law(document in common::nested_document()) {
        let ints = JsonPath::root().select("a").select("b").every().int();
        let increment = |n: i32| n.wrapping_add(1);
        let double = |n: i32| n.wrapping_mul(2);

        let left = ints.modify_all(ints.modify_all(document.clone(), increment), double);
        let right = ints.modify_all(document, |n| double(increment(n)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_every_int_get_after_modify(document in common::nested_document()) {
        let ints = JsonPath::root().select("a").select("b").every().int();
        let expected: Vec<i32> = ints
            .get_all(&document)
            .into_iter()
            .map(|n| n.wrapping_sub(3))
            .collect();
        let modified = ints.modify_all(document, |n| n.wrapping_sub(3));
        prop_assert_eq!(ints.get_all(&modified), expected);
    }

    #[test]
    fn prop_filter_keys_modify_identity_law(json in common::json()) {
        let values = JsonPath::root().filter_keys(|key| key < "c").traversal();
        prop_assert_eq!(values.modify_all(json.clone(), |value| value), json);
    }
}

// =============================================================================
// Filtered Traversal Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_index_leaves_other_elements(
        elements in prop::collection::vec(any::<i32>(), 0..12),
        modulus in 1usize..4
    ) {
        let traversal = filter_index(move |index| index % modulus == 0);
        let modified = traversal.modify_all(elements.clone(), |_| 0);

        for (index, (before, after)) in elements.iter().zip(&modified).enumerate() {
            if index % modulus == 0 {
                prop_assert_eq!(*after, 0);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn prop_filter_index_is_subset_of_each(elements in prop::collection::vec(any::<i32>(), 0..12)) {
        let all = Vec::<i32>::each().get_all(&elements);
        let even = filter_index(|index| index % 2 == 0).get_all(&elements);
        let expected: Vec<i32> = all.into_iter().step_by(2).collect();
        prop_assert_eq!(even, expected);
    }
}
