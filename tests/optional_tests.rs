//! Tests for Optional composition and its laws.
//!
//! - **GetSet Law**: `optional.get_option(&source) == Some(a)` implies
//!   `optional.set(source, a) == source`
//! - **SetGet Law**: when the focus is present,
//!   `optional.get_option(&optional.set(source, a)) == Some(a)`
//! - **Absent Set Law**: when the focus is absent, `set` returns the source unchanged
//! - **Associativity**: `(o1 ∘ o2) ∘ o3` behaves like `o1 ∘ (o2 ∘ o3)`

#![forbid(unsafe_code)]

mod common;

use json_optics::json::Json;
use json_optics::optics::{
    IntPrism, JsonArrayPrism, JsonNumberPrism, JsonObjectPrism, ObjectIx, Optional, Prism,
    PrismComposeExtension, SharedOptional, VecIx,
};
use proptest::prelude::*;
use rstest::rstest;

fn field(name: &'static str) -> impl Optional<Json, Json> + Send + Sync + 'static {
    JsonObjectPrism.compose_optional(ObjectIx::new(name))
}

fn index(position: usize) -> impl Optional<Json, Json> + Send + Sync + 'static {
    JsonArrayPrism.compose_optional(VecIx::new(position))
}

fn int() -> impl Optional<Json, i32> + Send + Sync + 'static {
    JsonNumberPrism.compose(IntPrism).to_optional()
}

fn left_nested() -> SharedOptional<Json, i32> {
    field("a").compose(field("b")).compose(index(0)).compose(int()).shared()
}

fn right_nested() -> SharedOptional<Json, i32> {
    field("a")
        .compose(field("b").compose(index(0).compose(int())))
        .shared()
}

// =============================================================================
// Composition Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_composition_is_associative_for_get(document in common::nested_document()) {
        prop_assert_eq!(left_nested().get_option(&document), right_nested().get_option(&document));
    }

    #[test]
    fn prop_composition_is_associative_for_set(document in common::nested_document(), value in any::<i32>()) {
        prop_assert_eq!(
            left_nested().set(document.clone(), value),
            right_nested().set(document, value)
        );
    }

    #[test]
    fn prop_composition_is_associative_on_arbitrary_trees(json in common::json(), value in any::<i32>()) {
        prop_assert_eq!(left_nested().get_option(&json), right_nested().get_option(&json));
        prop_assert_eq!(left_nested().set(json.clone(), value), right_nested().set(json, value));
    }
}

// =============================================================================
// Optional Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_get_set_law(document in common::nested_document()) {
        let optional = left_nested();
        if let Some(value) = optional.get_option(&document) {
            prop_assert_eq!(optional.set(document.clone(), value), document);
        }
    }

    #[test]
    fn prop_set_get_law(document in common::nested_document(), value in any::<i32>()) {
        let optional = left_nested();
        if optional.is_present(&document) {
            prop_assert_eq!(optional.get_option(&optional.set(document, value)), Some(value));
        }
    }

    #[test]
    fn prop_absent_set_law(json in common::json(), value in any::<i32>()) {
        let optional = left_nested();
        if !optional.is_present(&json) {
            prop_assert_eq!(optional.set(json.clone(), value), json);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[rstest]
#[case(Json::object([("a", Json::from(1))]), None)]
#[case(Json::object([("a", Json::object([("b", Json::array([]))]))]), None)]
#[case(
    Json::object([("a", Json::object([("b", Json::array([Json::from(7)]))]))]),
    Some(7)
)]
fn test_nested_get_option(#[case] json: Json, #[case] expected: Option<i32>) {
    assert_eq!(left_nested().get_option(&json), expected);
}

#[rstest]
fn test_modify_option_reports_absence() {
    let json = Json::object([("a", Json::Null)]);
    assert_eq!(left_nested().modify_option(json, |n| n + 1), None);
}

#[rstest]
fn test_shared_optional_is_usable_across_threads() {
    let optional = left_nested();
    let document = Json::object([(
        "a",
        Json::object([("b", Json::array([Json::from(41)]))]),
    )]);

    let handle = std::thread::spawn({
        let optional = optional.clone();
        let document = document.clone();
        move || optional.modify(document, |n| n + 1)
    });

    let updated = handle.join().unwrap();
    assert_eq!(optional.get_option(&updated), Some(42));
}
