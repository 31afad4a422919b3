//! Property-based tests for Lens laws.
//!
//! This module verifies that Lens implementations satisfy the required laws:
//!
//! - **GetPut Law**: `lens.set(source, lens.get(&source)) == source`
//! - **PutGet Law**: `lens.get(&lens.set(source, value)) == value`
//! - **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`

#![forbid(unsafe_code)]

mod common;

use json_optics::json::{Json, JsonObject};
use json_optics::lens;
use json_optics::optics::{IdentityLens, Lens, ObjectAt};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Endpoint {
    host: String,
    port: u16,
}

#[derive(Clone, PartialEq, Debug)]
struct Service {
    name: String,
    endpoint: Endpoint,
}

fn service() -> impl Strategy<Value = Service> {
    ("[a-z]{1,8}", "[a-z.]{1,12}", any::<u16>()).prop_map(|(name, host, port)| Service {
        name,
        endpoint: Endpoint { host, port },
    })
}

fn object() -> impl Strategy<Value = JsonObject> {
    prop::collection::vec(("[a-c]", common::scalar()), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

fn optional_value() -> impl Strategy<Value = Option<Json>> {
    prop::option::of(common::scalar())
}

// =============================================================================
// Field Lens Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_field_lens_get_put_law(service in service()) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        let value = port.get(&service);
        prop_assert_eq!(port.set(service.clone(), value), service);
    }

    #[test]
    fn prop_field_lens_put_get_law(service in service(), value in any::<u16>()) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        prop_assert_eq!(port.get(&port.set(service, value)), value);
    }

    #[test]
    fn prop_field_lens_put_put_law(
        service in service(),
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}"
    ) {
        let name = lens!(Service, name);
        let left = name.set(name.set(service.clone(), first), second.clone());
        prop_assert_eq!(left, name.set(service, second));
    }
}

// =============================================================================
// IdentityLens Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_lens_get_put_law(json in common::json()) {
        let identity = IdentityLens::<Json>::new();
        prop_assert_eq!(identity.set(json.clone(), identity.get(&json)), json);
    }

    #[test]
    fn prop_identity_lens_put_get_law(json in common::json(), value in common::json()) {
        let identity = IdentityLens::<Json>::new();
        prop_assert_eq!(identity.get(&identity.set(json, value.clone())), value);
    }
}

// =============================================================================
// ObjectAt Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_object_at_get_put_law(object in object(), key in "[a-d]") {
        let at = ObjectAt::new(key);
        let value = at.get(&object);
        prop_assert_eq!(at.set(object.clone(), value), object);
    }

    #[test]
    fn prop_object_at_put_get_law(object in object(), key in "[a-d]", value in optional_value()) {
        let at = ObjectAt::new(key);
        prop_assert_eq!(at.get(&at.set(object, value.clone())), value);
    }

    #[test]
    fn prop_object_at_put_put_law(
        object in object(),
        key in "[a-d]",
        first in optional_value(),
        second in optional_value()
    ) {
        let at = ObjectAt::new(key);
        let left = at.set(at.set(object.clone(), first), second.clone());
        prop_assert_eq!(left, at.set(object, second));
    }
}
