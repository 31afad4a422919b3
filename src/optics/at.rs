//! At combinator for key-based access with insertion/deletion.
//!
//! This module provides the [`At`] trait which enables Lens access to the
//! presence or absence of a value in a map-like structure.
//!
//! Unlike [`Ixed`](crate::optics::ixed::Ixed), `At` always has a focus: the
//! `Option` of the value. Setting `Some` inserts or replaces, setting `None`
//! deletes the key.
//!
//! # Examples
//!
//! ```
//! use json_optics::json::{Json, JsonObject};
//! use json_optics::optics::{Lens, at::At};
//!
//! let object: JsonObject = [("key", Json::from(42))].into_iter().collect();
//! let lens = <JsonObject as At<&str>>::at("key");
//!
//! assert_eq!(lens.get(&object), Some(Json::from(42)));
//!
//! let object = lens.set(object, Some(Json::from(100)));
//! assert_eq!(object.get("key"), Some(&Json::from(100)));
//!
//! let object = lens.set(object, None);
//! assert!(!object.contains_key("key"));
//! ```
//!
//! # Difference from Ixed
//!
//! - `At`: Returns `Lens<S, Option<V>>`, allows insertion/deletion
//! - `Ixed`: Returns `Optional<S, V>`, only accesses existing values

use crate::json::{Json, JsonObject};
use crate::optics::Lens;

/// A trait for types that support key-based access with insertion/deletion.
///
/// # Difference from [`Ixed`](crate::optics::ixed::Ixed)
///
/// - `At`: Allows insertion and removal of keys via `set`
/// - `Ixed`: Only accesses existing keys, `set` on non-existent keys is a no-op
pub trait At<K>: Sized {
    /// The value type stored in this container.
    type Value;

    /// The Lens type for the optional value at a key.
    type AtLens: Lens<Self, Option<Self::Value>>;

    /// Returns a Lens that focuses on the optional value at the given key.
    fn at(key: K) -> Self::AtLens;
}

/// A Lens for [`JsonObject`] that focuses on the optional value of a key.
///
/// Unlike [`ObjectIx`](crate::optics::ixed::ObjectIx), this Lens inserts the
/// key when set to `Some` and removes it when set to `None`. A replaced key
/// keeps its position; an inserted key is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectAt {
    key: String,
}

impl ObjectAt {
    /// Creates a new `ObjectAt` for the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the focused key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Lens<JsonObject, Option<Json>> for ObjectAt {
    fn get(&self, source: &JsonObject) -> Option<Json> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: JsonObject, value: Option<Json>) -> JsonObject {
        match value {
            Some(value) => {
                source.insert(self.key.as_str(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }

    fn modify<F>(&self, mut source: JsonObject, function: F) -> JsonObject
    where
        F: FnOnce(Option<Json>) -> Option<Json>,
    {
        if source.contains_key(&self.key) {
            let mut function = Some(function);
            let mut removed = false;
            let rebuilt = source.map_entries(|key, value| match function.take() {
                Some(function) if key == self.key => function(Some(value)).unwrap_or_else(|| {
                    removed = true;
                    Json::Null
                }),
                pending => {
                    function = pending;
                    value
                }
            });
            source = rebuilt;
            if removed {
                source.remove(&self.key);
            }
            source
        } else {
            self.set(source, function(None))
        }
    }
}

impl At<String> for JsonObject {
    type Value = Json;
    type AtLens = ObjectAt;

    fn at(key: String) -> Self::AtLens {
        ObjectAt::new(key)
    }
}

impl At<&str> for JsonObject {
    type Value = Json;
    type AtLens = ObjectAt;

    fn at(key: &str) -> Self::AtLens {
        ObjectAt::new(key)
    }
}

/// Convenience function to get an `At` Lens for a type.
///
/// # Examples
///
/// ```
/// use json_optics::json::JsonObject;
/// use json_optics::optics::{Lens, at::at};
///
/// let lens = at::<JsonObject, _>("missing");
/// assert_eq!(lens.get(&JsonObject::new()), None);
/// ```
pub fn at<T: At<K>, K>(key: K) -> T::AtLens {
    T::at(key)
}
