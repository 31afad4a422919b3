//! Ixed combinator for index-based Optional access.
//!
//! This module provides the [`Ixed`] trait which enables Optional-like access
//! to existing elements of indexed structures: vector positions and object
//! keys.
//!
//! Unlike [`At`](crate::optics::at::At), `Ixed` only provides access to existing elements and cannot
//! be used to insert new elements.
//!
//! # Examples
//!
//! ```
//! use json_optics::optics::{Optional, ixed::Ixed};
//!
//! let vec = vec![1, 2, 3, 4, 5];
//! let optional = <Vec<i32> as Ixed<usize>>::ix(2);
//!
//! assert_eq!(optional.get_option(&vec), Some(3));
//!
//! let updated = optional.set(vec, 100);
//! assert_eq!(updated[2], 100);
//! ```
//!
//! # Difference from At
//!
//! - `At`: For objects, focuses on `Option<Json>` and allows insertion/deletion
//! - `Ixed`: For indexed structures, only accesses existing elements

use std::marker::PhantomData;

use crate::json::{Json, JsonObject};
use crate::optics::Optional;

/// A trait for types that support index-based access to elements.
///
/// Types implementing this trait can provide an Optional that focuses on an
/// element at a specific index. `set` on a missing index is a no-op.
pub trait Ixed<I>: Sized {
    /// The element type.
    type Element;

    /// The Optional type for accessing elements at an index.
    type IxOptional: Optional<Self, Self::Element>;

    /// Returns an Optional that focuses on the element at the given index.
    fn ix(index: I) -> Self::IxOptional;
}

/// An Optional for `Vec<T>` that focuses on an element at a specific index.
///
/// If the index is out of bounds, `get_option` returns `None` and `set` is a no-op.
///
/// # Examples
///
/// ```
/// use json_optics::optics::{Optional, ixed::VecIx};
///
/// let optional = VecIx::<i32>::new(2);
/// let vec = vec![1, 2, 3, 4, 5];
///
/// assert_eq!(optional.get_option(&vec), Some(3));
///
/// let out_of_bounds = VecIx::<i32>::new(10);
/// assert_eq!(out_of_bounds.get_option(&vec), None);
/// ```
#[derive(Debug)]
pub struct VecIx<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> VecIx<T> {
    /// Creates a new `VecIx` for the given index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for VecIx<T> {
    fn clone(&self) -> Self {
        Self::new(self.index)
    }
}

impl<T: Clone> Optional<Vec<T>, T> for VecIx<T> {
    fn get_option(&self, source: &Vec<T>) -> Option<T> {
        source.get(self.index).cloned()
    }

    fn set(&self, mut source: Vec<T>, value: T) -> Vec<T> {
        if let Some(slot) = source.get_mut(self.index) {
            *slot = value;
        }
        source
    }

    fn modify<F>(&self, mut source: Vec<T>, function: F) -> Vec<T>
    where
        F: FnOnce(T) -> T,
    {
        if self.index >= source.len() {
            return source;
        }
        let mut rest = source.split_off(self.index).into_iter();
        if let Some(element) = rest.next() {
            source.push(function(element));
        }
        source.extend(rest);
        source
    }
}

impl<T: Clone> Ixed<usize> for Vec<T> {
    type Element = T;
    type IxOptional = VecIx<T>;

    fn ix(index: usize) -> Self::IxOptional {
        VecIx::new(index)
    }
}

/// An Optional for [`JsonObject`] that focuses on the value of an existing key.
///
/// Unlike [`ObjectAt`](crate::optics::at::ObjectAt), this Optional will
/// NOT insert the key if it doesn't exist when using `set`.
///
/// # Examples
///
/// ```
/// use json_optics::json::{Json, JsonObject};
/// use json_optics::optics::{Optional, ixed::ObjectIx};
///
/// let optional = ObjectIx::new("key");
/// let object: JsonObject = [("key", Json::from(42))].into_iter().collect();
///
/// assert_eq!(optional.get_option(&object), Some(Json::from(42)));
///
/// let result = optional.set(JsonObject::new(), Json::from(100));
/// assert!(!result.contains_key("key"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIx {
    key: String,
}

impl ObjectIx {
    /// Creates a new `ObjectIx` for the given key.
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

impl Optional<JsonObject, Json> for ObjectIx {
    fn get_option(&self, source: &JsonObject) -> Option<Json> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: JsonObject, value: Json) -> JsonObject {
        if source.contains_key(&self.key) {
            source.insert(self.key.as_str(), value);
        }
        source
    }

    fn modify<F>(&self, source: JsonObject, function: F) -> JsonObject
    where
        F: FnOnce(Json) -> Json,
    {
        let mut function = Some(function);
        source.map_entries(|key, value| match function.take() {
            Some(function) if key == self.key => function(value),
            pending => {
                function = pending;
                value
            }
        })
    }
}

impl Ixed<String> for JsonObject {
    type Element = Json;
    type IxOptional = ObjectIx;

    fn ix(index: String) -> Self::IxOptional {
        ObjectIx::new(index)
    }
}

impl Ixed<&str> for JsonObject {
    type Element = Json;
    type IxOptional = ObjectIx;

    fn ix(index: &str) -> Self::IxOptional {
        ObjectIx::new(index)
    }
}

/// Convenience function to get an `Ix` Optional for a type.
///
/// # Examples
///
/// ```
/// use json_optics::optics::{Optional, ixed::ix};
///
/// let vec = vec![1, 2, 3];
/// let optional = ix::<Vec<i32>, _>(1);
///
/// assert_eq!(optional.get_option(&vec), Some(2));
/// ```
pub fn ix<T: Ixed<I>, I>(index: I) -> T::IxOptional {
    T::ix(index)
}
