//! Each combinator for element-wise traversal of containers.
//!
//! This module provides the [`Each`] trait and implementations for the
//! containers of the JSON model, enabling element-wise traversal operations.
//!
//! # Examples
//!
//! ```
//! use json_optics::json::Json;
//! use json_optics::optics::{Each, Traversal};
//!
//! let document = Json::array([Json::from(1), Json::from(2)]);
//! let children = Json::each();
//!
//! assert_eq!(children.length(&document), 2);
//! let nulled = children.set_all(document, Json::Null);
//! assert_eq!(nulled, Json::array([Json::Null, Json::Null]));
//! ```
//!
//! # Implementations
//!
//! - [`Vec<T>`]: every element
//! - [`JsonObject`]: every value, in key order
//! - [`Json`]: the elements of an array or the values of an object; scalars
//!   have no children

use std::marker::PhantomData;

use crate::json::{Json, JsonObject};
use crate::optics::Traversal;

/// A trait for types that support element-wise traversal.
///
/// Types implementing this trait can provide a Traversal that focuses on
/// all of their elements.
pub trait Each: Sized {
    /// The element type.
    type Element;

    /// The traversal type for this container.
    type EachTraversal: Traversal<Self, Self::Element>;

    /// Returns a Traversal that focuses on all elements.
    fn each() -> Self::EachTraversal;
}

/// A Traversal for `Vec<T>`.
///
/// This traversal focuses on all elements of a vector.
#[derive(Debug)]
pub struct VecEach<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> VecEach<T> {
    /// Creates a new `VecEach`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for VecEach<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for VecEach<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone> Traversal<Vec<T>, T> for VecEach<T> {
    fn get_all(&self, source: &Vec<T>) -> Vec<T> {
        source.clone()
    }

    fn modify_all<F>(&self, source: Vec<T>, function: F) -> Vec<T>
    where
        F: FnMut(T) -> T,
    {
        source.into_iter().map(function).collect()
    }

    fn length(&self, source: &Vec<T>) -> usize {
        source.len()
    }
}

impl<T: Clone> Each for Vec<T> {
    type Element = T;
    type EachTraversal = VecEach<T>;

    fn each() -> Self::EachTraversal {
        VecEach::new()
    }
}

/// A Traversal over the values of a [`JsonObject`].
///
/// Keys and their order are preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectEach;

impl Traversal<JsonObject, Json> for ObjectEach {
    fn get_all(&self, source: &JsonObject) -> Vec<Json> {
        source.values().cloned().collect()
    }

    fn modify_all<F>(&self, source: JsonObject, mut function: F) -> JsonObject
    where
        F: FnMut(Json) -> Json,
    {
        source.map_entries(|_, value| function(value))
    }

    fn length(&self, source: &JsonObject) -> usize {
        source.len()
    }
}

impl Each for JsonObject {
    type Element = Json;
    type EachTraversal = ObjectEach;

    fn each() -> Self::EachTraversal {
        ObjectEach
    }
}

/// A Traversal over the direct children of a [`Json`] value.
///
/// Arrays yield their elements and objects their values. Every other variant
/// yields nothing and is returned unchanged by `modify_all`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEach;

impl Traversal<Json, Json> for JsonEach {
    fn get_all(&self, source: &Json) -> Vec<Json> {
        match source {
            Json::Array(elements) => elements.clone(),
            Json::Object(object) => ObjectEach.get_all(object),
            _ => Vec::new(),
        }
    }

    fn modify_all<F>(&self, source: Json, function: F) -> Json
    where
        F: FnMut(Json) -> Json,
    {
        match source {
            Json::Array(elements) => Json::Array(VecEach::new().modify_all(elements, function)),
            Json::Object(object) => Json::Object(ObjectEach.modify_all(object, function)),
            other => other,
        }
    }

    fn length(&self, source: &Json) -> usize {
        match source {
            Json::Array(elements) => elements.len(),
            Json::Object(object) => object.len(),
            _ => 0,
        }
    }
}

impl Each for Json {
    type Element = Json;
    type EachTraversal = JsonEach;

    fn each() -> Self::EachTraversal {
        JsonEach
    }
}

/// Returns the [`Each`] traversal of `T`.
///
/// # Example
///
/// ```
/// use json_optics::optics::{each, Traversal};
///
/// let traversal = each::<Vec<i32>>();
/// assert_eq!(traversal.get_all(&vec![1, 2]), vec![1, 2]);
/// ```
#[must_use]
pub fn each<T: Each>() -> T::EachTraversal {
    T::each()
}
