//! Filtered traversals for conditional element access.
//!
//! This module provides:
//!
//! - [`IndexFilteredTraversal`]: the elements of a `Vec` whose position satisfies a predicate
//! - [`KeyFilteredTraversal`]: the values of a [`JsonObject`] whose key satisfies a predicate
//!
//! Elements that don't satisfy the predicate are left unchanged and keep
//! their place.
//!
//! # Examples
//!
//! ```
//! use json_optics::optics::{Traversal, filtered::filter_index};
//!
//! let data = vec![10, 11, 12, 13];
//! let even_positions = filter_index(|index| index % 2 == 0);
//!
//! assert_eq!(even_positions.get_all(&data), vec![10, 12]);
//! assert_eq!(even_positions.modify_all(data, |x| -x), vec![-10, 11, -12, 13]);
//! ```

use std::marker::PhantomData;

use crate::json::{Json, JsonObject};
use crate::optics::Traversal;

/// A Traversal over the elements of a `Vec<A>` whose index satisfies a predicate.
pub struct IndexFilteredTraversal<A, P>
where
    P: Fn(usize) -> bool,
{
    predicate: P,
    _marker: PhantomData<fn() -> A>,
}

impl<A, P> IndexFilteredTraversal<A, P>
where
    P: Fn(usize) -> bool,
{
    /// Creates a new `IndexFilteredTraversal` with the given predicate.
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<A, P> Clone for IndexFilteredTraversal<A, P>
where
    P: Fn(usize) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.predicate.clone())
    }
}

impl<A, P> std::fmt::Debug for IndexFilteredTraversal<A, P>
where
    P: Fn(usize) -> bool,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IndexFilteredTraversal")
            .finish_non_exhaustive()
    }
}

impl<A, P> Traversal<Vec<A>, A> for IndexFilteredTraversal<A, P>
where
    A: Clone,
    P: Fn(usize) -> bool,
{
    fn get_all(&self, source: &Vec<A>) -> Vec<A> {
        source
            .iter()
            .enumerate()
            .filter(|(index, _)| (self.predicate)(*index))
            .map(|(_, element)| element.clone())
            .collect()
    }

    fn modify_all<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                if (self.predicate)(index) {
                    function(element)
                } else {
                    element
                }
            })
            .collect()
    }
}

/// A Traversal over the values of a [`JsonObject`] whose key satisfies a predicate.
pub struct KeyFilteredTraversal<P>
where
    P: Fn(&str) -> bool,
{
    predicate: P,
}

impl<P> KeyFilteredTraversal<P>
where
    P: Fn(&str) -> bool,
{
    /// Creates a new `KeyFilteredTraversal` with the given predicate.
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P> Clone for KeyFilteredTraversal<P>
where
    P: Fn(&str) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.predicate.clone())
    }
}

impl<P> std::fmt::Debug for KeyFilteredTraversal<P>
where
    P: Fn(&str) -> bool,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("KeyFilteredTraversal")
            .finish_non_exhaustive()
    }
}

impl<P> Traversal<JsonObject, Json> for KeyFilteredTraversal<P>
where
    P: Fn(&str) -> bool,
{
    fn get_all(&self, source: &JsonObject) -> Vec<Json> {
        source
            .iter()
            .filter(|(key, _)| (self.predicate)(*key))
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn modify_all<F>(&self, source: JsonObject, mut function: F) -> JsonObject
    where
        F: FnMut(Json) -> Json,
    {
        source.map_entries(|key, value| {
            if (self.predicate)(key) {
                function(value)
            } else {
                value
            }
        })
    }
}

/// Creates an [`IndexFilteredTraversal`] for `Vec<A>` with the given predicate.
#[must_use]
pub const fn filter_index<A, P>(predicate: P) -> IndexFilteredTraversal<A, P>
where
    P: Fn(usize) -> bool,
{
    IndexFilteredTraversal::new(predicate)
}

/// Creates a [`KeyFilteredTraversal`] with the given predicate.
///
/// # Examples
///
/// ```
/// use json_optics::json::{Json, JsonObject};
/// use json_optics::optics::{Traversal, filtered::filter_keys};
///
/// let object: JsonObject = [("id", Json::from(1)), ("name", Json::from("x"))]
///     .into_iter()
///     .collect();
/// let ids = filter_keys(|key: &str| key.ends_with("id"));
///
/// assert_eq!(ids.get_all(&object), vec![Json::from(1)]);
/// ```
#[must_use]
pub const fn filter_keys<P>(predicate: P) -> KeyFilteredTraversal<P>
where
    P: Fn(&str) -> bool,
{
    KeyFilteredTraversal::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_index_no_match() {
        let traversal = filter_index(|index| index > 10);
        let data = vec![1, 2, 3];

        assert!(traversal.get_all(&data).is_empty());
        assert_eq!(traversal.modify_all(data.clone(), |x| x * 100), data);
    }

    #[test]
    fn test_filter_index_empty_source() {
        let traversal = filter_index(|_| true);
        let data: Vec<i32> = vec![];

        assert_eq!(traversal.length(&data), 0);
    }

    #[test]
    fn test_filter_keys_keeps_order() {
        let object: JsonObject = [
            ("a", Json::from(1)),
            ("skip", Json::from(2)),
            ("b", Json::from(3)),
        ]
        .into_iter()
        .collect();
        let traversal = filter_keys(|key: &str| key.len() == 1);

        assert_eq!(traversal.get_all(&object), vec![Json::from(1), Json::from(3)]);

        let modified = traversal.modify_all(object, |_| Json::Null);
        assert_eq!(modified.keys().collect::<Vec<_>>(), vec!["a", "skip", "b"]);
        assert_eq!(modified.get("skip"), Some(&Json::from(2)));
        assert_eq!(modified.get("b"), Some(&Json::Null));
    }
}
