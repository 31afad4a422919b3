//! Optional optics for focusing on elements that may or may not exist.
//!
//! An Optional is an optic that provides get/set access to a value that
//! may or may not be present. It is what a Lens composed with a Prism
//! becomes, and it is the optic behind every step of a
//! [`JsonPath`](crate::path::JsonPath).
//!
//! # Laws
//!
//! Every Optional must satisfy two laws:
//!
//! 1. **`GetOptionSet` Law**: Setting back what was read yields the original.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) then
//!        optional.set(source.clone(), value) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value when
//!    the focus is present, and nothing otherwise.
//!    ```text
//!    optional.get_option(&optional.set(source.clone(), value.clone()))
//!        == optional.get_option(&source).map(|_| value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use json_optics::optics::{Optional, FunctionOptional};
//!
//! let first = FunctionOptional::new(
//!     |list: &Vec<i32>| list.first().copied(),
//!     |mut list: Vec<i32>, value: i32| {
//!         if let Some(head) = list.first_mut() {
//!             *head = value;
//!         }
//!         list
//!     },
//! );
//!
//! assert_eq!(first.get_option(&vec![1, 2]), Some(1));
//! assert_eq!(first.set(vec![1, 2], 9), vec![9, 2]);
//! assert_eq!(first.set(Vec::new(), 9), Vec::<i32>::new());
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use super::traversal::Traversal;

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub trait Optional<S, A> {
    /// Reads the focused element, if present.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focused element.
    ///
    /// When the focus is absent the source is returned unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to the focused element, if present.
    ///
    /// When the focus is absent the source is returned unchanged.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Applies `function` to the focused element, or returns `None` when it
    /// is absent.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.get_option(&source)
            .map(|value| self.set(source, function(value)))
    }

    /// Returns `true` if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with another optional.
    ///
    /// The result is present only when both foci are present.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Views this optional as a traversal of zero or one element.
    fn to_traversal(self) -> OptionalAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self)
    }

    /// Erases the concrete optic type behind a cheaply clonable handle.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optics::optics::{Optional, Prism, SharedOptional};
    /// use json_optics::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Slot { Filled(u8), Empty }
    ///
    /// let filled: SharedOptional<Slot, u8> = prism!(Slot, Filled).to_optional().shared();
    /// let copy = filled.clone();
    /// assert_eq!(copy.get_option(&Slot::Filled(3)), Some(3));
    /// ```
    fn shared(self) -> SharedOptional<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        SharedOptional::new(self)
    }
}

/// An optional implemented with getter and setter functions.
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional`.
    ///
    /// `setter` must leave the source unchanged when the focus is absent.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// An optional composed of two optionals.
///
/// # Type Parameters
///
/// - `O1`: The type of the outer optional
/// - `O2`: The type of the inner optional
/// - `A`: The intermediate type (target of O1, source of O2)
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new composed optional.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        self.first
            .modify(source, |intermediate| self.second.set(intermediate, value))
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(B) -> B,
    {
        self.first.modify(source, |intermediate| {
            self.second.modify(intermediate, function)
        })
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug
    for ComposedOptional<O1, O2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An optional viewed as a traversal of zero or one element.
pub struct OptionalAsTraversal<O, S, A> {
    optional: O,
    _marker: PhantomData<(S, A)>,
}

impl<O, S, A> OptionalAsTraversal<O, S, A> {
    /// Wraps `optional`.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self {
            optional,
            _marker: PhantomData,
        }
    }
}

impl<O, S, A> Traversal<S, A> for OptionalAsTraversal<O, S, A>
where
    O: Optional<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.optional.get_option(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.optional.modify(source, function)
    }
}

impl<O: Clone, S, A> Clone for OptionalAsTraversal<O, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.optional.clone())
    }
}

impl<O: std::fmt::Debug, S, A> std::fmt::Debug for OptionalAsTraversal<O, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionalAsTraversal")
            .field("optional", &self.optional)
            .finish()
    }
}

/// Object-safe view of [`Optional`] used by [`SharedOptional`].
trait ErasedOptional<S, A> {
    fn get_option_dyn(&self, source: &S) -> Option<A>;

    fn set_dyn(&self, source: S, value: A) -> S;

    fn modify_boxed(&self, source: S, function: Box<dyn FnOnce(A) -> A + '_>) -> S;
}

impl<S, A, O> ErasedOptional<S, A> for O
where
    O: Optional<S, A>,
{
    fn get_option_dyn(&self, source: &S) -> Option<A> {
        Optional::get_option(self, source)
    }

    fn set_dyn(&self, source: S, value: A) -> S {
        Optional::set(self, source, value)
    }

    fn modify_boxed(&self, source: S, function: Box<dyn FnOnce(A) -> A + '_>) -> S {
        Optional::modify(self, source, function)
    }
}

/// A type-erased, reference-counted optional.
///
/// Every composition step produces a new optic type; `SharedOptional` lets a
/// chain of steps be stored in one field and extended at runtime. Cloning is
/// an `Arc` increment. The handle is `Send` and `Sync`.
pub struct SharedOptional<S, A> {
    inner: Arc<dyn ErasedOptional<S, A> + Send + Sync>,
}

impl<S, A> SharedOptional<S, A> {
    /// Erases `optional`.
    #[must_use]
    pub fn new<O>(optional: O) -> Self
    where
        O: Optional<S, A> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(optional),
        }
    }
}

impl<S, A> Optional<S, A> for SharedOptional<S, A> {
    fn get_option(&self, source: &S) -> Option<A> {
        self.inner.get_option_dyn(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.inner.set_dyn(source, value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.inner.modify_boxed(source, Box::new(function))
    }

    fn shared(self) -> Self
    where
        Self: Sized + Send + Sync + 'static,
    {
        self
    }
}

impl<S, A> Clone for SharedOptional<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> std::fmt::Debug for SharedOptional<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SharedOptional")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head() -> impl Optional<Vec<i32>, i32> + Clone + Send + Sync + 'static {
        FunctionOptional::new(
            |list: &Vec<i32>| list.first().copied(),
            |mut list: Vec<i32>, value: i32| {
                if let Some(first) = list.first_mut() {
                    *first = value;
                }
                list
            },
        )
    }

    #[test]
    fn test_modify_absent_is_identity() {
        assert_eq!(head().modify(Vec::new(), |value| value + 1), Vec::<i32>::new());
        assert_eq!(head().modify_option(Vec::new(), |value| value + 1), None);
    }

    #[test]
    fn test_modify_present() {
        assert_eq!(head().modify(vec![1, 2], |value| value + 1), vec![2, 2]);
        assert!(head().is_present(&vec![0]));
    }

    #[test]
    fn test_shared_optional_delegates() {
        let shared = head().shared();
        let again = shared.clone().shared();
        assert_eq!(again.get_option(&vec![5]), Some(5));
        assert_eq!(again.modify(vec![5], |value| value * 2), vec![10]);
    }

    #[test]
    fn test_composed_optional_absent_inner() {
        let nested_head = FunctionOptional::new(
            |nested: &Vec<Vec<i32>>| nested.first().cloned(),
            |mut nested: Vec<Vec<i32>>, value: Vec<i32>| {
                if let Some(first) = nested.first_mut() {
                    *first = value;
                }
                nested
            },
        )
        .compose(head());

        assert_eq!(nested_head.get_option(&vec![vec![]]), None);
        assert_eq!(nested_head.set(vec![vec![]], 3), vec![Vec::<i32>::new()]);
        assert_eq!(nested_head.set(vec![vec![1]], 3), vec![vec![3]]);
    }
}
