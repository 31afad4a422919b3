//! Traversal optics for focusing on multiple elements.
//!
//! A Traversal is an optic that provides access to zero or more elements within a structure.
//! It generalizes both Lens (which focuses on exactly one element) and Prism (which focuses
//! on zero or one element).
//!
//! Elements are read by value. `get_all` returns them in traversal order.
//!
//! # Laws
//!
//! Every Traversal must satisfy two laws:
//!
//! 1. **Modify Identity Law**: Applying the identity function yields the original.
//!    ```text
//!    traversal.modify_all(source, |x| x) == source
//!    ```
//!
//! 2. **Modify Composition Law**: Consecutive `modify_all` calls equal a single composed call.
//!    ```text
//!    traversal.modify_all(traversal.modify_all(source, f), g) == traversal.modify_all(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use json_optics::optics::{Each, Traversal};
//!
//! let traversal = Vec::<i32>::each();
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let sum: i32 = traversal.get_all(&numbers).into_iter().sum();
//! assert_eq!(sum, 15);
//!
//! let doubled = traversal.modify_all(numbers.clone(), |x| x * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! let all_zeros = traversal.set_all(numbers, 0);
//! assert_eq!(all_zeros, vec![0, 0, 0, 0, 0]);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused elements)
pub trait Traversal<S, A> {
    /// Returns every focused element, in order.
    fn get_all(&self, source: &S) -> Vec<A>;

    /// Applies `function` to every focused element, in order.
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Replaces every focused element with `value`.
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify_all(source, |_| value.clone())
    }

    /// Folds over the focused elements, left to right.
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Returns the number of focused elements.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Returns `true` if every focused element satisfies `predicate`.
    ///
    /// Vacuously `true` when nothing is focused.
    fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(|element| predicate(element))
    }

    /// Returns `true` if some focused element satisfies `predicate`.
    fn exists<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().any(|element| predicate(element))
    }

    /// Returns the first focused element.
    fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }

    /// Composes this traversal with another traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optics::optics::{Each, Traversal};
    ///
    /// let composed = Vec::<Vec<i32>>::each().compose(Vec::<i32>::each());
    ///
    /// let data = vec![vec![1, 2], vec![3, 4, 5]];
    /// assert_eq!(composed.get_all(&data), vec![1, 2, 3, 4, 5]);
    /// let doubled = composed.modify_all(data, |x| x * 2);
    /// assert_eq!(doubled, vec![vec![2, 4], vec![6, 8, 10]]);
    /// ```
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Erases the concrete optic type behind a cheaply clonable handle.
    fn shared(self) -> SharedTraversal<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        SharedTraversal::new(self)
    }
}

/// A traversal composed of two traversals.
///
/// # Type Parameters
///
/// - `T1`: The type of the outer traversal
/// - `T2`: The type of the inner traversal
/// - `A`: The intermediate type (target of T1, source of T2)
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new composed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug
    for ComposedTraversal<T1, T2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn get_all(&self, source: &S) -> Vec<B> {
        self.first
            .get_all(source)
            .iter()
            .flat_map(|intermediate| self.second.get_all(intermediate))
            .collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first.modify_all(source, |intermediate| {
            self.second.modify_all(intermediate, &mut function)
        })
    }
}

/// Object-safe view of [`Traversal`] used by [`SharedTraversal`].
trait ErasedTraversal<S, A> {
    fn get_all_dyn(&self, source: &S) -> Vec<A>;

    fn modify_dyn(&self, source: S, function: &mut dyn FnMut(A) -> A) -> S;
}

impl<S, A, T> ErasedTraversal<S, A> for T
where
    T: Traversal<S, A>,
{
    fn get_all_dyn(&self, source: &S) -> Vec<A> {
        Traversal::get_all(self, source)
    }

    fn modify_dyn(&self, source: S, function: &mut dyn FnMut(A) -> A) -> S {
        Traversal::modify_all(self, source, function)
    }
}

/// A type-erased, reference-counted traversal.
///
/// The traversal counterpart of [`SharedOptional`](super::SharedOptional).
pub struct SharedTraversal<S, A> {
    inner: Arc<dyn ErasedTraversal<S, A> + Send + Sync>,
}

impl<S, A> SharedTraversal<S, A> {
    /// Erases `traversal`.
    #[must_use]
    pub fn new<T>(traversal: T) -> Self
    where
        T: Traversal<S, A> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(traversal),
        }
    }
}

impl<S, A> Traversal<S, A> for SharedTraversal<S, A> {
    fn get_all(&self, source: &S) -> Vec<A> {
        self.inner.get_all_dyn(source)
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.inner.modify_dyn(source, &mut function)
    }

    fn shared(self) -> Self
    where
        Self: Sized + Send + Sync + 'static,
    {
        self
    }
}

impl<S, A> Clone for SharedTraversal<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> std::fmt::Debug for SharedTraversal<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SharedTraversal")
            .finish_non_exhaustive()
    }
}
