//! Prism optics for focusing on one case of a sum type.
//!
//! A Prism provides preview/reverse access to a variant of an enum, or more
//! generally to any partial, invertible view of a source. Unlike a Lens which
//! always succeeds, a Prism may fail to extract a value when the source is not
//! of the expected shape. On failure the source is handed back untouched.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **PartialRoundTripOneWay**: If extraction succeeds, rebuilding from the
//!    result yields the original source.
//!    ```text
//!    if let Ok(value) = prism.get_or_modify(source.clone()) then
//!        prism.reverse_get(value) == source
//!    ```
//!
//! 2. **RoundTripOtherWay**: Rebuilding then previewing yields the original value.
//!    ```text
//!    prism.preview(&prism.reverse_get(value.clone())) == Some(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use json_optics::optics::Prism;
//! use json_optics::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.preview(&Shape::Rectangle(3.0, 4.0)), None);
//!
//! let constructed = circle_prism.reverse_get(10.0);
//! assert_eq!(constructed, Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::optional::Optional;
use super::traversal::Traversal;

/// A Prism focuses on a single case of a source type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole sum)
/// - `A`: The target type (the value inside the case)
pub trait Prism<S, A> {
    /// Extracts a copy of the focused value, if the source matches.
    fn preview(&self, source: &S) -> Option<A>;

    /// Builds a source from a focused value. This always succeeds.
    fn reverse_get(&self, value: A) -> S;

    /// Extracts the focused value by moving it out of the source.
    ///
    /// Returns the untouched source in `Err` when it does not match.
    /// Implementations that can move their payload out should override the
    /// default, which goes through [`preview`](Prism::preview).
    ///
    /// # Errors
    ///
    /// Returns `Err(source)` when the source is not of the focused case.
    fn get_or_modify(&self, source: S) -> Result<A, S> {
        match self.preview(&source) {
            Some(value) => Ok(value),
            None => Err(source),
        }
    }

    /// Replaces the focused value when the source matches.
    ///
    /// A non-matching source is returned unchanged.
    fn set(&self, source: S, value: A) -> S {
        match self.get_or_modify(source) {
            Ok(_) => self.reverse_get(value),
            Err(source) => source,
        }
    }

    /// Applies `function` to the focused value when the source matches.
    ///
    /// A non-matching source is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optics::optics::Prism;
    /// use json_optics::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Token { Number(i64), Word(String) }
    ///
    /// let number = prism!(Token, Number);
    /// assert_eq!(number.modify(Token::Number(1), |n| n + 1), Token::Number(2));
    /// assert_eq!(
    ///     number.modify(Token::Word("a".into()), |n| n + 1),
    ///     Token::Word("a".into())
    /// );
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_or_modify(source) {
            Ok(value) => self.reverse_get(function(value)),
            Err(source) => source,
        }
    }

    /// Applies `function` to the focused value, or returns `None` when the
    /// source does not match.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.get_or_modify(source)
            .ok()
            .map(|value| self.reverse_get(function(value)))
    }

    /// Composes this prism with another prism to focus on a nested case.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optics::optics::Prism;
    /// use json_optics::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Inner { Value(i32), Empty }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outer { Inner(Inner), Other }
    ///
    /// let nested = prism!(Outer, Inner).compose(prism!(Inner, Value));
    ///
    /// assert_eq!(nested.preview(&Outer::Inner(Inner::Value(42))), Some(42));
    /// assert_eq!(nested.preview(&Outer::Inner(Inner::Empty)), None);
    /// assert_eq!(nested.reverse_get(7), Outer::Inner(Inner::Value(7)));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Views this prism as an optional.
    fn to_optional(self) -> PrismAsOptional<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }

    /// Views this prism as a traversal of zero or one element.
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }
}

/// A prism implemented with preview and reverse functions.
///
/// # Example
///
/// ```
/// use json_optics::optics::{Prism, FunctionPrism};
///
/// let even = FunctionPrism::new(
///     |value: &i64| (value % 2 == 0).then(|| value / 2),
///     |half: i64| half * 2,
/// );
///
/// assert_eq!(even.preview(&8), Some(4));
/// assert_eq!(even.preview(&7), None);
/// assert_eq!(even.reverse_get(4), 8);
/// ```
pub struct FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    preview_function: P,
    reverse_function: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, P, R> FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from preview and reverse functions.
    #[must_use]
    pub const fn new(preview_function: P, reverse_function: R) -> Self {
        Self {
            preview_function,
            reverse_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> Prism<S, A> for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.preview_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_function)(value)
    }
}

impl<S, A, P, R> Clone for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            reverse_function: self.reverse_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> std::fmt::Debug for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism whose extraction moves the payload out of the source.
///
/// The `prism!` macro generates a `MovingPrism`.
pub struct MovingPrism<S, A, G, R>
where
    G: Fn(S) -> Result<A, S>,
    R: Fn(A) -> S,
{
    extract_function: G,
    reverse_function: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, R> MovingPrism<S, A, G, R>
where
    G: Fn(S) -> Result<A, S>,
    R: Fn(A) -> S,
{
    /// Creates a new `MovingPrism` from an extraction and a reverse function.
    #[must_use]
    pub const fn new(extract_function: G, reverse_function: R) -> Self {
        Self {
            extract_function,
            reverse_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> Prism<S, A> for MovingPrism<S, A, G, R>
where
    S: Clone,
    G: Fn(S) -> Result<A, S>,
    R: Fn(A) -> S,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.extract_function)(source.clone()).ok()
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_function)(value)
    }

    fn get_or_modify(&self, source: S) -> Result<A, S> {
        (self.extract_function)(source)
    }
}

impl<S, A, G, R> Clone for MovingPrism<S, A, G, R>
where
    G: Fn(S) -> Result<A, S> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            extract_function: self.extract_function.clone(),
            reverse_function: self.reverse_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> std::fmt::Debug for MovingPrism<S, A, G, R>
where
    G: Fn(S) -> Result<A, S>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MovingPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `A`: The intermediate type (target of P1, source of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }

    fn get_or_modify(&self, source: S) -> Result<B, S> {
        let intermediate = self.first.get_or_modify(source)?;
        self.second
            .get_or_modify(intermediate)
            .map_err(|intermediate| self.first.reverse_get(intermediate))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism viewed as an optional.
pub struct PrismAsOptional<P, S, A> {
    prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsOptional<P, S, A> {
    /// Wraps `prism`.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Optional<S, A> for PrismAsOptional<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        self.prism.preview(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.prism.set(source, value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.prism.modify(source, function)
    }

    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.prism.modify_option(source, function)
    }
}

impl<P: Clone, S, A> Clone for PrismAsOptional<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsOptional<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsOptional")
            .field("prism", &self.prism)
            .finish()
    }
}

/// A prism viewed as a traversal of zero or one element.
pub struct PrismAsTraversal<P, S, A> {
    prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Wraps `prism`.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.prism.preview(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.prism.modify(source, function)
    }
}

impl<P: Clone, S, A> Clone for PrismAsTraversal<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsTraversal<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsTraversal")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Creates a prism for a single-field enum variant.
///
/// Extraction moves the payload out of the source; previewing clones it.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use json_optics::optics::Prism;
/// use json_optics::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Message { Text(String), Ping }
///
/// let text = prism!(Message, Text);
///
/// assert_eq!(text.preview(&Message::Text("hi".into())), Some("hi".to_string()));
/// assert_eq!(text.preview(&Message::Ping), None);
/// assert_eq!(text.get_or_modify(Message::Ping), Err(Message::Ping));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::MovingPrism::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => ::std::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::std::result::Result::Err(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::MovingPrism::new(
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => ::std::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::std::result::Result::Err(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
}
