//! The `Encoder` type class.
//!
//! An encoder is a total, pure function from a borrowed value to a [`Json`]
//! value.
//!
//! # Examples
//!
//! ```rust
//! use json_optics::codec::{Encoder, StringCodec};
//! use json_optics::json::Json;
//!
//! struct UserId(u32);
//!
//! let user_id = StringCodec.contramap(|id: &UserId| format!("user-{}", id.0));
//! assert_eq!(user_id.encode(&UserId(7)), Json::from("user-7"));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::json::Json;

/// A type class for writing `A` as a [`Json`] value.
///
/// Encoders are deterministic: equal inputs give equal outputs, and objects
/// are emitted with their keys in a fixed order.
pub trait Encoder<A> {
    /// Encodes a value.
    fn encode(&self, value: &A) -> Json;

    /// Adapts this encoder to a type that can be converted into `A`.
    fn contramap<B, F>(self, function: F) -> ContramappedEncoder<Self, F, A>
    where
        Self: Sized,
        F: Fn(&B) -> A,
    {
        ContramappedEncoder::new(self, function)
    }
}

impl<A, E> Encoder<A> for &E
where
    E: Encoder<A> + ?Sized,
{
    fn encode(&self, value: &A) -> Json {
        (**self).encode(value)
    }
}

impl<A, E> Encoder<A> for Arc<E>
where
    E: Encoder<A> + ?Sized,
{
    fn encode(&self, value: &A) -> Json {
        (**self).encode(value)
    }
}

/// An encoder implemented by a function.
///
/// # Examples
///
/// ```rust
/// use json_optics::codec::{Encoder, FunctionEncoder};
/// use json_optics::json::Json;
///
/// let point = FunctionEncoder::new(|&(x, y): &(i32, i32)| {
///     Json::object([("x", Json::from(x)), ("y", Json::from(y))])
/// });
///
/// assert_eq!(
///     point.encode(&(1, 2)),
///     Json::object([("x", Json::from(1)), ("y", Json::from(2))])
/// );
/// ```
pub struct FunctionEncoder<A, F>
where
    F: Fn(&A) -> Json,
{
    function: F,
    _marker: PhantomData<fn(&A)>,
}

impl<A, F> FunctionEncoder<A, F>
where
    F: Fn(&A) -> Json,
{
    /// Wraps `function`.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<A, F> Encoder<A> for FunctionEncoder<A, F>
where
    F: Fn(&A) -> Json,
{
    fn encode(&self, value: &A) -> Json {
        (self.function)(value)
    }
}

impl<A, F> Clone for FunctionEncoder<A, F>
where
    F: Fn(&A) -> Json + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<A, F> std::fmt::Debug for FunctionEncoder<A, F>
where
    F: Fn(&A) -> Json,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionEncoder")
            .finish_non_exhaustive()
    }
}

/// An encoder that converts its input before encoding it.
///
/// Created by [`Encoder::contramap`].
pub struct ContramappedEncoder<E, F, A> {
    encoder: E,
    function: F,
    _marker: PhantomData<fn(&A)>,
}

impl<E, F, A> ContramappedEncoder<E, F, A> {
    /// Creates a new contramapped encoder.
    #[must_use]
    pub const fn new(encoder: E, function: F) -> Self {
        Self {
            encoder,
            function,
            _marker: PhantomData,
        }
    }
}

impl<A, B, E, F> Encoder<B> for ContramappedEncoder<E, F, A>
where
    E: Encoder<A>,
    F: Fn(&B) -> A,
{
    fn encode(&self, value: &B) -> Json {
        self.encoder.encode(&(self.function)(value))
    }
}

impl<E: Clone, F: Clone, A> Clone for ContramappedEncoder<E, F, A> {
    fn clone(&self) -> Self {
        Self::new(self.encoder.clone(), self.function.clone())
    }
}

impl<E: std::fmt::Debug, F, A> std::fmt::Debug for ContramappedEncoder<E, F, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ContramappedEncoder")
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}
