//! The `Decoder` type class.
//!
//! A decoder is a pure function from a borrowed [`Json`] value to either a
//! typed value or a [`DecodingError`]. Decoders are ordinary values: they are
//! passed explicitly and combined by constructing combinator instances.
//!
//! # Examples
//!
//! ```rust
//! use json_optics::codec::{Decoder, IntCodec};
//! use json_optics::json::Json;
//!
//! let celsius = IntCodec.map(|value| f64::from(value) / 10.0);
//! assert_eq!(celsius.decode(&Json::from(215)), Ok(21.5));
//! assert!(celsius.decode(&Json::from("warm")).is_err());
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use super::DecodingError;
use crate::json::Json;

/// A type class for reading `A` out of a [`Json`] value.
///
/// # Laws
///
/// Paired with an [`Encoder`](super::Encoder) for the same type, a decoder
/// must accept everything the encoder produces:
///
/// ```text
/// decoder.decode(&encoder.encode(&value)) == Ok(value)
/// ```
pub trait Decoder<A> {
    /// Decodes a value.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodingError`] describing the first shape mismatch, or
    /// every mismatch for decoders that accumulate.
    fn decode(&self, json: &Json) -> Result<A, DecodingError>;

    /// Transforms every successfully decoded value.
    fn map<B, F>(self, function: F) -> MappedDecoder<Self, F, A>
    where
        Self: Sized,
        F: Fn(A) -> B,
    {
        MappedDecoder::new(self, function)
    }
}

impl<A, D> Decoder<A> for &D
where
    D: Decoder<A> + ?Sized,
{
    fn decode(&self, json: &Json) -> Result<A, DecodingError> {
        (**self).decode(json)
    }
}

impl<A, D> Decoder<A> for Arc<D>
where
    D: Decoder<A> + ?Sized,
{
    fn decode(&self, json: &Json) -> Result<A, DecodingError> {
        (**self).decode(json)
    }
}

/// A decoder implemented by a function.
///
/// # Examples
///
/// ```rust
/// use json_optics::codec::{Decoder, DecodingError, FunctionDecoder};
/// use json_optics::json::Json;
///
/// let non_empty = FunctionDecoder::new(|json: &Json| match json.as_str() {
///     Some(text) if !text.is_empty() => Ok(text.to_string()),
///     _ => Err(DecodingError::String(json.clone())),
/// });
///
/// assert_eq!(non_empty.decode(&Json::from("a")), Ok("a".to_string()));
/// assert!(non_empty.decode(&Json::from("")).is_err());
/// ```
pub struct FunctionDecoder<A, F>
where
    F: Fn(&Json) -> Result<A, DecodingError>,
{
    function: F,
    _marker: PhantomData<fn() -> A>,
}

impl<A, F> FunctionDecoder<A, F>
where
    F: Fn(&Json) -> Result<A, DecodingError>,
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

impl<A, F> Decoder<A> for FunctionDecoder<A, F>
where
    F: Fn(&Json) -> Result<A, DecodingError>,
{
    fn decode(&self, json: &Json) -> Result<A, DecodingError> {
        (self.function)(json)
    }
}

impl<A, F> Clone for FunctionDecoder<A, F>
where
    F: Fn(&Json) -> Result<A, DecodingError> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<A, F> std::fmt::Debug for FunctionDecoder<A, F>
where
    F: Fn(&Json) -> Result<A, DecodingError>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionDecoder")
            .finish_non_exhaustive()
    }
}

/// A decoder whose results are transformed by a function.
///
/// Created by [`Decoder::map`].
pub struct MappedDecoder<D, F, A> {
    decoder: D,
    function: F,
    _marker: PhantomData<fn() -> A>,
}

impl<D, F, A> MappedDecoder<D, F, A> {
    /// Creates a new mapped decoder.
    #[must_use]
    pub const fn new(decoder: D, function: F) -> Self {
        Self {
            decoder,
            function,
            _marker: PhantomData,
        }
    }
}

impl<A, B, D, F> Decoder<B> for MappedDecoder<D, F, A>
where
    D: Decoder<A>,
    F: Fn(A) -> B,
{
    fn decode(&self, json: &Json) -> Result<B, DecodingError> {
        self.decoder.decode(json).map(&self.function)
    }
}

impl<D: Clone, F: Clone, A> Clone for MappedDecoder<D, F, A> {
    fn clone(&self) -> Self {
        Self::new(self.decoder.clone(), self.function.clone())
    }
}

impl<D: std::fmt::Debug, F, A> std::fmt::Debug for MappedDecoder<D, F, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MappedDecoder")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}
