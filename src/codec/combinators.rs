//! Structural codecs built from the codecs of their parts.
//!
//! - [`OptionCodec`]: `null` or the inner shape
//! - [`EitherCodec`]: an untagged union, right-hand side tried first
//! - [`Tuple2Codec`], [`Tuple3Codec`]: fixed-size arrays
//! - [`VecCodec`]: arrays of any length
//!
//! Structural decoders report every failing component, leftmost first.

use super::{ComponentError, Decoder, DecodingError, Encoder};
use crate::control::Either;
use crate::json::Json;

/// Codec for `Option<A>`: `None` is `null`, `Some(a)` is the encoding of `a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionCodec<C> {
    inner: C,
}

impl<C> OptionCodec<C> {
    /// Wraps the codec of the inner type.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<A, C> Decoder<Option<A>> for OptionCodec<C>
where
    C: Decoder<A>,
{
    fn decode(&self, json: &Json) -> Result<Option<A>, DecodingError> {
        if json.is_null() {
            Ok(None)
        } else {
            self.inner.decode(json).map(Some)
        }
    }
}

impl<A, C> Encoder<Option<A>> for OptionCodec<C>
where
    C: Encoder<A>,
{
    fn encode(&self, value: &Option<A>) -> Json {
        value
            .as_ref()
            .map_or(Json::Null, |inner| self.inner.encode(inner))
    }
}

/// Codec for [`Either<L, R>`], encoded without a discriminant.
///
/// Decoding tries the right-hand codec first and falls back to the left-hand
/// one, so when both shapes accept a value it decodes as `Right`.
///
/// # Examples
///
/// ```rust
/// use json_optics::codec::{Decoder, EitherCodec, IntCodec, StringCodec};
/// use json_optics::control::Either;
/// use json_optics::json::Json;
///
/// let codec = EitherCodec::new(IntCodec, StringCodec);
///
/// assert_eq!(codec.decode(&Json::from("hello")), Ok(Either::Right("hello".to_string())));
/// assert_eq!(codec.decode(&Json::from(5)), Ok(Either::Left(5)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EitherCodec<CL, CR> {
    left: CL,
    right: CR,
}

impl<CL, CR> EitherCodec<CL, CR> {
    /// Combines the codecs of both alternatives.
    #[must_use]
    pub const fn new(left: CL, right: CR) -> Self {
        Self { left, right }
    }
}

impl<L, R, CL, CR> Decoder<Either<L, R>> for EitherCodec<CL, CR>
where
    CL: Decoder<L>,
    CR: Decoder<R>,
{
    fn decode(&self, json: &Json) -> Result<Either<L, R>, DecodingError> {
        let right_error = match self.right.decode(json) {
            Ok(value) => return Ok(Either::Right(value)),
            Err(error) => error,
        };
        tracing::trace!(
            kind = %json.kind(),
            error = %right_error,
            "right-hand alternative rejected value, trying left-hand"
        );
        self.left
            .decode(json)
            .map(Either::Left)
            .map_err(|left_error| DecodingError::Alternatives {
                left: Box::new(left_error),
                right: Box::new(right_error),
            })
    }
}

impl<L, R, CL, CR> Encoder<Either<L, R>> for EitherCodec<CL, CR>
where
    CL: Encoder<L>,
    CR: Encoder<R>,
{
    fn encode(&self, value: &Either<L, R>) -> Json {
        match value {
            Either::Left(left) => self.left.encode(left),
            Either::Right(right) => self.right.encode(right),
        }
    }
}

fn component<T>(
    index: usize,
    result: Result<T, DecodingError>,
    errors: &mut Vec<ComponentError>,
) -> Option<T> {
    result
        .map_err(|error| errors.push(ComponentError::new(index, error)))
        .ok()
}

/// Codec for `(A, B)`, encoded as the array `[a, b]`.
///
/// Decoding requires an array of at least two elements and reads positions
/// 0 and 1; further elements are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple2Codec<CA, CB> {
    first: CA,
    second: CB,
}

impl<CA, CB> Tuple2Codec<CA, CB> {
    /// Combines the codecs of both components.
    #[must_use]
    pub const fn new(first: CA, second: CB) -> Self {
        Self { first, second }
    }
}

impl<A, B, CA, CB> Decoder<(A, B)> for Tuple2Codec<CA, CB>
where
    CA: Decoder<A>,
    CB: Decoder<B>,
{
    fn decode(&self, json: &Json) -> Result<(A, B), DecodingError> {
        let Some([first, second, ..]) = json.as_array() else {
            return Err(DecodingError::Array(json.clone()));
        };
        let mut errors = Vec::new();
        let first = component(0, self.first.decode(first), &mut errors);
        let second = component(1, self.second.decode(second), &mut errors);
        match (first, second) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(DecodingError::Components(errors)),
        }
    }
}

impl<A, B, CA, CB> Encoder<(A, B)> for Tuple2Codec<CA, CB>
where
    CA: Encoder<A>,
    CB: Encoder<B>,
{
    fn encode(&self, (first, second): &(A, B)) -> Json {
        Json::Array(vec![self.first.encode(first), self.second.encode(second)])
    }
}

/// Codec for `(A, B, C)`, encoded as the array `[a, b, c]`.
///
/// Decoding requires an array of at least three elements and reads positions
/// 0, 1 and 2; further elements are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple3Codec<CA, CB, CC> {
    first: CA,
    second: CB,
    third: CC,
}

impl<CA, CB, CC> Tuple3Codec<CA, CB, CC> {
    /// Combines the codecs of all three components.
    #[must_use]
    pub const fn new(first: CA, second: CB, third: CC) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl<A, B, C, CA, CB, CC> Decoder<(A, B, C)> for Tuple3Codec<CA, CB, CC>
where
    CA: Decoder<A>,
    CB: Decoder<B>,
    CC: Decoder<C>,
{
    fn decode(&self, json: &Json) -> Result<(A, B, C), DecodingError> {
        let Some([first, second, third, ..]) = json.as_array() else {
            return Err(DecodingError::Array(json.clone()));
        };
        let mut errors = Vec::new();
        let first = component(0, self.first.decode(first), &mut errors);
        let second = component(1, self.second.decode(second), &mut errors);
        let third = component(2, self.third.decode(third), &mut errors);
        match (first, second, third) {
            (Some(first), Some(second), Some(third)) => Ok((first, second, third)),
            _ => Err(DecodingError::Components(errors)),
        }
    }
}

impl<A, B, C, CA, CB, CC> Encoder<(A, B, C)> for Tuple3Codec<CA, CB, CC>
where
    CA: Encoder<A>,
    CB: Encoder<B>,
    CC: Encoder<C>,
{
    fn encode(&self, (first, second, third): &(A, B, C)) -> Json {
        Json::Array(vec![
            self.first.encode(first),
            self.second.encode(second),
            self.third.encode(third),
        ])
    }
}

/// Codec for `Vec<A>`, encoded as an array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VecCodec<C> {
    element: C,
}

impl<C> VecCodec<C> {
    /// Wraps the codec of the element type.
    #[must_use]
    pub const fn new(element: C) -> Self {
        Self { element }
    }
}

impl<A, C> Decoder<Vec<A>> for VecCodec<C>
where
    C: Decoder<A>,
{
    fn decode(&self, json: &Json) -> Result<Vec<A>, DecodingError> {
        let elements = json
            .as_array()
            .ok_or_else(|| DecodingError::Array(json.clone()))?;
        let mut errors = Vec::new();
        let decoded: Vec<A> = elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                component(index, self.element.decode(element), &mut errors)
            })
            .collect();
        if errors.is_empty() {
            Ok(decoded)
        } else {
            Err(DecodingError::Components(errors))
        }
    }
}

impl<A, C> Encoder<Vec<A>> for VecCodec<C>
where
    C: Encoder<A>,
{
    fn encode(&self, value: &Vec<A>) -> Json {
        value
            .iter()
            .map(|element| self.element.encode(element))
            .collect::<Vec<_>>()
            .into()
    }
}
