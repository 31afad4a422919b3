//! The type-directed extraction prism.

use std::marker::PhantomData;

use crate::codec::{Decoder, Encoder, JsonCodec};
use crate::json::Json;
use crate::optics::Prism;

/// A prism from [`Json`] to any type with a decoder and an encoder.
///
/// `preview` succeeds when the decoder accepts the node and `reverse_get`
/// encodes. A node the decoder rejects is treated as "not this case": the
/// [`DecodingError`](crate::codec::DecodingError) is dropped (it is emitted
/// as a `trace` event) and the node passes through unchanged. Decode
/// explicitly when the error itself is needed.
///
/// # Laws
///
/// The prism laws hold whenever the codec pair round-trips:
///
/// ```text
/// prism.preview(&prism.reverse_get(a)) == Some(a)
/// prism.preview(&json) == Some(a)  =>  prism.reverse_get(a) == json
/// ```
///
/// # Examples
///
/// ```rust
/// use json_optics::codec::{IntCodec, StringCodec, Tuple2Codec};
/// use json_optics::json::Json;
/// use json_optics::optics::Prism;
/// use json_optics::path::ExtractPrism;
///
/// let codec = Tuple2Codec::new(IntCodec, StringCodec);
/// let pair = ExtractPrism::new(codec, codec);
///
/// let json = Json::array([Json::from(10), Json::from("y")]);
/// assert_eq!(pair.preview(&json), Some((10, "y".to_string())));
/// assert_eq!(pair.preview(&Json::Null), None);
/// assert_eq!(pair.reverse_get((1, "z".to_string())), Json::array([Json::from(1), Json::from("z")]));
/// ```
pub struct ExtractPrism<A, D, E> {
    decoder: D,
    encoder: E,
    _marker: PhantomData<fn() -> A>,
}

impl<A, D, E> ExtractPrism<A, D, E>
where
    D: Decoder<A>,
    E: Encoder<A>,
{
    /// Creates a prism from a decoder and an encoder for the same type.
    #[must_use]
    pub const fn new(decoder: D, encoder: E) -> Self {
        Self {
            decoder,
            encoder,
            _marker: PhantomData,
        }
    }
}

impl<A: JsonCodec> ExtractPrism<A, A::Codec, A::Codec> {
    /// Creates a prism from the canonical codec of `A`.
    #[must_use]
    pub fn canonical() -> Self {
        Self::new(A::codec(), A::codec())
    }
}

impl<A, D, E> Prism<Json, A> for ExtractPrism<A, D, E>
where
    D: Decoder<A>,
    E: Encoder<A>,
{
    fn preview(&self, source: &Json) -> Option<A> {
        self.decoder
            .decode(source)
            .map_err(|error| {
                tracing::trace!(
                    kind = %source.kind(),
                    error = %error,
                    "extraction discarded decoding error"
                );
            })
            .ok()
    }

    fn reverse_get(&self, value: A) -> Json {
        self.encoder.encode(&value)
    }
}

impl<A, D: Clone, E: Clone> Clone for ExtractPrism<A, D, E> {
    fn clone(&self) -> Self {
        Self {
            decoder: self.decoder.clone(),
            encoder: self.encoder.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, D: std::fmt::Debug, E: std::fmt::Debug> std::fmt::Debug for ExtractPrism<A, D, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ExtractPrism")
            .field("decoder", &self.decoder)
            .field("encoder", &self.encoder)
            .finish()
    }
}
