//! Default codec instances.
//!
//! [`JsonCodec`] associates a type with its canonical codec, the way a type
//! class instance would be resolved. Instances for structural types are built
//! from the instances of their parts, so `Option<(i32, String)>` has a codec
//! as soon as `i32` and `String` do.

use super::{
    BooleanCodec, Decoder, DecodingError, DoubleCodec, EitherCodec, Encoder, IntCodec,
    JsonValueCodec, LongCodec, OptionCodec, StringCodec, Tuple2Codec, Tuple3Codec, VecCodec,
};
use crate::control::Either;
use crate::json::Json;

/// A type with a canonical JSON codec.
///
/// # Examples
///
/// Registering a user type:
///
/// ```rust
/// use json_optics::codec::{decode, encode, Decoder, DecodingError, Encoder, JsonCodec};
/// use json_optics::json::Json;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Celsius(f64);
///
/// #[derive(Clone, Copy)]
/// struct CelsiusCodec;
///
/// impl Decoder<Celsius> for CelsiusCodec {
///     fn decode(&self, json: &Json) -> Result<Celsius, DecodingError> {
///         decode::<f64>(json).map(Celsius)
///     }
/// }
///
/// impl Encoder<Celsius> for CelsiusCodec {
///     fn encode(&self, value: &Celsius) -> Json {
///         encode(&value.0)
///     }
/// }
///
/// impl JsonCodec for Celsius {
///     type Codec = CelsiusCodec;
///
///     fn codec() -> Self::Codec {
///         CelsiusCodec
///     }
/// }
///
/// assert_eq!(decode::<Celsius>(&Json::from(21.5)), Ok(Celsius(21.5)));
/// assert_eq!(encode(&Celsius(3.0)), Json::from(3.0));
/// ```
pub trait JsonCodec: Sized {
    /// The codec type.
    type Codec: Decoder<Self> + Encoder<Self> + Clone + Send + Sync + 'static;

    /// Returns the canonical codec.
    fn codec() -> Self::Codec;
}

/// Decodes `json` with the canonical codec of `A`.
///
/// # Errors
///
/// Returns the [`DecodingError`] of the canonical codec.
///
/// # Examples
///
/// ```rust
/// use json_optics::codec::decode;
/// use json_optics::json::Json;
///
/// let pair: (i32, String) = decode(&Json::array([Json::from(10), Json::from("y")])).unwrap();
/// assert_eq!(pair, (10, "y".to_string()));
/// ```
pub fn decode<A: JsonCodec>(json: &Json) -> Result<A, DecodingError> {
    <A::Codec as Decoder<A>>::decode(&A::codec(), json)
}

/// Encodes `value` with the canonical codec of `A`.
#[must_use]
pub fn encode<A: JsonCodec>(value: &A) -> Json {
    <A::Codec as Encoder<A>>::encode(&A::codec(), value)
}

macro_rules! base_instance {
    ($target:ty, $codec:ident) => {
        impl JsonCodec for $target {
            type Codec = $codec;

            fn codec() -> Self::Codec {
                $codec
            }
        }
    };
}

base_instance!(i32, IntCodec);
base_instance!(i64, LongCodec);
base_instance!(f64, DoubleCodec);
base_instance!(bool, BooleanCodec);
base_instance!(String, StringCodec);
base_instance!(Json, JsonValueCodec);

impl<A: JsonCodec> JsonCodec for Option<A> {
    type Codec = OptionCodec<A::Codec>;

    fn codec() -> Self::Codec {
        OptionCodec::new(A::codec())
    }
}

impl<L: JsonCodec, R: JsonCodec> JsonCodec for Either<L, R> {
    type Codec = EitherCodec<L::Codec, R::Codec>;

    fn codec() -> Self::Codec {
        EitherCodec::new(L::codec(), R::codec())
    }
}

impl<A: JsonCodec, B: JsonCodec> JsonCodec for (A, B) {
    type Codec = Tuple2Codec<A::Codec, B::Codec>;

    fn codec() -> Self::Codec {
        Tuple2Codec::new(A::codec(), B::codec())
    }
}

impl<A: JsonCodec, B: JsonCodec, C: JsonCodec> JsonCodec for (A, B, C) {
    type Codec = Tuple3Codec<A::Codec, B::Codec, C::Codec>;

    fn codec() -> Self::Codec {
        Tuple3Codec::new(A::codec(), B::codec(), C::codec())
    }
}

impl<A: JsonCodec> JsonCodec for Vec<A> {
    type Codec = VecCodec<A::Codec>;

    fn codec() -> Self::Codec {
        VecCodec::new(A::codec())
    }
}
