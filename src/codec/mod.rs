//! Typed decoding and encoding of [`Json`](crate::json::Json) values.
//!
//! The module is organised around two type classes:
//!
//! - [`Decoder`]: `&Json -> Result<A, DecodingError>`
//! - [`Encoder`]: `&A -> Json`
//!
//! Base codecs cover the primitive kinds, and combinators build codecs for
//! `Option`, [`Either`](crate::control::Either), tuples and `Vec` out of the
//! codecs of their parts. [`JsonCodec`] resolves the canonical codec of a
//! type so that [`decode`] and [`encode`] can be called without naming one.
//!
//! # Examples
//!
//! ```rust
//! use json_optics::codec::{decode, encode, Decoder, IntCodec, StringCodec, Tuple2Codec};
//! use json_optics::json::Json;
//!
//! let json = Json::array([Json::from(10), Json::from("y")]);
//!
//! let explicit = Tuple2Codec::new(IntCodec, StringCodec);
//! assert_eq!(explicit.decode(&json), Ok((10, "y".to_string())));
//!
//! let resolved: (i32, String) = decode(&json).unwrap();
//! assert_eq!(encode(&resolved), json);
//! ```

mod base;
mod combinators;
mod decoder;
mod encoder;
mod error;
mod instances;

pub use base::{BooleanCodec, DoubleCodec, IntCodec, JsonValueCodec, LongCodec, StringCodec};
pub use combinators::{EitherCodec, OptionCodec, Tuple2Codec, Tuple3Codec, VecCodec};
pub use decoder::{Decoder, FunctionDecoder, MappedDecoder};
pub use encoder::{ContramappedEncoder, Encoder, FunctionEncoder};
pub use error::{ComponentError, DecodingError};
pub use instances::{JsonCodec, decode, encode};
