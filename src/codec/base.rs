//! Codecs for the primitive JSON kinds.
//!
//! Each codec maps one Rust type onto one [`Json`] variant. Numeric codecs
//! only accept numbers that convert exactly (see [`JsonNumber`]).
//!
//! [`JsonNumber`]: crate::json::JsonNumber

use super::{Decoder, DecodingError, Encoder};
use crate::json::Json;

macro_rules! number_codec {
    ($(#[$meta:meta])* $name:ident, $target:ty, $conversion:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Decoder<$target> for $name {
            fn decode(&self, json: &Json) -> Result<$target, DecodingError> {
                json.as_number()
                    .and_then(|number| number.$conversion())
                    .ok_or_else(|| DecodingError::Number(json.clone()))
            }
        }

        impl Encoder<$target> for $name {
            fn encode(&self, value: &$target) -> Json {
                Json::from(*value)
            }
        }
    };
}

number_codec!(
    /// Codec for `i32`.
    IntCodec, i32, to_int
);
number_codec!(
    /// Codec for `i64`.
    LongCodec, i64, to_long
);
number_codec!(
    /// Codec for `f64`.
    DoubleCodec, f64, to_double
);

/// Codec for `bool`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanCodec;

impl Decoder<bool> for BooleanCodec {
    fn decode(&self, json: &Json) -> Result<bool, DecodingError> {
        json.as_bool()
            .ok_or_else(|| DecodingError::Boolean(json.clone()))
    }
}

impl Encoder<bool> for BooleanCodec {
    fn encode(&self, value: &bool) -> Json {
        Json::Bool(*value)
    }
}

/// Codec for `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCodec;

impl Decoder<String> for StringCodec {
    fn decode(&self, json: &Json) -> Result<String, DecodingError> {
        json.as_str()
            .map(ToString::to_string)
            .ok_or_else(|| DecodingError::String(json.clone()))
    }
}

impl Encoder<String> for StringCodec {
    fn encode(&self, value: &String) -> Json {
        Json::String(value.clone())
    }
}

/// The identity codec: every [`Json`] value decodes to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonValueCodec;

impl Decoder<Json> for JsonValueCodec {
    fn decode(&self, json: &Json) -> Result<Json, DecodingError> {
        Ok(json.clone())
    }
}

impl Encoder<Json> for JsonValueCodec {
    fn encode(&self, value: &Json) -> Json {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Json::from(7), Ok(7))]
    #[case(Json::from(7.0), Ok(7))]
    #[case(Json::from(7.5), Err(DecodingError::Number(Json::from(7.5))))]
    #[case(Json::from(i64::MAX), Err(DecodingError::Number(Json::from(i64::MAX))))]
    #[case(Json::from("7"), Err(DecodingError::Number(Json::from("7"))))]
    fn test_int_codec_decode(#[case] json: Json, #[case] expected: Result<i32, DecodingError>) {
        assert_eq!(IntCodec.decode(&json), expected);
    }

    #[rstest]
    fn test_long_codec_accepts_full_range() {
        assert_eq!(LongCodec.decode(&Json::from(i64::MIN)), Ok(i64::MIN));
    }

    #[rstest]
    fn test_double_codec_accepts_integers() {
        assert_eq!(DoubleCodec.decode(&Json::from(3)), Ok(3.0));
        assert_eq!(DoubleCodec.encode(&0.5), Json::from(0.5));
    }

    #[rstest]
    #[case(Json::from(true), Ok(true))]
    #[case(Json::Null, Err(DecodingError::Boolean(Json::Null)))]
    fn test_boolean_codec_decode(
        #[case] json: Json,
        #[case] expected: Result<bool, DecodingError>,
    ) {
        assert_eq!(BooleanCodec.decode(&json), expected);
    }

    #[rstest]
    fn test_string_codec_rejects_numbers() {
        assert_eq!(
            StringCodec.decode(&Json::from(1)),
            Err(DecodingError::String(Json::from(1)))
        );
    }

    #[rstest]
    fn test_json_value_codec_is_identity() {
        let document = Json::object([("a", Json::Null)]);
        assert_eq!(JsonValueCodec.decode(&document), Ok(document.clone()));
        assert_eq!(JsonValueCodec.encode(&document), document);
    }
}
