//! Prisms into the variants of [`Json`] and the representations of [`JsonNumber`].
//!
//! Each `Json{Kind}Prism` matches exactly one variant and moves its payload
//! out on extraction. The numeric prisms narrow a [`JsonNumber`] to a Rust
//! type and match only when the conversion is exact (see
//! [`JsonNumber::to_int`] and friends), so `reverse_get` rebuilds a number
//! equal to the one previewed.
//!
//! # Examples
//!
//! ```
//! use json_optics::json::Json;
//! use json_optics::optics::{IntPrism, JsonNumberPrism, JsonStringPrism, Prism};
//!
//! assert_eq!(JsonStringPrism.preview(&Json::from("x")), Some("x".to_string()));
//! assert_eq!(JsonStringPrism.preview(&Json::from(1)), None);
//!
//! let int = JsonNumberPrism.compose(IntPrism);
//! assert_eq!(int.preview(&Json::from(42)), Some(42));
//! assert_eq!(int.preview(&Json::from(1.5)), None);
//! assert_eq!(int.reverse_get(7), Json::from(7));
//! ```

use crate::json::{Json, JsonDecimal, JsonNumber, JsonObject};
use crate::optics::Prism;

macro_rules! json_kind_prism {
    ($(#[$meta:meta])* $kind:ident, $variant:ident, $target:ty) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct [<Json $kind Prism>];

            #[allow(clippy::clone_on_copy)]
            impl Prism<Json, $target> for [<Json $kind Prism>] {
                fn preview(&self, source: &Json) -> Option<$target> {
                    match source {
                        Json::$variant(value) => Some(value.clone()),
                        _ => None,
                    }
                }

                fn reverse_get(&self, value: $target) -> Json {
                    Json::$variant(value)
                }

                fn get_or_modify(&self, source: Json) -> Result<$target, Json> {
                    match source {
                        Json::$variant(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        }
    };
}

json_kind_prism!(
    /// Matches [`Json::Bool`].
    Boolean, Bool, bool
);
json_kind_prism!(
    /// Matches [`Json::Number`].
    Number, Number, JsonNumber
);
json_kind_prism!(
    /// Matches [`Json::String`].
    String, String, String
);
json_kind_prism!(
    /// Matches [`Json::Array`].
    Array, Array, Vec<Json>
);
json_kind_prism!(
    /// Matches [`Json::Object`].
    Object, Object, JsonObject
);

/// Matches [`Json::Null`]. The focus carries no information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonNullPrism;

impl Prism<Json, ()> for JsonNullPrism {
    fn preview(&self, source: &Json) -> Option<()> {
        source.is_null().then_some(())
    }

    fn reverse_get(&self, _value: ()) -> Json {
        Json::Null
    }
}

macro_rules! number_prism {
    ($(#[$meta:meta])* $name:ident, $target:ty, |$number:ident| $preview:expr, $build:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Prism<JsonNumber, $target> for $name {
            fn preview(&self, $number: &JsonNumber) -> Option<$target> {
                $preview
            }

            fn reverse_get(&self, value: $target) -> JsonNumber {
                let build: fn($target) -> JsonNumber = $build;
                build(value)
            }
        }
    };
}

number_prism!(
    /// Matches numbers exactly representable as `i32`.
    IntPrism, i32, |number| number.to_int(), JsonNumber::from
);
number_prism!(
    /// Matches numbers exactly representable as `i64`.
    LongPrism, i64, |number| number.to_long(), JsonNumber::from
);
number_prism!(
    /// Matches numbers exactly representable as `f32`.
    FloatPrism, f32, |number| number.to_float(), JsonNumber::from
);
number_prism!(
    /// Matches numbers exactly representable as `f64`.
    DoublePrism, f64, |number| number.to_double(), JsonNumber::from
);
number_prism!(
    /// Views a finite number as its decimal text.
    DecimalPrism, JsonDecimal, |number| number.to_decimal(), JsonNumber::Decimal
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_kind_prism_moves_payload() {
        let array = Json::array([Json::from(1), Json::from(2)]);
        assert_eq!(
            JsonArrayPrism.get_or_modify(array),
            Ok(vec![Json::from(1), Json::from(2)])
        );
        assert_eq!(
            JsonArrayPrism.get_or_modify(Json::from("x")),
            Err(Json::from("x"))
        );
    }

    #[rstest]
    #[case(Json::Null, true)]
    #[case(Json::from(false), false)]
    #[case(Json::from(0), false)]
    fn test_null_prism(#[case] source: Json, #[case] matches: bool) {
        assert_eq!(JsonNullPrism.preview(&source).is_some(), matches);
    }

    #[rstest]
    #[case(JsonNumber::Integer(5), Some(5))]
    #[case(JsonNumber::Float(5.0), Some(5))]
    #[case(JsonNumber::Float(5.5), None)]
    #[case(JsonNumber::Integer(i64::from(i32::MAX) + 1), None)]
    #[case(JsonNumber::Decimal("12".parse().unwrap()), Some(12))]
    #[case(JsonNumber::Decimal("12.0000000000000000001".parse().unwrap()), None)]
    fn test_int_prism(#[case] source: JsonNumber, #[case] expected: Option<i32>) {
        assert_eq!(IntPrism.preview(&source), expected);
    }

    #[rstest]
    fn test_decimal_prism_on_finite_numbers() {
        assert_eq!(
            DecimalPrism.preview(&JsonNumber::Integer(3)),
            Some(JsonDecimal::from(3))
        );
        assert_eq!(DecimalPrism.preview(&JsonNumber::Float(f64::NAN)), None);
        assert_eq!(
            DecimalPrism.reverse_get("1.25".parse().unwrap()),
            JsonNumber::Float(1.25)
        );
    }

    #[rstest]
    #[case(JsonNumber::Float(1.5), Some(1.5))]
    #[case(JsonNumber::Float(0.1), None)]
    #[case(JsonNumber::Float(1e300), None)]
    fn test_float_prism_matches_only_exact_values(
        #[case] source: JsonNumber,
        #[case] expected: Option<f32>,
    ) {
        assert_eq!(FloatPrism.preview(&source), expected);
        if let Some(value) = expected {
            assert_eq!(FloatPrism.reverse_get(value), source);
        }
    }

    #[rstest]
    fn test_long_prism_round_trip() {
        let number = LongPrism.reverse_get(i64::MIN);
        assert_eq!(LongPrism.preview(&number), Some(i64::MIN));
    }
}
