//! Numeric literals held by [`Json::Number`](super::Json::Number).
//!
//! A [`JsonNumber`] keeps the literal in the narrowest faithful form it was
//! built from and exposes exact conversions into Rust numeric types. A
//! conversion succeeds only when the literal is representable in the target
//! type, so `2.5` is never an `i32`, `0.1` is never an `f32` and
//! `3.0000000000000000001` is never an `i64`.
//!
//! Equality is by value. A [`JsonNumber::Float`] stands for the shortest
//! decimal that reads back as the same `f64`, which is also how it prints.
//!
//! # Examples
//!
//! ```
//! use json_optics::json::{JsonDecimal, JsonNumber};
//!
//! let whole = JsonNumber::Float(3.0);
//! assert_eq!(whole.to_int(), Some(3));
//!
//! let fractional = JsonNumber::Float(3.5);
//! assert_eq!(fractional.to_int(), None);
//! assert_eq!(fractional.to_double(), Some(3.5));
//!
//! let two: JsonDecimal = "2.00".parse().unwrap();
//! assert_eq!(JsonNumber::Integer(2), JsonNumber::Decimal(two));
//! assert!("two".parse::<JsonDecimal>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Text that is not a JSON number literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal: {0:?}")]
pub struct DecimalError(String);

/// The exact value `±digits × 10^exponent` of a finite literal.
///
/// `digits` has neither leading nor trailing zeros; zero has no digits.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ExactValue {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl ExactValue {
    fn from_digits(negative: bool, digits: &str, exponent: i64) -> Self {
        let significant = digits.trim_end_matches('0');
        let exponent = exponent.saturating_add(count(digits.len() - significant.len()));
        let significant = significant.trim_start_matches('0');
        if significant.is_empty() {
            return Self {
                negative: false,
                digits: String::new(),
                exponent: 0,
            };
        }
        Self {
            negative,
            digits: significant.to_string(),
            exponent,
        }
    }

    fn from_integer(value: i64) -> Self {
        Self::from_digits(value < 0, &value.unsigned_abs().to_string(), 0)
    }

    // JSON number grammar: -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
    fn parse(text: &str) -> Option<Self> {
        let (negative, unsigned) = text
            .strip_prefix('-')
            .map_or((false, text), |rest| (true, rest));
        let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent)?),
            None => (unsigned, 0),
        };
        let (integral, fraction) = match mantissa.split_once('.') {
            Some((integral, fraction)) if is_digits(fraction) => (integral, fraction),
            Some(_) => return None,
            None => (mantissa, ""),
        };
        if !is_digits(integral) || (integral.len() > 1 && integral.starts_with('0')) {
            return None;
        }
        Some(Self::from_digits(
            negative,
            &format!("{integral}{fraction}"),
            exponent.saturating_sub(count(fraction.len())),
        ))
    }

    fn from_double(value: f64) -> Option<Self> {
        value
            .is_finite()
            .then(|| Self::parse(&format!("{value:e}")))
            .flatten()
    }

    fn to_long(&self) -> Option<i64> {
        if self.digits.is_empty() {
            return Some(0);
        }
        // Digits carry no trailing zeros, so a negative exponent means a fraction.
        let exponent = u32::try_from(self.exponent).ok()?;
        let magnitude = self
            .digits
            .parse::<i128>()
            .ok()?
            .checked_mul(10_i128.checked_pow(exponent)?)?;
        i64::try_from(if self.negative { -magnitude } else { magnitude }).ok()
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

fn count(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = text.strip_prefix('-').map_or_else(
        || (false, text.strip_prefix('+').unwrap_or(text)),
        |rest| (true, rest),
    );
    if !is_digits(digits) {
        return None;
    }
    let magnitude = digits.bytes().fold(0_i64, |value, byte| {
        value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// The text of a JSON number literal, validated on construction.
///
/// The original spelling is kept for printing; equality compares values, so
/// `"12.50"` equals `"1.25e1"`.
///
/// # Examples
///
/// ```
/// use json_optics::json::JsonDecimal;
///
/// let price: JsonDecimal = "12.50".parse().unwrap();
/// assert_eq!(price.as_str(), "12.50");
/// assert_eq!(price, "1.25e1".parse::<JsonDecimal>().unwrap());
/// assert!("1.".parse::<JsonDecimal>().is_err());
/// ```
#[derive(Clone)]
pub struct JsonDecimal {
    text: String,
    value: ExactValue,
}

impl JsonDecimal {
    /// Returns the literal as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for JsonDecimal {
    type Err = DecimalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        ExactValue::parse(text)
            .map(|value| Self {
                text: text.to_string(),
                value,
            })
            .ok_or_else(|| DecimalError(text.to_string()))
    }
}

impl From<i64> for JsonDecimal {
    fn from(value: i64) -> Self {
        Self {
            text: value.to_string(),
            value: ExactValue::from_integer(value),
        }
    }
}

impl From<i32> for JsonDecimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl PartialEq for JsonDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for JsonDecimal {}

impl fmt::Debug for JsonDecimal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("JsonDecimal").field(&self.text).finish()
    }
}

impl fmt::Display for JsonDecimal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// A JSON numeric literal.
#[derive(Clone, Debug)]
pub enum JsonNumber {
    /// An integral literal that fits in an `i64`.
    Integer(i64),
    /// A binary floating point literal.
    Float(f64),
    /// A literal kept as its decimal text, for values no native type holds exactly.
    Decimal(JsonDecimal),
}

impl JsonNumber {
    /// Converts to an `i64` when the literal is a whole number inside `i64` range.
    #[must_use]
    pub fn to_long(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) => float_to_long(*value),
            Self::Decimal(decimal) => decimal.value.to_long(),
        }
    }

    /// Converts to an `i32` when the literal is a whole number inside `i32` range.
    #[must_use]
    pub fn to_int(&self) -> Option<i32> {
        self.to_long().and_then(|value| i32::try_from(value).ok())
    }

    /// Converts to an `f64` when the result compares equal to the literal.
    #[must_use]
    pub fn to_double(&self) -> Option<f64> {
        let candidate = match self {
            Self::Float(value) => return Some(*value),
            Self::Integer(value) => long_to_double(*value),
            Self::Decimal(decimal) => decimal.as_str().parse::<f64>().ok()?,
        };
        (Self::Float(candidate) == *self).then_some(candidate)
    }

    /// Converts to an `f32` when the literal is a finite `f64` that an `f32`
    /// holds without rounding.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_float(&self) -> Option<f32> {
        self.to_double()
            .filter(|value| value.is_finite() && f64::from(double_to_float(*value)) == *value)
            .map(double_to_float)
    }

    /// Returns the decimal text of a finite literal.
    #[must_use]
    pub fn to_decimal(&self) -> Option<JsonDecimal> {
        match self {
            Self::Integer(value) => Some(JsonDecimal::from(*value)),
            Self::Float(value) => value.to_string().parse().ok(),
            Self::Decimal(decimal) => Some(decimal.clone()),
        }
    }

    fn exact_value(&self) -> Option<ExactValue> {
        match self {
            Self::Integer(value) => Some(ExactValue::from_integer(*value)),
            Self::Float(value) => ExactValue::from_double(*value),
            Self::Decimal(decimal) => Some(decimal.value.clone()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
const fn long_to_double(value: i64) -> f64 {
    value as f64
}

#[allow(clippy::cast_possible_truncation)]
const fn double_to_float(value: f64) -> f32 {
    value as f32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_long(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl PartialEq for JsonNumber {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            _ => self
                .exact_value()
                .zip(other.exact_value())
                .is_some_and(|(left, right)| left == right),
        }
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Decimal(decimal) => write!(formatter, "{decimal}"),
        }
    }
}

impl From<i32> for JsonNumber {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for JsonNumber {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f32> for JsonNumber {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for JsonNumber {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<JsonDecimal> for JsonNumber {
    fn from(value: JsonDecimal) -> Self {
        Self::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decimal(text: &str) -> JsonNumber {
        JsonNumber::Decimal(text.parse().unwrap())
    }

    #[rstest]
    #[case(JsonNumber::Integer(42), Some(42))]
    #[case(JsonNumber::Float(42.0), Some(42))]
    #[case(JsonNumber::Float(42.5), None)]
    #[case(JsonNumber::Integer(i64::from(i32::MAX) + 1), None)]
    #[case(decimal("-7"), Some(-7))]
    #[case(decimal("7.0"), Some(7))]
    #[case(decimal("7e2"), Some(700))]
    #[case(decimal("1.5e1"), Some(15))]
    #[case(decimal("-0.0"), Some(0))]
    #[case(decimal("3.0000000000000000001"), None)]
    #[case(decimal("1e-400"), None)]
    #[case(decimal("12e-1"), None)]
    fn test_to_int(#[case] number: JsonNumber, #[case] expected: Option<i32>) {
        assert_eq!(number.to_int(), expected);
    }

    #[rstest]
    #[case(decimal("9223372036854775807"), Some(i64::MAX))]
    #[case(decimal("-9223372036854775808"), Some(i64::MIN))]
    #[case(decimal("9223372036854775808"), None)]
    #[case(decimal("1e400"), None)]
    fn test_to_long_decimal_range(#[case] number: JsonNumber, #[case] expected: Option<i64>) {
        assert_eq!(number.to_long(), expected);
    }

    #[rstest]
    fn test_to_long_rejects_non_finite() {
        assert_eq!(JsonNumber::Float(f64::INFINITY).to_long(), None);
        assert_eq!(JsonNumber::Float(f64::NAN).to_long(), None);
    }

    #[rstest]
    fn test_to_double_rejects_inexact_literals() {
        assert_eq!(JsonNumber::Integer(1 << 53).to_double(), Some(9_007_199_254_740_992.0));
        assert_eq!(JsonNumber::Integer((1 << 53) + 1).to_double(), None);
        assert_eq!(decimal("0.25").to_double(), Some(0.25));
        assert_eq!(decimal("3.0000000000000000001").to_double(), None);
        assert_eq!(decimal("1e-400").to_double(), None);
        assert_eq!(decimal("1e400").to_double(), None);
    }

    #[rstest]
    #[case(JsonNumber::Float(1.5), Some(1.5))]
    #[case(JsonNumber::Float(-0.375), Some(-0.375))]
    #[case(JsonNumber::Float(0.1), None)]
    #[case(JsonNumber::Float(1e300), None)]
    #[case(JsonNumber::Float(f64::INFINITY), None)]
    #[case(JsonNumber::Integer(16_777_216), Some(16_777_216.0))]
    #[case(JsonNumber::Integer(16_777_217), None)]
    #[case(decimal("0.1"), None)]
    fn test_to_float_requires_exact_f32(#[case] number: JsonNumber, #[case] expected: Option<f32>) {
        assert_eq!(number.to_float(), expected);
    }

    #[rstest]
    fn test_float_round_trip_is_exact() {
        let number = JsonNumber::Float(2.5);
        let narrowed = number.to_float().unwrap();
        assert_eq!(JsonNumber::from(narrowed), number);
    }

    #[rstest]
    fn test_equality_across_representations() {
        assert_eq!(JsonNumber::Integer(2), JsonNumber::Float(2.0));
        assert_eq!(JsonNumber::Float(2.5), decimal("2.5"));
        assert_eq!(decimal("2.50"), decimal("25e-1"));
        assert_eq!(JsonNumber::Float(0.0), JsonNumber::Float(-0.0));
        assert_ne!(JsonNumber::Integer(2), JsonNumber::Float(2.5));
        assert_ne!(decimal("1e-400"), JsonNumber::Integer(0));
        assert_ne!(decimal("3.0000000000000000001"), JsonNumber::Integer(3));
    }

    #[rstest]
    fn test_equality_is_transitive_near_two_pow_53() {
        let text = decimal("9007199254740993.0");
        let integer = JsonNumber::Integer(9_007_199_254_740_993);
        let float = JsonNumber::Float(9_007_199_254_740_992.0);

        assert_eq!(text, integer);
        assert_ne!(text, float);
        assert_ne!(integer, float);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("abc")]
    #[case("01")]
    #[case("1.")]
    #[case(".5")]
    #[case("1e")]
    #[case("+1")]
    #[case("NaN")]
    fn test_decimal_rejects_invalid_text(#[case] text: &str) {
        assert_eq!(
            text.parse::<JsonDecimal>(),
            Err(DecimalError(text.to_string()))
        );
    }

    #[rstest]
    fn test_to_decimal() {
        assert_eq!(
            JsonNumber::Float(1.25).to_decimal().map(|value| value.to_string()),
            Some("1.25".to_string())
        );
        assert_eq!(JsonNumber::Float(f64::NAN).to_decimal(), None);
        assert_eq!(JsonNumber::Integer(-3).to_decimal(), Some(JsonDecimal::from(-3)));
    }

    #[rstest]
    fn test_display_uses_literal_text() {
        assert_eq!(JsonNumber::Integer(-3).to_string(), "-3");
        assert_eq!(decimal("1e400").to_string(), "1e400");
        assert_eq!(decimal("12.50").to_string(), "12.50");
    }
}
