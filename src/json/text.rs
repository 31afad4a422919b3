//! Text parsing and printing through `serde_json`.
//!
//! Enabled by the `serde` feature. Object key order survives a round trip
//! because `serde_json` is built with `preserve_order`, and number literals
//! no native type holds survive as [`JsonNumber::Decimal`] because it is
//! built with `arbitrary_precision`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::{Json, JsonDecimal, JsonNumber, JsonObject};

/// Malformed JSON text.
#[derive(Debug, Error)]
#[error("invalid JSON text: {0}")]
pub struct ParseError(#[from] serde_json::Error);

impl Json {
    /// Parses JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when `text` is not a single well-formed JSON value.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_optics::json::Json;
    ///
    /// let value = Json::parse(r#"{"a": [1, true, null]}"#).unwrap();
    /// assert_eq!(value.to_json_string(), r#"{"a":[1,true,null]}"#);
    /// assert!(Json::parse("{").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Prints the value as compact JSON text.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self.clone()).to_string()
    }
}

impl fmt::Display for Json {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_json_string())
    }
}

impl From<serde_json::Value> for Json {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(JsonNumber::from(number)),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(elements) => {
                Self::Array(elements.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect::<JsonObject>(),
            ),
        }
    }
}

// A literal becomes a `Float` only when the `f64` equals it exactly.
impl From<serde_json::Number> for JsonNumber {
    fn from(number: serde_json::Number) -> Self {
        if let Some(integer) = number.as_i64() {
            return Self::Integer(integer);
        }
        match number.to_string().parse::<JsonDecimal>() {
            Ok(decimal) => {
                let literal = Self::Decimal(decimal);
                literal.to_double().map_or(literal, Self::Float)
            }
            Err(_) => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

impl From<Json> for serde_json::Value {
    fn from(value: Json) -> Self {
        match value {
            Json::Null => Self::Null,
            Json::Bool(flag) => Self::Bool(flag),
            Json::Number(number) => number_to_value(number),
            Json::String(text) => Self::String(text),
            Json::Array(elements) => Self::Array(elements.into_iter().map(Self::from).collect()),
            Json::Object(object) => Self::Object(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

// Non-finite floats have no JSON spelling and print as `null`.
fn number_to_value(number: JsonNumber) -> serde_json::Value {
    let number = match number {
        JsonNumber::Integer(integer) => Some(serde_json::Number::from(integer)),
        JsonNumber::Float(float) => serde_json::Number::from_f64(float),
        JsonNumber::Decimal(decimal) => decimal.as_str().parse().ok(),
    };
    number.map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Serialize for Json {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Json {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JsonKind;
    use rstest::rstest;

    fn decimal(text: &str) -> JsonNumber {
        JsonNumber::Decimal(text.parse().unwrap())
    }

    #[rstest]
    fn test_parse_preserves_key_order() {
        let value = Json::parse(r#"{"z": 1, "a": 2}"#).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[rstest]
    #[case("12", JsonNumber::Integer(12))]
    #[case("1.5", JsonNumber::Float(1.5))]
    #[case("18446744073709551615", decimal("18446744073709551615"))]
    #[case("0.30000000000000000001", decimal("0.30000000000000000001"))]
    #[case("1e400", decimal("1e400"))]
    fn test_parse_numbers(#[case] text: &str, #[case] expected: JsonNumber) {
        let parsed = Json::parse(text).unwrap();
        assert_eq!(parsed, Json::Number(expected.clone()));
        assert!(matches!(
            (parsed, expected),
            (Json::Number(JsonNumber::Decimal(_)), JsonNumber::Decimal(_))
                | (Json::Number(JsonNumber::Integer(_)), JsonNumber::Integer(_))
                | (Json::Number(JsonNumber::Float(_)), JsonNumber::Float(_))
        ));
    }

    #[rstest]
    #[case("18446744073709551615")]
    #[case("1e400")]
    #[case("-2.50e-700")]
    fn test_print_decimal_literal_as_number(#[case] text: &str) {
        let value = Json::array([Json::Number(decimal(text))]);
        let printed = value.to_json_string();
        assert!(!printed.contains('"'));

        let reparsed = Json::parse(&printed).unwrap();
        assert_eq!(reparsed, value);
        assert_eq!(
            reparsed.as_array().map(|elements| elements[0].kind()),
            Some(JsonKind::Number)
        );
    }

    #[rstest]
    fn test_display_matches_compact_text() {
        let value = Json::array([Json::from("x"), Json::Null]);
        assert_eq!(value.to_string(), r#"["x",null]"#);
    }
}
