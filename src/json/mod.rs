//! The JSON value model.
//!
//! [`Json`] is a closed, recursive sum type. Every optic and codec in this
//! crate reads and rebuilds values of this type; nothing mutates a tree in
//! place. Updates consume the old tree and move every untouched subtree into
//! the new one.
//!
//! # Examples
//!
//! ```
//! use json_optics::json::{Json, JsonKind};
//!
//! let document = Json::object([
//!     ("name", Json::from("lambda")),
//!     ("tags", Json::array([Json::from("fp"), Json::from("optics")])),
//! ]);
//!
//! assert_eq!(document.kind(), JsonKind::Object);
//! assert_eq!(
//!     document.as_object().and_then(|object| object.get("name")),
//!     Some(&Json::from("lambda"))
//! );
//! ```

mod number;
mod object;
#[cfg(feature = "serde")]
mod text;

pub use number::{DecimalError, JsonDecimal, JsonNumber};
pub use object::JsonObject;
#[cfg(feature = "serde")]
pub use text::ParseError;

use std::fmt;

/// A JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum Json {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A numeric literal.
    Number(JsonNumber),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Json>),
    /// An insertion-ordered map from string keys to values.
    Object(JsonObject),
}

/// The variant of a [`Json`] value, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// [`Json::Null`]
    Null,
    /// [`Json::Bool`]
    Boolean,
    /// [`Json::Number`]
    Number,
    /// [`Json::String`]
    String,
    /// [`Json::Array`]
    Array,
    /// [`Json::Object`]
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        formatter.write_str(name)
    }
}

impl Json {
    /// Builds an array from any sequence of values.
    #[must_use]
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Array(elements.into_iter().collect())
    }

    /// Builds an object from key/value pairs. Later duplicates replace earlier ones.
    #[must_use]
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(entries.into_iter().collect())
    }

    /// Returns the variant of this value.
    #[must_use]
    pub const fn kind(&self) -> JsonKind {
        match self {
            Self::Null => JsonKind::Null,
            Self::Bool(_) => JsonKind::Boolean,
            Self::Number(_) => JsonKind::Number,
            Self::String(_) => JsonKind::String,
            Self::Array(_) => JsonKind::Array,
            Self::Object(_) => JsonKind::Object,
        }
    }

    /// Returns `true` for [`Json::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean payload.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload.
    #[must_use]
    pub const fn as_number(&self) -> Option<&JsonNumber> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the string payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the elements of an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Returns the entries of an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for Json {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Json {
    fn from(value: i32) -> Self {
        Self::Number(JsonNumber::from(value))
    }
}

impl From<i64> for Json {
    fn from(value: i64) -> Self {
        Self::Number(JsonNumber::from(value))
    }
}

impl From<f64> for Json {
    fn from(value: f64) -> Self {
        Self::Number(JsonNumber::from(value))
    }
}

impl From<JsonNumber> for Json {
    fn from(number: JsonNumber) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Json {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Json {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }
}

impl From<JsonObject> for Json {
    fn from(object: JsonObject) -> Self {
        Self::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Json::Null, JsonKind::Null)]
    #[case(Json::from(true), JsonKind::Boolean)]
    #[case(Json::from(1), JsonKind::Number)]
    #[case(Json::from("text"), JsonKind::String)]
    #[case(Json::array([]), JsonKind::Array)]
    #[case(Json::object::<&str, _>([]), JsonKind::Object)]
    fn test_kind(#[case] value: Json, #[case] expected: JsonKind) {
        assert_eq!(value.kind(), expected);
    }

    #[rstest]
    fn test_accessors_reject_other_variants() {
        let value = Json::from("text");
        assert_eq!(value.as_str(), Some("text"));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_array(), None);
        assert_eq!(value.as_object(), None);
        assert!(!value.is_null());
    }

    #[rstest]
    fn test_kind_display() {
        assert_eq!(JsonKind::Boolean.to_string(), "boolean");
        assert_eq!(JsonKind::Object.to_string(), "object");
    }

    #[rstest]
    fn test_numeric_equality_inside_tree() {
        let integers = Json::array([Json::from(1), Json::from(2)]);
        let floats = Json::array([Json::from(1.0), Json::from(2.0)]);
        assert_eq!(integers, floats);
    }
}
