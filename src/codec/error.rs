//! Decoding failures.

use thiserror::Error;

use crate::json::Json;

/// The reason a [`Json`] value could not be decoded.
///
/// Shape errors carry the offending node. Structural decoders wrap the
/// failures of their parts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodingError {
    /// A number (of the requested precision) was expected.
    #[error("expected a number, found {}", .0.kind())]
    Number(Json),

    /// A boolean was expected.
    #[error("expected a boolean, found {}", .0.kind())]
    Boolean(Json),

    /// A string was expected.
    #[error("expected a string, found {}", .0.kind())]
    String(Json),

    /// An array (of a minimum length, for tuples) was expected.
    #[error("expected an array, found {}", describe_array(.0))]
    Array(Json),

    /// An object was expected.
    #[error("expected an object, found {}", .0.kind())]
    Object(Json),

    /// One or more components of a structural value failed to decode.
    #[error("{} component(s) failed to decode: {}", .0.len(), describe_components(.0))]
    Components(Vec<ComponentError>),

    /// Neither alternative of an untagged union decoded.
    #[error("no alternative matched (right: {right}; left: {left})")]
    Alternatives {
        /// Why the left-hand decoder failed.
        left: Box<DecodingError>,
        /// Why the right-hand decoder failed.
        right: Box<DecodingError>,
    },
}

/// The failure of one component of a structural value.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("[{index}]: {error}")]
pub struct ComponentError {
    /// Position of the component.
    pub index: usize,
    /// Why it failed.
    pub error: DecodingError,
}

impl ComponentError {
    /// Creates a component error.
    #[must_use]
    pub const fn new(index: usize, error: DecodingError) -> Self {
        Self { index, error }
    }
}

fn describe_array(json: &Json) -> String {
    match json.as_array() {
        Some(elements) => format!("array of length {}", elements.len()),
        None => json.kind().to_string(),
    }
}

fn describe_components(errors: &[ComponentError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
