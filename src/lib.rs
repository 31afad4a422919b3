//! # json-optics
//!
//! Composable optics and typed codecs for JSON trees.
//!
//! ## Overview
//!
//! Reading and updating deeply nested JSON by hand means a match per level
//! and a rebuild on the way back up. This library replaces that with small
//! algebraic objects that compose:
//!
//! - **JSON Values**: an immutable [`Json`](json::Json) tree with exact
//!   numeric conversions
//! - **Optics**: Lens, Prism, Optional and Traversal, with composition that
//!   weakens to the least powerful kind involved
//! - **Codecs**: `Decoder`/`Encoder` type classes with base instances and
//!   combinators for `Option`, `Either`, tuples and `Vec`
//! - **Paths**: a `JsonPath` DSL that builds optics step by step and bridges
//!   untyped nodes to typed values through codecs
//!
//! ## Feature Flags
//!
//! - `control`: the `Either` sum type
//! - `optics`: optic traits, combinators and JSON prisms
//! - `codec`: decoders, encoders and default instances
//! - `path`: the `JsonPath` DSL
//! - `serde`: JSON text parsing and printing via `serde_json`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use json_optics::prelude::*;
//!
//! let document = Json::object([
//!     ("a", Json::object([("b", Json::array([Json::from(1), Json::from(2), Json::from(3)]))])),
//!     ("c", Json::from("x")),
//! ]);
//!
//! let b = JsonPath::root().select("a").select("b");
//! assert_eq!(
//!     b.array().get_option(&document),
//!     Some(vec![Json::from(1), Json::from(2), Json::from(3)])
//! );
//!
//! let incremented = b.every().int().modify_all(document, |n| n + 1);
//! assert_eq!(b.filter_index(|index| index == 0).int().get_all(&incremented), vec![2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use json_optics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::json::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "codec")]
    pub use crate::codec::*;

    #[cfg(feature = "path")]
    pub use crate::path::*;
}

pub mod json;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "codec")]
pub mod codec;

#[cfg(feature = "path")]
pub mod path;
