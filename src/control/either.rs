//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is the untagged union the codec layer decodes into: a JSON
//! value that matches either the left-hand or the right-hand shape. Unlike
//! `Result`, neither side means failure.
//!
//! # Examples
//!
//! ```rust
//! use json_optics::control::Either;
//!
//! let values: Vec<Either<i32, String>> = vec![Either::Left(42), Either::Right("x".into())];
//! let numbers: Vec<i32> = values
//!     .into_iter()
//!     .filter_map(|value| match value {
//!         Either::Left(number) => Some(number),
//!         Either::Right(_) => None,
//!     })
//!     .collect();
//! assert_eq!(numbers, vec![42]);
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}
