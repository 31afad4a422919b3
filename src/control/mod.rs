//! Control structures.
//!
//! - [`Either`]: a value that is one of two alternatives, the target of the
//!   untagged-union codec

mod either;

pub use either::Either;
