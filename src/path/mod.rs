//! A path DSL for navigating and updating [`Json`](crate::json::Json) trees.
//!
//! A [`JsonPath`] carries one `Optional<Json, Json>`: the focus built up so
//! far. Every navigation step returns a new path, so paths are cheap values
//! that can be stored, cloned and shared across threads. Calling
//! [`JsonPath::every`] or one of the filters switches to a
//! [`JsonTraversalPath`], which offers the same steps over many foci.
//!
//! Kind projections (`boolean`, `int`, `string`, ...) end a path with a
//! typed optic. Reading and updating go through the optic traits:
//!
//! | Path | Result | Read | Update |
//! |------|--------|------|--------|
//! | [`JsonPath`] | [`SharedOptional`] | `get_option` | `set`, `modify` |
//! | [`JsonTraversalPath`] | [`SharedTraversal`] | `get_all` | `set_all`, `modify_all` |
//!
//! A node of the wrong kind is not an error: the focus is simply absent.
//!
//! [`SharedOptional`]: crate::optics::SharedOptional
//! [`SharedTraversal`]: crate::optics::SharedTraversal
//!
//! # Examples
//!
//! ```rust
//! use json_optics::json::Json;
//! use json_optics::optics::{Optional, Traversal};
//! use json_optics::path::JsonPath;
//!
//! let document = Json::object([
//!     ("a", Json::object([("b", Json::array([Json::from(1), Json::from(2), Json::from(3)]))])),
//!     ("c", Json::from("x")),
//! ]);
//!
//! let c = JsonPath::root().select("c").string();
//! assert_eq!(c.get_option(&document), Some("x".to_string()));
//!
//! let numbers = JsonPath::root().select("a").select("b").every().int();
//! let incremented = numbers.modify_all(document, |n| n + 1);
//! assert_eq!(numbers.get_all(&incremented), vec![2, 3, 4]);
//! ```

macro_rules! kind_projections {
    ($optic:ident) => {
        /// Focuses on a boolean node.
        #[must_use]
        pub fn boolean(&self) -> $optic<Json, bool> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonBooleanPrism)
                .shared()
        }

        /// Focuses on a string node.
        #[must_use]
        pub fn string(&self) -> $optic<Json, String> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonStringPrism)
                .shared()
        }

        /// Focuses on a number node.
        #[must_use]
        pub fn number(&self) -> $optic<Json, $crate::json::JsonNumber> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonNumberPrism)
                .shared()
        }

        /// Focuses on a finite number node as its decimal text.
        #[must_use]
        pub fn decimal(&self) -> $optic<Json, $crate::json::JsonDecimal> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonNumberPrism.compose($crate::optics::DecimalPrism))
                .shared()
        }

        /// Focuses on a number node that is exactly an `i64`.
        #[must_use]
        pub fn long(&self) -> $optic<Json, i64> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonNumberPrism.compose($crate::optics::LongPrism))
                .shared()
        }

        /// Focuses on a number node that is exactly an `i32`.
        #[must_use]
        pub fn int(&self) -> $optic<Json, i32> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonNumberPrism.compose($crate::optics::IntPrism))
                .shared()
        }

        /// Focuses on a number node that is exactly an `f32`.
        #[must_use]
        pub fn float(&self) -> $optic<Json, f32> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonNumberPrism.compose($crate::optics::FloatPrism))
                .shared()
        }

        /// Focuses on a number node that is exactly an `f64`.
        #[must_use]
        pub fn double(&self) -> $optic<Json, f64> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonNumberPrism.compose($crate::optics::DoublePrism))
                .shared()
        }

        /// Focuses on the elements of an array node.
        #[must_use]
        pub fn array(&self) -> $optic<Json, Vec<Json>> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonArrayPrism)
                .shared()
        }

        /// Focuses on the entries of an object node.
        #[must_use]
        pub fn object(&self) -> $optic<Json, $crate::json::JsonObject> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonObjectPrism)
                .shared()
        }

        /// Focuses on a `null` node.
        #[must_use]
        pub fn null(&self) -> $optic<Json, ()> {
            self.json
                .clone()
                .compose_prism($crate::optics::JsonNullPrism)
                .shared()
        }
    };
}

mod extract;
mod json_path;
mod traversal_path;

pub use extract::ExtractPrism;
pub use json_path::JsonPath;
pub use traversal_path::JsonTraversalPath;

static_assertions::assert_impl_all!(JsonPath: Send, Sync, Clone);
static_assertions::assert_impl_all!(JsonTraversalPath: Send, Sync, Clone);
