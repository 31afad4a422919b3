//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics allow you to focus on specific parts of a data
//! structure, enabling type-safe reading and updating of deeply nested fields.
//!
//! All optics here read their focus **by value** and update by consuming the
//! source and returning a new one.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens <: Optional <: Traversal
//! Prism <: Optional <: Traversal
//! Lens + Prism = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on one case of a sum type (`get_or_modify`/`reverse_get` access)
//! - [`Optional`]: Focus on a value that may or may not exist (Lens + Prism composition)
//! - [`Traversal`]: Focus on multiple elements (batch access)
//! - [`SharedOptional`], [`SharedTraversal`]: type-erased, `Arc`-backed handles
//!
//! # Container Combinators
//!
//! - [`ixed`]: existing elements by index or key
//! - [`at`]: presence of a key, with insertion and removal
//! - [`each`]: every element of a container
//! - [`filtered`]: elements selected by index or key
//!
//! # Example with Lens
//!
//! ```
//! use json_optics::optics::Lens;
//! use json_optics::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with JSON
//!
//! ```
//! use json_optics::json::Json;
//! use json_optics::optics::{
//!     JsonObjectPrism, JsonStringPrism, ObjectIx, Optional, PrismComposeExtension,
//!     OptionalComposeExtension,
//! };
//!
//! let name = JsonObjectPrism
//!     .compose_optional(ObjectIx::new("name"))
//!     .compose_prism(JsonStringPrism);
//!
//! let document = Json::object([("name", Json::from("lambda"))]);
//! assert_eq!(name.get_option(&document), Some("lambda".to_string()));
//!
//! let renamed = name.modify(document, |text| text.to_uppercase());
//! assert_eq!(renamed, Json::object([("name", Json::from("LAMBDA"))]));
//! ```

pub mod at;
pub mod each;
pub mod filtered;
pub mod ixed;
mod json_optics;
mod lens;
mod optics_compose;
mod optional;
mod prism;
mod traversal;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::IdentityLens;
pub use lens::Lens;
pub use lens::LensAsOptional;
pub use lens::LensAsTraversal;

// Re-export all prism-related types and traits
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::MovingPrism;
pub use prism::Prism;
pub use prism::PrismAsOptional;
pub use prism::PrismAsTraversal;

// Re-export all optional-related types and traits
pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::Optional;
pub use optional::OptionalAsTraversal;
pub use optional::SharedOptional;

// Re-export all traversal-related types and traits
pub use traversal::ComposedTraversal;
pub use traversal::SharedTraversal;
pub use traversal::Traversal;

// Re-export cross-kind composition
pub use optics_compose::LensComposeExtension;
pub use optics_compose::LensOptionalComposition;
pub use optics_compose::OptionalComposeExtension;
pub use optics_compose::PrismComposeExtension;
pub use optics_compose::PrismOptionalComposition;
pub use optics_compose::TraversalComposeExtension;

// Re-export container combinators
pub use at::{At, ObjectAt};
pub use each::{Each, JsonEach, ObjectEach, VecEach, each};
pub use filtered::{IndexFilteredTraversal, KeyFilteredTraversal, filter_index, filter_keys};
pub use ixed::{Ixed, ObjectIx, VecIx};

// Re-export JSON optics
pub use json_optics::{
    DecimalPrism, DoublePrism, FloatPrism, IntPrism, JsonArrayPrism, JsonBooleanPrism,
    JsonNullPrism, JsonNumberPrism, JsonObjectPrism, JsonStringPrism, LongPrism,
};
