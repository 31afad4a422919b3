//! Composition across optic kinds.
//!
//! Composing two optics of different kinds yields the weaker of the two:
//!
//! | outer \ inner | Lens      | Prism     | Optional  | Traversal |
//! |---------------|-----------|-----------|-----------|-----------|
//! | Lens          | Lens      | Optional  | Optional  | Traversal |
//! | Prism         | Optional  | Prism     | Optional  | Traversal |
//! | Optional      | Optional  | Optional  | Optional  | Traversal |
//! | Traversal     | Traversal | Traversal | Traversal | Traversal |
//!
//! Same-kind composition is the `compose` method of each optic trait. The
//! extension traits in this module provide the cross-kind cells, each built
//! by weakening one or both sides with the adapters
//! ([`LensAsOptional`], [`PrismAsOptional`], [`OptionalAsTraversal`], ...).
//!
//! # Examples
//!
//! ```
//! use json_optics::optics::{Lens, LensComposeExtension, Optional};
//! use json_optics::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Reading { Celsius(f64), Missing }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Sensor { reading: Reading }
//!
//! let celsius = lens!(Sensor, reading).compose_prism(prism!(Reading, Celsius));
//!
//! let sensor = Sensor { reading: Reading::Celsius(21.5) };
//! assert_eq!(celsius.get_option(&sensor), Some(21.5));
//!
//! let missing = Sensor { reading: Reading::Missing };
//! assert_eq!(celsius.get_option(&missing), None);
//! assert_eq!(celsius.set(missing.clone(), 30.0), missing);
//! ```

use super::lens::{Lens, LensAsOptional, LensAsTraversal};
use super::optional::{ComposedOptional, Optional, OptionalAsTraversal};
use super::prism::{Prism, PrismAsOptional, PrismAsTraversal};
use super::traversal::{ComposedTraversal, Traversal};

/// Lens composed with a Prism or an Optional.
pub type LensOptionalComposition<L, O, S, A> = ComposedOptional<LensAsOptional<L, S, A>, O, A>;

/// Prism composed with a Lens or an Optional.
pub type PrismOptionalComposition<P, O, S, A> = ComposedOptional<PrismAsOptional<P, S, A>, O, A>;

/// Cross-kind composition for lenses.
pub trait LensComposeExtension<S, A>: Lens<S, A> + Sized {
    /// Lens ∘ Prism = Optional.
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> LensOptionalComposition<Self, PrismAsOptional<P, A, B>, S, A>
    where
        P: Prism<A, B>,
    {
        ComposedOptional::new(self.to_optional(), prism.to_optional())
    }

    /// Lens ∘ Optional = Optional.
    fn compose_optional<B, O>(self, optional: O) -> LensOptionalComposition<Self, O, S, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(self.to_optional(), optional)
    }

    /// Lens ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<LensAsTraversal<Self, S, A>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.to_traversal(), traversal)
    }
}

impl<S, A, L> LensComposeExtension<S, A> for L where L: Lens<S, A> {}

/// Cross-kind composition for prisms.
pub trait PrismComposeExtension<S, A>: Prism<S, A> + Sized {
    /// Prism ∘ Lens = Optional.
    fn compose_lens<B, L>(
        self,
        lens: L,
    ) -> PrismOptionalComposition<Self, LensAsOptional<L, A, B>, S, A>
    where
        L: Lens<A, B>,
    {
        ComposedOptional::new(self.to_optional(), lens.to_optional())
    }

    /// Prism ∘ Optional = Optional.
    fn compose_optional<B, O>(self, optional: O) -> PrismOptionalComposition<Self, O, S, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(self.to_optional(), optional)
    }

    /// Prism ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<PrismAsTraversal<Self, S, A>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.to_traversal(), traversal)
    }
}

impl<S, A, P> PrismComposeExtension<S, A> for P where P: Prism<S, A> {}

/// Cross-kind composition for optionals.
pub trait OptionalComposeExtension<S, A>: Optional<S, A> + Sized {
    /// Optional ∘ Lens = Optional.
    fn compose_lens<B, L>(self, lens: L) -> ComposedOptional<Self, LensAsOptional<L, A, B>, A>
    where
        L: Lens<A, B>,
    {
        ComposedOptional::new(self, lens.to_optional())
    }

    /// Optional ∘ Prism = Optional.
    fn compose_prism<B, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P, A, B>, A>
    where
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, prism.to_optional())
    }

    /// Optional ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<OptionalAsTraversal<Self, S, A>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.to_traversal(), traversal)
    }
}

impl<S, A, O> OptionalComposeExtension<S, A> for O where O: Optional<S, A> {}

/// Cross-kind composition for traversals.
pub trait TraversalComposeExtension<S, A>: Traversal<S, A> + Sized {
    /// Traversal ∘ Lens = Traversal.
    fn compose_lens<B, L>(self, lens: L) -> ComposedTraversal<Self, LensAsTraversal<L, A, B>, A>
    where
        L: Lens<A, B>,
    {
        ComposedTraversal::new(self, lens.to_traversal())
    }

    /// Traversal ∘ Prism = Traversal.
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedTraversal<Self, PrismAsTraversal<P, A, B>, A>
    where
        P: Prism<A, B>,
    {
        ComposedTraversal::new(self, prism.to_traversal())
    }

    /// Traversal ∘ Optional = Traversal.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedTraversal<Self, OptionalAsTraversal<O, A, B>, A>
    where
        O: Optional<A, B>,
    {
        ComposedTraversal::new(self, optional.to_traversal())
    }
}

impl<S, A, T> TraversalComposeExtension<S, A> for T where T: Traversal<S, A> {}
