use super::ExtractPrism;
use crate::codec::{Decoder, Encoder, JsonCodec};
use crate::json::Json;
use crate::optics::{
    JsonArrayPrism, JsonEach, JsonObjectPrism, ObjectAt, ObjectIx, Prism, SharedTraversal,
    Traversal, TraversalComposeExtension, VecIx, filter_index, filter_keys,
};

/// Any number of foci inside a [`Json`] tree.
///
/// Produced by [`JsonPath::every`](super::JsonPath::every) and the filters.
/// Every step keeps the path in traversal mode: a step applied to several
/// foci applies to each of them, and foci where the step does not match
/// drop out.
///
/// # Examples
///
/// ```rust
/// use json_optics::json::Json;
/// use json_optics::optics::Traversal;
/// use json_optics::path::JsonPath;
///
/// let users = Json::array([
///     Json::object([("name", Json::from("ada")), ("age", Json::from(36))]),
///     Json::object([("name", Json::from("alan"))]),
/// ]);
///
/// let ages = JsonPath::root().every().select("age").int();
/// assert_eq!(ages.get_all(&users), vec![36]);
///
/// let names = JsonPath::root().every().select("name").string();
/// assert_eq!(names.get_all(&users), vec!["ada".to_string(), "alan".to_string()]);
/// ```
#[derive(Clone, Debug)]
pub struct JsonTraversalPath {
    json: SharedTraversal<Json, Json>,
}

impl JsonTraversalPath {
    /// Wraps an existing traversal.
    #[must_use]
    pub const fn new(json: SharedTraversal<Json, Json>) -> Self {
        Self { json }
    }

    /// Returns the traversal this path has built so far.
    #[must_use]
    pub fn traversal(&self) -> SharedTraversal<Json, Json> {
        self.json.clone()
    }

    kind_projections!(SharedTraversal);

    /// Focuses on the value under `name` of each object node.
    #[must_use]
    pub fn select(&self, name: impl Into<String>) -> Self {
        Self::new(
            self.json
                .clone()
                .compose_prism(JsonObjectPrism)
                .compose_optional(ObjectIx::new(name))
                .shared(),
        )
    }

    /// Focuses on the presence of `field` in each object node.
    #[must_use]
    pub fn at(&self, field: impl Into<String>) -> SharedTraversal<Json, Option<Json>> {
        self.json
            .clone()
            .compose_prism(JsonObjectPrism)
            .compose_lens(ObjectAt::new(field))
            .shared()
    }

    /// Focuses on element `index` of each array node.
    #[must_use]
    pub fn get(&self, index: usize) -> Self {
        Self::new(
            self.json
                .clone()
                .compose_prism(JsonArrayPrism)
                .compose_optional(VecIx::new(index))
                .shared(),
        )
    }

    /// Focuses on the children of each array or object node.
    #[must_use]
    pub fn every(&self) -> Self {
        Self::new(self.json.clone().compose(JsonEach).shared())
    }

    /// Focuses on the elements of each array node whose index satisfies
    /// `predicate`.
    #[must_use]
    pub fn filter_index<P>(&self, predicate: P) -> Self
    where
        P: Fn(usize) -> bool + Send + Sync + 'static,
    {
        Self::new(
            self.json
                .clone()
                .compose_prism(JsonArrayPrism)
                .compose(filter_index(predicate))
                .shared(),
        )
    }

    /// Focuses on the values of each object node whose key satisfies
    /// `predicate`.
    #[must_use]
    pub fn filter_keys<P>(&self, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(
            self.json
                .clone()
                .compose_prism(JsonObjectPrism)
                .compose(filter_keys(predicate))
                .shared(),
        )
    }

    /// Focuses on each node that decodes with the canonical codec of `A`.
    ///
    /// Nodes that fail to decode are skipped.
    #[must_use]
    pub fn extract<A>(&self) -> SharedTraversal<Json, A>
    where
        A: JsonCodec + Send + Sync + 'static,
    {
        self.json
            .clone()
            .compose_prism(ExtractPrism::<A, _, _>::canonical())
            .shared()
    }

    /// Focuses on each node that decodes with an explicit codec pair.
    #[must_use]
    pub fn extract_with<A, D, E>(&self, decoder: D, encoder: E) -> SharedTraversal<Json, A>
    where
        A: Send + Sync + 'static,
        D: Decoder<A> + Send + Sync + 'static,
        E: Encoder<A> + Send + Sync + 'static,
    {
        self.json
            .clone()
            .compose_prism(ExtractPrism::new(decoder, encoder))
            .shared()
    }

    /// Shorthand for `select(name).extract::<A>()`.
    #[must_use]
    pub fn select_extract<A>(&self, name: impl Into<String>) -> SharedTraversal<Json, A>
    where
        A: JsonCodec + Send + Sync + 'static,
    {
        self.select(name).extract::<A>()
    }

    /// Shorthand for `select(name).extract_with(decoder, encoder)`.
    #[must_use]
    pub fn select_extract_with<A, D, E>(
        &self,
        name: impl Into<String>,
        decoder: D,
        encoder: E,
    ) -> SharedTraversal<Json, A>
    where
        A: Send + Sync + 'static,
        D: Decoder<A> + Send + Sync + 'static,
        E: Encoder<A> + Send + Sync + 'static,
    {
        self.select(name).extract_with(decoder, encoder)
    }
}
