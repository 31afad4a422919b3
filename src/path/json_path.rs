use super::{ExtractPrism, JsonTraversalPath};
use crate::codec::{Decoder, Encoder, JsonCodec};
use crate::json::Json;
use crate::optics::{
    IdentityLens, JsonArrayPrism, JsonEach, JsonObjectPrism, Lens, ObjectAt, ObjectIx, Optional,
    OptionalComposeExtension, Prism, SharedOptional, Traversal, VecIx, filter_index, filter_keys,
};

/// A single focus inside a [`Json`] tree.
///
/// # Examples
///
/// ```rust
/// use json_optics::json::Json;
/// use json_optics::optics::Optional;
/// use json_optics::path::JsonPath;
///
/// let document = Json::object([("user", Json::object([("name", Json::from("ada"))]))]);
/// let name = JsonPath::root().select("user").select("name").string();
///
/// let renamed = name.modify(document, |name| name.to_uppercase());
/// assert_eq!(name.get_option(&renamed), Some("ADA".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct JsonPath {
    json: SharedOptional<Json, Json>,
}

impl JsonPath {
    /// The path that focuses on the whole document.
    #[must_use]
    pub fn root() -> Self {
        Self::new(IdentityLens::<Json>::new().to_optional().shared())
    }

    /// Wraps an existing focus.
    #[must_use]
    pub const fn new(json: SharedOptional<Json, Json>) -> Self {
        Self { json }
    }

    /// Returns the focus this path has built so far.
    #[must_use]
    pub fn optional(&self) -> SharedOptional<Json, Json> {
        self.json.clone()
    }

    kind_projections!(SharedOptional);

    /// Focuses on the value under `name` of an object node.
    ///
    /// Absent when the node is not an object or has no such key. Setting an
    /// absent key does nothing; use [`at`](Self::at) to insert.
    #[must_use]
    pub fn select(&self, name: impl Into<String>) -> Self {
        Self::new(
            self.json
                .clone()
                .compose_prism(JsonObjectPrism)
                .compose(ObjectIx::new(name))
                .shared(),
        )
    }

    /// Focuses on the presence of `field` in an object node.
    ///
    /// Unlike [`select`](Self::select), a missing key is an observable
    /// `None`, distinct from a key holding `null`. Setting `Some` inserts or
    /// replaces the key and setting `None` removes it.
    ///
    /// ```rust
    /// use json_optics::json::Json;
    /// use json_optics::optics::Optional;
    /// use json_optics::path::JsonPath;
    ///
    /// let document = Json::object([("a", Json::Null)]);
    /// let at_a = JsonPath::root().at("a");
    /// let at_b = JsonPath::root().at("b");
    ///
    /// assert_eq!(at_a.get_option(&document), Some(Some(Json::Null)));
    /// assert_eq!(at_b.get_option(&document), Some(None));
    ///
    /// let inserted = at_b.set(document, Some(Json::from(1)));
    /// assert_eq!(inserted, Json::object([("a", Json::Null), ("b", Json::from(1))]));
    /// ```
    #[must_use]
    pub fn at(&self, field: impl Into<String>) -> SharedOptional<Json, Option<Json>> {
        self.json
            .clone()
            .compose_prism(JsonObjectPrism)
            .compose_lens(ObjectAt::new(field))
            .shared()
    }

    /// Focuses on element `index` of an array node.
    ///
    /// Absent when the node is not an array or the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Self {
        Self::new(
            self.json
                .clone()
                .compose_prism(JsonArrayPrism)
                .compose(VecIx::new(index))
                .shared(),
        )
    }

    /// Focuses on every element of an array node or every value of an
    /// object node.
    #[must_use]
    pub fn every(&self) -> JsonTraversalPath {
        JsonTraversalPath::new(self.json.clone().compose_traversal(JsonEach).shared())
    }

    /// Focuses on the elements of an array node whose index satisfies
    /// `predicate`.
    #[must_use]
    pub fn filter_index<P>(&self, predicate: P) -> JsonTraversalPath
    where
        P: Fn(usize) -> bool + Send + Sync + 'static,
    {
        JsonTraversalPath::new(
            self.json
                .clone()
                .compose_prism(JsonArrayPrism)
                .compose_traversal(filter_index(predicate))
                .shared(),
        )
    }

    /// Focuses on the values of an object node whose key satisfies
    /// `predicate`.
    #[must_use]
    pub fn filter_keys<P>(&self, predicate: P) -> JsonTraversalPath
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        JsonTraversalPath::new(
            self.json
                .clone()
                .compose_prism(JsonObjectPrism)
                .compose_traversal(filter_keys(predicate))
                .shared(),
        )
    }

    /// Focuses on the node decoded with the canonical codec of `A`.
    ///
    /// Absent when decoding fails.
    ///
    /// ```rust
    /// use json_optics::json::Json;
    /// use json_optics::optics::Optional;
    /// use json_optics::path::JsonPath;
    ///
    /// let pair = JsonPath::root().extract::<(i32, String)>();
    /// let json = Json::array([Json::from(10), Json::from("y")]);
    ///
    /// assert_eq!(pair.get_option(&json), Some((10, "y".to_string())));
    /// assert_eq!(pair.get_option(&Json::from(10)), None);
    /// ```
    #[must_use]
    pub fn extract<A>(&self) -> SharedOptional<Json, A>
    where
        A: JsonCodec + Send + Sync + 'static,
    {
        self.json
            .clone()
            .compose_prism(ExtractPrism::<A, _, _>::canonical())
            .shared()
    }

    /// Focuses on the node decoded with an explicit codec pair.
    #[must_use]
    pub fn extract_with<A, D, E>(&self, decoder: D, encoder: E) -> SharedOptional<Json, A>
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
    pub fn select_extract<A>(&self, name: impl Into<String>) -> SharedOptional<Json, A>
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
    ) -> SharedOptional<Json, A>
    where
        A: Send + Sync + 'static,
        D: Decoder<A> + Send + Sync + 'static,
        E: Encoder<A> + Send + Sync + 'static,
    {
        self.select(name).extract_with(decoder, encoder)
    }
}

impl Default for JsonPath {
    fn default() -> Self {
        Self::root()
    }
}
