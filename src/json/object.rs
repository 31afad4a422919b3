//! Insertion-ordered JSON objects.

use super::Json;

/// A JSON object: string keys, unique, kept in insertion order.
///
/// Replacing the value of an existing key keeps the key where it was, so
/// optics that rewrite a field never reorder the document. Equality ignores
/// key order.
///
/// # Examples
///
/// ```
/// use json_optics::json::{Json, JsonObject};
///
/// let mut object = JsonObject::new();
/// object.insert("b", Json::from(1));
/// object.insert("a", Json::from(2));
/// object.insert("b", Json::from(3));
///
/// let keys: Vec<&str> = object.keys().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(object.get("b"), Some(&Json::from(3)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonObject {
    entries: Vec<(String, Json)>,
}

impl JsonObject {
    /// Creates an empty object.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the object has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: Json) -> Option<Json> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Json> {
        self.position(key)
            .map(|index| self.entries.remove(index).1)
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Json> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Json)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Rebuilds the object by applying `function` to every entry.
    ///
    /// Keys and their order are preserved.
    #[must_use]
    pub fn map_entries<F>(self, mut function: F) -> Self
    where
        F: FnMut(&str, Json) -> Json,
    {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| {
                    let value = function(&key, value);
                    (key, value)
                })
                .collect(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(candidate, _)| candidate == key)
    }
}

impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Into<String>> FromIterator<(K, Json)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, Json)>>(iterable: I) -> Self {
        let mut object = Self::new();
        for (key, value) in iterable {
            object.insert(key, value);
        }
        object
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Json);
    type IntoIter = std::vec::IntoIter<(String, Json)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
