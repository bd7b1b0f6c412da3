//! Insertion-ordered map used for object values.
//!
//! [`KeyMap`] wraps an [`IndexMap`] so that iteration follows insertion
//! order. Key mapping depends on this: entries are visited in the order they
//! were written, which makes the outcome of a key collision deterministic
//! (the entry visited last wins).
//!
//! ## Examples
//!
//! ```rust
//! use fastcase::{KeyMap, Value};
//!
//! let mut map = KeyMap::new();
//! map.insert("user_id".to_string(), Value::from(7));
//! map.insert("display_name".to_string(), Value::from("Ada"));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["user_id", "display_name"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyMap(IndexMap<String, Value>);

impl KeyMap {
    /// Creates an empty `KeyMap`.
    #[must_use]
    pub fn new() -> Self {
        KeyMap(IndexMap::new())
    }

    /// Creates an empty `KeyMap` with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its value is replaced in place, keeping
    /// the original position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastcase::{KeyMap, Value};
    ///
    /// let mut map = KeyMap::new();
    /// map.insert("a".to_string(), Value::from(1));
    /// map.insert("b".to_string(), Value::from(2));
    /// assert_eq!(map.insert("a".to_string(), Value::from(3)), Some(Value::from(1)));
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map holds an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for KeyMap {
    fn from(map: HashMap<String, Value>) -> Self {
        KeyMap(map.into_iter().collect())
    }
}

impl From<KeyMap> for HashMap<String, Value> {
    fn from(map: KeyMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for KeyMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for KeyMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        KeyMap(IndexMap::from_iter(iter))
    }
}
