//! Ordered map type for VSV objects.
//!
//! This module provides [`VsvMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object keys. Order matters here: the
//! object builder materializes keys in the order the markup declared them,
//! and display output should read back in the same order the author wrote.
//!
//! ## Examples
//!
//! ```rust
//! use vsv::{Value, VsvMap};
//!
//! let mut map = VsvMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("role".to_string(), Value::from("admin"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to VSV values.
///
/// A thin wrapper around [`IndexMap`] that maintains insertion order, so
/// objects read back in the order the markup declared their keys.
///
/// # Examples
///
/// ```rust
/// use vsv::{Value, VsvMap};
///
/// let mut map = VsvMap::new();
/// map.insert("first".to_string(), Value::from("1"));
/// map.insert("second".to_string(), Value::from("2"));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VsvMap(IndexMap<String, crate::Value>);

impl VsvMap {
    /// Creates an empty `VsvMap`.
    #[must_use]
    pub fn new() -> Self {
        VsvMap(IndexMap::new())
    }

    /// Creates an empty `VsvMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        VsvMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for VsvMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        VsvMap(map.into_iter().collect())
    }
}

impl From<VsvMap> for HashMap<String, crate::Value> {
    fn from(map: VsvMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for VsvMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for VsvMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        VsvMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut map = VsvMap::new();
        map.insert("z".to_string(), Value::from("1"));
        map.insert("a".to_string(), Value::from("2"));
        map.insert("m".to_string(), Value::from("3"));

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_insert_replaces_without_moving() {
        let mut map = VsvMap::new();
        map.insert("a".to_string(), Value::from("old"));
        map.insert("b".to_string(), Value::from("x"));
        let previous = map.insert("a".to_string(), Value::from("new"));

        assert_eq!(previous, Some(Value::from("old")));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
