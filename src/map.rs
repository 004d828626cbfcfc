//! Ordered map type for TOB associative arrays.
//!
//! This module provides [`TobMap`], a wrapper around [`BTreeMap`] keyed by
//! [`TobValue`] using the total order defined over values. Keys of different
//! tags order by tag group (null first, then the numeric group, the string
//! kinds, arrays, maps), so a map may freely mix key types while staying
//! deterministic.
//!
//! Keys are unique: inserting an existing key overwrites the associated
//! value in place.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tob::{TobMap, TobValue};
//!
//! let mut map = TobMap::new();
//! map.insert(TobValue::from("name"), TobValue::from("Alice"));
//! map.insert(TobValue::from("age"), TobValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(
//!     map.get(&TobValue::from("name")).and_then(|v| v.as_str()),
//!     Some("Alice")
//! );
//! ```

use crate::value::TobValue;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// An ordered map of TOB keys to TOB values.
///
/// Iteration follows the total order over keys, which makes encoding output
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TobMap(BTreeMap<TobValue, TobValue>);

impl TobMap {
    /// Creates an empty `TobMap`.
    #[must_use]
    pub fn new() -> Self {
        TobMap(BTreeMap::new())
    }

    /// Inserts a key-value pair, returning the previous value for the key if
    /// one existed. Duplicate keys never create a second entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tob::{TobMap, TobValue};
    ///
    /// let mut map = TobMap::new();
    /// assert!(map.insert(TobValue::from("k"), TobValue::from(1)).is_none());
    /// assert!(map.insert(TobValue::from("k"), TobValue::from(2)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: TobValue, value: TobValue) -> Option<TobValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for `key`.
    #[must_use]
    pub fn get(&self, key: &TobValue) -> Option<&TobValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &TobValue) -> Option<&mut TobValue> {
        self.0.get_mut(key)
    }

    /// Returns a mutable reference to the value for `key`, inserting a null
    /// value first if the key is absent.
    pub fn get_or_insert_null(&mut self, key: TobValue) -> &mut TobValue {
        self.0.entry(key).or_insert(TobValue::Null)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &TobValue) -> Option<TobValue> {
        self.0.remove(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &TobValue) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the keys, in key order.
    pub fn keys(&self) -> btree_map::Keys<'_, TobValue, TobValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in key order.
    pub fn values(&self) -> btree_map::Values<'_, TobValue, TobValue> {
        self.0.values()
    }

    /// Returns a mutable iterator over the values, in key order.
    pub fn values_mut(&mut self) -> btree_map::ValuesMut<'_, TobValue, TobValue> {
        self.0.values_mut()
    }

    /// Returns an iterator over the entries, in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, TobValue, TobValue> {
        self.0.iter()
    }
}

impl IntoIterator for TobMap {
    type Item = (TobValue, TobValue);
    type IntoIter = btree_map::IntoIter<TobValue, TobValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TobMap {
    type Item = (&'a TobValue, &'a TobValue);
    type IntoIter = btree_map::Iter<'a, TobValue, TobValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(TobValue, TobValue)> for TobMap {
    fn from_iter<T: IntoIterator<Item = (TobValue, TobValue)>>(iter: T) -> Self {
        TobMap(BTreeMap::from_iter(iter))
    }
}

impl Extend<(TobValue, TobValue)> for TobMap {
    fn extend<T: IntoIterator<Item = (TobValue, TobValue)>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_semantics() {
        let mut map = TobMap::new();
        map.insert(TobValue::from("a"), TobValue::from(1));
        let old = map.insert(TobValue::from("a"), TobValue::from(2));
        assert_eq!(old, Some(TobValue::from(1)));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&TobValue::from("a")), Some(&TobValue::from(2)));
    }

    #[test]
    fn test_key_ordering() {
        let mut map = TobMap::new();
        map.insert(TobValue::from("bravo"), TobValue::from(2));
        map.insert(TobValue::from("alpha"), TobValue::from(1));
        map.insert(TobValue::Null, TobValue::from(0));
        let keys: Vec<_> = map.keys().cloned().collect();
        // null sorts before every other tag
        assert_eq!(
            keys,
            vec![
                TobValue::Null,
                TobValue::from("alpha"),
                TobValue::from("bravo")
            ]
        );
    }

    #[test]
    fn test_mixed_key_tags() {
        let mut map = TobMap::new();
        map.insert(TobValue::from(2), TobValue::from("two"));
        map.insert(TobValue::from("2"), TobValue::from("string two"));
        assert_eq!(map.len(), 2);
        assert!(map.contains_key(&TobValue::from(2)));
        assert!(map.contains_key(&TobValue::from("2")));
    }
}
