//! Insertion-ordered map returned by the grouping aggregators.
//!
//! [`Grouping`] keeps keys in first-encounter order, so
//! `frequencies`/`group_by` results iterate the way the input was read.
//! Equality ignores that order: two groupings are equal when they hold the same
//! key/value pairs.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Key to value map that remembers the order keys were first inserted.
#[derive(Clone)]
pub struct Grouping<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Grouping<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Grouping<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, inserting `init()` first if the key is new.
    pub fn get_or_insert_with<F>(&mut self, key: K, init: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(key.clone(), idx);
                self.entries.push((key, init()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Drop the order and hand back a plain `HashMap`.
    pub fn into_hash_map(self) -> HashMap<K, V> {
        self.entries.into_iter().collect()
    }
}

impl<K, V> Grouping<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-encounter key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Grouping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(k, v)| {
                other
                    .index
                    .get(k)
                    .is_some_and(|&idx| other.entries[idx].1 == *v)
            })
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Grouping<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Grouping<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Serialize, V: Serialize> Serialize for Grouping<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Grouping<K, V> {
    /// Later duplicates replace earlier values in place.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut g = Self::new();
        for (k, v) in iter {
            g.insert(k, v);
        }
        g
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
