//! Ordered map kept as a sorted `GrowArray` of entries.

use core::fmt;
use core::mem;

use growarray::GrowArray;

use crate::error::{Error, Result};

/// Less-than predicate on keys. Two keys are equal when neither is less.
pub type KeyLess<K> = fn(&K, &K) -> bool;

fn ord_less<K: Ord>(a: &K, b: &K) -> bool {
    a < b
}

/// Map with binary-search lookup and O(n) insertion and removal.
pub struct ArrayMap<K, V> {
    entries: GrowArray<(K, V)>,
    less: KeyLess<K>,
}

impl<K: Ord, V> ArrayMap<K, V> {
    /// Creates an empty map ordered by `Ord`.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the initial reservation fails.
    pub fn new() -> Result<Self> {
        Self::with_less(ord_less::<K>)
    }
}

impl<K, V> ArrayMap<K, V> {
    /// Creates an empty map ordered by a custom key predicate.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the initial reservation fails.
    pub fn with_less(less: KeyLess<K>) -> Result<Self> {
        Ok(Self {
            entries: GrowArray::new()?,
            less,
        })
    }

    /// `Ok(index)` of the entry for `key`, or `Err(index)` where it would go.
    fn search(&self, key: &K) -> core::result::Result<usize, usize> {
        let less = self.less;
        let entries = self.entries.as_slice();
        let index = entries.partition_point(|(candidate, _)| less(candidate, key));
        match entries.get(index) {
            Some((candidate, _)) if !less(key, candidate) => Ok(index),
            _ => Err(index),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::AlreadyExists` if `key` is present (the map is
    /// unchanged), or `BadAlloc`/`Overflow` if the map cannot grow.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        match self.search(&key) {
            Ok(_) => Err(Error::AlreadyExists),
            Err(index) => Ok(self.entries.insert(index, (key, value))?),
        }
    }

    /// Inserts or overwrites the entry for `key`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` or `Overflow` if a new entry cannot be stored.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<Option<V>> {
        match self.search(&key) {
            Ok(index) => Ok(Some(mem::replace(
                &mut self.entries.get_mut(index).1,
                value,
            ))),
            Err(index) => {
                self.entries.insert(index, (key, value))?;
                Ok(None)
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.search(key).ok()?;
        Some(&self.entries.get(index).1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.search(key).ok()?;
        Some(&mut self.entries.get_mut(index).1)
    }

    /// Looks up the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if `key` is absent.
    pub fn find(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::NotFound)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if `key` is absent.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let index = self.search(key).map_err(|_| Error::NotFound)?;
        Ok(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.entries.swap(&mut other.entries);
        mem::swap(&mut self.less, &mut other.less);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
