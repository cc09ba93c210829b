//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a fixed-capacity LRU cache over integer keys and values
//! with O(1) average-time lookups, insertions, and evictions.
//!
//! # Algorithm
//!
//! The cache pairs two structures:
//!
//! - an **index** (`HashMap<Key, Slot>`) that finds an entry's node in O(1),
//! - a **recency list** that orders nodes from most recently used (front) to
//!   least recently used (back).
//!
//! Every hit and every write moves the touched node to the front. When an
//! insertion pushes the entry count past capacity, the node at the back is
//! unlinked, its index entry is erased, and its slot is released.
//!
//! The recency list is an arena of nodes linked by slot index rather than by
//! pointer, with head and tail sentinels at fixed slots. Released slots are
//! recycled, so a cache that is already full does not allocate on eviction.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!   - Clear / Iterate: O(n)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, serialize
//! every call through a single lock, or enable the `concurrent` feature and use
//! [`ConcurrentLruCache`](crate::ConcurrentLruCache).

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::list::{self, List, Slot};
use crate::{Key, Value};
use core::fmt;
use core::num::NonZeroUsize;
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on the number of slots reserved up front. Larger caches grow
/// their arena and index on demand until they reach capacity.
const MAX_PREALLOCATED: usize = 4096;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches capacity,
/// the least recently used entry will be evicted to make room for new entries.
///
/// # Examples
///
/// ```
/// use recency_cache::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.put(1, 1);
/// cache.put(2, 2);
///
/// // Accessing an entry makes it the most recently used one
/// assert_eq!(cache.get(1), Some(1));
///
/// // Adding beyond capacity evicts the least recently used entry
/// cache.put(3, 3);
/// assert_eq!(cache.get(2), None);
/// assert_eq!(cache.get(1), Some(1));
/// assert_eq!(cache.get(3), Some(3));
/// ```
pub struct LruCache {
    config: LruCacheConfig,
    list: List,
    map: HashMap<Key, Slot>,
}

impl LruCache {
    /// Creates a cache that holds at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`](crate::CacheError::InvalidConfiguration)
    /// if `capacity` is zero or negative.
    ///
    /// ```
    /// use recency_cache::{CacheError, LruCache};
    ///
    /// assert!(LruCache::new(16).is_ok());
    /// assert_eq!(
    ///     LruCache::new(0).unwrap_err(),
    ///     CacheError::InvalidConfiguration { capacity: 0 }
    /// );
    /// ```
    pub fn new(capacity: i64) -> Result<LruCache> {
        let config = LruCacheConfig::try_new(capacity)?;
        Ok(LruCache::init(config))
    }

    /// Creates a cache from an already validated configuration.
    pub fn init(config: LruCacheConfig) -> LruCache {
        let reserved = config.capacity.get().min(MAX_PREALLOCATED);
        debug!(capacity = config.capacity.get(), "creating lru cache");
        LruCache {
            config,
            list: List::with_capacity(reserved),
            map: HashMap::with_capacity(reserved),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Returns the number of entries currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the value for `key` and marks it as the most recently used
    /// entry, or `None` if the key is not cached.
    ///
    /// A miss leaves the cache untouched.
    pub fn get(&mut self, key: Key) -> Option<Value> {
        let slot = self.map.get(&key).copied()?;
        self.list.move_to_front(slot);
        Some(self.list.value(slot))
    }

    /// Returns a mutable reference to the value for `key`, marking it as the
    /// most recently used entry.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut Value> {
        let slot = self.map.get(&key).copied()?;
        self.list.move_to_front(slot);
        Some(self.list.value_mut(slot))
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek(&self, key: Key) -> Option<Value> {
        self.map.get(&key).map(|&slot| self.list.value(slot))
    }

    /// Returns true if `key` is cached. Does not change recency.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.map.contains_key(&key)
    }

    /// Stores `value` under `key` and marks it as the most recently used entry.
    ///
    /// If the key is already cached its value is overwritten and nothing is
    /// evicted. Otherwise a new entry is inserted, and if that takes the cache
    /// past its capacity the least recently used entry is evicted.
    pub fn put(&mut self, key: Key, value: Value) {
        if let Some(&slot) = self.map.get(&key) {
            *self.list.value_mut(slot) = value;
            self.list.move_to_front(slot);
            return;
        }

        let slot = self.list.push_front(key, value);
        self.map.insert(key, slot);

        if self.map.len() > self.cap().get() {
            self.remove_tail();
        }
    }

    /// Removes `key` from the cache and returns its value.
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        let slot = self.map.remove(&key)?;
        let (_, value) = self.list.remove(slot);
        trace!(key, value, "removed cache entry");
        Some(value)
    }

    /// Returns the entry that would be evicted next, without touching it.
    pub fn peek_lru(&self) -> Option<(Key, Value)> {
        self.list.back().map(|slot| self.list.entry(slot))
    }

    /// Returns the most recently used entry, without touching it.
    pub fn peek_mru(&self) -> Option<(Key, Value)> {
        self.list.front().map(|slot| self.list.entry(slot))
    }

    /// Evicts the least recently used entry and returns it.
    pub fn pop_lru(&mut self) -> Option<(Key, Value)> {
        let (key, value) = self.list.pop_back()?;
        self.map.remove(&key);
        Some((key, value))
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        debug!(dropped = self.map.len(), "clearing lru cache");
        self.map.clear();
        self.list.clear();
    }

    /// Iterates over cached entries from most to least recently used.
    ///
    /// Iteration does not change recency.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.list.iter(),
        }
    }

    fn remove_tail(&mut self) {
        if let Some((key, value)) = self.list.pop_back() {
            self.map.remove(&key);
            trace!(key, value, "evicted least recently used entry");
        }
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        self.list.assert_consistent();
        assert_eq!(self.map.len(), self.list.len());
        assert!(self.map.len() <= self.cap().get());
        for (key, _) in self.list.iter() {
            let slot = self.map[&key];
            assert_eq!(self.list.entry(slot).0, key);
        }
    }
}

impl fmt::Debug for LruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// Iterator over the entries of an [`LruCache`], most recently used first.
///
/// Created by [`LruCache::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: list::Iter<'a>,
}

impl Iterator for Iter<'_> {
    type Item = (Key, Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LruCache {
    type Item = (Key, Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
