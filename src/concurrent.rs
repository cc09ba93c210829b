//! Concurrent Cache Wrapper
//!
//! [`LruCache`] needs `&mut self` for every read because a hit reorders the
//! recency list. When several threads share a cache, each call has to run
//! under one exclusive lock held for the whole call. [`ConcurrentLruCache`]
//! packages exactly that: a single `parking_lot::Mutex` around an
//! [`LruCache`].
//!
//! There is no lock striping and no reader/writer split. Every operation is a
//! short, bounded computation, so one coarse lock is sufficient.
//!
//! # Example
//!
//! ```rust
//! use recency_cache::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(1000).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let key = t * 1000 + i;
//!                 cache.put(key, i);
//!                 assert!(cache.len() <= 1000);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use crate::{Key, Value};
use core::fmt;
use core::num::NonZeroUsize;
use parking_lot::Mutex;

/// A thread-safe LRU cache that serializes every call through one lock.
///
/// All methods take `&self`, so the cache can be shared behind an `Arc`.
/// Values are returned by copy; nothing borrowed from the cache escapes the
/// lock.
pub struct ConcurrentLruCache {
    inner: Mutex<LruCache>,
}

impl ConcurrentLruCache {
    /// Creates a cache that holds at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`](crate::CacheError::InvalidConfiguration)
    /// if `capacity` is zero or negative.
    pub fn new(capacity: i64) -> Result<Self> {
        Ok(Self::from(LruCache::new(capacity)?))
    }

    /// Creates a cache from an already validated configuration.
    pub fn init(config: LruCacheConfig) -> Self {
        Self::from(LruCache::init(config))
    }

    /// Returns the maximum number of entries the cache can hold.
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.lock().cap()
    }

    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Looks up `key` and marks it as the most recently used entry.
    pub fn get(&self, key: Key) -> Option<Value> {
        self.inner.lock().get(key)
    }

    /// Looks up `key` without changing its recency.
    pub fn peek(&self, key: Key) -> Option<Value> {
        self.inner.lock().peek(key)
    }

    /// Returns true if `key` is cached.
    pub fn contains(&self, key: Key) -> bool {
        self.inner.lock().contains(key)
    }

    /// Stores `value` under `key`, evicting the least recently used entry if
    /// the cache is full.
    pub fn put(&self, key: Key, value: Value) {
        self.inner.lock().put(key, value);
    }

    /// Removes `key` and returns its value.
    pub fn remove(&self, key: Key) -> Option<Value> {
        self.inner.lock().remove(key)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs `f` with exclusive access to the underlying cache.
    ///
    /// The lock is held until `f` returns, so a read-modify-write sequence
    /// inside `f` cannot interleave with other callers.
    ///
    /// ```rust
    /// use recency_cache::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(8).unwrap();
    /// cache.put(1, 41);
    /// let updated = cache.with_lock(|cache| {
    ///     let next = cache.get(1).unwrap_or(0) + 1;
    ///     cache.put(1, next);
    ///     next
    /// });
    /// assert_eq!(updated, 42);
    /// ```
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut LruCache) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Consumes the wrapper and returns the inner cache.
    pub fn into_inner(self) -> LruCache {
        self.inner.into_inner()
    }
}

impl From<LruCache> for ConcurrentLruCache {
    fn from(cache: LruCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }
}

impl fmt::Debug for ConcurrentLruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentLruCache")
                .field("capacity", &cache.cap())
                .field("len", &cache.len())
                .finish(),
            None => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
