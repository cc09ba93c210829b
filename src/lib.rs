//! # recency-cache
//!
//! A fixed-capacity key-value cache with least-recently-used (LRU) eviction.
//! Lookups, insertions and evictions are O(1) on average.
//!
//! Keys and values are 32-bit signed integers ([`Key`] and [`Value`]).
//!
//! ## How it works
//!
//! ```text
//!   index: HashMap<Key, Slot>
//!        │        │        │
//!        ▼        ▼        ▼
//!  ┌──────┐   ┌──────┐   ┌──────┐   ┌──────┐   ┌──────┐
//!  │ HEAD │ ⇄ │ MRU  │ ⇄ │ ...  │ ⇄ │ LRU  │ ⇄ │ TAIL │
//!  └──────┘   └──────┘   └──────┘   └──────┘   └──────┘
//!  slot 0                                       slot 1
//! ```
//!
//! The index maps a key to the arena slot of its node. The recency list links
//! nodes by slot between two sentinels. A hit or a write moves the node to the
//! front; an insertion past capacity evicts the node just before `TAIL`.
//!
//! ## Example
//!
//! ```rust
//! use recency_cache::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put(1, 1);
//! cache.put(2, 2);
//! cache.get(1);      // 1 becomes most recently used
//! cache.put(3, 3);   // 2 evicted (least recently used)
//! assert!(cache.get(2).is_none());
//! assert_eq!(cache.get(3), Some(3));
//! ```
//!
//! A capacity of zero or less is rejected:
//!
//! ```rust
//! use recency_cache::{CacheError, LruCache};
//!
//! assert_eq!(
//!     LruCache::new(-1).unwrap_err(),
//!     CacheError::InvalidConfiguration { capacity: -1 }
//! );
//! ```
//!
//! ## Features
//!
//! - `hashbrown` (default): use `hashbrown` for the index. Without it the
//!   index falls back to `std::collections::HashMap`.
//! - `std`: implement `std::error::Error` for [`CacheError`].
//! - `concurrent`: [`ConcurrentLruCache`], a cache behind a single lock.
//!
//! ## Modules
//!
//! - [`lru`]: the LRU cache
//! - [`config`]: construction parameters
//! - [`error`]: construction errors
//! - [`concurrent`]: single-lock wrapper (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Key type stored in the cache.
pub type Key = i32;

/// Value type stored in the cache.
pub type Value = i32;

/// Doubly linked recency list over an index-addressed arena.
///
/// Internal infrastructure for [`LruCache`]; not part of the public API.
pub(crate) mod list;

/// Cache configuration.
pub mod config;

/// Construction errors.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entry when
/// the capacity is exceeded.
pub mod lru;

/// Thread-safe wrapper that serializes every call through one lock.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LruCacheConfig;
pub use error::{CacheError, Result};
pub use lru::LruCache;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
