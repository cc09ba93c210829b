//! Cache Configuration
//!
//! Construction parameters for [`LruCache`](crate::LruCache).
//!
//! The capacity is stored as a [`NonZeroUsize`], so a config value that exists
//! is always valid. Untrusted integers go through [`LruCacheConfig::try_new`]
//! (or `TryFrom<i64>`), which rejects zero and negative capacities with
//! [`CacheError::InvalidConfiguration`].
//!
//! # Examples
//!
//! ```
//! use recency_cache::config::LruCacheConfig;
//! use recency_cache::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Known-good capacity: build the config directly.
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache = LruCache::init(config);
//! assert_eq!(cache.cap().get(), 1000);
//!
//! // Capacity from an untrusted source: validate it.
//! assert!(LruCacheConfig::try_new(0).is_err());
//! assert!(LruCacheConfig::try_new(-5).is_err());
//! ```

use crate::error::{CacheError, Result};
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// - `capacity`: Maximum number of entries the cache can hold. Fixed for the
///   lifetime of the cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Validates `capacity` and builds a config from it.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if `capacity` is zero,
    /// negative, or does not fit in `usize` on this platform.
    pub fn try_new(capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(CacheError::InvalidConfiguration { capacity })?;
        Ok(Self { capacity })
    }
}

impl TryFrom<i64> for LruCacheConfig {
    type Error = CacheError;

    fn try_from(capacity: i64) -> Result<Self> {
        Self::try_new(capacity)
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
