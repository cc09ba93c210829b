#![no_std]
extern crate alloc;
extern crate recency_cache;

use alloc::format;
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use recency_cache::config::LruCacheConfig;
use recency_cache::{CacheError, LruCache};

fn make_lru(cap: usize) -> LruCache {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    cache.put(1, 1);
    cache.put(2, 2);

    assert_eq!(cache.get(1), Some(1));
    assert_eq!(cache.get(2), Some(2));

    // This should evict key 1
    cache.put(3, 3);

    assert!(cache.get(1).is_none());
    assert_eq!(cache.get(2), Some(2));
    assert_eq!(cache.get(3), Some(3));
}

#[test]
fn test_lru_iter_in_no_std() {
    let mut cache = make_lru(3);
    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);
    cache.get(1);

    let entries: Vec<_> = cache.iter().collect();
    assert_eq!(entries.as_slice(), &[(1, 10), (3, 30), (2, 20)]);
}

#[test]
fn test_error_display_in_no_std() {
    let err = LruCache::new(0).unwrap_err();
    assert_eq!(err, CacheError::InvalidConfiguration { capacity: 0 });
    let message = format!("{}", err);
    assert!(message.contains("got 0"));
}
