//! Tests for the single-lock concurrent wrapper.
//!
//! These verify that every call observes a consistent cache under contention,
//! and that compound updates run under `with_lock` are not interleaved.

#![cfg(feature = "concurrent")]

use recency_cache::config::LruCacheConfig;
use recency_cache::{ConcurrentLruCache, Key};
use scoped_threadpool::Pool;
use std::num::NonZeroUsize;

const NUM_THREADS: u32 = 8;
const OPS_PER_THREAD: i32 = 5_000;

fn make_concurrent(cap: usize) -> ConcurrentLruCache {
    ConcurrentLruCache::init(LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    })
}

#[test]
fn test_concurrent_capacity_holds_under_contention() {
    let cache = make_concurrent(64);
    let mut pool = Pool::new(NUM_THREADS);

    pool.scoped(|scope| {
        for t in 0..NUM_THREADS as i32 {
            let cache = &cache;
            scope.execute(move || {
                for i in 0..OPS_PER_THREAD {
                    let key: Key = (t * 31 + i) % 200;
                    if i % 3 == 0 {
                        let _ = cache.get(key);
                    } else {
                        cache.put(key, t);
                    }
                    assert!(cache.len() <= 64);
                }
            });
        }
    });

    assert_eq!(cache.len(), 64);
    cache.with_lock(|inner| {
        assert_eq!(inner.iter().count(), 64);
        for (key, value) in inner.iter() {
            assert!((0..200).contains(&key));
            assert!((0..NUM_THREADS as i32).contains(&value));
        }
    });
}

#[test]
fn test_concurrent_disjoint_writers_all_fit() {
    let cache = make_concurrent(NUM_THREADS as usize * 100);
    let mut pool = Pool::new(NUM_THREADS);

    pool.scoped(|scope| {
        for t in 0..NUM_THREADS as i32 {
            let cache = &cache;
            scope.execute(move || {
                for i in 0..100 {
                    cache.put(t * 1000 + i, i);
                }
            });
        }
    });

    assert_eq!(cache.len(), NUM_THREADS as usize * 100);
    for t in 0..NUM_THREADS as i32 {
        for i in 0..100 {
            assert_eq!(cache.peek(t * 1000 + i), Some(i));
        }
    }
}

#[test]
fn test_concurrent_with_lock_counter() {
    let cache = make_concurrent(1);
    cache.put(7, 0);
    let mut pool = Pool::new(NUM_THREADS);

    pool.scoped(|scope| {
        for _ in 0..NUM_THREADS {
            let cache = &cache;
            scope.execute(move || {
                for _ in 0..1_000 {
                    cache.with_lock(|inner| {
                        let next = inner.get(7).unwrap_or(0) + 1;
                        inner.put(7, next);
                    });
                }
            });
        }
    });

    assert_eq!(cache.get(7), Some(NUM_THREADS as i32 * 1_000));
}

#[test]
fn test_concurrent_debug_output() {
    let cache = make_concurrent(4);
    cache.put(1, 1);
    let rendered = format!("{:?}", cache);
    assert!(rendered.contains("ConcurrentLruCache"));
    assert!(rendered.contains("len: 1"));
}
