//! Shares one cache between worker threads through the single-lock wrapper.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

use recency_cache::{CacheError, ConcurrentLruCache};
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), CacheError> {
    let cache = Arc::new(ConcurrentLruCache::new(100)?);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..50 {
                    cache.put(t * 100 + i, i);
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker thread panicked");
        }
    }

    println!("entries after 200 puts into capacity 100: {}", cache.len());

    let hits = cache.with_lock(|inner| inner.iter().filter(|&(_, v)| v >= 25).count());
    println!("entries with value >= 25: {}", hits);

    Ok(())
}
