//! Walks through the basic cache operations and shows which key each
//! overflow evicts.
//!
//! Run with: cargo run --example lru_usage

use recency_cache::{CacheError, LruCache};

fn main() -> Result<(), CacheError> {
    let mut cache = LruCache::new(2)?;

    cache.put(1, 1);
    cache.put(2, 2);
    println!("get(1) = {:?}", cache.get(1));

    println!("next eviction candidate: {:?}", cache.peek_lru());
    cache.put(3, 3);
    println!("after put(3, 3): get(2) = {:?}", cache.get(2));
    println!("after put(3, 3): get(3) = {:?}", cache.get(3));

    cache.put(1, 10);
    cache.put(4, 4);
    println!("after put(1, 10), put(4, 4):");
    for (key, value) in &cache {
        println!("  {} => {}", key, value);
    }

    match LruCache::new(0) {
        Ok(_) => println!("unexpected: zero capacity accepted"),
        Err(err) => println!("LruCache::new(0) failed: {}", err),
    }

    Ok(())
}
