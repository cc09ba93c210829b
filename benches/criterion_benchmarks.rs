use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recency_cache::config::LruCacheConfig;
use recency_cache::{Key, LruCache};
use std::num::NonZeroUsize;

fn make_lru(cap: usize) -> LruCache {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: Key = 1000;
    let mut group = c.benchmark_group("Cache Operations");

    let mut cache = make_lru(CACHE_SIZE as usize);
    for i in 0..CACHE_SIZE {
        cache.put(i, i);
    }

    group.bench_function("LRU get hit", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(cache.get(i % CACHE_SIZE));
            }
        });
    });

    group.bench_function("LRU get miss", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(cache.get(i + CACHE_SIZE));
            }
        });
    });

    group.bench_function("LRU put existing", |b| {
        b.iter(|| {
            for i in 0..100 {
                cache.put(black_box(i % CACHE_SIZE), i);
            }
        });
    });

    group.bench_function("LRU put evicting", |b| {
        let mut next = CACHE_SIZE;
        b.iter(|| {
            for _ in 0..100 {
                cache.put(black_box(next), next);
                next = next.wrapping_add(1);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
