//! Correctness Tests for the LRU Cache
//!
//! Validates eviction order and counter accounting with small caches and
//! deterministic access patterns, then cross-checks a long pseudo-random
//! operation sequence against a straightforward reference model.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Explicit checks for which key was evicted after each insert
//! - Structural invariants checked after every operation of the model run

use lruc::config::LruCacheConfig;
use lruc::LruCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::num::NonZeroUsize;

// ============================================================================
// HELPERS
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

fn keys(cache: &LruCache<i32, i32>) -> Vec<i32> {
    cache.iter().map(|(k, _)| *k).collect()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_third_insert_evicts_oldest() {
    let mut cache = make_lru(2);
    cache.insert(1, 1);
    cache.insert(2, 2);
    cache.insert(3, 3);

    assert!(!cache.contains(&1));
    assert!(cache.contains(&2));
    assert!(cache.contains(&3));
    assert_eq!(cache.evict_count(), 1);
}

#[test]
fn test_find_protects_from_eviction() {
    let mut cache = make_lru(2);
    cache.insert(1, 1);
    cache.insert(2, 2);
    assert!(cache.find(&1).is_some());
    cache.insert(3, 3);

    assert!(!cache.contains(&2));
    assert!(cache.contains(&1));
    assert!(cache.contains(&3));
}

#[test]
fn test_overwrite_is_not_eviction() {
    let mut cache = make_lru(1);
    cache.insert(1, 3);
    cache.insert(1, 7);

    assert_eq!(cache.size(), 1);
    assert_eq!(cache.find(&1).map(|(_, v)| *v), Some(7));
    assert_eq!(cache.insert_count(), 2);
    assert_eq!(cache.evict_count(), 0);
}

#[test]
fn test_clear_counts_every_entry() {
    let mut cache = make_lru(3);
    cache.insert(1, 1);
    cache.insert(2, 2);
    cache.insert(3, 3);
    cache.clear();

    assert!(cache.empty());
    assert_eq!(cache.evict_count(), 3);
}

#[test]
fn test_find_on_empty_cache() {
    let mut cache: LruCache<i32, i32> = make_lru(2);
    assert_eq!(cache.find(&99), None);
    assert_eq!(cache.miss_count(), 1);
    assert_eq!(cache.hit_count(), 0);
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[test]
fn test_capacity_one_always_evicts() {
    let mut cache = make_lru(1);
    for i in 0..10 {
        let evicted = cache.insert(i, i * 10);
        if i == 0 {
            assert_eq!(evicted, None);
        } else {
            assert_eq!(evicted, Some((i - 1, (i - 1) * 10)));
        }
        assert_eq!(cache.size(), 1);
    }
    assert_eq!(cache.evict_count(), 9);
}

#[test]
fn test_erase_absent_changes_nothing() {
    let mut cache = make_lru(2);
    cache.insert(1, 1);
    cache.find(&1);
    cache.find(&5);
    let before = cache.core_metrics().clone();

    assert_eq!(cache.erase(&42), None);
    assert_eq!(cache.core_metrics(), &before);
    assert_eq!(keys(&cache), vec![1]);
}

#[test]
fn test_clear_empty_cache() {
    let mut cache: LruCache<i32, i32> = make_lru(2);
    cache.clear();
    assert_eq!(cache.evict_count(), 0);
}

#[test]
fn test_insert_then_find_is_a_hit() {
    let mut cache = make_lru(3);
    cache.insert("k", 5);
    assert_eq!(cache.find(&"k"), Some((&"k", &5)));
    assert_eq!(cache.hit_count(), 1);
    assert_eq!(cache.miss_count(), 0);
}

#[test]
fn test_erase_then_refill_does_not_evict() {
    let mut cache = make_lru(3);
    cache.insert(1, 1);
    cache.insert(2, 2);
    cache.insert(3, 3);
    cache.erase(&2);
    assert_eq!(cache.insert(4, 4), None);
    assert_eq!(keys(&cache), vec![4, 3, 1]);
    assert_eq!(cache.insert(5, 5), Some((1, 1)));
    assert_eq!(cache.evict_count(), 2);
}

#[test]
fn test_eviction_order_follows_use() {
    let mut cache = make_lru(4);
    for i in 1..=4 {
        cache.insert(i, i);
    }
    cache.find(&2);
    cache.insert(3, 30);
    cache.find(&1);
    // order is now 1, 3, 2, 4
    assert_eq!(keys(&cache), vec![1, 3, 2, 4]);

    assert_eq!(cache.insert(5, 5), Some((4, 4)));
    assert_eq!(cache.insert(6, 6), Some((2, 2)));
    assert_eq!(cache.insert(7, 7), Some((3, 30)));
    assert_eq!(cache.insert(8, 8), Some((1, 1)));
    assert_eq!(keys(&cache), vec![8, 7, 6, 5]);
}

// ============================================================================
// MODEL CHECK
// ============================================================================

/// Reference model: a vector ordered most recently used first.
struct Model {
    cap: usize,
    entries: Vec<(i32, i32)>,
    hits: u64,
    misses: u64,
    inserts: u64,
    evictions: u64,
}

impl Model {
    fn new(cap: usize) -> Self {
        Model {
            cap,
            entries: Vec::new(),
            hits: 0,
            misses: 0,
            inserts: 0,
            evictions: 0,
        }
    }

    fn position(&self, key: i32) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn insert(&mut self, key: i32, value: i32) -> Option<(i32, i32)> {
        self.inserts += 1;
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return None;
        }
        let evicted = if self.entries.len() == self.cap {
            self.evictions += 1;
            self.entries.pop()
        } else {
            None
        };
        self.entries.insert(0, (key, value));
        evicted
    }

    fn find(&mut self, key: i32) -> Option<i32> {
        match self.position(key) {
            Some(pos) => {
                self.hits += 1;
                let entry = self.entries.remove(pos);
                self.entries.insert(0, entry);
                Some(entry.1)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    fn erase(&mut self, key: i32) -> Option<i32> {
        let pos = self.position(key)?;
        self.evictions += 1;
        Some(self.entries.remove(pos).1)
    }

    fn clear(&mut self) {
        self.evictions += self.entries.len() as u64;
        self.entries.clear();
    }
}

fn assert_matches_model(cache: &LruCache<i32, i32>, model: &Model, keyspace: i32) {
    assert!(cache.size() <= cache.max_size());
    assert_eq!(cache.size(), model.entries.len());
    assert_eq!(cache.empty(), model.entries.is_empty());

    let entries: Vec<(i32, i32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, model.entries);

    let iterated: HashSet<i32> = entries.iter().map(|(k, _)| *k).collect();
    let contained: HashSet<i32> = (0..keyspace).filter(|k| cache.contains(k)).collect();
    assert_eq!(iterated, contained);

    assert_eq!(cache.hit_count(), model.hits);
    assert_eq!(cache.miss_count(), model.misses);
    assert_eq!(cache.insert_count(), model.inserts);
    assert_eq!(cache.evict_count(), model.evictions);
}

#[test]
fn test_random_operations_match_model() {
    const KEYSPACE: i32 = 12;

    for cap in 1..=5 {
        let mut cache = make_lru(cap);
        let mut model = Model::new(cap);
        let mut rng = StdRng::seed_from_u64(cap as u64);

        for step in 0..5_000 {
            let key = rng.gen_range(0..KEYSPACE);
            match rng.gen_range(0..100) {
                0..=44 => {
                    let value = step;
                    assert_eq!(cache.insert(key, value), model.insert(key, value));
                }
                45..=84 => {
                    let found = cache.find(&key).map(|(k, v)| {
                        assert_eq!(*k, key);
                        *v
                    });
                    assert_eq!(found, model.find(key));
                }
                85..=98 => {
                    assert_eq!(cache.erase(&key), model.erase(key));
                }
                _ => {
                    cache.clear();
                    model.clear();
                }
            }
            assert_matches_model(&cache, &model, KEYSPACE);
        }
    }
}
