//! Cache Metrics System
//!
//! Lifetime counters for the cache and a BTreeMap-based reporting trait.
//!
//! BTreeMap is used instead of HashMap so metrics always come out in the same
//! (alphabetical) order, which keeps logs and test output reproducible.
//!
//! # Counter semantics
//!
//! | Counter | Incremented by |
//! |---------|----------------|
//! | `cache_hits` | `find` of a present key |
//! | `cache_misses` | `find` of an absent key |
//! | `insertions` | every `insert`, new key or overwrite |
//! | `evictions` | capacity eviction, `erase` of a present key, each entry dropped by `clear` |
//!
//! All counters only ever grow.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// The lifetime counters tracked by the cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Number of lookups that found their key.
    pub cache_hits: u64,

    /// Number of lookups that did not find their key.
    pub cache_misses: u64,

    /// Number of insert calls, including overwrites of existing keys.
    pub insertions: u64,

    /// Number of entries removed other than by being overwritten in place.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    #[inline]
    pub fn record_hit(&mut self) {
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    #[inline]
    pub fn record_miss(&mut self) {
        self.cache_misses += 1;
    }

    /// Records an insert call.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records the removal of a single entry.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records the removal of `count` entries in one step.
    #[inline]
    pub fn record_evictions(&mut self, count: u64) {
        self.evictions += count;
    }

    /// Total number of lookups (hits + misses).
    #[inline]
    pub fn requests(&self) -> u64 {
        self.cache_hits + self.cache_misses
    }

    /// Fraction of lookups that were hits, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let requests = self.requests();
        if requests > 0 {
            self.cache_hits as f64 / requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that were misses, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn miss_rate(&self) -> f64 {
        let requests = self.requests();
        if requests > 0 {
            self.cache_misses as f64 / requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests() as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Uniform metrics reporting interface.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs, keys sorted alphabetically.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// A static string identifying the cache algorithm (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}
