//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a fixed-capacity LRU cache with O(1) operations for
//! all common cache operations, plus lifetime counters for hits, misses,
//! insertions and evictions.
//!
//! # Algorithm
//!
//! The cache keeps its entries in order of recency of use and evicts the least
//! recently used entry when a new key arrives at capacity. A successful lookup
//! counts as a use.
//!
//! Two structures are kept in 1:1 correspondence:
//!
//! ```text
//!   index: HashMap<K, NodeId>          recency list (slot arena)
//!  ┌─────────┬────────┐
//!  │ key "b" │ slot 3 │──┐     HEAD ⇄ [3: b] ⇄ [2: a] ⇄ [4: c] ⇄ TAIL
//!  │ key "a" │ slot 2 │──┼──▶         MRU                  LRU
//!  │ key "c" │ slot 4 │──┘
//!  └─────────┴────────┘
//! ```
//!
//! The index holds plain slot handles rather than references, so reordering
//! the list never invalidates it.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Insert: O(1) amortized
//!   - Find: O(1) amortized
//!   - Erase: O(1) amortized
//!   - Clear: O(n)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache, allocated up front
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe, and `find` mutates the cache (it
//! reorders entries and bumps counters). To share a cache, guard every call,
//! `find` included, with an exclusive lock such as `Mutex`. A `RwLock` read
//! guard is not enough.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::list::{self, List, NodeId};
use crate::metrics::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for inserting,
/// finding, and erasing entries. When a new key is inserted at capacity, the
/// least recently used entry is evicted to make room.
///
/// # Examples
///
/// ```
/// use lruc::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// cache.insert("apple", 1);
/// cache.insert("banana", 2);
///
/// // A successful find refreshes recency
/// assert_eq!(cache.find(&"apple"), Some((&"apple", &1)));
///
/// // Inserting beyond capacity evicts the least recently used entry
/// cache.insert("cherry", 3);
/// assert!(!cache.contains(&"banana"));
/// assert!(cache.contains(&"apple"));
/// assert_eq!(cache.evict_count(), 1);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    list: List<(K, V)>,
    map: HashMap<K, NodeId, S>,
    metrics: CoreCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache holding at most `cap` entries.
    ///
    /// # Panics
    ///
    /// Panics if `cap` is zero. Use [`LruCacheConfig::new`] to validate a
    /// capacity without panicking.
    pub fn with_capacity(cap: usize) -> LruCache<K, V, DefaultHashBuilder> {
        match NonZeroUsize::new(cap) {
            Some(cap) => LruCache::new(cap),
            None => panic!("LruCache capacity must be greater than zero"),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// If `hasher` is `None`, the hasher's `Default` implementation is used.
    ///
    /// ```
    /// use lruc::config::LruCacheConfig;
    /// use lruc::LruCache;
    ///
    /// let config = LruCacheConfig::new(128).unwrap();
    /// let cache: LruCache<u64, Vec<u8>> = LruCache::init(config, None);
    /// assert!(cache.empty());
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config.capacity, hasher.unwrap_or_default())
    }

    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        log::debug!("creating LRU cache with capacity {}", cap);
        LruCache {
            list: List::new(cap),
            map: HashMap::with_capacity_and_hasher(cap.get(), hash_builder),
            metrics: CoreCacheMetrics::new(),
        }
    }

    /// Inserts a key-value pair, making it the most recently used entry.
    ///
    /// If the key is already present its value is overwritten in place; this
    /// never evicts and does not change the size. Otherwise, if the cache is
    /// full, the least recently used entry is evicted first and returned.
    ///
    /// Every call counts as one insertion.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.metrics.record_insertion();

        if let Some(&node) = self.map.get(&key) {
            // The stored key is equal to `key`; only the value changes.
            self.list.update(node, (key, value));
            self.list.move_to_front(node);
            return None;
        }

        let evicted = if self.list.is_full() {
            self.evict_last()
        } else {
            None
        };

        // Room was made above, so the list cannot be full here.
        let node = self.list.add((key.clone(), value));
        debug_assert!(node.is_some(), "recency list full after eviction");
        if let Some(node) = node {
            self.map.insert(key, node);
        }
        debug_assert_eq!(self.map.len(), self.list.len());

        evicted
    }

    /// Removes the least recently used entry from both structures.
    fn evict_last(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.remove_last()?;
        self.map.remove(&key);
        self.metrics.record_eviction();
        log::trace!(
            "evicted least recently used entry (capacity {}, len {})",
            self.list.cap(),
            self.list.len()
        );
        Some((key, value))
    }

    /// Looks up a key, marking the entry as most recently used on a hit.
    ///
    /// This is not a pure read: a hit reorders the cache and bumps the hit
    /// counter, a miss bumps the miss counter. The returned references borrow
    /// the cache, so it cannot be modified while they are held.
    pub fn find<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&node) = self.map.get(key) else {
            self.metrics.record_miss();
            return None;
        };
        self.metrics.record_hit();
        self.list.move_to_front(node);
        self.list.get(node).map(|(k, v)| (k, v))
    }

    /// Returns true if the key is present.
    ///
    /// Does not affect recency order or any counter.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Removes a key and returns its value.
    ///
    /// Erasing an absent key is a no-op. Erasing a present key counts as an
    /// eviction.
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        let (_, value) = self.list.remove(node)?;
        self.metrics.record_eviction();
        Some(value)
    }

    /// Removes every entry. Each removed entry counts as an eviction.
    pub fn clear(&mut self) {
        let old_size = self.map.len();
        self.map.clear();
        self.list.clear();
        self.metrics.record_evictions(old_size as u64);
        if old_size > 0 {
            log::debug!("cleared {} entries from LRU cache", old_size);
        }
    }
}

impl<K, V, S> LruCache<K, V, S> {
    /// Returns the number of entries currently in the cache.
    #[inline]
    pub fn size(&self) -> usize {
        self.map.len()
    }

    /// Returns the number of entries currently in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.cap().get()
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.list.cap()
    }

    /// Number of `find` calls that found their key.
    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.metrics.cache_hits
    }

    /// Number of `find` calls that did not find their key.
    #[inline]
    pub fn miss_count(&self) -> u64 {
        self.metrics.cache_misses
    }

    /// Number of `insert` calls, overwrites included.
    #[inline]
    pub fn insert_count(&self) -> u64 {
        self.metrics.insertions
    }

    /// Number of entries removed by capacity pressure, `erase` or `clear`.
    #[inline]
    pub fn evict_count(&self) -> u64 {
        self.metrics.evictions
    }

    /// Returns the lifetime counters.
    #[inline]
    pub fn core_metrics(&self) -> &CoreCacheMetrics {
        &self.metrics
    }

    /// Returns an iterator over the entries, most recently used first.
    ///
    /// Iterating does not count as use: it changes neither the order nor the
    /// counters.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }
}

impl<K, V, S> fmt::Display for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lru_cache: {{ address: {:p}, max_size: {}, size: {}, hit_count: {}, miss_count: {}, insert_count: {}, evict_count: {} }}",
            self,
            self.max_size(),
            self.size(),
            self.hit_count(),
            self.miss_count(),
            self.insert_count(),
            self.evict_count()
        )
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.list.cap())
            .field("len", &self.map.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl<K, V, S> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.metrics.to_btreemap();
        let capacity = self.max_size() as f64;
        let len = self.size() as f64;
        metrics.insert("capacity".to_string(), capacity);
        metrics.insert("len".to_string(), len);
        metrics.insert("cache_utilization".to_string(), len / capacity);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Iterator over the entries of an [`LruCache`], most recently used first.
///
/// Created by [`LruCache::iter`]. Cloning the iterator restarts nothing; it
/// copies the current position, so a fresh traversal is just another call to
/// `iter`. `next_back` walks from the least recently used end.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
