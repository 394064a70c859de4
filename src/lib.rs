#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          LruCache<K, V>                          │
//! │                                                                  │
//! │  key index                      recency list (slot arena)        │
//! │  HashMap<K, NodeId>  ─────────▶ HEAD ⇄ MRU ⇄ ... ⇄ LRU ⇄ TAIL    │
//! │                                                                  │
//! │  counters: hits · misses · insertions · evictions                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost | Side effects |
//! |-----------|------|--------------|
//! | `insert`  | O(1) | moves entry to front, may evict, counts an insertion |
//! | `find`    | O(1) | moves entry to front on hit, counts a hit or a miss |
//! | `contains`| O(1) | none |
//! | `erase`   | O(1) | counts an eviction if the key was present |
//! | `clear`   | O(n) | counts one eviction per removed entry |
//!
//! ## Example
//!
//! ```rust
//! use lruc::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! cache.find(&1);          // 1 becomes most recently used
//! cache.insert(3, "three"); // 2 evicted (least recently used)
//!
//! assert!(!cache.contains(&2));
//! let order: Vec<i32> = cache.iter().map(|(k, _)| *k).collect();
//! assert_eq!(order, vec![3, 1]);
//! assert_eq!((cache.hit_count(), cache.miss_count()), (1, 0));
//! assert_eq!((cache.insert_count(), cache.evict_count()), (3, 1));
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the cache itself
//! - [`config`]: capacity configuration
//! - [`error`]: configuration errors
//! - [`metrics`]: lifetime counters and metrics reporting

#![no_std]

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Fixed-capacity doubly linked list stored in a slot arena.
///
/// Entries are addressed by integer handles that stay valid while the entry
/// lives, which lets the cache's key index point into the list without
/// borrowing it.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entry when
/// a new key arrives at capacity.
pub mod lru;

/// Cache metrics system.
///
/// Lifetime hit, miss, insertion and eviction counters, reported through the
/// [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

pub use config::LruCacheConfig;
pub use error::ConfigError;
pub use lru::LruCache;
pub use metrics::{CacheMetrics, CoreCacheMetrics};
