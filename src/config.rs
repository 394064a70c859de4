//! Cache Configuration Module
//!
//! Configuration for [`LruCache`](crate::LruCache).
//!
//! # Design Philosophy
//!
//! The configuration struct has public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: The capacity is a `NonZeroUsize`, so a zero-capacity
//!   cache cannot be described
//! - **Fallible route**: [`LruCacheConfig::new`] validates a plain `usize`
//!   for callers that read the capacity from untrusted input
//!
//! # Sizing
//!
//! Capacity is counted in entries, not bytes. Every entry costs the size of
//! its key twice (one copy in the index, one in the recency list), the size of
//! its value, and roughly 32 bytes of links and index bookkeeping.
//!
//! # Examples
//!
//! ```
//! use lruc::config::LruCacheConfig;
//! use lruc::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.max_size(), 1000);
//!
//! // Validated construction from a plain integer
//! let config = LruCacheConfig::new(64).unwrap();
//! assert_eq!(config.capacity().get(), 64);
//! assert!(LruCacheConfig::new(0).is_err());
//! ```

use crate::error::ConfigError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Fixed for the
///   lifetime of the cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Creates a configuration for a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(LruCacheConfig { capacity })
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

impl From<NonZeroUsize> for LruCacheConfig {
    fn from(capacity: NonZeroUsize) -> Self {
        LruCacheConfig { capacity }
    }
}

impl TryFrom<usize> for LruCacheConfig {
    type Error = ConfigError;

    fn try_from(capacity: usize) -> Result<Self, Self::Error> {
        LruCacheConfig::new(capacity)
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
