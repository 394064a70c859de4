//! Error types.
//!
//! Lookups and removals of absent keys are not errors (they return `None`),
//! and a full cache evicts instead of failing. The only fallible operation is
//! validating a capacity supplied as a plain integer.

use core::fmt;

/// Error returned when a cache configuration is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested capacity was zero. A cache must hold at least one entry.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => f.write_str("cache capacity must be greater than zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
