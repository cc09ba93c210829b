//! Error types for cache construction.
//!
//! A lookup miss is not an error: `get` reports absence through `Option`.
//! The only failure in this crate is asking for a cache that cannot hold
//! anything.

use core::fmt;

/// Result type used by fallible cache constructors.
pub type Result<T> = core::result::Result<T, CacheError>;

/// Errors returned when building a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was zero, negative, or too large for `usize`.
    InvalidConfiguration {
        /// The capacity that was rejected.
        capacity: i64,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidConfiguration { capacity } => write!(
                f,
                "invalid cache configuration: capacity must be a positive integer, got {}",
                capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_names_rejected_capacity() {
        let err = CacheError::InvalidConfiguration { capacity: -3 };
        assert_eq!(
            err.to_string(),
            "invalid cache configuration: capacity must be a positive integer, got -3"
        );
    }
}
