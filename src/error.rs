//! Error types for boundcache.
//!
//! - [`ConfigError`]: invalid construction parameters (zero capacity, unknown
//!   policy name).
//! - [`InvariantError`]: internal structures disagree; produced by
//!   `check_invariants` diagnostics.
//!
//! Lookups and inserts never fail: a miss is `None` and an overflowing insert
//! evicts.
//!
//! ```
//! use boundcache::error::ConfigError;
//! use boundcache::policy::Lru;
//! use boundcache::BoundedCache;
//!
//! let ok: Result<BoundedCache<u32, &str, Lru<u32>>, ConfigError> = BoundedCache::try_new(2);
//! assert!(ok.is_ok());
//!
//! let err = BoundedCache::<u32, &str, Lru<u32>>::try_new(0).unwrap_err();
//! assert!(err.to_string().contains("capacity"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Internal cache structures are out of sync.
///
/// Returned by [`BoundedCache::check_invariants`](crate::cache::BoundedCache::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Cache configuration was rejected.
///
/// Produced by `try_new`, [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build),
/// [`CacheConfig::validate`](crate::builder::CacheConfig::validate) and
/// parsing a [`PolicyKind`](crate::policy::PolicyKind).
///
/// # Example
///
/// ```
/// use boundcache::policy::PolicyKind;
///
/// let err = "clock".parse::<PolicyKind>().unwrap_err();
/// assert!(err.message().contains("clock"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_is_message() {
        let err = InvariantError::new("index has 3 keys but store has 2");
        assert_eq!(err.to_string(), "index has 3 keys but store has 2");
        assert_eq!(err.message(), "index has 3 keys but store has 2");
    }

    #[test]
    fn invariant_is_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(InvariantError::new("orphan key"));
        assert_eq!(boxed.to_string(), "orphan key");
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_is_message() {
        let err = ConfigError::new("capacity must be greater than zero");
        assert_eq!(err.to_string(), "capacity must be greater than zero");
        assert!(format!("{:?}", err).contains("capacity"));
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        assert_eq!(a.clone(), a);
        assert_ne!(a, ConfigError::new("y"));
    }

    #[test]
    fn config_is_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ConfigError>();
        assert_error::<InvariantError>();
    }
}
