//! Runtime policy selection.
//!
//! [`BoundedCache`] picks its policy at compile time. When the policy comes
//! from configuration instead, [`CacheBuilder`] produces a [`Cache`] that
//! dispatches to one of the five concrete caches.
//!
//! ## Example
//!
//! ```rust
//! use boundcache::builder::{CacheBuilder, CacheConfig};
//! use boundcache::policy::PolicyKind;
//!
//! let mut cache = CacheBuilder::new(2).build::<u64, String>(PolicyKind::Lru);
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//!
//! let config = CacheConfig {
//!     capacity: 8,
//!     policy: "lfu".parse().unwrap(),
//! };
//! let cache = CacheBuilder::from_config(&config)
//!     .unwrap()
//!     .build::<u64, String>(config.policy);
//! assert_eq!(cache.capacity(), 8);
//! assert_eq!(cache.kind(), PolicyKind::Lfu);
//! ```

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{BoundedCache, DEFAULT_CAPACITY};
use crate::error::ConfigError;
use crate::listing::Listing;
use crate::observer::{EvictionObserver, NoopObserver};
use crate::policy::{Fifo, Lfu, Lifo, Lru, Mru, PolicyKind};
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Declarative cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub capacity: usize,
    pub policy: PolicyKind,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: PolicyKind::default(),
        }
    }
}

impl CacheConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(())
    }
}

/// Cache with its policy chosen at runtime.
#[derive(Debug)]
pub struct Cache<K, V, O = NoopObserver> {
    inner: CacheInner<K, V, O>,
}

#[derive(Debug)]
enum CacheInner<K, V, O> {
    Fifo(BoundedCache<K, V, Fifo<K>, O>),
    Lifo(BoundedCache<K, V, Lifo<K>, O>),
    Lru(BoundedCache<K, V, Lru<K>, O>),
    Mru(BoundedCache<K, V, Mru<K>, O>),
    Lfu(BoundedCache<K, V, Lfu<K>, O>),
}

macro_rules! dispatch {
    ($inner:expr, $cache:ident => $body:expr) => {
        match $inner {
            CacheInner::Fifo($cache) => $body,
            CacheInner::Lifo($cache) => $body,
            CacheInner::Lru($cache) => $body,
            CacheInner::Mru($cache) => $body,
            CacheInner::Lfu($cache) => $body,
        }
    };
}

impl<K, V, O> Cache<K, V, O>
where
    K: Clone + Eq + Hash,
    O: EvictionObserver<K>,
{
    pub fn kind(&self) -> PolicyKind {
        match &self.inner {
            CacheInner::Fifo(_) => PolicyKind::Fifo,
            CacheInner::Lifo(_) => PolicyKind::Lifo,
            CacheInner::Lru(_) => PolicyKind::Lru,
            CacheInner::Mru(_) => PolicyKind::Mru,
            CacheInner::Lfu(_) => PolicyKind::Lfu,
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        dispatch!(&mut self.inner, c => c.put(key, value))
    }

    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        dispatch!(&mut self.inner, c => c.put_opt(key, value))
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        dispatch!(&mut self.inner, c => c.get(key))
    }

    pub fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        dispatch!(&mut self.inner, c => c.get_opt(key))
    }

    pub fn peek(&self, key: &K) -> Option<&V> {
        dispatch!(&self.inner, c => c.peek(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        dispatch!(&self.inner, c => c.contains(key))
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        dispatch!(&mut self.inner, c => c.remove(key))
    }

    pub fn len(&self) -> usize {
        dispatch!(&self.inner, c => c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        dispatch!(&self.inner, c => c.capacity())
    }

    pub fn clear(&mut self) {
        dispatch!(&mut self.inner, c => c.clear())
    }

    /// Keys from the policy's oldest end to its newest end.
    pub fn keys(&self) -> Vec<&K> {
        dispatch!(&self.inner, c => c.keys().collect())
    }

    /// The key the next overflowing `put` would evict.
    pub fn next_victim(&self) -> Option<&K> {
        dispatch!(&self.inner, c => c.next_victim())
    }

    pub fn listing(&self) -> Listing<'_, K, V>
    where
        K: Ord + Display,
        V: Display,
    {
        dispatch!(&self.inner, c => c.listing())
    }

    pub fn observer(&self) -> &O {
        dispatch!(&self.inner, c => c.observer())
    }

    pub fn into_observer(self) -> O {
        dispatch!(self.inner, c => c.into_observer())
    }
}

impl<K, V, O> CoreCache<K, V> for Cache<K, V, O>
where
    K: Clone + Eq + Hash,
    O: EvictionObserver<K>,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        dispatch!(&mut self.inner, c => CoreCache::insert(c, key, value))
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        Cache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    fn len(&self) -> usize {
        Cache::len(self)
    }

    fn capacity(&self) -> usize {
        Cache::capacity(self)
    }

    fn clear(&mut self) {
        Cache::clear(self)
    }
}

impl<K, V, O> MutableCache<K, V> for Cache<K, V, O>
where
    K: Clone + Eq + Hash,
    O: EvictionObserver<K>,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        Cache::remove(self, key)
    }
}

impl<K, V, O> ReadOnlyCache<K, V> for Cache<K, V, O>
where
    K: Clone + Eq + Hash,
    O: EvictionObserver<K>,
{
    fn peek(&self, key: &K) -> Option<&V> {
        Cache::peek(self, key)
    }
}

/// Builder for [`Cache`].
#[derive(Debug, Clone)]
pub struct CacheBuilder<O = NoopObserver> {
    capacity: usize,
    observer: O,
}

impl CacheBuilder<NoopObserver> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            observer: NoopObserver,
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config fails [`CacheConfig::validate`].
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }
}

impl Default for CacheBuilder<NoopObserver> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<O> CacheBuilder<O> {
    /// Replaces the eviction observer.
    pub fn observer<O2>(self, observer: O2) -> CacheBuilder<O2> {
        CacheBuilder {
            capacity: self.capacity,
            observer,
        }
    }

    /// Build a cache with the given policy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. Use [`try_build`](Self::try_build) to
    /// get an error instead.
    pub fn build<K, V>(self, policy: PolicyKind) -> Cache<K, V, O>
    where
        K: Clone + Eq + Hash,
        O: EvictionObserver<K>,
    {
        match self.try_build(policy) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build<K, V>(self, policy: PolicyKind) -> Result<Cache<K, V, O>, ConfigError>
    where
        K: Clone + Eq + Hash,
        O: EvictionObserver<K>,
    {
        let Self { capacity, observer } = self;
        let inner = match policy {
            PolicyKind::Fifo => {
                CacheInner::Fifo(BoundedCache::try_with_observer(capacity, observer)?)
            },
            PolicyKind::Lifo => {
                CacheInner::Lifo(BoundedCache::try_with_observer(capacity, observer)?)
            },
            PolicyKind::Lru => {
                CacheInner::Lru(BoundedCache::try_with_observer(capacity, observer)?)
            },
            PolicyKind::Mru => {
                CacheInner::Mru(BoundedCache::try_with_observer(capacity, observer)?)
            },
            PolicyKind::Lfu => {
                CacheInner::Lfu(BoundedCache::try_with_observer(capacity, observer)?)
            },
        };
        Ok(Cache { inner })
    }
}
