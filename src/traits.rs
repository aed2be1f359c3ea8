//! # Cache trait hierarchy
//!
//! ```text
//!                 ┌──────────────────────────────────┐
//!                 │         CoreCache<K, V>          │
//!                 │  insert(&mut, K, V) → Option<V>  │
//!                 │  get(&mut, &K) → Option<&V>      │
//!                 │  contains / len / is_empty       │
//!                 │  capacity / clear                │
//!                 └────────────────┬─────────────────┘
//!                                  │
//!             ┌────────────────────┴────────────────────┐
//!             ▼                                         ▼
//!   ┌───────────────────────────┐         ┌───────────────────────────┐
//!   │   MutableCache<K, V>      │         │   ReadOnlyCache<K, V>     │
//!   │  remove(&K) → Option<V>   │         │  peek(&K) → Option<&V>    │
//!   │  remove_batch(&[K])       │         │  (no bookkeeping)         │
//!   └───────────────────────────┘         └───────────────────────────┘
//! ```
//!
//! `get` is `&mut self` because a hit may reorder the eviction index (LRU,
//! MRU, LFU). Use [`ReadOnlyCache::peek`] or [`CoreCache::contains`] to inspect
//! without touching that state.
//!
//! | Trait             | Implemented by                                  |
//! |-------------------|-------------------------------------------------|
//! | `CoreCache`       | `BoundedCache`, `BasicCache`, builder `Cache`   |
//! | `MutableCache`    | `BoundedCache`, `BasicCache`, builder `Cache`   |
//! | `ReadOnlyCache`   | `BoundedCache`, `BasicCache`, builder `Cache`   |
//! | `ConcurrentCache` | `ConcurrentBoundedCache` (feature `concurrency`)|

/// Operations every cache supports.
///
/// # Example
///
/// ```
/// use boundcache::policy::Fifo;
/// use boundcache::traits::CoreCache;
/// use boundcache::BoundedCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, items: &[(u64, &str)]) {
///     for (key, value) in items {
///         cache.insert(*key, value.to_string());
///     }
/// }
///
/// let mut cache: BoundedCache<u64, String, Fifo<u64>> = BoundedCache::new(2);
/// warm(&mut cache, &[(1, "one"), (2, "two"), (3, "three")]);
/// assert_eq!(cache.len(), 2);
/// assert!(!cache.contains(&1));
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the key is new and the cache is full, one entry is evicted first.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a value, updating the eviction bookkeeping on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks whether a key is present without updating bookkeeping.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries; `usize::MAX` for unbounded caches.
    fn capacity(&self) -> usize;

    fn clear(&mut self);
}

/// Caches that support removal by key.
///
/// Removal is not an eviction: no observer is notified.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes several keys, returning results in input order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// Side-effect-free lookups.
pub trait ReadOnlyCache<K, V>: CoreCache<K, V> {
    /// Returns the value for `key` without touching recency or frequency.
    fn peek(&self, key: &K) -> Option<&V>;
}

/// Marker for cache handles that can be shared across threads.
pub trait ConcurrentCache: Send + Sync {}
