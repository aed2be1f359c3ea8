//! Bounded key-value cache generic over its eviction policy.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                  BoundedCache<K, V, P, O>                        │
//! │                                                                  │
//! │   store: FxHashMap<K, V>          policy: P (EvictionPolicy<K>)  │
//! │   ┌─────────┬─────────┐           ┌──────────────────────────┐   │
//! │   │  key    │  value  │           │ OrderedIndex<K>          │   │
//! │   ├─────────┼─────────┤           │ oldest ─► ... ◄─ newest  │   │
//! │   │  "a"    │   1     │           │ (+ frequency buckets)    │   │
//! │   │  "b"    │   2     │           └──────────────────────────┘   │
//! │   └─────────┴─────────┘                                          │
//! │                                                                  │
//! │   observer: O (EvictionObserver<K>)   capacity: usize (> 0)      │
//! └──────────────────────────────────────────────────────────────────┘
//!
//! put(k, v), k cached:    replace value ─► policy.on_update(k)
//! put(k, v), k new, full: victim = policy.select_victim()
//!                         policy.on_remove(victim), store.remove(victim)
//!                         observer.on_evict(victim)
//!                         policy.on_insert(k), store.insert(k, v)
//! get(k), hit:            policy.on_read(k) ─► &v
//! ```
//!
//! Storage and ordering are separate: the hash map is never iterated to decide
//! anything, and the policy never sees values.
//!
//! ## Operations
//!
//! | Operation  | Time   | Bookkeeping                         |
//! |------------|--------|-------------------------------------|
//! | `put`      | O(1)*  | update/insert hook, maybe one evict |
//! | `get`      | O(1)   | read hook on hit                    |
//! | `peek`     | O(1)   | none                                |
//! | `contains` | O(1)   | none                                |
//! | `remove`   | O(1)   | removal hook, no notification       |
//! | `clear`    | O(n)   | everything reset, no notification   |
//!
//! ## Absent keys and values
//!
//! [`put_opt`](BoundedCache::put_opt) and [`get_opt`](BoundedCache::get_opt)
//! accept `Option`s and treat `None` as "nothing to do": no mutation, no
//! notification, no counters.
//!
//! ## Example
//!
//! ```
//! use boundcache::observer::RecordingObserver;
//! use boundcache::policy::Lru;
//! use boundcache::BoundedCache;
//!
//! let evicted = RecordingObserver::new();
//! let mut cache: BoundedCache<u32, &str, Lru<u32>, _> =
//!     BoundedCache::with_observer(2, evicted.clone());
//!
//! cache.put(1, "A");
//! cache.put(2, "B");
//! cache.get(&1);
//! cache.put(3, "C");
//!
//! assert_eq!(evicted.evicted(), vec![2]);
//! assert_eq!(cache.get(&1), Some(&"A"));
//! assert_eq!(cache.get(&3), Some(&"C"));
//! ```
//!
//! ## Thread Safety
//!
//! Single-threaded; every mutating call takes `&mut self`. Enable the
//! `concurrency` feature for [`ConcurrentBoundedCache`](crate::concurrent::ConcurrentBoundedCache).

use std::fmt::Display;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{ConfigError, InvariantError};
use crate::listing::Listing;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::CacheMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::CacheMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsReset, MetricsSnapshotProvider, ReadMetricsRecorder,
};
use crate::observer::{EvictionObserver, NoopObserver};
use crate::policy::{EvictionPolicy, PolicyKeys};
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Capacity used by [`BoundedCache::with_default_capacity`].
pub const DEFAULT_CAPACITY: usize = 4;

#[derive(Debug)]
pub struct BoundedCache<K, V, P, O = NoopObserver> {
    store: FxHashMap<K, V>,
    policy: P,
    observer: O,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V, P> BoundedCache<K, V, P, NoopObserver>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to get an
    /// error instead.
    pub fn new(capacity: usize) -> Self {
        Self::with_observer(capacity, NoopObserver)
    }

    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_observer(capacity, NoopObserver)
    }

    /// Creates a cache with [`DEFAULT_CAPACITY`] slots.
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, V, P, O> BoundedCache<K, V, P, O>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    O: EvictionObserver<K>,
{
    /// Creates a cache that reports evictions to `observer`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_observer(capacity: usize, observer: O) -> Self {
        match Self::try_with_observer(capacity, observer) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_with_observer(capacity: usize, observer: O) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Self {
            store: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            policy: P::with_capacity(capacity),
            observer,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        })
    }

    /// Stores `value` under `key`, evicting one entry first if `key` is new
    /// and the cache is full.
    pub fn put(&mut self, key: K, value: V) {
        self.insert_entry(key, value);
    }

    /// Like [`put`](Self::put), but a missing key or value makes the call a
    /// no-op.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.insert_entry(key, value);
        }
    }

    /// Returns the value for `key`, recording the read with the policy.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.store.contains_key(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        }

        self.policy.on_read(key);
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();
        self.store.get(key)
    }

    /// Like [`get`](Self::get); `None` is a miss with no bookkeeping at all.
    pub fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.get(key),
            None => None,
        }
    }

    /// Returns the value for `key` without touching the policy.
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();
        let value = self.store.get(key);
        #[cfg(feature = "metrics")]
        {
            if value.is_some() {
                (&self.metrics).record_peek_found();
            }
        }
        value
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops `key` without notifying the observer.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.store.remove(key)?;
        self.policy.on_remove(key);
        Some(value)
    }

    /// Drops every entry without notifying the observer.
    pub fn clear(&mut self) {
        self.store.clear();
        self.policy.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Entries from the policy's oldest end to its newest end.
    ///
    /// For FIFO/LIFO that is insertion order; for LRU/MRU/LFU it is recency
    /// order, least recent first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.policy
            .index()
            .iter()
            .filter_map(move |key| self.store.get_key_value(key))
    }

    /// Keys in the same order as [`iter`](Self::iter); `.rev()` walks from
    /// the newest end.
    pub fn keys(&self) -> PolicyKeys<'_, K> {
        self.policy.index().iter()
    }

    /// The key the next overflowing `put` would evict.
    pub fn next_victim(&self) -> Option<&K> {
        self.policy.select_victim()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the cache and returns its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Sorted `Current cache:` dump of every entry.
    ///
    /// ```
    /// use boundcache::policy::Fifo;
    /// use boundcache::BoundedCache;
    ///
    /// let mut cache: BoundedCache<&str, &str, Fifo<&str>> = BoundedCache::new(4);
    /// cache.put("B", "World");
    /// cache.put("A", "Hello");
    /// assert_eq!(cache.listing().to_string(), "Current cache:\nA: Hello\nB: World\n");
    /// ```
    pub fn listing(&self) -> Listing<'_, K, V>
    where
        K: Ord + Display,
        V: Display,
    {
        Listing::new(self.store.iter())
    }

    /// Cross-checks the store against the policy index.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first mismatch found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.store.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "store holds {} entries but capacity is {}",
                self.store.len(),
                self.capacity
            )));
        }
        let index = self.policy.index();
        if index.len() != self.store.len() {
            return Err(InvariantError::new(format!(
                "policy tracks {} keys but store holds {}",
                index.len(),
                self.store.len()
            )));
        }
        let mut walked = 0usize;
        for key in index.iter() {
            walked += 1;
            if !self.store.contains_key(key) {
                return Err(InvariantError::new(format!(
                    "policy key at position {} has no stored value",
                    walked - 1
                )));
            }
        }
        if walked != index.len() {
            return Err(InvariantError::new(format!(
                "policy order walk visited {} keys but index reports {}",
                walked,
                index.len()
            )));
        }
        if self.store.keys().any(|key| !index.contains(key)) {
            return Err(InvariantError::new("stored key missing from policy index"));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.policy.index().debug_validate_invariants();
        if let Err(e) = self.check_invariants() {
            panic!("{}", e);
        }
    }

    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(slot) = self.store.get_mut(&key) {
            let previous = std::mem::replace(slot, value);
            self.policy.on_update(&key);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return Some(previous);
        }

        if self.store.len() >= self.capacity {
            self.evict_one();
        }

        self.policy.on_insert(&key);
        self.store.insert(key, value);
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
        None
    }

    fn evict_one(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let Some(victim) = self.policy.select_victim().cloned() else {
            return;
        };
        self.policy.on_remove(&victim);
        if self.store.remove(&victim).is_none() {
            return;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
        trace!(policy = self.policy.name(), len = self.store.len(), "evicted entry");
        self.observer.on_evict(&victim);
    }
}

impl<K, V, P> Default for BoundedCache<K, V, P, NoopObserver>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<K, V, P, O> CoreCache<K, V> for BoundedCache<K, V, P, O>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    O: EvictionObserver<K>,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_entry(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        BoundedCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        BoundedCache::contains(self, key)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        BoundedCache::clear(self)
    }
}

impl<K, V, P, O> MutableCache<K, V> for BoundedCache<K, V, P, O>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    O: EvictionObserver<K>,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        BoundedCache::remove(self, key)
    }
}

impl<K, V, P, O> ReadOnlyCache<K, V> for BoundedCache<K, V, P, O>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    O: EvictionObserver<K>,
{
    fn peek(&self, key: &K) -> Option<&V> {
        BoundedCache::peek(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P, O> BoundedCache<K, V, P, O> {
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P, O> MetricsSnapshotProvider<CacheMetricsSnapshot> for BoundedCache<K, V, P, O> {
    fn snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            clears: self.metrics.clears,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            cache_len: self.store.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P, O> MetricsReset for BoundedCache<K, V, P, O> {
    fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;
    use crate::policy::{Fifo, Lfu, Lifo, Lru, Mru};

    type Recorded<P> = BoundedCache<u32, &'static str, P, RecordingObserver<u32>>;

    fn recorded<P: EvictionPolicy<u32>>(capacity: usize) -> (Recorded<P>, RecordingObserver<u32>) {
        let observer = RecordingObserver::new();
        (
            BoundedCache::with_observer(capacity, observer.clone()),
            observer,
        )
    }

    fn sorted_entries<P: EvictionPolicy<u32>, O: EvictionObserver<u32>>(
        cache: &BoundedCache<u32, &'static str, P, O>,
    ) -> Vec<(u32, &'static str)> {
        let mut entries: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort();
        entries
    }

    // ==============================================
    // Construction
    // ==============================================

    mod construction {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            let err = BoundedCache::<u32, u32, Lru<u32>>::try_new(0).unwrap_err();
            assert_eq!(err.message(), "capacity must be greater than zero");
        }

        #[test]
        #[should_panic(expected = "capacity must be greater than zero")]
        fn new_panics_on_zero_capacity() {
            let _ = BoundedCache::<u32, u32, Fifo<u32>>::new(0);
        }

        #[test]
        fn default_capacity_is_four() {
            let cache: BoundedCache<u32, u32, Lfu<u32>> = BoundedCache::default();
            assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
            assert_eq!(cache.capacity(), 4);
            assert!(cache.is_empty());
        }
    }

    // ==============================================
    // Basic operations
    // ==============================================

    mod basic_operations {
        use super::*;

        #[test]
        fn put_then_get_round_trips() {
            let mut cache: BoundedCache<u32, &str, Lru<u32>> = BoundedCache::new(3);
            cache.put(1, "A");
            cache.put(2, "B");
            assert_eq!(cache.get(&1), Some(&"A"));
            assert_eq!(cache.get(&2), Some(&"B"));
            assert_eq!(cache.get(&3), None);
            assert_eq!(cache.len(), 2);
        }

        #[test]
        fn overwrite_keeps_len_and_returns_previous() {
            let mut cache: BoundedCache<u32, &str, Fifo<u32>> = BoundedCache::new(2);
            assert_eq!(CoreCache::insert(&mut cache, 1, "A"), None);
            assert_eq!(CoreCache::insert(&mut cache, 1, "Z"), Some("A"));
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&1), Some(&"Z"));
        }

        #[test]
        fn peek_does_not_touch_policy() {
            let mut cache: BoundedCache<u32, &str, Lru<u32>> = BoundedCache::new(2);
            cache.put(1, "A");
            cache.put(2, "B");
            assert_eq!(cache.peek(&1), Some(&"A"));
            assert_eq!(cache.next_victim(), Some(&1));
        }

        #[test]
        fn remove_is_not_an_eviction() {
            let (mut cache, evicted) = recorded::<Lru<u32>>(2);
            cache.put(1, "A");
            assert_eq!(cache.remove(&1), Some("A"));
            assert_eq!(cache.remove(&1), None);
            cache.put(2, "B");
            cache.clear();
            assert!(evicted.is_empty());
            assert!(cache.is_empty());
            cache.debug_validate_invariants();
        }

        #[test]
        fn iter_follows_policy_order() {
            let mut cache: BoundedCache<u32, &str, Lru<u32>> = BoundedCache::new(3);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.put(3, "C");
            cache.get(&1);
            let keys: Vec<_> = cache.keys().copied().collect();
            assert_eq!(keys, vec![2, 3, 1]);
            let pairs: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            assert_eq!(pairs, vec![(2, "B"), (3, "C"), (1, "A")]);
        }

        #[test]
        fn keys_walk_from_both_ends() {
            let mut cache: BoundedCache<u32, &str, Lifo<u32>> = BoundedCache::new(3);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.put(3, "C");
            cache.put(1, "a");

            let keys = cache.keys();
            assert_eq!(keys.len(), 3);
            let newest_first: Vec<_> = keys.rev().copied().collect();
            assert_eq!(newest_first, vec![1, 3, 2]);
            assert_eq!(cache.keys().next_back(), cache.next_victim());
        }

        #[test]
        fn listing_sorts_by_key() {
            let mut cache: BoundedCache<u32, &str, Mru<u32>> = BoundedCache::new(4);
            cache.put(3, "C");
            cache.put(1, "A");
            cache.put(2, "B");
            assert_eq!(
                cache.listing().to_string(),
                "Current cache:\n1: A\n2: B\n3: C\n"
            );
        }
    }

    // ==============================================
    // Absent keys and values
    // ==============================================

    mod absent_inputs {
        use super::*;

        #[test]
        fn put_opt_with_none_changes_nothing() {
            let (mut cache, evicted) = recorded::<Fifo<u32>>(1);
            cache.put(1, "A");
            cache.put_opt(None, Some("X"));
            cache.put_opt(Some(2), None);
            cache.put_opt(None, None);

            assert_eq!(sorted_entries(&cache), vec![(1, "A")]);
            assert!(evicted.is_empty());
        }

        #[test]
        fn get_opt_none_is_a_silent_miss() {
            let mut cache: BoundedCache<u32, &str, Lru<u32>> = BoundedCache::new(2);
            cache.put(1, "A");
            cache.put(2, "B");
            assert_eq!(cache.get_opt(None), None);
            assert_eq!(cache.next_victim(), Some(&1));
            assert_eq!(cache.get_opt(Some(&1)), Some(&"A"));
            assert_eq!(cache.next_victim(), Some(&2));
        }

        #[test]
        fn put_opt_with_both_present_is_a_put() {
            let mut cache: BoundedCache<u32, &str, Lifo<u32>> = BoundedCache::new(1);
            cache.put_opt(Some(7), Some("G"));
            assert_eq!(cache.get(&7), Some(&"G"));
        }
    }

    // ==============================================
    // Eviction per policy
    // ==============================================

    mod eviction {
        use super::*;

        #[test]
        fn fifo_evicts_oldest() {
            let (mut cache, evicted) = recorded::<Fifo<u32>>(2);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.put(3, "C");
            assert_eq!(evicted.evicted(), vec![1]);
            assert_eq!(sorted_entries(&cache), vec![(2, "B"), (3, "C")]);
        }

        #[test]
        fn lifo_evicts_newest_resident() {
            let (mut cache, evicted) = recorded::<Lifo<u32>>(2);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.put(3, "C");
            assert_eq!(evicted.evicted(), vec![2]);
            assert_eq!(sorted_entries(&cache), vec![(1, "A"), (3, "C")]);
        }

        #[test]
        fn lru_evicts_least_recent() {
            let (mut cache, evicted) = recorded::<Lru<u32>>(2);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.get(&1);
            cache.put(3, "C");
            assert_eq!(evicted.evicted(), vec![2]);
            assert_eq!(sorted_entries(&cache), vec![(1, "A"), (3, "C")]);
        }

        #[test]
        fn mru_evicts_most_recent() {
            let (mut cache, evicted) = recorded::<Mru<u32>>(2);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.get(&2);
            cache.put(3, "C");
            assert_eq!(evicted.evicted(), vec![2]);
            assert_eq!(sorted_entries(&cache), vec![(1, "A"), (3, "C")]);
        }

        #[test]
        fn lfu_evicts_least_frequent_then_least_recent() {
            let (mut cache, evicted) = recorded::<Lfu<u32>>(2);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.get(&1);
            cache.put(3, "C");
            assert_eq!(evicted.take(), vec![2]);

            cache.get(&3);
            cache.put(4, "D");
            assert_eq!(evicted.take(), vec![1]);
            assert_eq!(sorted_entries(&cache), vec![(3, "C"), (4, "D")]);
            cache.debug_validate_invariants();
        }

        #[test]
        fn overwrite_at_capacity_never_evicts() {
            let (mut cache, evicted) = recorded::<Fifo<u32>>(2);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.put(2, "b");
            cache.put(1, "a");
            assert!(evicted.is_empty());
            assert_eq!(sorted_entries(&cache), vec![(1, "a"), (2, "b")]);
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counters_track_operations() {
            let mut cache: BoundedCache<u32, &str, Lru<u32>> = BoundedCache::new(1);
            cache.put(1, "A");
            cache.put(1, "a");
            cache.put(2, "B");
            cache.get(&2);
            cache.get(&1);
            cache.peek(&2);
            cache.put_opt(None, Some("X"));
            cache.get_opt(None);

            let snap = cache.snapshot();
            assert_eq!(snap.insert_calls, 3);
            assert_eq!(snap.insert_new, 2);
            assert_eq!(snap.insert_updates, 1);
            assert_eq!(snap.evict_calls, 1);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.peek_calls, 1);
            assert_eq!(snap.peek_found, 1);
            assert_eq!(snap.cache_len, 1);
            assert_eq!(snap.capacity, 1);

            cache.reset_metrics();
            assert_eq!(cache.snapshot().insert_calls, 0);
        }
    }
}
