//! Thread-safe handle around [`BoundedCache`].
//!
//! Every operation takes one `parking_lot::Mutex`, so the value store and the
//! policy index always change together. A `get` updates recency and frequency
//! state, which is why this is a mutex and not a read-write lock.
//!
//! # Deadlocks
//!
//! The observer runs inside `put`, with the mutex held. The mutex is not
//! reentrant: an observer that calls any method on a clone of the same
//! handle blocks forever. Record evictions with
//! [`RecordingObserver`](crate::observer::RecordingObserver) or send them
//! over a channel and act on them after `put` returns.
//!
//! ```
//! use boundcache::concurrent::ConcurrentBoundedCache;
//! use boundcache::policy::Lru;
//! use std::thread;
//!
//! let cache: ConcurrentBoundedCache<u64, String, Lru<u64>> = ConcurrentBoundedCache::new(128);
//!
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let cache = cache.clone();
//!         thread::spawn(move || {
//!             for i in 0..32 {
//!                 cache.put(t * 32 + i, format!("v{}", i));
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(cache.len(), 128);
//! assert_eq!(cache.get_with(&5, |v| v.len()), Some(2));
//! ```

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::BoundedCache;
use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::CacheMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;
use crate::observer::{EvictionObserver, NoopObserver};
use crate::policy::EvictionPolicy;
use crate::traits::{ConcurrentCache, CoreCache};

#[derive(Debug)]
pub struct ConcurrentBoundedCache<K, V, P, O = NoopObserver> {
    inner: Arc<Mutex<BoundedCache<K, V, P, O>>>,
}

impl<K, V, P, O> Clone for ConcurrentBoundedCache<K, V, P, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, P> ConcurrentBoundedCache<K, V, P, NoopObserver>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(BoundedCache::new(capacity))
    }

    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        BoundedCache::try_new(capacity).map(Self::from_cache)
    }
}

impl<K, V, P, O> ConcurrentBoundedCache<K, V, P, O>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    O: EvictionObserver<K>,
{
    /// Wraps an existing cache.
    ///
    /// Its observer will run with this handle's lock held; see
    /// [Deadlocks](self#deadlocks).
    pub fn from_cache(cache: BoundedCache<K, V, P, O>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// `observer` is called with the lock held and must not call back into
    /// this handle or any clone of it; see [Deadlocks](self#deadlocks).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_observer(capacity: usize, observer: O) -> Self {
        Self::from_cache(BoundedCache::with_observer(capacity, observer))
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    pub fn put_opt(&self, key: Option<K>, value: Option<V>) {
        self.inner.lock().put_opt(key, value);
    }

    /// Inserts and returns the previous value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        CoreCache::insert(&mut *self.inner.lock(), key, value)
    }

    /// Returns a clone of the value, recording the read with the policy.
    ///
    /// For values that are expensive or impossible to clone, use
    /// [`get_with`](Self::get_with).
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn get_opt(&self, key: Option<&K>) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get_opt(key).cloned()
    }

    /// Applies `f` to the value under the lock, recording the read.
    pub fn get_with<F, R>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Clones the value without touching the policy.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs `f` with exclusive access to the wrapped cache.
    ///
    /// Use for multi-step sequences that must not interleave with other
    /// threads, such as check-then-insert.
    pub fn with_cache<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BoundedCache<K, V, P, O>) -> R,
    {
        f(&mut self.inner.lock())
    }
}

impl<K, V, P, O> ConcurrentCache for ConcurrentBoundedCache<K, V, P, O>
where
    K: Send,
    V: Send,
    P: Send,
    O: Send,
{
}

#[cfg(feature = "metrics")]
impl<K, V, P, O> MetricsSnapshotProvider<CacheMetricsSnapshot>
    for ConcurrentBoundedCache<K, V, P, O>
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.inner.lock().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;
    use crate::policy::{Fifo, Lfu};
    use std::sync::{mpsc, OnceLock};
    use std::thread;

    #[test]
    fn observer_runs_with_lock_held() {
        type LockCheck = Box<dyn Fn() -> bool + Send + Sync>;
        let held: Arc<OnceLock<LockCheck>> = Arc::new(OnceLock::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let observer = {
            let held = Arc::clone(&held);
            let seen = Arc::clone(&seen);
            move |key: &u32| {
                let locked = held.get().is_some_and(|is_locked| is_locked());
                seen.lock().push((*key, locked));
            }
        };
        let cache: ConcurrentBoundedCache<u32, u32, Fifo<u32>, _> =
            ConcurrentBoundedCache::with_observer(1, observer);
        let weak = Arc::downgrade(&cache.inner);
        let _ = held.set(Box::new(move || {
            weak.upgrade().is_some_and(|inner| inner.is_locked())
        }));

        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(*seen.lock(), vec![(1, true)]);
        assert!(!cache.inner.is_locked());
    }

    #[test]
    fn channel_observer_defers_work_past_the_lock() {
        let (tx, rx) = mpsc::channel();
        let cache: ConcurrentBoundedCache<u32, u32, Fifo<u32>, _> =
            ConcurrentBoundedCache::with_observer(2, move |key: &u32| {
                let _ = tx.send(*key);
            });

        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(3, 30);
        let evicted: Vec<u32> = rx.try_iter().collect();
        assert_eq!(evicted, vec![1]);
        for key in evicted {
            assert_eq!(cache.peek(&key), None);
            cache.put(key + 100, 0);
        }
        assert!(cache.contains(&101));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clones_share_state() {
        let cache: ConcurrentBoundedCache<u32, String, Fifo<u32>> =
            ConcurrentBoundedCache::new(2);
        let other = cache.clone();
        other.put(1, "one".to_string());
        assert_eq!(cache.get(&1), Some("one".to_string()));
        assert_eq!(cache.insert(1, "uno".to_string()), Some("one".to_string()));
        assert_eq!(other.peek(&1), Some("uno".to_string()));
    }

    #[test]
    fn capacity_holds_under_contention() {
        let evicted = RecordingObserver::new();
        let cache: ConcurrentBoundedCache<u32, u32, Lfu<u32>, _> =
            ConcurrentBoundedCache::with_observer(16, evicted.clone());

        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = (t * 200 + i) % 64;
                        cache.put(key, i);
                        let _ = cache.get(&key);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 16);
        cache.with_cache(|inner| inner.check_invariants()).unwrap();
        let inserted_keys = 64;
        assert!(evicted.len() >= inserted_keys - 16);
    }

    #[test]
    fn none_inputs_are_ignored() {
        let cache: ConcurrentBoundedCache<u32, u32, Fifo<u32>> = ConcurrentBoundedCache::new(1);
        cache.put_opt(None, Some(1));
        cache.put_opt(Some(1), None);
        assert!(cache.is_empty());
        assert_eq!(cache.get_opt(None), None);
        assert!(ConcurrentBoundedCache::<u32, u32, Fifo<u32>>::try_new(0).is_err());
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_concurrent<T: ConcurrentCache>() {}
        assert_concurrent::<ConcurrentBoundedCache<u64, String, Lfu<u64>>>();
    }
}
