//! Unbounded cache with no eviction.
//!
//! Shares the `put`/`get` surface of [`BoundedCache`](crate::cache::BoundedCache),
//! including the `Option` entry points, but never drops an entry on its own.
//!
//! ```
//! use boundcache::BasicCache;
//!
//! let mut cache = BasicCache::new();
//! cache.put("A", "Hello");
//! cache.put_opt(None, Some("ignored"));
//! cache.put_opt(Some("B"), None);
//!
//! assert_eq!(cache.get(&"A"), Some(&"Hello"));
//! assert_eq!(cache.len(), 1);
//! ```

use std::fmt::Display;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::listing::Listing;
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

#[derive(Debug, Clone)]
pub struct BasicCache<K, V> {
    store: FxHashMap<K, V>,
}

impl<K, V> BasicCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            store: FxHashMap::default(),
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        self.store.insert(key, value);
    }

    /// No-op unless both `key` and `value` are present.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.store.insert(key, value);
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    pub fn get_opt(&self, key: Option<&K>) -> Option<&V> {
        key.and_then(|key| self.store.get(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.store.remove(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.store.iter()
    }

    /// Sorted `Current cache:` dump of every entry.
    pub fn listing(&self) -> Listing<'_, K, V>
    where
        K: Ord + Display,
        V: Display,
    {
        Listing::new(self.store.iter())
    }
}

impl<K, V> Default for BasicCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CoreCache<K, V> for BasicCache<K, V>
where
    K: Eq + Hash,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.store.insert(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn clear(&mut self) {
        self.store.clear();
    }
}

impl<K, V> MutableCache<K, V> for BasicCache<K, V>
where
    K: Eq + Hash,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        self.store.remove(key)
    }
}

impl<K, V> ReadOnlyCache<K, V> for BasicCache<K, V>
where
    K: Eq + Hash,
{
    fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }
}
