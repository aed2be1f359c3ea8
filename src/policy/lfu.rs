//! LFU (Least Frequently Used) eviction with recency tie-break.
//!
//! Every `put` (new or overwrite) and every successful `get` counts as a use.
//! The victim is the key with the lowest count; when several keys share that
//! count, the one among them that was used longest ago goes first.
//!
//! ## Architecture
//!
//! ```text
//!   BucketChain (inside OrderedIndex, frequency mode)
//!
//!   lowest ─► freq=1: newest [d] ◄──► [b] oldest ─► victim
//!             freq=2: newest [c] ◄──► [a] oldest
//!             freq=5: newest [e]
//!
//!   touch(k): detach from bucket f, push at the newest end of bucket f+1
//! ```
//!
//! Pushing at the newest end on every touch keeps each bucket ordered by
//! recency, so the oldest node of the lowest bucket is the tie-break winner
//! in O(1). Only
//! keys tied at the minimum are compared; recency of keys at higher counts
//! never matters.
//!
//! Counts belong to resident keys only. A key that is evicted and later
//! re-inserted starts again at 1.
//!
//! ## Example
//!
//! ```
//! use boundcache::policy::Lfu;
//! use boundcache::BoundedCache;
//!
//! let mut cache: BoundedCache<u32, &str, Lfu<u32>> = BoundedCache::new(2);
//! cache.put(1, "a");
//! cache.put(2, "b");
//! cache.get(&1);
//! cache.put(3, "c"); // 2 has the lowest count
//!
//! assert!(!cache.contains(&2));
//! assert_eq!(cache.policy().frequency(&1), Some(2));
//! ```

use std::hash::Hash;

use crate::ds::OrderedIndex;
use crate::policy::{ordered_index, EvictionPolicy, PolicyKind};

#[derive(Debug)]
pub struct Lfu<K> {
    index: OrderedIndex<K>,
}

impl<K> Lfu<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Use count of a resident key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.index.frequency(key)
    }

    /// Lowest use count among resident keys.
    pub fn min_frequency(&self) -> Option<u64> {
        self.index.min_frequency()
    }
}

impl<K> Default for Lfu<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Lfu<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: ordered_index(PolicyKind::Lfu, capacity),
        }
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn on_insert(&mut self, key: &K) {
        self.index.record_insertion(key.clone());
    }

    fn on_update(&mut self, key: &K) {
        self.index.touch(key);
    }

    fn on_read(&mut self, key: &K) {
        self.index.touch(key);
    }

    fn select_victim(&self) -> Option<&K> {
        self.index.peek_min_frequency()
    }

    fn on_remove(&mut self, key: &K) {
        self.index.remove(key);
    }

    fn clear(&mut self) {
        self.index.clear();
    }

    fn index(&self) -> &OrderedIndex<K> {
        &self.index
    }
}
