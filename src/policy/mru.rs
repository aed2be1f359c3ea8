//! MRU (Most Recently Used) eviction.
//!
//! The opposite of LRU: the victim is the key at the newest end of the recency
//! list. Useful for cyclic scans, where the item just used is the one least
//! likely to be needed again before the loop comes back around.
//!
//! ## Architecture
//!
//! ```text
//!   oldest ─► [a] ◄──► [b] ◄──► [c] ◄─ newest
//!                                ▲
//!                              victim
//!
//!   put (new key)       append at newest end
//!   get (hit)           move to newest end
//!   put (existing key)  value only; position unchanged
//! ```
//!
//! Overwriting a cached key does not count as a use. A key that was just
//! rewritten therefore keeps its place and is not singled out as the next
//! victim; only reads promote.
//!
//! ## Example
//!
//! ```
//! use boundcache::policy::Mru;
//! use boundcache::BoundedCache;
//!
//! let mut cache: BoundedCache<u32, &str, Mru<u32>> = BoundedCache::new(2);
//! cache.put(1, "a");
//! cache.put(2, "b");
//! cache.put(1, "A"); // no reorder: 2 is still the most recent
//!
//! cache.put(3, "c");
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! ```

use std::hash::Hash;

use crate::ds::OrderedIndex;
use crate::policy::{ordered_index, EvictionPolicy, PolicyKind};

#[derive(Debug)]
pub struct Mru<K> {
    index: OrderedIndex<K>,
}

impl<K> Mru<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K> Default for Mru<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Mru<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: ordered_index(PolicyKind::Mru, capacity),
        }
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Mru
    }

    fn on_insert(&mut self, key: &K) {
        self.index.record_insertion(key.clone());
    }

    fn on_update(&mut self, _key: &K) {}

    fn on_read(&mut self, key: &K) {
        self.index.touch(key);
    }

    fn select_victim(&self) -> Option<&K> {
        self.index.newest()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victim_is_newest_insert() {
        let mut policy = Mru::new();
        policy.on_insert(&1);
        policy.on_insert(&2);
        assert_eq!(policy.select_victim(), Some(&2));
    }

    #[test]
    fn read_makes_key_victim() {
        let mut policy = Mru::new();
        policy.on_insert(&1);
        policy.on_insert(&2);
        policy.on_read(&1);
        assert_eq!(policy.select_victim(), Some(&1));
    }

    #[test]
    fn update_keeps_position() {
        let mut policy = Mru::new();
        policy.on_insert(&1);
        policy.on_insert(&2);
        policy.on_update(&1);
        assert_eq!(policy.select_victim(), Some(&2));

        let order: Vec<_> = policy.index().iter().copied().collect();
        assert_eq!(order, vec![1, 2]);
    }
}
