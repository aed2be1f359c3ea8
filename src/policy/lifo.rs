//! LIFO (Last In, First Out) eviction.
//!
//! Evicts the key at the newest end of insertion order. Writing to a key that
//! is already cached re-marks it as newest, so it becomes the next victim.
//! Reads never reorder.
//!
//! ```text
//!   oldest ─► [a] ◄──► [b] ◄──► [c] ◄─ newest
//!                                ▲
//!                              victim
//! ```
//!
//! The victim is chosen before the incoming key is stored, so a full cache
//! gives up its most recent resident, never the key being inserted.

use std::hash::Hash;

use crate::ds::OrderedIndex;
use crate::policy::{ordered_index, EvictionPolicy, PolicyKind};

#[derive(Debug)]
pub struct Lifo<K> {
    index: OrderedIndex<K>,
}

impl<K> Lifo<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K> Default for Lifo<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Lifo<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: ordered_index(PolicyKind::Lifo, capacity),
        }
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lifo
    }

    fn on_insert(&mut self, key: &K) {
        self.index.record_insertion(key.clone());
    }

    fn on_update(&mut self, key: &K) {
        self.index.touch(key);
    }

    fn on_read(&mut self, _key: &K) {}

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
    fn victim_is_last_inserted() {
        let mut policy = Lifo::new();
        policy.on_insert(&1);
        policy.on_insert(&2);
        assert_eq!(policy.select_victim(), Some(&2));

        policy.on_remove(&2);
        assert_eq!(policy.select_victim(), Some(&1));
    }

    #[test]
    fn update_makes_key_newest() {
        let mut policy = Lifo::new();
        policy.on_insert(&1);
        policy.on_insert(&2);
        policy.on_update(&1);
        assert_eq!(policy.select_victim(), Some(&1));
    }

    #[test]
    fn read_does_not_reorder() {
        let mut policy = Lifo::new();
        policy.on_insert(&1);
        policy.on_insert(&2);
        policy.on_read(&1);
        assert_eq!(policy.select_victim(), Some(&2));
        assert_eq!(policy.kind(), PolicyKind::Lifo);
    }
}
