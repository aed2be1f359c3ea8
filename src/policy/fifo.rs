//! FIFO (First In, First Out) eviction.
//!
//! Evicts the key that was inserted earliest. Reads and value updates leave the
//! order alone, so a key's position is fixed from insertion until it leaves.
//!
//! ```text
//!   oldest ─► [a] ◄──► [b] ◄──► [c] ◄─ newest
//!              ▲
//!            victim
//! ```

use std::hash::Hash;

use crate::ds::OrderedIndex;
use crate::policy::{ordered_index, EvictionPolicy, PolicyKind};

#[derive(Debug)]
pub struct Fifo<K> {
    index: OrderedIndex<K>,
}

impl<K> Fifo<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K> Default for Fifo<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Fifo<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: ordered_index(PolicyKind::Fifo, capacity),
        }
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn on_insert(&mut self, key: &K) {
        self.index.record_insertion(key.clone());
    }

    fn on_update(&mut self, _key: &K) {}

    fn on_read(&mut self, _key: &K) {}

    fn select_victim(&self) -> Option<&K> {
        self.index.oldest()
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
    fn victim_is_first_inserted() {
        let mut policy = Fifo::new();
        policy.on_insert(&1);
        policy.on_insert(&2);
        policy.on_insert(&3);
        assert_eq!(policy.select_victim(), Some(&1));

        policy.on_remove(&1);
        assert_eq!(policy.select_victim(), Some(&2));
    }

    #[test]
    fn reads_and_updates_do_not_reorder() {
        let mut policy = Fifo::new();
        policy.on_insert(&"a");
        policy.on_insert(&"b");
        policy.on_read(&"a");
        policy.on_update(&"a");

        assert_eq!(policy.select_victim(), Some(&"a"));
        let order: Vec<_> = policy.index().iter().copied().collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn empty_has_no_victim() {
        let mut policy: Fifo<u8> = Fifo::default();
        assert_eq!(policy.select_victim(), None);
        policy.on_insert(&1);
        policy.clear();
        assert!(policy.is_empty());
        assert_eq!(policy.name(), "fifo");
    }
}
