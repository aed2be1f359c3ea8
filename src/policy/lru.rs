//! LRU (Least Recently Used) eviction.
//!
//! Every `put` and every successful `get` moves the key to the newest end of
//! the recency list; the victim is whatever sits at the oldest end.
//!
//! ```text
//!   put a, put b, put c, get a
//!
//!   oldest ─► [b] ◄──► [c] ◄──► [a] ◄─ newest
//!              ▲
//!            victim
//! ```
//!
//! ## Operations
//!
//! | Hook            | Effect                      | Time |
//! |-----------------|-----------------------------|------|
//! | `on_insert`     | append at newest end        | O(1) |
//! | `on_update`     | move to newest end          | O(1) |
//! | `on_read`       | move to newest end          | O(1) |
//! | `select_victim` | peek oldest end             | O(1) |
//! | `on_remove`     | unlink                      | O(1) |

use std::hash::Hash;

use crate::ds::OrderedIndex;
use crate::policy::{ordered_index, EvictionPolicy, PolicyKind};

#[derive(Debug)]
pub struct Lru<K> {
    index: OrderedIndex<K>,
}

impl<K> Lru<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K> Default for Lru<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Lru<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: ordered_index(PolicyKind::Lru, capacity),
        }
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
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

    // ==============================================
    // Victim selection
    // ==============================================

    mod victim_selection {
        use super::*;

        #[test]
        fn untouched_keys_leave_in_insertion_order() {
            let mut policy = Lru::new();
            for k in 1..=3 {
                policy.on_insert(&k);
            }
            assert_eq!(policy.select_victim(), Some(&1));
            policy.on_remove(&1);
            assert_eq!(policy.select_victim(), Some(&2));
        }

        #[test]
        fn read_protects_key() {
            let mut policy = Lru::new();
            policy.on_insert(&1);
            policy.on_insert(&2);
            policy.on_read(&1);
            assert_eq!(policy.select_victim(), Some(&2));
        }

        #[test]
        fn update_protects_key() {
            let mut policy = Lru::new();
            policy.on_insert(&1);
            policy.on_insert(&2);
            policy.on_update(&1);
            assert_eq!(policy.select_victim(), Some(&2));
        }
    }

    // ==============================================
    // Bookkeeping
    // ==============================================

    mod bookkeeping {
        use super::*;

        #[test]
        fn index_reflects_recency() {
            let mut policy = Lru::with_capacity(4);
            policy.on_insert(&"a");
            policy.on_insert(&"b");
            policy.on_insert(&"c");
            policy.on_read(&"a");
            policy.on_read(&"b");

            let order: Vec<_> = policy.index().iter().copied().collect();
            assert_eq!(order, vec!["c", "a", "b"]);
            assert_eq!(policy.len(), 3);
            policy.index().debug_validate_invariants();
        }

        #[test]
        fn clear_drops_all_keys() {
            let mut policy = Lru::new();
            policy.on_insert(&1);
            policy.clear();
            assert!(policy.is_empty());
            assert_eq!(policy.select_victim(), None);
        }
    }
}
