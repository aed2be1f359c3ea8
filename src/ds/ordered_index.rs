//! Ordering and frequency state for an eviction policy, kept apart from value
//! storage.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, Position>      order: IntrusiveList<K>
//!                 │ node
//!                 ▼
//!   oldest ─► [k1] ◄──► [k2] ◄──► [k3] ◄─ newest
//!                 │ counter (frequency mode only)
//!                 ▼
//!   counters: BucketChain<SlotId>   lowest bucket, oldest node = LFU victim
//! ```
//!
//! In [`IndexMode::Sequence`] the list is the whole story: FIFO/LIFO read it as
//! insertion order, LRU/MRU as recency order. [`IndexMode::Frequency`] keeps the
//! same recency list and adds per-key counters whose minimum bucket yields the
//! least recently touched key among those tied at the lowest frequency. The
//! counters hold list node ids rather than keys, so each key is stored twice
//! (map and list) whatever the mode.
//!
//! | Operation            | Time |
//! |----------------------|------|
//! | `record_insertion`   | O(1) |
//! | `touch`              | O(1) |
//! | `oldest` / `newest`  | O(1) |
//! | `remove`             | O(1) |
//! | `peek_min_frequency` | O(1) |
//!
//! ## Example
//!
//! ```
//! use boundcache::ds::{IndexMode, OrderedIndex};
//!
//! let mut index = OrderedIndex::new(IndexMode::Frequency);
//! index.record_insertion(1);
//! index.record_insertion(2);
//! index.touch(&1);
//!
//! assert_eq!(index.oldest(), Some(&2));
//! assert_eq!(index.newest(), Some(&1));
//! assert_eq!(index.frequency(&1), Some(2));
//! assert_eq!(index.peek_min_frequency(), Some(&2));
//! ```

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::ds::frequency_buckets::{BucketChain, MinBucketIter};
use crate::ds::intrusive_list::{IntrusiveList, IntrusiveListIter};
use crate::ds::slot_arena::SlotId;

/// What an [`OrderedIndex`] tracks besides the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// Order list only.
    Sequence,
    /// Order list plus per-key touch counters.
    Frequency,
}

/// Where one key lives: its list node and, in frequency mode, its counter.
#[derive(Debug, Clone, Copy)]
struct Position {
    node: SlotId,
    counter: Option<SlotId>,
}

#[derive(Debug)]
pub struct OrderedIndex<K> {
    mode: IndexMode,
    index: FxHashMap<K, Position>,
    order: IntrusiveList<K>,
    counters: Option<BucketChain<SlotId>>,
}

impl<K> OrderedIndex<K> {
    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Key at the oldest end.
    pub fn oldest(&self) -> Option<&K> {
        self.order.front()
    }

    /// Key at the newest end.
    pub fn newest(&self) -> Option<&K> {
        self.order.back()
    }

    /// Keys from the oldest end to the newest end.
    pub fn iter(&self) -> IntrusiveListIter<'_, K> {
        self.order.iter()
    }

    pub fn min_frequency(&self) -> Option<u64> {
        self.counters.as_ref()?.min_freq()
    }

    /// Keys tied at the minimum frequency, least recently touched first.
    /// Empty in sequence mode.
    pub fn min_frequency_keys(&self) -> MinFrequencyKeys<'_, K> {
        MinFrequencyKeys {
            order: &self.order,
            inner: self.counters.as_ref().map(BucketChain::iter_min),
        }
    }

    /// Least recently touched key among those at the minimum frequency.
    pub fn peek_min_frequency(&self) -> Option<&K> {
        let (_, &node, _) = self.counters.as_ref()?.peek_min()?;
        self.order.get(node)
    }
}

impl<K> OrderedIndex<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new(mode: IndexMode) -> Self {
        Self::with_capacity(mode, 0)
    }

    /// Creates an empty index with room for `capacity` keys.
    pub fn with_capacity(mode: IndexMode, capacity: usize) -> Self {
        let counters = match mode {
            IndexMode::Sequence => None,
            IndexMode::Frequency => Some(BucketChain::with_capacity(capacity)),
        };
        Self {
            mode,
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            counters,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Appends `key` at the newest end. Returns `false` if it is already
    /// tracked, in which case nothing changes.
    pub fn record_insertion(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let node = self.order.push_back(key.clone());
        let counter = self.counters.as_mut().map(|chain| chain.insert(node));
        self.index.insert(key, Position { node, counter });
        true
    }

    /// Moves `key` to the newest end and, in frequency mode, bumps its
    /// counter. Returns `false` for an untracked key.
    pub fn touch(&mut self, key: &K) -> bool {
        let Some(&Position { node, counter }) = self.index.get(key) else {
            return false;
        };
        self.order.move_to_back(node);
        if let (Some(chain), Some(counter)) = (self.counters.as_mut(), counter) {
            chain.touch(counter);
        }
        true
    }

    /// Forgets `key`. Untracked keys are ignored.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(Position { node, counter }) = self.index.remove(key) else {
            return false;
        };
        self.order.remove(node);
        if let (Some(chain), Some(counter)) = (self.counters.as_mut(), counter) {
            chain.remove(counter);
        }
        true
    }

    /// Touch count of `key`; always `None` in sequence mode.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let counter = self.index.get(key)?.counter?;
        self.counters.as_ref()?.frequency(counter)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
        if let Some(chain) = self.counters.as_mut() {
            chain.clear();
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert_eq!(self.index.len(), self.order.len());
        for (key, position) in &self.index {
            assert!(
                self.order.get(position.node) == Some(key),
                "index points at wrong node"
            );
        }

        match (&self.counters, self.mode) {
            (None, IndexMode::Sequence) => {
                assert!(self.index.values().all(|p| p.counter.is_none()));
            },
            (Some(chain), IndexMode::Frequency) => {
                chain.debug_validate_invariants();
                assert_eq!(chain.len(), self.order.len());
                for position in self.index.values() {
                    let counter = position.counter.expect("key without a counter");
                    assert_eq!(chain.get(counter), Some(&position.node));
                }
                // The counter victim must agree with a scan of the recency list.
                if let Some(min) = chain.min_freq() {
                    let scanned = self
                        .order
                        .iter()
                        .find(|key| self.frequency(key) == Some(min));
                    assert!(scanned == self.peek_min_frequency());
                }
            },
            _ => panic!("frequency state does not match index mode"),
        }
    }
}

/// Iterator returned by [`OrderedIndex::min_frequency_keys`].
pub struct MinFrequencyKeys<'a, K> {
    order: &'a IntrusiveList<K>,
    inner: Option<MinBucketIter<'a, SlotId>>,
}

impl<'a, K> Iterator for MinFrequencyKeys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let &node = self.inner.as_mut()?.next()?;
        self.order.get(node)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Touch(u8),
        Remove(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..16).prop_map(Op::Insert),
            (0u8..16).prop_map(Op::Touch),
            (0u8..16).prop_map(Op::Remove),
        ]
    }

    /// Vec-backed reference: order list plus (frequency, last touch tick).
    #[derive(Default)]
    struct Model {
        order: Vec<u8>,
        stats: HashMap<u8, (u64, u64)>,
        tick: u64,
    }

    impl Model {
        fn apply(&mut self, op: &Op) {
            self.tick += 1;
            match *op {
                Op::Insert(k) => {
                    if !self.stats.contains_key(&k) {
                        self.order.push(k);
                        self.stats.insert(k, (1, self.tick));
                    }
                },
                Op::Touch(k) => {
                    if let Some(entry) = self.stats.get_mut(&k) {
                        entry.0 += 1;
                        entry.1 = self.tick;
                        self.order.retain(|&x| x != k);
                        self.order.push(k);
                    }
                },
                Op::Remove(k) => {
                    if self.stats.remove(&k).is_some() {
                        self.order.retain(|&x| x != k);
                    }
                },
            }
        }

        fn lfu_victim(&self) -> Option<u8> {
            self.stats
                .iter()
                .min_by_key(|&(_, &(freq, tick))| (freq, tick))
                .map(|(&k, _)| k)
        }
    }

    fn apply(index: &mut OrderedIndex<u8>, op: &Op) {
        match *op {
            Op::Insert(k) => {
                index.record_insertion(k);
            },
            Op::Touch(k) => {
                index.touch(&k);
            },
            Op::Remove(k) => {
                index.remove(&k);
            },
        }
    }

    proptest! {
        /// Property: order and counters match the reference after every op
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut index = OrderedIndex::new(IndexMode::Frequency);
            let mut model = Model::default();

            for op in &ops {
                apply(&mut index, op);
                model.apply(op);

                let order: Vec<u8> = index.iter().copied().collect();
                prop_assert_eq!(&order, &model.order);
                prop_assert_eq!(index.oldest().copied(), model.order.first().copied());
                prop_assert_eq!(index.newest().copied(), model.order.last().copied());
                prop_assert_eq!(index.peek_min_frequency().copied(), model.lfu_victim());
                for (k, &(freq, _)) in &model.stats {
                    prop_assert_eq!(index.frequency(k), Some(freq));
                }
            }
            index.debug_validate_invariants();
        }

        /// Property: sequence mode never tracks frequency and keeps one slot per key
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_sequence_mode_one_position_per_key(
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let mut index = OrderedIndex::new(IndexMode::Sequence);
            for op in &ops {
                apply(&mut index, op);
                let mut keys: Vec<u8> = index.iter().copied().collect();
                let len = keys.len();
                keys.sort_unstable();
                keys.dedup();
                prop_assert_eq!(keys.len(), len);
                prop_assert_eq!(index.len(), len);
                prop_assert_eq!(index.min_frequency(), None);
            }
            index.debug_validate_invariants();
        }
    }
}
