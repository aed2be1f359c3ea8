//! Frequency buckets for O(1) LFU tracking with recency tie-break.
//!
//! ## Architecture
//!
//! ```text
//!   BucketChain<T>: nodes in a SlotArena, addressed by SlotId
//!
//!   lowest = 1
//!      │
//!      ▼
//!   freq=1  newest ─► [n4] ─► [n1] ◄─ oldest   (victim)
//!      │ higher
//!      ▼
//!   freq=3  newest ─► [n2] ◄─ oldest
//! ```
//!
//! A touch moves a node out of bucket `f` and in at the newest end of bucket
//! `f + 1`, so order inside a bucket is order of last touch. The oldest node
//! of the lowest bucket is therefore the least recently touched among the
//! nodes tied at the minimum frequency. Buckets link to their lower and
//! higher neighbours, and an emptied bucket is unlinked at once.
//!
//! [`BucketChain`] is addressed by the [`SlotId`] returned from `insert` and
//! keeps no key map; [`OrderedIndex`](crate::ds::OrderedIndex) stores those
//! ids next to its own. [`FrequencyBuckets`] adds a key map for standalone
//! use.
//!
//! | Operation  | Time |
//! |------------|------|
//! | `insert`   | O(1) |
//! | `touch`    | O(1) |
//! | `remove`   | O(1) |
//! | `peek_min` | O(1) |
//! | `pop_min`  | O(1) |
//!
//! ## Example
//!
//! ```
//! use boundcache::ds::FrequencyBuckets;
//!
//! let mut freq = FrequencyBuckets::new();
//! freq.insert("a");
//! freq.insert("b");
//! freq.insert("c");
//! freq.touch(&"a");
//!
//! // "b" and "c" tie at 1; "b" was touched longest ago.
//! assert_eq!(freq.peek_min(), Some((&"b", 1)));
//! assert_eq!(freq.pop_min(), Some(("b", 1)));
//! assert_eq!(freq.pop_min(), Some(("c", 1)));
//! assert_eq!(freq.pop_min(), Some(("a", 2)));
//! ```

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    freq: u64,
    newer: Option<SlotId>,
    older: Option<SlotId>,
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
    newest: Option<SlotId>,
    oldest: Option<SlotId>,
    lower: Option<u64>,
    higher: Option<u64>,
}

/// Handle-addressed frequency buckets.
#[derive(Debug)]
pub struct BucketChain<T> {
    nodes: SlotArena<Node<T>>,
    buckets: FxHashMap<u64, Bucket>,
    lowest: Option<u64>,
}

impl<T> BucketChain<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotArena::with_capacity(capacity),
            buckets: FxHashMap::default(),
            lowest: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub fn frequency(&self, id: SlotId) -> Option<u64> {
        self.nodes.get(id).map(|node| node.freq)
    }

    /// Lowest frequency currently held.
    pub fn min_freq(&self) -> Option<u64> {
        self.lowest
    }

    /// Least recently touched node of the lowest bucket.
    pub fn peek_min(&self) -> Option<(SlotId, &T, u64)> {
        let id = self.buckets.get(&self.lowest?)?.oldest?;
        let node = self.nodes.get(id)?;
        Some((id, &node.value, node.freq))
    }

    /// Values at the minimum frequency, least recently touched first.
    pub fn iter_min(&self) -> MinBucketIter<'_, T> {
        let cursor = self
            .lowest
            .and_then(|freq| self.buckets.get(&freq))
            .and_then(|bucket| bucket.oldest);
        MinBucketIter {
            nodes: &self.nodes,
            cursor,
        }
    }

    /// Adds `value` at frequency 1 as the most recently touched node.
    pub fn insert(&mut self, value: T) -> SlotId {
        let id = self.nodes.insert(Node {
            value,
            freq: 1,
            newer: None,
            older: None,
        });
        self.ensure_bucket(1, None);
        self.push_newest(1, id);
        id
    }

    /// Bumps the frequency of `id` and returns the new value. At `u64::MAX`
    /// the count stays put and only recency is refreshed.
    pub fn touch(&mut self, id: SlotId) -> Option<u64> {
        let freq = self.nodes.get(id)?.freq;
        let target = freq.saturating_add(1);
        let lower = self.detach(id)?;
        if let Some(node) = self.nodes.get_mut(id) {
            node.freq = target;
        }
        self.ensure_bucket(target, lower);
        self.push_newest(target, id);
        Some(target)
    }

    /// Drops `id`, returning its value and last frequency.
    pub fn remove(&mut self, id: SlotId) -> Option<(T, u64)> {
        self.detach(id)?;
        self.nodes.remove(id).map(|node| (node.value, node.freq))
    }

    pub fn pop_min(&mut self) -> Option<(T, u64)> {
        let id = self.peek_min().map(|(id, _, _)| id)?;
        self.remove(id)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.buckets.clear();
        self.lowest = None;
    }

    /// Unlinks `id` from its bucket, dropping the bucket if it empties.
    ///
    /// Returns the frequency a bucket for `freq + 1` should follow: `freq`
    /// itself if its bucket survived, otherwise that bucket's lower neighbour.
    fn detach(&mut self, id: SlotId) -> Option<Option<u64>> {
        let node = self.nodes.get_mut(id)?;
        let (freq, newer, older) = (node.freq, node.newer.take(), node.older.take());

        match newer.and_then(|n| self.nodes.get_mut(n)) {
            Some(newer_node) => newer_node.older = older,
            None => {
                if let Some(bucket) = self.buckets.get_mut(&freq) {
                    bucket.newest = older;
                }
            },
        }
        match older.and_then(|o| self.nodes.get_mut(o)) {
            Some(older_node) => older_node.newer = newer,
            None => {
                if let Some(bucket) = self.buckets.get_mut(&freq) {
                    bucket.oldest = newer;
                }
            },
        }

        let bucket = *self.buckets.get(&freq)?;
        if bucket.newest.is_some() {
            return Some(Some(freq));
        }

        self.buckets.remove(&freq);
        match bucket.lower {
            Some(lower) => {
                if let Some(below) = self.buckets.get_mut(&lower) {
                    below.higher = bucket.higher;
                }
            },
            None => self.lowest = bucket.higher,
        }
        if let Some(above) = bucket.higher.and_then(|h| self.buckets.get_mut(&h)) {
            above.lower = bucket.lower;
        }
        Some(bucket.lower)
    }

    /// Creates bucket `freq` directly above `lower` (or at the bottom) unless
    /// it already exists.
    fn ensure_bucket(&mut self, freq: u64, lower: Option<u64>) {
        if self.buckets.contains_key(&freq) {
            return;
        }
        let higher = match lower {
            Some(l) => self.buckets.get(&l).and_then(|b| b.higher),
            None => self.lowest,
        };
        self.buckets.insert(
            freq,
            Bucket {
                newest: None,
                oldest: None,
                lower,
                higher,
            },
        );
        match lower {
            Some(l) => {
                if let Some(below) = self.buckets.get_mut(&l) {
                    below.higher = Some(freq);
                }
            },
            None => self.lowest = Some(freq),
        }
        if let Some(above) = higher.and_then(|h| self.buckets.get_mut(&h)) {
            above.lower = Some(freq);
        }
    }

    fn push_newest(&mut self, freq: u64, id: SlotId) {
        let Some(bucket) = self.buckets.get_mut(&freq) else {
            return;
        };
        let previous = bucket.newest.replace(id);
        if previous.is_none() {
            bucket.oldest = Some(id);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.newer = None;
            node.older = previous;
        }
        if let Some(prev_node) = previous.and_then(|p| self.nodes.get_mut(p)) {
            prev_node.newer = Some(id);
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.is_empty() {
            assert!(self.buckets.is_empty());
            assert_eq!(self.lowest, None);
            return;
        }

        let mut counted = 0usize;
        let mut visited = 0usize;
        let mut below: Option<u64> = None;
        let mut cursor = self.lowest;
        while let Some(freq) = cursor {
            let bucket = self.buckets.get(&freq).expect("linked bucket missing");
            assert_eq!(bucket.lower, below, "bucket chain back link");
            if let Some(lower) = below {
                assert!(freq > lower, "bucket chain out of order");
            }
            assert!(bucket.newest.is_some(), "empty bucket left linked");

            let mut newer = None;
            let mut node_cursor = bucket.newest;
            while let Some(id) = node_cursor {
                let node = self.nodes.get(id).expect("bucket node missing");
                assert_eq!(node.freq, freq);
                assert_eq!(node.newer, newer);
                counted += 1;
                newer = Some(id);
                node_cursor = node.older;
            }
            assert_eq!(bucket.oldest, newer);

            visited += 1;
            below = Some(freq);
            cursor = bucket.higher;
        }
        assert_eq!(visited, self.buckets.len());
        assert_eq!(counted, self.len());
    }
}

impl<T> Default for BucketChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the minimum-frequency bucket from its oldest node to its newest.
pub struct MinBucketIter<'a, T> {
    nodes: &'a SlotArena<Node<T>>,
    cursor: Option<SlotId>,
}

impl<'a, T> Iterator for MinBucketIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.newer;
        Some(&node.value)
    }
}

/// Key-addressed [`BucketChain`].
#[derive(Debug)]
pub struct FrequencyBuckets<K> {
    chain: BucketChain<K>,
    index: FxHashMap<K, SlotId>,
}

impl<K> FrequencyBuckets<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: BucketChain::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.chain.frequency(*self.index.get(key)?)
    }

    pub fn min_freq(&self) -> Option<u64> {
        self.chain.min_freq()
    }

    /// Eviction candidate `(key, freq)` without removing it.
    pub fn peek_min(&self) -> Option<(&K, u64)> {
        self.chain.peek_min().map(|(_, key, freq)| (key, freq))
    }

    /// Keys at the minimum frequency, least recently touched first.
    pub fn iter_min(&self) -> MinBucketIter<'_, K> {
        self.chain.iter_min()
    }

    /// Starts tracking `key` at frequency 1; `false` if already tracked.
    pub fn insert(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let id = self.chain.insert(key.clone());
        self.index.insert(key, id);
        true
    }

    /// Increments the frequency of `key` and returns the new value.
    pub fn touch(&mut self, key: &K) -> Option<u64> {
        self.chain.touch(*self.index.get(key)?)
    }

    /// Stops tracking `key` and returns its last frequency.
    pub fn remove(&mut self, key: &K) -> Option<u64> {
        let id = self.index.remove(key)?;
        self.chain.remove(id).map(|(_, freq)| freq)
    }

    /// Removes and returns the eviction candidate.
    pub fn pop_min(&mut self) -> Option<(K, u64)> {
        let (key, freq) = self.chain.pop_min()?;
        self.index.remove(&key);
        Some((key, freq))
    }

    pub fn clear(&mut self) {
        self.chain.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.chain.debug_validate_invariants();
        assert_eq!(self.index.len(), self.chain.len());
        for (key, &id) in &self.index {
            assert!(self.chain.get(id) == Some(key), "key map points at wrong node");
        }
    }
}

impl<K> Default for FrequencyBuckets<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
