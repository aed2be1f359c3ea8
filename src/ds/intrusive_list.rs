//! Doubly linked list backed by [`SlotArena`].
//!
//! Nodes link to each other by [`SlotId`], so a caller holding an id can
//! unlink or re-append that node in O(1) without searching.
//!
//! ```text
//!   front                                            back
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! New nodes only enter at the back, and existing nodes only move to the
//! back. [`OrderedIndex`] reads the front as the oldest position and the back
//! as the newest.
//!
//! [`OrderedIndex`]: crate::ds::OrderedIndex

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug)]
pub struct IntrusiveList<T> {
    nodes: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
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

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Walks front to back; `.rev()` walks back to front.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Appends `value` and returns the id of its node.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.nodes.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.link_back(id);
        id
    }

    /// Relinks `id` at the back. Returns `false` for an unknown id.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.nodes.contains(id) {
            return false;
        }
        if self.tail != Some(id) {
            self.unlink(id);
            self.link_back(id);
        }
        true
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.nodes.contains(id) {
            return None;
        }
        self.unlink(id);
        self.nodes.remove(id).map(|node| node.value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    fn unlink(&mut self, id: SlotId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev.and_then(|p| self.nodes.get_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.nodes.get_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }
    }

    fn link_back(&mut self, id: SlotId) {
        let old_tail = self.tail.replace(id);
        if let Some(node) = self.nodes.get_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail.and_then(|t| self.nodes.get_mut(t)) {
            Some(tail_node) => tail_node.next = Some(id),
            None => self.head = Some(id),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());

        let mut walked = 0usize;
        let mut expected_prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.nodes.get(id).expect("linked id has no node");
            assert_eq!(node.prev, expected_prev, "broken back link");
            walked += 1;
            assert!(walked <= self.len(), "list walk exceeds node count");
            expected_prev = Some(id);
            cursor = node.next;
        }
        assert_eq!(expected_prev, self.tail);
        assert_eq!(walked, self.len());
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over an [`IntrusiveList`].
#[derive(Debug)]
pub struct IntrusiveListIter<'a, T> {
    nodes: &'a SlotArena<Node<T>>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<T> Clone for IntrusiveListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntrusiveListIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for IntrusiveListIter<'_, T> {}
