//! Index-addressed node storage for the order structures.
//!
//! [`IntrusiveList`](crate::ds::IntrusiveList) and
//! [`BucketChain`](crate::ds::BucketChain) link their nodes by
//! [`SlotId`] instead of by pointer. A vacated slot becomes the head of a
//! vacancy chain threaded through the vacated slots themselves, so reuse needs
//! no side allocation.
//!
//! ```text
//!   slots:  [Occupied a] [Vacant ─► 3] [Occupied c] [Vacant ─► none]
//!   free:   1
//! ```

/// Handle to one slot of a [`SlotArena`].
///
/// Ids are reused after removal; holders must drop an id once its node is
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    occupied: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            occupied: 0,
        }
    }

    /// Stores `value`, reusing the most recently vacated slot if there is one.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.occupied += 1;
        match self.free {
            Some(idx) => {
                if let Slot::Vacant { next_free } = self.slots[idx] {
                    self.free = next_free;
                }
                self.slots[idx] = Slot::Occupied(value);
                SlotId(idx)
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                SlotId(self.slots.len() - 1)
            },
        }
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let vacated = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(id.0);
        self.occupied -= 1;
        match vacated {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Drops every value and forgets all ids; keeps the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }

    #[cfg(test)]
    fn vacancies(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.free;
        while let Some(idx) = cursor {
            count += 1;
            cursor = match self.slots[idx] {
                Slot::Vacant { next_free } => next_free,
                Slot::Occupied(_) => panic!("occupied slot on vacancy chain"),
            };
        }
        count
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
