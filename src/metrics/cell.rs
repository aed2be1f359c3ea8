use std::cell::Cell;

/// Counter that can be bumped through a shared reference.
///
/// Used for read paths such as `peek` that only borrow the cache. `Cell` is
/// `Send` but not `Sync`, so a cache holding these can move between threads
/// and can be shared only behind a lock.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incr_through_shared_ref() {
        let cell = MetricsCell::new();
        let shared = &cell;
        shared.incr();
        shared.incr();
        assert_eq!(cell.get(), 2);

        cell.reset();
        assert_eq!(cell.get(), 0);
    }
}
