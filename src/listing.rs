//! Human-readable dump of cache contents.
//!
//! ```text
//! Current cache:
//! A: Hello
//! B: World
//! ```
//!
//! Entries are sorted by key, independent of hash map or policy order.

use std::fmt::{self, Display};

/// `Display` adapter returned by `listing()` on the caches.
#[derive(Debug, Clone)]
pub struct Listing<'a, K, V> {
    entries: Vec<(&'a K, &'a V)>,
}

impl<'a, K: Ord, V> Listing<'a, K, V> {
    pub(crate) fn new(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Self {
        let mut entries: Vec<_> = entries.collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Display, V: Display> Display for Listing<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current cache:")?;
        for (key, value) in &self.entries {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}
