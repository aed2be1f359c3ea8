//! Eviction policies.
//!
//! A policy owns only ordering state: an [`OrderedIndex`] of the keys the cache
//! currently holds. Values live in [`BoundedCache`](crate::cache::BoundedCache),
//! which calls the hooks below and asks for a victim when a new key arrives at
//! a full cache.
//!
//! | Policy   | Index mode  | `on_update` | `on_read` | Victim                        |
//! |----------|-------------|-------------|-----------|-------------------------------|
//! | [`Fifo`] | `Sequence`  | -           | -         | oldest insertion              |
//! | [`Lifo`] | `Sequence`  | to newest   | -         | newest insertion              |
//! | [`Lru`]  | `Sequence`  | to newest   | to newest | least recently touched        |
//! | [`Mru`]  | `Sequence`  | -           | to newest | most recently touched         |
//! | [`Lfu`]  | `Frequency` | count + 1   | count + 1 | lowest count, then LRU of ties|
//!
//! [`OrderedIndex`]: crate::ds::OrderedIndex

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::ds::{IndexMode, IntrusiveListIter, OrderedIndex};
use crate::error::ConfigError;

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;

pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lifo::Lifo;
pub use lru::Lru;
pub use mru::Mru;

/// Ordering strategy plugged into a [`BoundedCache`](crate::cache::BoundedCache).
///
/// The cache guarantees that `on_insert` is only called for keys the policy
/// does not track, and `on_update`/`on_read`/`on_remove` only for keys it
/// does.
pub trait EvictionPolicy<K> {
    /// Creates an empty policy sized for `capacity` keys.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    fn kind(&self) -> PolicyKind;

    /// A new key was stored.
    fn on_insert(&mut self, key: &K);

    /// An existing key received a new value.
    fn on_update(&mut self, key: &K);

    /// An existing key was read through `get`.
    fn on_read(&mut self, key: &K);

    /// Key to evict next, or `None` when nothing is tracked.
    fn select_victim(&self) -> Option<&K>;

    /// A key left the cache, by eviction or explicit removal.
    fn on_remove(&mut self, key: &K);

    fn clear(&mut self);

    /// The ordering state, for iteration and diagnostics.
    fn index(&self) -> &OrderedIndex<K>;

    fn len(&self) -> usize {
        self.index().len()
    }

    fn is_empty(&self) -> bool {
        self.index().is_empty()
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Runtime selector for the five built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyKind {
    Fifo,
    Lifo,
    #[default]
    Lru,
    Mru,
    Lfu,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Lfu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
            PolicyKind::Lfu => "lfu",
        }
    }

    /// Index mode the policy needs.
    pub fn index_mode(self) -> IndexMode {
        match self {
            PolicyKind::Lfu => IndexMode::Frequency,
            _ => IndexMode::Sequence,
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "unknown eviction policy {:?}; expected one of fifo, lifo, lru, mru, lfu",
                    s
                ))
            })
    }
}

/// Keys in policy order, oldest end first.
pub type PolicyKeys<'a, K> = IntrusiveListIter<'a, K>;

pub(crate) fn ordered_index<K: Clone + Eq + Hash>(
    kind: PolicyKind,
    capacity: usize,
) -> OrderedIndex<K> {
    OrderedIndex::with_capacity(kind.index_mode(), capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("FIFO".parse::<PolicyKind>(), Ok(PolicyKind::Fifo));
        assert_eq!(" lifo ".parse::<PolicyKind>(), Ok(PolicyKind::Lifo));
        assert_eq!("Lru".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!("mru".parse::<PolicyKind>(), Ok(PolicyKind::Mru));
        assert_eq!("LfU".parse::<PolicyKind>(), Ok(PolicyKind::Lfu));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "arc".parse::<PolicyKind>().unwrap_err();
        assert!(err.message().contains("\"arc\""));
        assert!("".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>(), Ok(kind));
        }
    }

    #[test]
    fn only_lfu_tracks_frequency() {
        for kind in PolicyKind::ALL {
            let expected = if kind == PolicyKind::Lfu {
                IndexMode::Frequency
            } else {
                IndexMode::Sequence
            };
            assert_eq!(kind.index_mode(), expected);
        }
        assert_eq!(PolicyKind::default(), PolicyKind::Lru);
    }

    // Only the trait bound; `K` itself is unconstrained.
    fn tracked<K, P: EvictionPolicy<K>>(policy: &P) -> (usize, bool) {
        (policy.len(), policy.is_empty())
    }

    #[test]
    fn default_len_reads_the_index() {
        let mut fifo: Fifo<u32> = Fifo::new();
        assert_eq!(tracked(&fifo), (0, true));
        fifo.on_insert(&1);
        fifo.on_insert(&2);
        assert_eq!(tracked(&fifo), (2, false));

        let mut lfu: Lfu<u32> = Lfu::new();
        lfu.on_insert(&1);
        lfu.on_read(&1);
        assert_eq!(tracked(&lfu), (1, false));
        lfu.on_remove(&1);
        assert_eq!(tracked(&lfu), (0, true));
    }
}
