//! boundcache: a bounded in-memory key-value cache with pluggable eviction.
//!
//! One engine, [`BoundedCache`], is generic over an [`EvictionPolicy`]:
//! [`Fifo`], [`Lifo`], [`Lru`], [`Mru`] or [`Lfu`]. Policies keep only ordering
//! state in an [`OrderedIndex`](ds::OrderedIndex); values stay in the cache.
//! Every eviction is reported to an [`EvictionObserver`].
//!
//! ```
//! use boundcache::prelude::*;
//!
//! let mut cache: BoundedCache<&str, &str, Fifo<&str>, _> =
//!     BoundedCache::with_observer(2, WriterObserver::new(Vec::new()));
//! cache.put("A", "Hello");
//! cache.put("B", "World");
//! cache.put("C", "Again");
//!
//! assert_eq!(cache.get(&"A"), None);
//! assert_eq!(cache.listing().to_string(), "Current cache:\nB: World\nC: Again\n");
//! assert_eq!(cache.into_observer().into_inner(), b"DISCARD: A\n");
//! ```
//!
//! Features: `metrics` adds counters and a Prometheus text exporter,
//! `concurrency` adds [`ConcurrentBoundedCache`](concurrent::ConcurrentBoundedCache).

pub mod basic;
pub mod builder;
pub mod cache;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod ds;
pub mod error;
pub mod listing;
pub mod observer;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;

pub use basic::BasicCache;
pub use cache::{BoundedCache, DEFAULT_CAPACITY};
pub use observer::EvictionObserver;
pub use policy::{EvictionPolicy, Fifo, Lfu, Lifo, Lru, Mru, PolicyKind};
