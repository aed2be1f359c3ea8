//! Eviction notification.
//!
//! A [`BoundedCache`](crate::cache::BoundedCache) calls
//! [`EvictionObserver::on_evict`] exactly once for every entry it evicts, at the
//! moment the entry is removed and before the incoming entry is stored. Explicit
//! `remove` and `clear` are not evictions and are not reported.
//!
//! | Observer              | Effect                                      |
//! |-----------------------|---------------------------------------------|
//! | [`NoopObserver`]      | nothing (default)                           |
//! | [`LogObserver`]       | `tracing` event at `INFO`, message `DISCARD`|
//! | [`WriterObserver`]    | `DISCARD: <key>` line to any `io::Write`    |
//! | [`RecordingObserver`] | keys appended to a shared buffer            |
//! | `FnMut(&K)`           | the closure                                 |

use std::fmt::{self, Debug, Display};
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

/// Receives the key of every evicted entry.
pub trait EvictionObserver<K> {
    fn on_evict(&mut self, key: &K);
}

impl<K, F> EvictionObserver<K> for F
where
    F: FnMut(&K),
{
    fn on_evict(&mut self, key: &K) {
        self(key)
    }
}

/// Ignores evictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<K> EvictionObserver<K> for NoopObserver {
    #[inline]
    fn on_evict(&mut self, _key: &K) {}
}

/// Emits one `tracing` event per eviction.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    cache_name: Option<&'static str>,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags every event with `cache = name`.
    pub fn named(name: &'static str) -> Self {
        Self {
            cache_name: Some(name),
        }
    }
}

impl<K: Debug> EvictionObserver<K> for LogObserver {
    fn on_evict(&mut self, key: &K) {
        match self.cache_name {
            Some(cache) => info!(cache, ?key, "DISCARD"),
            None => info!(?key, "DISCARD"),
        }
    }
}

/// Writes `DISCARD: <key>` lines.
///
/// ```
/// use boundcache::observer::WriterObserver;
/// use boundcache::policy::Fifo;
/// use boundcache::BoundedCache;
///
/// let mut cache: BoundedCache<&str, u32, Fifo<&str>, _> =
///     BoundedCache::with_observer(1, WriterObserver::new(Vec::new()));
/// cache.put("A", 1);
/// cache.put("B", 2);
///
/// let out = cache.into_observer().into_inner();
/// assert_eq!(String::from_utf8(out).unwrap(), "DISCARD: A\n");
/// ```
#[derive(Debug)]
pub struct WriterObserver<W: Write> {
    writer: W,
}

impl<W: Write> WriterObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterObserver<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<K: Display, W: Write> EvictionObserver<K> for WriterObserver<W> {
    fn on_evict(&mut self, key: &K) {
        // Notification cannot fail the cache operation that caused it.
        let _ = writeln!(self.writer, "DISCARD: {}", key);
    }
}

/// Collects evicted keys into a buffer shared by all of its clones.
///
/// Hand one clone to the cache and keep another to inspect what was evicted.
pub struct RecordingObserver<K> {
    evicted: Arc<Mutex<Vec<K>>>,
}

impl<K> RecordingObserver<K> {
    pub fn new() -> Self {
        Self {
            evicted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Copy of the keys evicted so far, in eviction order.
    pub fn evicted(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.evicted.lock().clone()
    }

    /// Returns and clears the recorded keys.
    pub fn take(&self) -> Vec<K> {
        std::mem::take(&mut *self.evicted.lock())
    }

    pub fn len(&self) -> usize {
        self.evicted.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.evicted.lock().is_empty()
    }
}

impl<K> Clone for RecordingObserver<K> {
    fn clone(&self) -> Self {
        Self {
            evicted: Arc::clone(&self.evicted),
        }
    }
}

impl<K> Default for RecordingObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug> Debug for RecordingObserver<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingObserver")
            .field("evicted", &*self.evicted.lock())
            .finish()
    }
}

impl<K: Clone> EvictionObserver<K> for RecordingObserver<K> {
    fn on_evict(&mut self, key: &K) {
        self.evicted.lock().push(key.clone());
    }
}
