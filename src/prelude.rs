pub use crate::basic::BasicCache;
pub use crate::builder::{Cache, CacheBuilder, CacheConfig};
pub use crate::cache::{BoundedCache, DEFAULT_CAPACITY};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentBoundedCache;
pub use crate::ds::{BucketChain, FrequencyBuckets, IndexMode, IntrusiveList, OrderedIndex, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{
    CacheMetricsSnapshot, MetricsExporter, MetricsSnapshotProvider, PrometheusTextExporter,
};
pub use crate::observer::{
    EvictionObserver, LogObserver, NoopObserver, RecordingObserver, WriterObserver,
};
pub use crate::policy::{EvictionPolicy, Fifo, Lfu, Lifo, Lru, Mru, PolicyKind};
pub use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};
