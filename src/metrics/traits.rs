//! # Metrics traits
//!
//! Recording, snapshotting and export are separate traits so the cache only
//! ever writes counters and consumers only ever read them.
//!
//! ```text
//!   BoundedCache ──records──► CoreMetricsRecorder (CacheMetrics)
//!        │
//!        └──snapshot()──► CacheMetricsSnapshot ──export()──► MetricsExporter
//! ```

/// Write side of the counters every policy shares.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters recorded from `&self` read paths.
pub trait ReadMetricsRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
