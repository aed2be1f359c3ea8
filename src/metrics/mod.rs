//! Counters, snapshots and export for cache instrumentation.
//!
//! Compiled only with the `metrics` feature. Recording happens inside
//! [`BoundedCache`](crate::cache::BoundedCache); reading goes through
//! [`MetricsSnapshotProvider`](traits::MetricsSnapshotProvider) and publishing
//! through [`MetricsExporter`](traits::MetricsExporter).

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::CacheMetrics;
pub use snapshot::CacheMetricsSnapshot;
pub use traits::{CoreMetricsRecorder, MetricsExporter, MetricsReset, MetricsSnapshotProvider};
