use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{CoreMetricsRecorder, MetricsReset, ReadMetricsRecorder};

/// Counters carried by every [`BoundedCache`](crate::cache::BoundedCache).
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub clears: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl CacheMetrics {
    pub fn new() -> CacheMetrics {
        CacheMetrics::default()
    }

    /// Fraction of `get` calls that hit, or `0.0` before the first call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}

impl CoreMetricsRecorder for CacheMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl ReadMetricsRecorder for &CacheMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}

impl MetricsReset for CacheMetrics {
    fn reset_metrics(&mut self) {
        *self = CacheMetrics::default();
    }
}
