use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::CacheMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the text exposition format, one `# TYPE` line per sample, so the
/// output can be served from a scrape endpoint or appended to a file.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_sample(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        // Export is best effort; a failing sink must not disturb the cache.
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_sample("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_sample("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<CacheMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &CacheMetricsSnapshot) {
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_updates_total", snapshot.insert_updates),
            ("insert_new_total", snapshot.insert_new),
            ("evict_calls_total", snapshot.evict_calls),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("clears_total", snapshot.clears),
            ("peek_calls_total", snapshot.peek_calls),
            ("peek_found_total", snapshot.peek_found),
        ];
        for (suffix, value) in counters {
            self.write_counter(&self.metric_name(suffix), value);
        }
        self.write_gauge(&self.metric_name("cache_len"), snapshot.cache_len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
