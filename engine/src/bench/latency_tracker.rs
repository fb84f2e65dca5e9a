// Nanosecond Timer

/*
 * FORMAT BENCH - LATENCY TRACKER
 * =================================================================
 * Component Name: engine/src/bench/latency_tracker.rs
 * Core Responsibility: تتبع زمن الترميز وفك الترميز لكل صيغة بدقة النانوثانية.
 * Design Pattern: Keyed Aggregation / RAII Timer
 * =================================================================
 */

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::formats::Format;

/// مرحلة القياس
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Encode,
    Decode,
}

#[derive(Debug, Default, Clone, Copy)]
struct LatencyBuckets {
    count: u64,
    min_ns: u64,
    max_ns: u64,
    sum_ns: u64,
    last_ns: u64,
}

/// Aggregated timings of one `(format, phase)` pair, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TimingSummary {
    pub runs: u64,
    pub min_secs: f64,
    pub mean_secs: f64,
    pub max_secs: f64,
}

#[derive(Debug, Default)]
pub struct LatencyTracker {
    stats: RwLock<HashMap<(Format, Phase), LatencyBuckets>>,
}

fn as_secs(ns: u64) -> f64 {
    ns as f64 / 1_000_000_000.0
}

impl LatencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, format: Format, phase: Phase, elapsed: Duration) {
        let duration_ns = elapsed.as_nanos() as u64;

        let mut map = self.stats.write();
        let bucket = map.entry((format, phase)).or_default();

        if bucket.count == 0 || duration_ns < bucket.min_ns {
            bucket.min_ns = duration_ns;
        }
        if duration_ns > bucket.max_ns {
            bucket.max_ns = duration_ns;
        }
        bucket.count += 1;
        bucket.sum_ns += duration_ns;
        bucket.last_ns = duration_ns;
    }

    pub fn summary(&self, format: Format, phase: Phase) -> Option<TimingSummary> {
        let map = self.stats.read();
        let bucket = map.get(&(format, phase)).filter(|b| b.count > 0)?;
        Some(TimingSummary {
            runs: bucket.count,
            min_secs: as_secs(bucket.min_ns),
            mean_secs: as_secs(bucket.sum_ns / bucket.count),
            max_secs: as_secs(bucket.max_ns),
        })
    }

    /// Most recent sample, used for per-run log lines.
    pub fn last(&self, format: Format, phase: Phase) -> Option<Duration> {
        let map = self.stats.read();
        map.get(&(format, phase))
            .filter(|b| b.count > 0)
            .map(|b| Duration::from_nanos(b.last_ns))
    }

    pub fn get_report(&self) -> String {
        let map = self.stats.read();
        let mut keys: Vec<_> = map.keys().copied().collect();
        keys.sort_by_key(|(format, phase)| (format.to_string(), *phase));

        let mut report = String::from("\n--- LATENCY REPORT (Nanoseconds) ---\n");
        for key in keys {
            let bucket = &map[&key];
            if bucket.count == 0 {
                continue;
            }
            report.push_str(&format!(
                "{} {:?}:\n  Count: {}\n  Avg: {} ns\n  Min: {} ns\n  Max: {} ns\n",
                key.0.label(),
                key.1,
                bucket.count,
                bucket.sum_ns / bucket.count,
                bucket.min_ns,
                bucket.max_ns,
            ));
        }
        report
    }
}

/// مساعد لقياس النطاق تلقائياً (RAII Timer)
/// The elapsed time is recorded when the value goes out of scope.
pub struct ScopedTimer<'a> {
    tracker: &'a LatencyTracker,
    format: Format,
    phase: Phase,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(tracker: &'a LatencyTracker, format: Format, phase: Phase) -> Self {
        Self {
            tracker,
            format,
            phase,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        self.tracker.record(self.format, self.phase, self.start.elapsed());
    }
}
