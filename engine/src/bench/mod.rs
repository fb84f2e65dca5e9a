pub mod latency_tracker;
pub mod report;
pub mod runner;

pub use latency_tracker::{LatencyTracker, Phase, ScopedTimer, TimingSummary};
pub use report::{BenchmarkReport, FormatReport};
pub use runner::BenchmarkRunner;
