/*
 * FORMAT BENCH - BENCHMARK RUNNER
 * =================================================================
 * Component Name: engine/src/bench/runner.rs
 * Core Responsibility: لكل صيغة: ترميز، قياس، فك ترميز، قياس، تحقق.
 * Design Pattern: Linear Pipeline (no concurrency in the measured path)
 * =================================================================
 */

use tracing::{info, warn};

use super::latency_tracker::{LatencyTracker, Phase, ScopedTimer};
use super::report::{BenchmarkReport, FormatReport};
use crate::error::{BenchError, BenchResult};
use crate::formats::{codec_for, Format, FormatCodec};
use crate::hardware;
use crate::models::person::Person;
use crate::utils::config_loader::RunConfig;
use crate::utils::logger::{log_decoded, log_encoded};

pub struct BenchmarkRunner {
    formats: Vec<Format>,
    iterations: usize,
    tracker: LatencyTracker,
}

impl BenchmarkRunner {
    pub fn new(run: &RunConfig) -> Self {
        if run.iterations == 0 {
            warn!("run.iterations is 0 (config not validated?); running each format once");
        }
        Self {
            formats: run.formats.clone(),
            iterations: run.iterations.max(1),
            tracker: LatencyTracker::new(),
        }
    }

    pub fn tracker(&self) -> &LatencyTracker {
        &self.tracker
    }

    /// Runs every configured format in order over the same dataset.
    pub fn run(&self, people: &[Person], seed: Option<u64>) -> BenchResult<BenchmarkReport> {
        let mut formats = Vec::with_capacity(self.formats.len());
        for &format in &self.formats {
            let codec = codec_for(format)?;
            formats.push(self.run_format(codec.as_ref(), people)?);
        }

        Ok(BenchmarkReport {
            records: people.len(),
            seed,
            iterations: self.iterations,
            formats,
        })
    }

    pub fn run_format(&self, codec: &dyn FormatCodec, people: &[Person]) -> BenchResult<FormatReport> {
        let format = codec.format();
        info!(format = %format, records = people.len(), iterations = self.iterations, "--- {} ---", format.label());

        let mut size_bytes = 0;
        let mut encode_peak_bytes = 0;
        let mut decode_peak_bytes = 0;

        for iteration in 0..self.iterations {
            // أ. الترميز (Encode)
            let window = hardware::open_window();
            let encoded = {
                let _timer = ScopedTimer::new(&self.tracker, format, Phase::Encode);
                codec.encode(people)?
            };
            encode_peak_bytes = encode_peak_bytes.max(window.peak_above_baseline());

            if iteration > 0 && encoded.len() != size_bytes {
                warn!(format = %format, previous = size_bytes, current = encoded.len(), "size changed between runs");
            }
            size_bytes = encoded.len();
            log_encoded(format, size_bytes, self.last_ms(format, Phase::Encode));

            // ب. فك الترميز (Decode)
            let window = hardware::open_window();
            let decoded = {
                let _timer = ScopedTimer::new(&self.tracker, format, Phase::Decode);
                codec.decode(&encoded)?
            };
            decode_peak_bytes = decode_peak_bytes.max(window.peak_above_baseline());
            log_decoded(format, decoded, self.last_ms(format, Phase::Decode));

            // ج. التحقق (Verify)
            if decoded != people.len() {
                return Err(BenchError::Verification {
                    format,
                    expected: people.len(),
                    actual: decoded,
                });
            }
        }

        let summary = |phase: Phase| self.tracker.summary(format, phase).unwrap_or_default();
        Ok(FormatReport {
            format,
            records: people.len(),
            size_bytes,
            encode: summary(Phase::Encode),
            decode: summary(Phase::Decode),
            encode_peak_bytes,
            decode_peak_bytes,
        })
    }

    fn last_ms(&self, format: Format, phase: Phase) -> f64 {
        self.tracker
            .last(format, phase)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config_loader::DatasetConfig;
    use crate::models::person::generate_people;

    /// A codec that loses the last record on decode.
    struct LossyCodec;

    impl FormatCodec for LossyCodec {
        fn format(&self) -> Format {
            Format::Json
        }
        fn encode(&self, people: &[Person]) -> BenchResult<Vec<u8>> {
            Ok(vec![0u8; people.len()])
        }
        fn decode(&self, bytes: &[u8]) -> BenchResult<usize> {
            Ok(bytes.len().saturating_sub(1))
        }
    }

    fn dataset() -> Vec<Person> {
        generate_people(&DatasetConfig { records: 40, seed: Some(5), ..DatasetConfig::default() })
    }

    #[test]
    fn record_count_mismatch_is_reported() {
        let runner = BenchmarkRunner::new(&RunConfig::default());
        let err = runner.run_format(&LossyCodec, &dataset()).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Verification { format: Format::Json, expected: 40, actual: 39 }
        ));
    }

    #[test]
    fn zero_iterations_still_measures_once() {
        let run = RunConfig { formats: vec![Format::Json], iterations: 0, output: None };
        let report = BenchmarkRunner::new(&run).run(&dataset(), None).unwrap();
        assert_eq!(report.iterations, 1);
        assert_eq!(report.get(Format::Json).unwrap().encode.runs, 1);
    }

    #[test]
    fn iterations_accumulate_in_tracker() {
        let run = RunConfig { formats: vec![Format::Protobuf], iterations: 3, output: None };
        let runner = BenchmarkRunner::new(&run);
        let report = runner.run(&dataset(), Some(5)).unwrap();

        let pb = report.get(Format::Protobuf).unwrap();
        assert_eq!(pb.encode.runs, 3);
        assert_eq!(pb.decode.runs, 3);
        assert!(pb.size_bytes > 0);
        assert!(runner.tracker().get_report().contains("Protobuf Encode"));
    }
}
