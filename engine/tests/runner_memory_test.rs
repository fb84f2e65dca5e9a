/*
 * FORMAT BENCH - PEAK MEMORY REPORTING TEST
 * =================================================================
 * Component Name: engine/tests/runner_memory_test.rs
 * Core Responsibility: ذروة الذاكرة في التقرير تعكس التخصيصات الفعلية.
 * Note: single test in its own binary so no other thread allocates meanwhile.
 * =================================================================
 */

use format_bench::utils::config_loader::{DatasetConfig, RunConfig};
use format_bench::{generate_people, BenchmarkRunner};

#[test]
fn peaks_cover_the_encoded_output() {
    let people = generate_people(&DatasetConfig {
        records: 5_000,
        seed: Some(21),
        ..DatasetConfig::default()
    });
    let report = BenchmarkRunner::new(&RunConfig::default())
        .run(&people, Some(21))
        .unwrap();

    assert_eq!(report.formats.len(), 3);
    for r in &report.formats {
        // The encoded buffer itself is live when the encode window closes.
        assert!(
            r.encode_peak_bytes >= r.size_bytes,
            "{}: encode peak {} < size {}",
            r.format,
            r.encode_peak_bytes,
            r.size_bytes
        );
        assert!(r.decode_peak_bytes > 0, "{}: decode allocated nothing", r.format);
    }
}
