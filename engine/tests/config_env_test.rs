/*
 * FORMAT BENCH - ENVIRONMENT LAYER TEST
 * =================================================================
 * Component Name: engine/tests/config_env_test.rs
 * Core Responsibility: متغيرات BENCH__* تتغلب على ملف الإعدادات.
 * Note: single test in its own binary; env vars are process-wide.
 * =================================================================
 */

use std::io::Write;

use format_bench::formats::Format;
use format_bench::BenchConfig;

#[test]
fn env_overrides_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[dataset]\nrecords = 250\nseed = 3\n\n[run]\nformats = [\"protobuf\"]\n"
    )
    .unwrap();

    std::env::set_var("BENCH__DATASET__RECORDS", "1234");
    std::env::set_var("BENCH__RUN__FORMATS", "json,Avro");

    let loaded = BenchConfig::load(Some(file.path()));

    std::env::remove_var("BENCH__DATASET__RECORDS");
    std::env::remove_var("BENCH__RUN__FORMATS");

    let cfg = loaded.unwrap();
    assert_eq!(cfg.dataset.records, 1234, "env beats the file");
    assert_eq!(cfg.dataset.seed, Some(3), "file still beats defaults");
    assert_eq!(cfg.run.formats, vec![Format::Json, Format::Avro]);
    cfg.validate().unwrap();
}
