/*
 * FORMAT BENCH - RESULT REPORT
 * =================================================================
 * Component Name: engine/src/bench/report.rs
 * Core Responsibility: عرض النتائج للمستخدم وحفظها بصيغة JSON.
 * =================================================================
 */

use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use super::latency_tracker::TimingSummary;
use crate::error::BenchResult;
use crate::formats::Format;

const MIB: f64 = 1024.0 * 1024.0;

/// نتائج صيغة واحدة
#[derive(Debug, Clone, Serialize)]
pub struct FormatReport {
    pub format: Format,
    pub records: usize,
    pub size_bytes: usize,
    pub encode: TimingSummary,
    pub decode: TimingSummary,
    /// Peak heap above the pre-encode baseline.
    pub encode_peak_bytes: usize,
    /// Peak heap above the pre-decode baseline (encoded bytes already live).
    pub decode_peak_bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub records: usize,
    pub seed: Option<u64>,
    pub iterations: usize,
    pub formats: Vec<FormatReport>,
}

impl BenchmarkReport {
    pub fn get(&self, format: Format) -> Option<&FormatReport> {
        self.formats.iter().find(|r| r.format == format)
    }

    /// The most compact format, ties going to the first one measured.
    pub fn smallest(&self) -> Option<&FormatReport> {
        self.formats
            .iter()
            .reduce(|best, r| if r.size_bytes < best.size_bytes { r } else { best })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for r in &self.formats {
            let label = r.format.label();
            out.push_str(&format!(
                "\n--- {label} ---\n\
                 {label} serialization size: {} bytes\n\
                 {label} serialization time: {:.2} seconds\n\
                 {label} memory usage: {:.2} MB\n\
                 {label} deserialization time: {:.2} seconds\n",
                r.size_bytes,
                r.encode.mean_secs,
                r.encode_peak_bytes as f64 / MIB,
                r.decode.mean_secs,
            ));
        }

        if let Some(smallest) = self.smallest() {
            out.push_str(&format!(
                "\n--- Summary ({} records, {} run(s)) ---\n",
                self.records, self.iterations
            ));
            out.push_str(&format!(
                "{:<10} {:>14} {:>9} {:>12} {:>12} {:>11}\n",
                "Format", "Size (bytes)", "x Size", "Encode (s)", "Decode (s)", "Peak (MB)"
            ));
            for r in &self.formats {
                let ratio = if smallest.size_bytes == 0 {
                    1.0
                } else {
                    r.size_bytes as f64 / smallest.size_bytes as f64
                };
                out.push_str(&format!(
                    "{:<10} {:>14} {:>9.2} {:>12.4} {:>12.4} {:>11.2}\n",
                    r.format.label(),
                    r.size_bytes,
                    ratio,
                    r.encode.mean_secs,
                    r.decode.mean_secs,
                    r.encode_peak_bytes.max(r.decode_peak_bytes) as f64 / MIB,
                ));
            }
        }

        out.push_str("\nDeserialization successful\n");
        out
    }

    /// حفظ التقرير كملف JSON (ينشئ المجلدات الناقصة)
    pub fn write_json(&self, path: &Path) -> BenchResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self).map_err(std::io::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(secs: f64) -> TimingSummary {
        TimingSummary { runs: 1, min_secs: secs, mean_secs: secs, max_secs: secs }
    }

    fn report() -> BenchmarkReport {
        BenchmarkReport {
            records: 2,
            seed: Some(1),
            iterations: 1,
            formats: vec![
                FormatReport {
                    format: Format::Json,
                    records: 2,
                    size_bytes: 300,
                    encode: timing(0.25),
                    decode: timing(0.5),
                    encode_peak_bytes: 3 * 1024 * 1024,
                    decode_peak_bytes: 1024,
                },
                FormatReport {
                    format: Format::Protobuf,
                    records: 2,
                    size_bytes: 100,
                    encode: timing(0.01),
                    decode: timing(0.02),
                    encode_peak_bytes: 0,
                    decode_peak_bytes: 0,
                },
            ],
        }
    }

    #[test]
    fn text_uses_reference_line_layout() {
        let text = report().render_text();
        assert!(text.contains("\n--- JSON ---\n"));
        assert!(text.contains("JSON serialization size: 300 bytes\n"));
        assert!(text.contains("JSON serialization time: 0.25 seconds\n"));
        assert!(text.contains("JSON memory usage: 3.00 MB\n"));
        assert!(text.contains("JSON deserialization time: 0.50 seconds\n"));
        assert!(text.contains("Protobuf serialization size: 100 bytes\n"));
        assert!(text.ends_with("Deserialization successful\n"));
    }

    #[test]
    fn smallest_and_ratio() {
        let r = report();
        assert_eq!(r.smallest().unwrap().format, Format::Protobuf);
        let text = r.render_text();
        let json_row = text
            .lines()
            .find(|l| l.starts_with("JSON ") && !l.contains(':'))
            .unwrap();
        assert!(json_row.contains("3.00"), "JSON is 3x the smallest: {}", json_row);
    }

    #[test]
    fn json_file_is_written_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.json");
        report().write_json(&path).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["records"], 2);
        assert_eq!(value["formats"][0]["format"], "json");
        assert_eq!(value["formats"][1]["size_bytes"], 100);
    }
}
