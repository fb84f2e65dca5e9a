//! Command-line flags. Every flag is optional and overrides the loaded config.

use clap::Parser;
use std::path::PathBuf;

use crate::formats::Format;
use crate::utils::config_loader::BenchConfig;

#[derive(Parser, Debug, Default)]
#[command(
    name = "compare_format",
    about = "Compare Protobuf, JSON and Avro: serialized size, latency and peak memory"
)]
pub struct Cli {
    /// TOML config file (defaults to ./bench.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of person records to generate
    #[arg(long)]
    pub records: Option<usize>,

    /// Seed for a reproducible dataset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Formats to run, in order, e.g. `protobuf,json,avro`
    #[arg(long, value_delimiter = ',')]
    pub formats: Option<Vec<Format>>,

    /// Encode/decode repetitions per format
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Write the report as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn apply(self, cfg: &mut BenchConfig) {
        if let Some(records) = self.records {
            cfg.dataset.records = records;
        }
        if let Some(seed) = self.seed {
            cfg.dataset.seed = Some(seed);
        }
        if let Some(formats) = self.formats {
            cfg.run.formats = formats;
        }
        if let Some(iterations) = self.iterations {
            cfg.run.iterations = iterations;
        }
        if let Some(output) = self.output {
            cfg.run.output = Some(output);
        }
        if let Some(level) = self.log_level {
            cfg.logging.level = level;
        }
    }
}
