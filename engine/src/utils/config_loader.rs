// Layered Config

/*
 * FORMAT BENCH - LAYERED CONFIGURATION LOADER
 * =================================================================
 * Component Name: engine/src/utils/config_loader.rs
 * Core Responsibility: تحميل إعدادات القياس من الملف والبيئة وسطر الأوامر.
 * Precedence: defaults < bench.toml < BENCH__* env < CLI flags
 * =================================================================
 */

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{BenchError, BenchResult};
use crate::formats::Format;

pub const DEFAULT_CONFIG_FILE: &str = "bench.toml";
pub const ENV_PREFIX: &str = "BENCH";

// =================================================================
// تعريفات هيكل الإعدادات (Configuration Schema)
// =================================================================

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BenchConfig {
    pub dataset: DatasetConfig,
    pub run: RunConfig,
    pub logging: LogConfig,
}

/// حدود توليد البيانات العشوائية
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub records: usize,
    pub name_len: usize,
    pub hobby_len: usize,
    pub min_hobbies: usize,
    pub max_hobbies: usize,
    pub min_age: i32,
    pub max_age: i32,
    /// Fixed seed for a reproducible dataset. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            records: 100_000,
            name_len: 10,
            hobby_len: 8,
            min_hobbies: 1,
            max_hobbies: 5,
            min_age: 1,
            max_age: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub formats: Vec<Format>,
    pub iterations: usize,
    /// Where to write the JSON report, if anywhere.
    pub output: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            formats: Format::ALL.to_vec(),
            iterations: 1,
            output: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub dir: String,
    pub file_name: String,
    pub level: String,
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: "./logs".to_string(),
            file_name: "compare_format.log".to_string(),
            level: "info".to_string(),
            console: true,
        }
    }
}

// =================================================================
// التحميل والتحقق (Loading & Validation)
// =================================================================

impl BenchConfig {
    /// Loads defaults, then the TOML file, then `BENCH__SECTION__KEY` variables.
    /// `BENCH__RUN__FORMATS` takes a comma-separated list.
    ///
    /// An explicit `path` must exist; the implicit `bench.toml` is optional.
    pub fn load(path: Option<&Path>) -> BenchResult<Self> {
        let (source, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let settings = Config::builder()
            .add_source(File::from(source.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("run.formats"),
            )
            .build()
            .map_err(|e| BenchError::Config(format!("Build Error: {}", e)))?;

        settings
            .try_deserialize::<BenchConfig>()
            .map_err(|e| BenchError::Config(format!("Parse Error: {}", e)))
    }

    pub fn validate(&self) -> BenchResult<()> {
        let d = &self.dataset;
        if d.name_len == 0 {
            return Err(BenchError::Config("dataset.name_len must be at least 1".into()));
        }
        if d.hobby_len == 0 {
            return Err(BenchError::Config("dataset.hobby_len must be at least 1".into()));
        }
        if d.min_hobbies > d.max_hobbies {
            return Err(BenchError::Config(format!(
                "dataset.min_hobbies ({}) exceeds dataset.max_hobbies ({})",
                d.min_hobbies, d.max_hobbies
            )));
        }
        if d.min_age > d.max_age {
            return Err(BenchError::Config(format!(
                "dataset.min_age ({}) exceeds dataset.max_age ({})",
                d.min_age, d.max_age
            )));
        }

        let r = &self.run;
        if r.iterations == 0 {
            return Err(BenchError::Config("run.iterations must be at least 1".into()));
        }
        if r.formats.is_empty() {
            return Err(BenchError::Config("run.formats must name at least one format".into()));
        }
        let mut seen = HashSet::new();
        for format in &r.formats {
            if !seen.insert(*format) {
                return Err(BenchError::Config(format!("run.formats lists {} twice", format)));
            }
        }
        Ok(())
    }
}
