// FORMAT BENCH - ROOT LIBRARY
// Protobuf / JSON / Avro comparison harness.

// 1. تعريف الوحدات (Modules)
pub mod error;
pub mod utils;
pub mod models;
pub mod schemas;
pub mod formats;
pub mod hardware;
pub mod bench;
pub mod cli;

// 2. التصدير العام (Re-exports)
pub use error::{BenchError, BenchResult};
pub use formats::{codec_for, Format, FormatCodec};
pub use models::person::{generate_people, generate_random_person, Person};
pub use bench::{BenchmarkReport, BenchmarkRunner};
pub use utils::config_loader::BenchConfig;
pub use utils::logger::init_logger;

pub mod prelude {
    pub use crate::BenchError;
    pub use crate::Format;
    pub use crate::Person;
}
