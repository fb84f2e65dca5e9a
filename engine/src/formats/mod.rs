/*
 * FORMAT BENCH - CODEC FACADE
 * =================================================================
 * Component Name: engine/src/formats/mod.rs
 * Core Responsibility: تعريف الصيغ الثلاث وواجهة الترميز الموحدة.
 * Design Pattern: Strategy (one codec per format)
 * =================================================================
 */

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BenchError, BenchResult};
use crate::models::person::Person;

pub mod avro;
pub mod json;
pub mod protobuf;

pub use avro::AvroCodec;
pub use json::JsonCodec;
pub use protobuf::ProtobufCodec;

// =================================================================
// الصيغ المدعومة (Supported Formats)
// =================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Protobuf, // ثنائي بمخطط
    Json,     // نصي
    Avro,     // صفوف بمخطط
}

impl Format {
    /// Benchmark order used when nothing else is configured.
    pub const ALL: [Format; 3] = [Format::Protobuf, Format::Json, Format::Avro];

    /// Label used in the printed report.
    pub fn label(&self) -> &'static str {
        match self {
            Format::Protobuf => "Protobuf",
            Format::Json => "JSON",
            Format::Avro => "Avro",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Protobuf => write!(f, "protobuf"),
            Format::Json => write!(f, "json"),
            Format::Avro => write!(f, "avro"),
        }
    }
}

impl FromStr for Format {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protobuf" | "proto" => Ok(Format::Protobuf),
            "json" => Ok(Format::Json),
            "avro" => Ok(Format::Avro),
            other => Err(BenchError::Config(format!("Unknown format: {}", other))),
        }
    }
}

/// Config files and env vars go through `FromStr`, so they accept any casing.
impl<'de> Deserialize<'de> for Format {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =================================================================
// واجهة الترميز (Codec Interface)
// =================================================================

pub trait FormatCodec {
    fn format(&self) -> Format;

    /// Converts the dataset into the format's object model and serializes it.
    fn encode(&self, people: &[Person]) -> BenchResult<Vec<u8>>;

    /// Parses `bytes` fully and returns how many person records came back.
    fn decode(&self, bytes: &[u8]) -> BenchResult<usize>;
}

pub fn codec_for(format: Format) -> BenchResult<Box<dyn FormatCodec>> {
    let codec: Box<dyn FormatCodec> = match format {
        Format::Protobuf => Box::new(ProtobufCodec),
        Format::Json => Box::new(JsonCodec),
        Format::Avro => Box::new(AvroCodec::new()?),
    };
    Ok(codec)
}
