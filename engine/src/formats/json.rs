//! Compact JSON codec (no insignificant whitespace).

use super::{Format, FormatCodec};
use crate::error::{BenchError, BenchResult};
use crate::models::person::Person;

pub struct JsonCodec;

impl FormatCodec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, people: &[Person]) -> BenchResult<Vec<u8>> {
        serde_json::to_vec(people).map_err(|e| BenchError::encode(Format::Json, e))
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<usize> {
        let people: Vec<Person> =
            serde_json::from_slice(bytes).map_err(|e| BenchError::decode(Format::Json, e))?;
        Ok(people.len())
    }
}
