//! Avro codec: one object container file holding a single `PersonList` record.

use apache_avro::{Reader, Schema, Writer};
use serde::{Deserialize, Serialize};

use super::{Format, FormatCodec};
use crate::error::{BenchError, BenchResult};
use crate::models::person::Person;
use crate::schemas::avro::person_list_schema;

#[derive(Serialize)]
struct PersonListRef<'a> {
    people: &'a [Person],
}

#[derive(Deserialize)]
struct PersonList {
    people: Vec<Person>,
}

pub struct AvroCodec {
    schema: Schema,
}

impl AvroCodec {
    pub fn new() -> BenchResult<Self> {
        let schema = person_list_schema()
            .map_err(|e| BenchError::Config(format!("Avro schema rejected: {}", e)))?;
        Ok(Self { schema })
    }
}

impl FormatCodec for AvroCodec {
    fn format(&self) -> Format {
        Format::Avro
    }

    fn encode(&self, people: &[Person]) -> BenchResult<Vec<u8>> {
        let mut writer = Writer::new(&self.schema, Vec::new());
        writer
            .append_ser(PersonListRef { people })
            .map_err(|e| BenchError::encode(Format::Avro, e))?;
        writer.into_inner().map_err(|e| BenchError::encode(Format::Avro, e))
    }

    /// Streams the container: each record is counted then dropped.
    fn decode(&self, bytes: &[u8]) -> BenchResult<usize> {
        let reader = Reader::new(bytes).map_err(|e| BenchError::decode(Format::Avro, e))?;

        let mut total = 0;
        for value in reader {
            let value = value.map_err(|e| BenchError::decode(Format::Avro, e))?;
            let record: PersonList =
                apache_avro::from_value(&value).map_err(|e| BenchError::decode(Format::Avro, e))?;
            total += record.people.len();
        }
        Ok(total)
    }
}
