//! Protobuf codec backed by the prost messages in `schemas::person`.

use prost::Message;

use super::{Format, FormatCodec};
use crate::error::{BenchError, BenchResult};
use crate::models::person::Person;
use crate::schemas::person as pb;

pub struct ProtobufCodec;

impl FormatCodec for ProtobufCodec {
    fn format(&self) -> Format {
        Format::Protobuf
    }

    fn encode(&self, people: &[Person]) -> BenchResult<Vec<u8>> {
        // The age travels in the `id` field of the contract.
        let list = pb::PersonList {
            people: people
                .iter()
                .map(|p| pb::Person {
                    name: p.name.clone(),
                    id: p.age,
                    active: p.active,
                    hobbies: p.hobbies.clone(),
                })
                .collect(),
        };
        Ok(list.encode_to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<usize> {
        let list = pb::PersonList::decode(bytes)
            .map_err(|e| BenchError::decode(Format::Protobuf, e))?;
        Ok(list.people.len())
    }
}
