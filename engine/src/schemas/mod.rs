// =================================================================
// FORMAT BENCH - SCHEMA BRIDGE
// =================================================================
// File: engine/src/schemas/mod.rs
// Status: Generated Code + Embedded Schemas
// المصدر: ../schemas/proto و ../schemas/avro
// =================================================================

pub mod avro;

// -----------------------------------------------------------------
// عقود Protobuf (prost)
// -----------------------------------------------------------------
// المصدر: schemas/proto/person.proto
#[allow(clippy::all)]
pub mod person;
