//! Embedded Avro schema for the `PersonList` container record.

use apache_avro::Schema;

/// المصدر: schemas/avro/person_list.avsc
pub const PERSON_LIST_SCHEMA: &str = include_str!("../../../schemas/avro/person_list.avsc");

pub fn person_list_schema() -> Result<Schema, apache_avro::Error> {
    Schema::parse_str(PERSON_LIST_SCHEMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_schema_parses_as_record() {
        let schema = person_list_schema().unwrap();
        assert!(matches!(schema, Schema::Record(_)));
    }
}
