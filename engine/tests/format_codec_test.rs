/*
 * FORMAT BENCH - CODEC CONSISTENCY TEST
 * =================================================================
 * Component Name: engine/tests/format_codec_test.rs
 * Core Responsibility: كل صيغة تعيد نفس عدد السجلات الذي رمّزته.
 * =================================================================
 */

use format_bench::formats::{codec_for, Format};
use format_bench::utils::config_loader::DatasetConfig;
use format_bench::{generate_people, Person};

fn dataset(records: usize) -> Vec<Person> {
    generate_people(&DatasetConfig {
        records,
        seed: Some(2024),
        ..DatasetConfig::default()
    })
}

#[test]
fn every_format_decodes_every_record() {
    let people = dataset(2_000);
    for format in Format::ALL {
        let codec = codec_for(format).unwrap();
        let bytes = codec.encode(&people).unwrap();
        assert!(!bytes.is_empty(), "{} produced no bytes", format);
        assert_eq!(codec.decode(&bytes).unwrap(), people.len(), "{} lost records", format);
    }
}

#[test]
fn binary_formats_are_smaller_than_json() {
    let people = dataset(1_000);
    let size = |f: Format| codec_for(f).unwrap().encode(&people).unwrap().len();

    let json = size(Format::Json);
    assert!(size(Format::Protobuf) < json);
    assert!(size(Format::Avro) < json);
}

#[test]
fn encoding_is_deterministic_for_a_seeded_dataset() {
    let a = dataset(300);
    let b = dataset(300);
    for format in [Format::Protobuf, Format::Json] {
        let codec = codec_for(format).unwrap();
        assert_eq!(codec.encode(&a).unwrap(), codec.encode(&b).unwrap());
    }
}

#[test]
fn decoding_another_formats_bytes_fails() {
    let people = dataset(50);
    let json = codec_for(Format::Json).unwrap().encode(&people).unwrap();

    assert!(codec_for(Format::Avro).unwrap().decode(&json).is_err());

    let proto = codec_for(Format::Protobuf).unwrap().encode(&people).unwrap();
    assert!(codec_for(Format::Json).unwrap().decode(&proto).is_err());
}
