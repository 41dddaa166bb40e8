//! Registry construction and dispatch

use crate::common::*;
use bigdecimal::BigDecimal;
use bson::Bson;
use bsonbridge::{
    BsonReader, BsonWriter, CodecConfig, CodecError, DecimalCodec, Registry, Slot, Source,
    TimeCodec, ValueDecoder, CONFIG_FILE_NAME,
};
use chrono::{DateTime, Utc};
use tempfile::TempDir;

#[test]
fn registry_from_config_file() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[adapters]\ntime = false\n").unwrap();

    let config = CodecConfig::from_file(&path).unwrap();
    let registry = Registry::from_config(&config);

    assert!(!registry.has_decoder::<DateTime<Utc>>());
    assert!(registry.has_decoder::<BigDecimal>());

    let value = date_time(1);
    let mut dest = DateTime::<Utc>::default();
    let err = registry
        .decode(&mut BsonReader::new(&value), &mut dest)
        .unwrap_err();
    assert!(matches!(err, CodecError::NoDecoder(name) if name.contains("DateTime")));
}

#[test]
fn explicit_registration_mirrors_default() {
    init_tracing();
    let registry = Registry::builder()
        .register_type_decoder::<DateTime<Utc>>(TimeCodec)
        .register_type_decoder::<BigDecimal>(DecimalCodec)
        .register_type_encoder::<BigDecimal>(DecimalCodec)
        .build();

    assert_eq!(format!("{:?}", registry), format!("{:?}", Registry::default()));
}

#[test]
fn dynamic_slot_and_source_dispatch() {
    let registry = Registry::default();

    let wire = Bson::Decimal128(d128("0.10"));
    let mut amount = BigDecimal::default();
    registry
        .decode_slot(&mut BsonReader::new(&wire), Slot::new(&mut amount))
        .unwrap();
    assert_eq!(amount, dec("0.1"));

    let mut writer = BsonWriter::new();
    registry
        .encode_source(&mut writer, Source::new(&amount))
        .unwrap();
    assert_eq!(writer.into_inner(), Some(wire));
}

#[test]
fn time_has_no_encoder() {
    let registry = Registry::default();
    let mut writer = BsonWriter::new();

    let err = registry
        .encode(&mut writer, &DateTime::<Utc>::default())
        .unwrap_err();
    assert!(matches!(err, CodecError::NoEncoder(_)));
    assert!(registry.lookup_encoder::<DateTime<Utc>>().is_none());
    assert!(registry.lookup_decoder::<DateTime<Utc>>().is_some());
}

#[test]
fn looked_up_decoder_is_usable() {
    let registry = Registry::default();
    let decoder = registry.lookup_decoder::<BigDecimal>().unwrap();

    let wire = Bson::Decimal128(d128("7"));
    let mut dest = BigDecimal::default();
    decoder
        .decode_value(&mut BsonReader::new(&wire), Slot::new(&mut dest))
        .unwrap();
    assert_eq!(dest, BigDecimal::from(7));
}
