//! Failure paths
//!
//! Every rejected call leaves the destination untouched, leaves the reader
//! unread and never writes.

use crate::common::*;
use bigdecimal::BigDecimal;
use bson::spec::ElementType;
use bson::Bson;
use bsonbridge::{
    BsonReader, BsonWriter, CodecError, DecimalCodec, RawReader, Registry, Slot, Source,
    TimeCodec, ValueDecoder, ValueEncoder, WireError,
};
use chrono::{DateTime, Utc};
use std::error::Error as _;

#[test]
fn decode_target_mismatch_never_reads() {
    let value = date_time(5);
    let mut reader = BsonReader::new(&value);
    let mut dest = dec("1.1");

    let err = TimeCodec
        .decode_value(&mut reader, Slot::new(&mut dest))
        .unwrap_err();

    assert!(err.is_type_mismatch());
    assert!(err.to_string().contains("timeDecodeValue"));
    assert!(err.to_string().contains("BigDecimal"));
    assert!(!reader.is_consumed());
    assert_eq!(dest, dec("1.1"));
}

#[test]
fn wrong_wire_tag_never_reads() {
    for value in [Bson::Double(1.5), Bson::Null, date_time(1)] {
        let mut reader = BsonReader::new(&value);
        let mut dest = BigDecimal::from(1);

        let err = DecimalCodec
            .decode_value(&mut reader, Slot::new(&mut dest))
            .unwrap_err();

        match err {
            CodecError::WrongWireType { actual, .. } => assert_eq!(actual, value.element_type()),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!reader.is_consumed());
        assert_eq!(dest, BigDecimal::from(1));
    }
}

#[test]
fn wrong_wire_tag_message_names_tag() {
    let value = Bson::String("2024-01-01".to_string());
    let err = TimeCodec.decode(&mut BsonReader::new(&value)).unwrap_err();

    assert!(matches!(
        err,
        CodecError::WrongWireType {
            actual: ElementType::String,
            ..
        }
    ));
    assert!(err
        .to_string()
        .starts_with("received invalid BSON type to decode into"));
}

#[test]
fn encode_source_mismatch_never_writes() {
    let mut writer = BsonWriter::new();
    let err = DecimalCodec
        .encode_value(&mut writer, Source::new(&1.25f64))
        .unwrap_err();

    assert!(matches!(
        err,
        CodecError::EncodeSourceMismatch { received: "f64", .. }
    ));
    assert!(writer.value().is_none());
}

#[test]
fn malformed_raw_document_is_delegated() {
    let mut bytes = raw_document("at", date_time(1));
    // Claim more bytes than present
    bytes[0] = bytes[0].wrapping_add(4);

    let err: CodecError = RawReader::from_document(&bytes, "at").unwrap_err().into();
    assert!(matches!(err, CodecError::Wire(WireError::Raw(_))));
}

#[test]
fn parse_failure_is_passed_through() {
    let value = Bson::Decimal128(d128("Infinity"));
    let mut dest = BigDecimal::default();

    let err = Registry::default()
        .decode(&mut BsonReader::new(&value), &mut dest)
        .unwrap_err();

    match &err {
        CodecError::Delegated(inner) => assert_eq!(err.to_string(), inner.to_string()),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(dest, BigDecimal::default());
}

#[test]
fn out_of_range_date_time() {
    let value = date_time(i64::MIN);
    let mut dest = DateTime::<Utc>::default();

    let err = Registry::default()
        .decode(&mut BsonReader::new(&value), &mut dest)
        .unwrap_err();

    assert!(matches!(err, CodecError::OutOfRange { .. }));
    assert!(err.source().is_none());
    assert_eq!(dest, DateTime::<Utc>::default());
}
