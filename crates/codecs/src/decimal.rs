//! BSON Decimal128 to arbitrary-precision decimal adapter
//!
//! The two representations never meet directly. Both directions go through
//! a decimal string:
//!
//! ```text
//! decode: Decimal128 --Display--> "123.4500"  --parse--> BigDecimal
//! encode: BigDecimal --digits, scale--> "1234500E-4" --parse--> Decimal128
//! ```
//!
//! `BigDecimal` is an unbounded coefficient plus an `i64` scale, so every
//! finite Decimal128 (34 digits, exponent -6176..=6111) decodes exactly and
//! keeps its trailing zeros. The encode string is built from the coefficient
//! and scale rather than from `BigDecimal`'s `Display`, so the wire exponent
//! comes back unchanged: decode then encode is the identity for every finite
//! value except negative zero, which `BigDecimal` cannot represent.
//!
//! `NaN` and the infinities fail to decode, and values with more than 34
//! significant digits fail to encode. Both carry the parser's own error.

use bigdecimal::BigDecimal;
use bson::Decimal128;
use bsonbridge_core::{
    CodecError, CodecResult, ElementType, Slot, Source, ValueDecoder, ValueEncoder, ValueReader,
    ValueWriter,
};
use std::any::type_name;
use std::str::FromStr;

/// Operation name reported in target mismatch errors
pub const DECIMAL_DECODE_NAME: &str = "decimalDecodeValue";

/// Operation name reported in source mismatch errors
pub const DECIMAL_ENCODE_NAME: &str = "decimalEncodeValue";

/// Convert a Decimal128 into a `BigDecimal` via its canonical string
///
/// Plain (`"123.4500"`) and exponent (`"1.0E-10"`, `"1E+3"`) forms parse
/// exactly; the scale of the result is the negated wire exponent.
///
/// # Errors
///
/// Returns the `bigdecimal` parse error, wrapped as `Delegated`.
pub fn decimal_from_decimal128(value: &Decimal128) -> CodecResult<BigDecimal> {
    BigDecimal::from_str(&value.to_string()).map_err(CodecError::delegated)
}

/// Convert a `BigDecimal` into a Decimal128
///
/// # Errors
///
/// Returns the `bson` parse error, wrapped as `Delegated`, when the value
/// needs more than 34 significant digits or its exponent is out of range.
pub fn decimal128_from_decimal(value: &BigDecimal) -> CodecResult<Decimal128> {
    let (coefficient, scale) = value.as_bigint_and_exponent();
    let exponent = scale.checked_neg().ok_or_else(|| CodecError::OutOfRange {
        target: type_name::<Decimal128>(),
        value: format!("scale {}", scale),
    })?;
    format!("{}E{:+}", coefficient, exponent)
        .parse::<Decimal128>()
        .map_err(CodecError::delegated)
}

fn target_mismatch(received: &'static str) -> CodecError {
    CodecError::DecodeTargetMismatch {
        name: DECIMAL_DECODE_NAME,
        expected: type_name::<BigDecimal>(),
        received,
    }
}

/// Decodes and encodes `bigdecimal::BigDecimal` as BSON Decimal128
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalCodec;

impl DecimalCodec {
    /// Read the current Decimal128 from `reader`
    ///
    /// Fails with `WrongWireType` without reading if the reader is not on a
    /// Decimal128. Reader and parse errors are returned unchanged.
    pub fn decode(&self, reader: &mut dyn ValueReader) -> CodecResult<BigDecimal> {
        let actual = reader.element_type();
        if actual != ElementType::Decimal128 {
            return Err(CodecError::WrongWireType {
                target: type_name::<BigDecimal>(),
                actual,
            });
        }
        let wire = reader.read_decimal128()?;
        decimal_from_decimal128(&wire)
    }

    /// Write `value` to `writer` as a Decimal128
    pub fn encode(&self, value: &BigDecimal, writer: &mut dyn ValueWriter) -> CodecResult<()> {
        let wire = decimal128_from_decimal(value)?;
        writer.write_decimal128(wire)?;
        Ok(())
    }
}

impl ValueDecoder for DecimalCodec {
    fn decode_value(&self, reader: &mut dyn ValueReader, slot: Slot<'_>) -> CodecResult<()> {
        let received = slot.type_name();
        if !slot.is::<BigDecimal>() {
            return Err(target_mismatch(received));
        }
        let value = self.decode(reader)?;
        slot.set(value).map_err(|_| target_mismatch(received))
    }
}

impl ValueEncoder for DecimalCodec {
    fn encode_value(&self, writer: &mut dyn ValueWriter, source: Source<'_>) -> CodecResult<()> {
        let value = source
            .downcast_ref::<BigDecimal>()
            .ok_or(CodecError::EncodeSourceMismatch {
                name: DECIMAL_ENCODE_NAME,
                expected: type_name::<BigDecimal>(),
                received: source.type_name(),
            })?;
        self.encode(value, writer)
    }
}
