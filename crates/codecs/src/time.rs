//! BSON date-time to calendar timestamp adapter
//!
//! BSON carries a date-time as signed 64-bit milliseconds since the Unix
//! epoch. [`TimeCodec`] turns that into a `chrono::DateTime<Utc>`:
//!
//! - seconds = millis div 1000
//! - nanoseconds = (millis mod 1000) * 1_000_000
//!
//! Division is Euclidean, so pre-epoch values keep nanoseconds in
//! `0..1_000_000_000` (`-1500` ms is second `-2`, nanosecond `500_000_000`).
//!
//! The adapter only decodes. Encoding a `DateTime<Utc>` goes through the
//! driver's own `bson::DateTime::from_chrono`.
//!
//! ## Usage
//!
//! ```ignore
//! use bsonbridge_codecs::{Registry, TimeCodec};
//! use chrono::{DateTime, Utc};
//!
//! let registry = Registry::builder()
//!     .register_type_decoder::<DateTime<Utc>>(TimeCodec)
//!     .build();
//! ```

use bsonbridge_core::{CodecError, CodecResult, ElementType, Slot, ValueDecoder, ValueReader};
use chrono::{DateTime, Utc};
use std::any::type_name;

/// Operation name reported in target mismatch errors
pub const TIME_DECODE_NAME: &str = "timeDecodeValue";

const MILLIS_PER_SEC: i64 = 1_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// Convert milliseconds since the Unix epoch into a UTC timestamp
///
/// # Errors
///
/// Returns `OutOfRange` if the instant is outside chrono's representable
/// range (roughly +/- 262,000 years).
pub fn time_from_millis(millis: i64) -> CodecResult<DateTime<Utc>> {
    let secs = millis.div_euclid(MILLIS_PER_SEC);
    // rem_euclid is in 0..1000, so the cast and multiply cannot overflow
    let nanos = millis.rem_euclid(MILLIS_PER_SEC) as u32 * NANOS_PER_MILLI;
    DateTime::<Utc>::from_timestamp(secs, nanos).ok_or_else(|| CodecError::OutOfRange {
        target: type_name::<DateTime<Utc>>(),
        value: millis.to_string(),
    })
}

fn target_mismatch(received: &'static str) -> CodecError {
    CodecError::DecodeTargetMismatch {
        name: TIME_DECODE_NAME,
        expected: type_name::<DateTime<Utc>>(),
        received,
    }
}

/// Decodes BSON date-times into `chrono::DateTime<Utc>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeCodec;

impl TimeCodec {
    /// Read the current date-time from `reader`
    ///
    /// Fails with `WrongWireType` without reading if the reader is not on a
    /// date-time. Reader errors are returned unchanged.
    pub fn decode(&self, reader: &mut dyn ValueReader) -> CodecResult<DateTime<Utc>> {
        let actual = reader.element_type();
        if actual != ElementType::DateTime {
            return Err(CodecError::WrongWireType {
                target: type_name::<DateTime<Utc>>(),
                actual,
            });
        }
        let millis = reader.read_date_time()?;
        time_from_millis(millis)
    }
}

impl ValueDecoder for TimeCodec {
    fn decode_value(&self, reader: &mut dyn ValueReader, slot: Slot<'_>) -> CodecResult<()> {
        let received = slot.type_name();
        if !slot.is::<DateTime<Utc>>() {
            return Err(target_mismatch(received));
        }
        let value = self.decode(reader)?;
        slot.set(value).map_err(|_| target_mismatch(received))
    }
}
