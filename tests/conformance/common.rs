//! Shared helpers for the conformance suite.

#![allow(dead_code)]

use bigdecimal::BigDecimal;
use bson::{Bson, Decimal128, Document};
use std::str::FromStr;
use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output to the test harness.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

pub fn date_time(millis: i64) -> Bson {
    Bson::DateTime(bson::DateTime::from_millis(millis))
}

pub fn d128(s: &str) -> Decimal128 {
    s.parse().unwrap()
}

pub fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

/// Serialize a single-field document to raw bytes.
pub fn raw_document(key: &str, value: Bson) -> Vec<u8> {
    let mut doc = Document::new();
    doc.insert(key, value);
    bson::to_vec(&doc).unwrap()
}
