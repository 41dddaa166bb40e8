//! bsonbridge - BSON value adapters for chrono and bigdecimal
//!
//! Two adapters bridge BSON wire values to Rust types the `bson` crate does
//! not decode natively:
//!
//! - [`TimeCodec`]: BSON date-time -> `chrono::DateTime<Utc>`
//! - [`DecimalCodec`]: BSON Decimal128 <-> `bigdecimal::BigDecimal`
//!
//! # Quick Start
//!
//! ```ignore
//! use bigdecimal::BigDecimal;
//! use bsonbridge::{BsonReader, Registry};
//!
//! let registry = Registry::default();
//!
//! let wire = bson::Bson::Decimal128("123.4500".parse()?);
//! let mut amount = BigDecimal::default();
//! registry.decode(&mut BsonReader::new(&wire), &mut amount)?;
//! ```
//!
//! # Architecture
//!
//! `bsonbridge-core` holds the seams (errors, reader/writer, slots and the
//! decoder/encoder traits). `bsonbridge-codecs` holds the adapters, the
//! registry and its configuration. Both are re-exported here.

pub use bsonbridge_codecs::*;
pub use bsonbridge_core::*;
