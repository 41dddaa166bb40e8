//! Value adapters for BSON date-times and Decimal128
//!
//! - [`TimeCodec`]: BSON date-time -> `chrono::DateTime<Utc>` (decode only)
//! - [`DecimalCodec`]: BSON Decimal128 <-> `bigdecimal::BigDecimal`
//! - [`Registry`]: maps concrete types to adapters for dispatch
//! - [`CodecConfig`]: selects the adapters a registry is built with

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod decimal;
pub mod registry;
pub mod time;

pub use config::{AdapterConfig, CodecConfig, CONFIG_FILE_NAME};
pub use decimal::{
    decimal128_from_decimal, decimal_from_decimal128, DecimalCodec, DECIMAL_DECODE_NAME,
    DECIMAL_ENCODE_NAME,
};
pub use registry::{Registry, RegistryBuilder};
pub use time::{time_from_millis, TimeCodec, TIME_DECODE_NAME};
