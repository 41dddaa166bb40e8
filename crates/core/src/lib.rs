//! Core types and traits for bsonbridge
//!
//! This crate defines the seams the value adapters plug into:
//! - CodecError: Error type for decode/encode calls
//! - Slot / Source: Type-erased decode destinations and encode sources
//! - ValueReader / ValueWriter: Tagged BSON value access
//! - ValueDecoder / ValueEncoder: Adapter traits a registry dispatches to

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod slot;
pub mod traits;
pub mod wire;

pub use error::{BoxError, CodecError, CodecResult};
pub use slot::{Slot, Source};
pub use traits::{ValueDecoder, ValueEncoder};
pub use wire::{
    BsonReader, BsonWriter, DocumentWriter, RawReader, ValueReader, ValueWriter, WireError,
};

// Wire types owned by the driver
pub use bson::spec::ElementType;
pub use bson::Decimal128;
