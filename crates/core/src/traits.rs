//! Core traits for value adapters
//!
//! This module defines the ValueDecoder and ValueEncoder traits that a
//! type registry dispatches to. An adapter registered for a type implements
//! one or both.

use crate::error::CodecResult;
use crate::slot::{Slot, Source};
use crate::wire::{ValueReader, ValueWriter};

/// Decodes a tagged wire value into a destination slot
///
/// Thread safety: adapters are shared by every user of a registry, so they
/// must be `Send + Sync`.
///
/// # Contract
///
/// Implementations check, in order:
/// 1. The slot holds the declared type, else `DecodeTargetMismatch`
/// 2. The reader's tag is the expected one, else `WrongWireType`
///
/// Only then do they read, convert and write the slot. A failed call must
/// leave the slot as it was.
pub trait ValueDecoder: Send + Sync {
    /// Decode the reader's current value into `slot`
    ///
    /// # Errors
    ///
    /// Returns a type mismatch or wrong tag error from the checks above, or
    /// any reader/parse error unchanged.
    fn decode_value(&self, reader: &mut dyn ValueReader, slot: Slot<'_>) -> CodecResult<()>;
}

/// Encodes a source value through a writer
///
/// # Contract
///
/// Implementations verify the source's declared type before any write and
/// fail with `EncodeSourceMismatch` otherwise.
pub trait ValueEncoder: Send + Sync {
    /// Encode `source` into `writer`
    ///
    /// # Errors
    ///
    /// Returns `EncodeSourceMismatch`, or any parse/writer error unchanged.
    fn encode_value(&self, writer: &mut dyn ValueWriter, source: Source<'_>) -> CodecResult<()>;
}
