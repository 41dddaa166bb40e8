//! Type registry mapping destination/source types to adapters
//!
//! A [`RegistryBuilder`] collects adapters keyed by the concrete Rust type
//! they handle; [`RegistryBuilder::build`] freezes them into a [`Registry`].
//! The registry is immutable, cheap to clone and safe to share between
//! threads.
//!
//! # Usage
//!
//! ```ignore
//! use bigdecimal::BigDecimal;
//! use bsonbridge_codecs::{DecimalCodec, Registry, TimeCodec};
//! use chrono::{DateTime, Utc};
//!
//! let registry = Registry::builder()
//!     .register_type_decoder::<DateTime<Utc>>(TimeCodec)
//!     .register_type_decoder::<BigDecimal>(DecimalCodec)
//!     .register_type_encoder::<BigDecimal>(DecimalCodec)
//!     .build();
//!
//! let mut when = DateTime::<Utc>::default();
//! registry.decode(&mut reader, &mut when)?;
//! ```

use crate::config::CodecConfig;
use crate::decimal::DecimalCodec;
use crate::time::TimeCodec;
use bigdecimal::BigDecimal;
use bsonbridge_core::{
    CodecError, CodecResult, Slot, Source, ValueDecoder, ValueEncoder, ValueReader, ValueWriter,
};
use chrono::{DateTime, Utc};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

struct Registered<C: ?Sized> {
    type_name: &'static str,
    codec: Arc<C>,
}

type DecoderMap = HashMap<TypeId, Registered<dyn ValueDecoder>>;
type EncoderMap = HashMap<TypeId, Registered<dyn ValueEncoder>>;

/// Collects adapters before building a [`Registry`]
#[derive(Default)]
pub struct RegistryBuilder {
    decoders: DecoderMap,
    encoders: EncoderMap,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `decoder` for destinations of type `T`
    ///
    /// Replaces any decoder already registered for `T`.
    pub fn register_type_decoder<T: Any>(
        mut self,
        decoder: impl ValueDecoder + 'static,
    ) -> Self {
        let type_name = type_name::<T>();
        let codec: Arc<dyn ValueDecoder> = Arc::new(decoder);
        let previous = self
            .decoders
            .insert(TypeId::of::<T>(), Registered { type_name, codec });
        if previous.is_some() {
            debug!(type_name, "Replaced type decoder");
        } else {
            debug!(type_name, "Registered type decoder");
        }
        self
    }

    /// Register `encoder` for sources of type `T`
    ///
    /// Replaces any encoder already registered for `T`.
    pub fn register_type_encoder<T: Any>(
        mut self,
        encoder: impl ValueEncoder + 'static,
    ) -> Self {
        let type_name = type_name::<T>();
        let codec: Arc<dyn ValueEncoder> = Arc::new(encoder);
        let previous = self
            .encoders
            .insert(TypeId::of::<T>(), Registered { type_name, codec });
        if previous.is_some() {
            debug!(type_name, "Replaced type encoder");
        } else {
            debug!(type_name, "Registered type encoder");
        }
        self
    }

    /// Freeze the registered adapters
    pub fn build(self) -> Registry {
        debug!(
            decoders = self.decoders.len(),
            encoders = self.encoders.len(),
            "Built type registry"
        );
        Registry {
            decoders: Arc::new(self.decoders),
            encoders: Arc::new(self.encoders),
        }
    }
}

/// Immutable mapping from concrete types to adapters
#[derive(Clone)]
pub struct Registry {
    decoders: Arc<DecoderMap>,
    encoders: Arc<EncoderMap>,
}

impl Registry {
    /// Start a new builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry with the adapters enabled in `config`
    ///
    /// - `adapters.time`: [`TimeCodec`] decoder for `DateTime<Utc>`
    /// - `adapters.decimal`: [`DecimalCodec`] decoder and encoder for `BigDecimal`
    pub fn from_config(config: &CodecConfig) -> Self {
        let mut builder = RegistryBuilder::new();
        if config.adapters.time {
            builder = builder.register_type_decoder::<DateTime<Utc>>(TimeCodec);
        }
        if config.adapters.decimal {
            builder = builder
                .register_type_decoder::<BigDecimal>(DecimalCodec)
                .register_type_encoder::<BigDecimal>(DecimalCodec);
        }
        builder.build()
    }

    /// Decode the reader's current value into `dest`
    ///
    /// # Errors
    ///
    /// Returns `NoDecoder` if nothing is registered for `T`, otherwise
    /// whatever the registered decoder returns.
    pub fn decode<T: Any>(&self, reader: &mut dyn ValueReader, dest: &mut T) -> CodecResult<()> {
        self.decode_slot(reader, Slot::new(dest))
    }

    /// Decode into a type-erased slot, dispatching on its declared type
    pub fn decode_slot(&self, reader: &mut dyn ValueReader, slot: Slot<'_>) -> CodecResult<()> {
        match self.decoders.get(&slot.type_id()) {
            Some(entry) => entry.codec.decode_value(reader, slot),
            None => {
                trace!(type_name = slot.type_name(), "No type decoder registered");
                Err(CodecError::NoDecoder(slot.type_name()))
            }
        }
    }

    /// Encode `value` through `writer`
    ///
    /// # Errors
    ///
    /// Returns `NoEncoder` if nothing is registered for `T`, otherwise
    /// whatever the registered encoder returns.
    pub fn encode<T: Any>(&self, writer: &mut dyn ValueWriter, value: &T) -> CodecResult<()> {
        self.encode_source(writer, Source::new(value))
    }

    /// Encode a type-erased source, dispatching on its declared type
    pub fn encode_source(&self, writer: &mut dyn ValueWriter, source: Source<'_>) -> CodecResult<()> {
        match self.encoders.get(&source.type_id()) {
            Some(entry) => entry.codec.encode_value(writer, source),
            None => {
                trace!(type_name = source.type_name(), "No type encoder registered");
                Err(CodecError::NoEncoder(source.type_name()))
            }
        }
    }

    /// Decoder registered for `T`, if any
    pub fn lookup_decoder<T: Any>(&self) -> Option<Arc<dyn ValueDecoder>> {
        self.decoders
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(&entry.codec))
    }

    /// Encoder registered for `T`, if any
    pub fn lookup_encoder<T: Any>(&self) -> Option<Arc<dyn ValueEncoder>> {
        self.encoders
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(&entry.codec))
    }

    /// Whether a decoder is registered for `T`
    pub fn has_decoder<T: Any>(&self) -> bool {
        self.decoders.contains_key(&TypeId::of::<T>())
    }

    /// Whether an encoder is registered for `T`
    pub fn has_encoder<T: Any>(&self) -> bool {
        self.encoders.contains_key(&TypeId::of::<T>())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::from_config(&CodecConfig::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut decoders: Vec<_> = self.decoders.values().map(|e| e.type_name).collect();
        let mut encoders: Vec<_> = self.encoders.values().map(|e| e.type_name).collect();
        decoders.sort_unstable();
        encoders.sort_unstable();
        f.debug_struct("Registry")
            .field("decoders", &decoders)
            .field("encoders", &encoders)
            .finish()
    }
}
