//! Value reader/writer abstraction over the `bson` crate
//!
//! Adapters never touch bytes directly. They ask a [`ValueReader`] for the
//! tag of the current value and for its payload, and hand results to a
//! [`ValueWriter`]. Two readers are provided:
//!
//! - [`BsonReader`]: over an already parsed [`Bson`] value
//! - [`RawReader`]: over an element of a raw BSON document
//!
//! and two writers:
//!
//! - [`BsonWriter`]: captures a single [`Bson`] value
//! - [`DocumentWriter`]: inserts into a [`Document`] under a fixed key
//!
//! Each reader yields its value once. Each writer accepts one value.

use bson::spec::ElementType;
use bson::{Bson, Decimal128, Document, RawBsonRef, RawDocument};
use thiserror::Error;

/// Errors raised by readers and writers
#[derive(Debug, Error)]
pub enum WireError {
    /// The requested payload does not match the current value's tag
    #[error("cannot read {requested:?} from a value of type {actual:?}")]
    TypeMismatch {
        /// Kind the caller asked for
        requested: ElementType,
        /// Kind actually present
        actual: ElementType,
    },

    /// The reader's value was already read
    #[error("value has already been read")]
    Consumed,

    /// The writer already holds a value
    #[error("a value has already been written")]
    AlreadyWritten,

    /// The requested element is not present in the document
    #[error("key not found in document: {0}")]
    MissingKey(String),

    /// Malformed raw BSON
    #[error(transparent)]
    Raw(#[from] bson::raw::Error),
}

/// Reads one tagged BSON value
pub trait ValueReader {
    /// Tag of the value the reader is positioned on
    fn element_type(&self) -> ElementType;

    /// Read a date-time as milliseconds since the Unix epoch
    fn read_date_time(&mut self) -> Result<i64, WireError>;

    /// Read a Decimal128
    fn read_decimal128(&mut self) -> Result<Decimal128, WireError>;
}

/// Writes one tagged BSON value
///
/// Only Decimal128 has an encoding adapter; date-times are written by the
/// driver itself (`bson::DateTime::from_chrono`).
pub trait ValueWriter {
    /// Write a Decimal128
    fn write_decimal128(&mut self, value: Decimal128) -> Result<(), WireError>;
}

// ============================================================================
// Readers
// ============================================================================

/// Reader over a parsed [`Bson`] value
#[derive(Debug)]
pub struct BsonReader<'a> {
    value: &'a Bson,
    consumed: bool,
}

impl<'a> BsonReader<'a> {
    /// Position a reader on `value`
    pub fn new(value: &'a Bson) -> Self {
        BsonReader {
            value,
            consumed: false,
        }
    }

    /// Whether the value has been read
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    fn take(&mut self, requested: ElementType) -> Result<&'a Bson, WireError> {
        if self.consumed {
            return Err(WireError::Consumed);
        }
        let actual = self.value.element_type();
        if actual != requested {
            return Err(WireError::TypeMismatch { requested, actual });
        }
        self.consumed = true;
        Ok(self.value)
    }
}

impl ValueReader for BsonReader<'_> {
    fn element_type(&self) -> ElementType {
        self.value.element_type()
    }

    fn read_date_time(&mut self) -> Result<i64, WireError> {
        match self.take(ElementType::DateTime)? {
            Bson::DateTime(dt) => Ok(dt.timestamp_millis()),
            other => Err(WireError::TypeMismatch {
                requested: ElementType::DateTime,
                actual: other.element_type(),
            }),
        }
    }

    fn read_decimal128(&mut self) -> Result<Decimal128, WireError> {
        match self.take(ElementType::Decimal128)? {
            Bson::Decimal128(d) => Ok(*d),
            other => Err(WireError::TypeMismatch {
                requested: ElementType::Decimal128,
                actual: other.element_type(),
            }),
        }
    }
}

/// Reader over a borrowed raw BSON element
#[derive(Debug)]
pub struct RawReader<'a> {
    value: RawBsonRef<'a>,
    consumed: bool,
}

impl<'a> RawReader<'a> {
    /// Position a reader on `value`
    pub fn new(value: RawBsonRef<'a>) -> Self {
        RawReader {
            value,
            consumed: false,
        }
    }

    /// Position a reader on the element `key` of the raw document in `bytes`
    ///
    /// Fails with [`WireError::Raw`] if the bytes are not a well-formed
    /// document, or [`WireError::MissingKey`] if the element is absent.
    pub fn from_document(bytes: &'a [u8], key: &str) -> Result<Self, WireError> {
        let doc = RawDocument::from_bytes(bytes)?;
        let value = doc
            .get(key)?
            .ok_or_else(|| WireError::MissingKey(key.to_string()))?;
        Ok(RawReader::new(value))
    }

    /// Whether the value has been read
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    fn take(&mut self, requested: ElementType) -> Result<RawBsonRef<'a>, WireError> {
        if self.consumed {
            return Err(WireError::Consumed);
        }
        let actual = self.value.element_type();
        if actual != requested {
            return Err(WireError::TypeMismatch { requested, actual });
        }
        self.consumed = true;
        Ok(self.value)
    }
}

impl ValueReader for RawReader<'_> {
    fn element_type(&self) -> ElementType {
        self.value.element_type()
    }

    fn read_date_time(&mut self) -> Result<i64, WireError> {
        match self.take(ElementType::DateTime)? {
            RawBsonRef::DateTime(dt) => Ok(dt.timestamp_millis()),
            other => Err(WireError::TypeMismatch {
                requested: ElementType::DateTime,
                actual: other.element_type(),
            }),
        }
    }

    fn read_decimal128(&mut self) -> Result<Decimal128, WireError> {
        match self.take(ElementType::Decimal128)? {
            RawBsonRef::Decimal128(d) => Ok(d),
            other => Err(WireError::TypeMismatch {
                requested: ElementType::Decimal128,
                actual: other.element_type(),
            }),
        }
    }
}

// ============================================================================
// Writers
// ============================================================================

/// Writer that captures a single [`Bson`] value
#[derive(Debug, Default)]
pub struct BsonWriter {
    value: Option<Bson>,
}

impl BsonWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// The written value, if any
    pub fn value(&self) -> Option<&Bson> {
        self.value.as_ref()
    }

    /// Consume the writer, returning the written value
    pub fn into_inner(self) -> Option<Bson> {
        self.value
    }

    fn put(&mut self, value: Bson) -> Result<(), WireError> {
        if self.value.is_some() {
            return Err(WireError::AlreadyWritten);
        }
        self.value = Some(value);
        Ok(())
    }
}

impl ValueWriter for BsonWriter {
    fn write_decimal128(&mut self, value: Decimal128) -> Result<(), WireError> {
        self.put(Bson::Decimal128(value))
    }
}

/// Writer that inserts into a document under a fixed key
#[derive(Debug)]
pub struct DocumentWriter<'a> {
    doc: &'a mut Document,
    key: String,
    written: bool,
}

impl<'a> DocumentWriter<'a> {
    /// Write the next value into `doc` under `key`
    ///
    /// An existing entry for `key` is replaced on write.
    pub fn new(doc: &'a mut Document, key: impl Into<String>) -> Self {
        DocumentWriter {
            doc,
            key: key.into(),
            written: false,
        }
    }

    fn put(&mut self, value: Bson) -> Result<(), WireError> {
        if self.written {
            return Err(WireError::AlreadyWritten);
        }
        self.doc.insert(self.key.clone(), value);
        self.written = true;
        Ok(())
    }
}

impl ValueWriter for DocumentWriter<'_> {
    fn write_decimal128(&mut self, value: Decimal128) -> Result<(), WireError> {
        self.put(Bson::Decimal128(value))
    }
}
