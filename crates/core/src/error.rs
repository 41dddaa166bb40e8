//! Error types for value conversion
//!
//! Every failure of a decode/encode call surfaces as a [`CodecError`].
//! We use `thiserror` for the `Display` and `Error` implementations.
//!
//! ## Error Kinds
//!
//! - **Type mismatch**: the slot or source is not the adapter's declared type
//! - **Wrong wire tag**: the value on the wire carries a different BSON type
//! - **Delegated**: the reader, writer or a parser failed; passed through unchanged

use crate::wire::WireError;
use bson::spec::ElementType;
use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Boxed error from a delegated library call
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for value adapters and the registry
#[derive(Debug, Error)]
pub enum CodecError {
    /// Destination slot does not hold the decoder's declared type
    #[error("{name} can only decode valid and settable {expected}, but got {received}")]
    DecodeTargetMismatch {
        /// Adapter operation name
        name: &'static str,
        /// Type the adapter decodes into
        expected: &'static str,
        /// Declared type of the slot that was passed in
        received: &'static str,
    },

    /// Source value is not the encoder's declared type
    #[error("{name} can only encode valid {expected}, but got {received}")]
    EncodeSourceMismatch {
        /// Adapter operation name
        name: &'static str,
        /// Type the adapter encodes from
        expected: &'static str,
        /// Declared type of the source that was passed in
        received: &'static str,
    },

    /// Reader is positioned on a value with an unexpected BSON tag
    #[error("received invalid BSON type to decode into {target}: {actual:?}")]
    WrongWireType {
        /// Type the adapter decodes into
        target: &'static str,
        /// Tag found on the wire
        actual: ElementType,
    },

    /// Wire value cannot be represented by the target type
    #[error("value {value} is out of range for {target}")]
    OutOfRange {
        /// Type the adapter decodes into
        target: &'static str,
        /// Offending wire value, rendered
        value: String,
    },

    /// Reader or writer failure
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Failure from a delegated library call (string parsing)
    #[error(transparent)]
    Delegated(BoxError),

    /// No decoder registered for the destination type
    #[error("no decoder found for {0}")]
    NoDecoder(&'static str),

    /// No encoder registered for the source type
    #[error("no encoder found for {0}")]
    NoEncoder(&'static str),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CodecError {
    /// Wrap a library error without altering its message or source chain.
    pub fn delegated<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CodecError::Delegated(Box::new(err))
    }

    /// Check whether this is one of the two type mismatch kinds
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            CodecError::DecodeTargetMismatch { .. } | CodecError::EncodeSourceMismatch { .. }
        )
    }
}
