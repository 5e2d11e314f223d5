//! # Record Errors
//!
//! Error types for decoding, building and verifying node records.

use thiserror::Error;

/// Result alias for record operations.
pub type EnrResult<T> = Result<T, EnrError>;

/// Errors that can occur while decoding, building or verifying a record.
///
/// No operation returns a partially constructed record alongside an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnrError {
    /// Structural violation: bad RLP, odd pair count, non-minimal integer,
    /// non-canonical key order, missing mandatory attribute
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Encoded record exceeds the size bound
    #[error("Record too large: {size} bytes exceeds limit of {limit}")]
    RecordTooLarge {
        /// Encoded size in bytes
        size: usize,
        /// Effective limit in bytes
        limit: usize,
    },

    /// Signature does not verify against the recomputed content
    #[error("Invalid signature")]
    InvalidSignature,

    /// The injected signer reported an error
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// The `id` attribute names a scheme with no known verification procedure
    #[error("Unsupported identity scheme: {0:?}")]
    UnsupportedScheme(String),
}

impl EnrError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord(reason.into())
    }
}

impl From<rlp::DecoderError> for EnrError {
    fn from(err: rlp::DecoderError) -> Self {
        Self::MalformedRecord(err.to_string())
    }
}
