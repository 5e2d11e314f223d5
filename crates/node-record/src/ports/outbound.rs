//! # Outbound Ports (Driven Ports / SPI)
//!
//! The signing strategy a record builder depends on.

use thiserror::Error;

/// Failure reported by a signing strategy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SignerError(pub String);

/// Strategy that turns a record's signing payload into a signature.
///
/// The payload is the RLP list encoding of the record content. A signer is
/// invoked exactly once per build and must finish before the build returns;
/// it may have side effects (a hardware key store, a remote signer).
///
/// Any `Fn(&[u8]) -> Result<Vec<u8>, SignerError>` is a signer:
///
/// ```rust
/// use node_record::{Attributes, NodeRecord, SignerError};
///
/// let fixed = |_: &[u8]| -> Result<Vec<u8>, SignerError> { Ok(vec![0u8; 64]) };
/// let record = NodeRecord::build(1, Attributes::new(), &fixed).unwrap();
/// assert_eq!(record.signature(), &[0u8; 64][..]);
/// ```
pub trait RecordSigner {
    /// Sign the given payload.
    ///
    /// # Errors
    /// * `SignerError` - The strategy could not produce a signature
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError>;
}

impl<F> RecordSigner for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, SignerError>,
{
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError> {
        self(payload)
    }
}
