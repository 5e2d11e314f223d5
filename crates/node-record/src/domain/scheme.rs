//! # Identity Schemes
//!
//! The `id` attribute names the procedure that authenticates a record.
//! Decode looks the scheme up here and refuses records it cannot verify
//! rather than accepting them unauthenticated.

use super::errors::{EnrError, EnrResult};
use super::{keys, v4, Attributes};

/// Identity schemes with a known verification procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityScheme {
    /// secp256k1 keys, Keccak-256 content hash, 64-byte `r || s` signatures
    V4,
}

impl IdentityScheme {
    /// Resolve a scheme from the raw `id` attribute value.
    pub fn from_id(id: &[u8]) -> EnrResult<Self> {
        if id == v4::SCHEME_ID {
            return Ok(Self::V4);
        }
        Err(EnrError::UnsupportedScheme(
            String::from_utf8_lossy(id).into_owned(),
        ))
    }

    /// Resolve the scheme a record's attributes claim.
    pub fn of(attributes: &Attributes) -> EnrResult<Self> {
        let id = attributes
            .get(keys::ID)
            .ok_or_else(|| EnrError::malformed("missing id attribute"))?;
        Self::from_id(id)
    }

    /// Value of the `id` attribute for this scheme.
    pub fn id(&self) -> &'static [u8] {
        match self {
            Self::V4 => v4::SCHEME_ID,
        }
    }

    /// Check `signature` over `payload` against the identity in `attributes`.
    pub fn verify(&self, attributes: &Attributes, payload: &[u8], signature: &[u8]) -> EnrResult<()> {
        match self {
            Self::V4 => v4::verify(attributes, payload, signature),
        }
    }
}
