//! Cryptographic security for the v4 identity scheme.
//!
//! SECURITY-CRITICAL: This file contains all signing and verification logic.
//! Isolate for security audits.
//!
//! - Content hash: Keccak-256 of the signing payload
//! - Signature: secp256k1 ECDSA over the hash, RFC 6979 nonces, low-S,
//!   encoded as `r || s` (64 bytes, no recovery id)
//! - Identity: 33-byte compressed public key in the `secp256k1` attribute

use std::fmt;

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};

use crate::domain::errors::{EnrError, EnrResult};
use crate::domain::{keys, Attributes};
use crate::ports::outbound::{RecordSigner, SignerError};

/// `id` attribute value of the v4 scheme.
pub const SCHEME_ID: &[u8] = b"v4";

/// Length of a v4 signature (r || s).
pub const SIGNATURE_LEN: usize = 64;

/// Length of a compressed secp256k1 public key.
pub const PUBLIC_KEY_LEN: usize = 33;

/// v4 signing strategy bound to a secp256k1 secret key.
#[derive(Clone)]
pub struct V4Signer {
    signing_key: SigningKey,
}

impl V4Signer {
    /// Bind a signer to an existing secret key.
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Generate a signer with a fresh random secret key.
    pub fn random() -> Self {
        Self::new(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Create from secret key bytes (32 bytes).
    ///
    /// # Errors
    /// * `EnrError::SigningFailed` - bytes are zero or not below the curve order
    pub fn from_bytes(bytes: [u8; 32]) -> EnrResult<Self> {
        let signing_key = SigningKey::from_bytes((&bytes).into())
            .map_err(|_| EnrError::SigningFailed("invalid secp256k1 secret key".to_string()))?;
        Ok(Self::new(signing_key))
    }

    /// The secret key this signer uses.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Compressed public key (33 bytes), the value of the `secp256k1` attribute.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        compressed_public_key(self.signing_key.verifying_key())
    }
}

impl fmt::Debug for V4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("V4Signer")
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

impl RecordSigner for V4Signer {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError> {
        let hash = keccak256(payload);
        let signature: Signature = self
            .signing_key
            .sign_prehash(&hash)
            .map_err(|e| SignerError(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }
}

/// Verify a v4 signature over `payload` against the record's `secp256k1` key.
///
/// An absent or wrongly sized key attribute is a structural defect of the
/// record. A key of the right size that fails to parse is an authentication
/// failure, same as a signature that does not verify.
///
/// # Errors
/// * `EnrError::MalformedRecord` - key attribute missing or not 33 bytes
/// * `EnrError::InvalidSignature` - key is not a curve point, signature is
///   not 64 valid bytes, or it does not verify
pub fn verify(attributes: &Attributes, payload: &[u8], signature: &[u8]) -> EnrResult<()> {
    let verifying_key = parse_public_key(attributes)?;

    if signature.len() != SIGNATURE_LEN {
        return Err(EnrError::InvalidSignature);
    }
    let signature = Signature::from_slice(signature).map_err(|_| EnrError::InvalidSignature)?;

    // EIP-2: only the low-S form is accepted
    if signature.normalize_s().is_some() {
        return Err(EnrError::InvalidSignature);
    }

    verifying_key
        .verify_prehash(&keccak256(payload), &signature)
        .map_err(|_| EnrError::InvalidSignature)
}

/// v4 node identifier: Keccak-256 of the uncompressed public key (x || y).
pub fn node_id(attributes: &Attributes) -> EnrResult<[u8; 32]> {
    let verifying_key = parse_public_key(attributes)?;
    let point = verifying_key.to_encoded_point(false);
    // Skip the 0x04 prefix
    Ok(keccak256(&point.as_bytes()[1..]))
}

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

fn parse_public_key(attributes: &Attributes) -> EnrResult<VerifyingKey> {
    let key_bytes = attributes
        .get(keys::SECP256K1)
        .ok_or_else(|| EnrError::malformed("v4 record missing secp256k1 attribute"))?;

    if key_bytes.len() != PUBLIC_KEY_LEN {
        return Err(EnrError::malformed(format!(
            "secp256k1 attribute must be {} bytes, got {}",
            PUBLIC_KEY_LEN,
            key_bytes.len()
        )));
    }

    VerifyingKey::from_sec1_bytes(key_bytes).map_err(|_| EnrError::InvalidSignature)
}

fn compressed_public_key(verifying_key: &VerifyingKey) -> [u8; PUBLIC_KEY_LEN] {
    let point = verifying_key.to_encoded_point(true);
    // SEC1 compressed points are always 33 bytes: 0x02/0x03 || x
    let mut bytes = [0u8; PUBLIC_KEY_LEN];
    bytes.copy_from_slice(point.as_bytes());
    bytes
}
