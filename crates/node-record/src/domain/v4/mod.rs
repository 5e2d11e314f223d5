//! # v4 Identity Scheme
//!
//! secp256k1 identities: the record carries a compressed public key, the
//! content is hashed with Keccak-256 and signed with a 64-byte ECDSA
//! signature.
//!
//! Reference: EIP-778 (Ethereum Node Records), "v4" identity scheme

mod builder;
mod security;

pub(crate) use builder::ip_from_bytes;
pub use builder::build_v4_record;
pub use security::{
    keccak256, node_id, verify, V4Signer, PUBLIC_KEY_LEN, SCHEME_ID, SIGNATURE_LEN,
};
