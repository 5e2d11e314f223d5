//! # Domain Layer
//!
//! Pure record logic with no I/O dependencies.

use std::collections::BTreeMap;

pub mod config;
pub mod content;
pub mod errors;
pub mod record;
pub mod scheme;
pub mod v4;

/// Attribute mapping of a record.
///
/// Iteration is by ascending key bytes, which is what makes content
/// encoding canonical. Inserting an existing key replaces its value
/// (last write wins); a decoded record can never carry duplicates.
pub type Attributes = BTreeMap<String, Vec<u8>>;

/// Well-known attribute keys.
pub mod keys {
    /// Identity scheme name, e.g. `"v4"`.
    pub const ID: &str = "id";
    /// Compressed secp256k1 public key (33 bytes).
    pub const SECP256K1: &str = "secp256k1";
    /// IPv4 (4 bytes) or IPv6 (16 bytes) address, network order.
    pub const IP: &str = "ip";
    /// TCP port, minimal big-endian.
    pub const TCP: &str = "tcp";
    /// UDP port, minimal big-endian.
    pub const UDP: &str = "udp";
}
