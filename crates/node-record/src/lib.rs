//! # Node Records (ENR)
//!
//! Self-signed, size-bounded node identity records in the style of EIP-778.
//!
//! A record is an RLP list `[signature, seq, k1, v1, ..., kn, vn]` no larger
//! than 300 bytes. The signature covers the canonical *content*
//! `[seq, k1, v1, ...]`, where attribute pairs are always visited in
//! ascending key order, so the signed bytes never depend on how the
//! attribute map was assembled.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): content builder, record codec, identity
//!   schemes and the concrete `v4` scheme. No I/O.
//! - **Ports Layer** (`ports/`): the signing strategy a caller injects into
//!   [`NodeRecord::build`].
//!
//! ## Security Properties
//!
//! - Decode rejects oversized input before parsing it
//! - Decode requires canonical (strictly ascending) key order
//! - Decode verifies the signature under the scheme named by `id`
//!
//! ## Example
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//! use node_record::{build_v4_record, NodeRecord, V4Signer};
//!
//! let signer = V4Signer::from_bytes([0x42; 32]).unwrap();
//! let record = build_v4_record(
//!     signer.signing_key(),
//!     IpAddr::V4(Ipv4Addr::LOCALHOST),
//!     30303,
//!     30303,
//! )
//! .unwrap();
//!
//! let decoded = NodeRecord::decode(&record.encode()).unwrap();
//! assert_eq!(decoded, record);
//! assert_eq!(decoded.udp(), Some(30303));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::config::{EnrConfig, MAX_RECORD_SIZE};
pub use domain::content::{content, decode_uint, encode_uint, signing_payload};
pub use domain::errors::{EnrError, EnrResult};
pub use domain::record::NodeRecord;
pub use domain::scheme::IdentityScheme;
pub use domain::v4::{build_v4_record, keccak256, V4Signer};
pub use domain::Attributes;
pub use ports::outbound::{RecordSigner, SignerError};
