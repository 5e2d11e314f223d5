//! # Content Builder
//!
//! The content of a record is the list `[seq, k1, v1, k2, v2, ...]` with
//! attribute pairs in ascending key order. Its RLP list encoding is the
//! signing payload. The same functions are used when building a record and
//! when re-deriving the payload to verify a decoded one.

use rlp::RlpStream;

use super::Attributes;

/// Canonical content items for `(seq, attributes)`.
///
/// Item 0 is the sequence number in minimal big-endian form (empty for
/// zero), followed by each key's UTF-8 bytes and its raw value.
pub fn content(seq: u64, attributes: &Attributes) -> Vec<Vec<u8>> {
    let mut items = Vec::with_capacity(1 + attributes.len() * 2);
    items.push(encode_uint(seq));
    for (key, value) in attributes {
        items.push(key.as_bytes().to_vec());
        items.push(value.clone());
    }
    items
}

/// RLP list encoding of [`content`]; the bytes a signer signs.
pub fn signing_payload(seq: u64, attributes: &Attributes) -> Vec<u8> {
    let items = content(seq, attributes);
    let mut stream = RlpStream::new_list(items.len());
    for item in &items {
        stream.append(item);
    }
    stream.out().to_vec()
}

/// Minimal big-endian encoding of an unsigned integer.
pub fn encode_uint(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

/// Inverse of [`encode_uint`].
///
/// Returns `None` for leading zero bytes or values wider than 64 bits.
pub fn decode_uint(bytes: &[u8]) -> Option<u64> {
    if bytes.len() > 8 || bytes.first() == Some(&0) {
        return None;
    }
    Some(
        bytes
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)),
    )
}
