//! Node Record implementation.
//!
//! Wire format: RLP list `[signature, seq, k1, v1, ..., kn, vn]`, keys in
//! strictly ascending order, at most 300 bytes.
//!
//! Reference: EIP-778 (Ethereum Node Records)

mod display;

use std::net::{IpAddr, SocketAddr};

use rlp::{Rlp, RlpStream};
use tracing::{debug, trace};

use super::config::EnrConfig;
use super::content::{content, decode_uint, signing_payload};
use super::errors::{EnrError, EnrResult};
use super::scheme::IdentityScheme;
use super::{keys, v4, Attributes};
use crate::ports::outbound::RecordSigner;

/// Ethereum Node Record (EIP-778)
///
/// An immutable, self-signed record. A newer record is a new value with a
/// higher sequence number, see [`NodeRecord::successor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Signature over the signing payload (64 bytes for v4)
    signature: Vec<u8>,
    /// Sequence number (higher is newer)
    seq: u64,
    /// Attributes, iterated in ascending key order
    attributes: Attributes,
}

impl NodeRecord {
    /// Build and sign a record.
    ///
    /// The signer is invoked exactly once over
    /// [`signing_payload(seq, &attributes)`](signing_payload). No size check
    /// is applied here; use [`NodeRecord::encode_checked`] or
    /// [`NodeRecord::ensure_size`] before handing the record to a transport.
    ///
    /// # Errors
    /// * `EnrError::SigningFailed` - the signer reported an error
    pub fn build<S>(seq: u64, attributes: Attributes, signer: &S) -> EnrResult<Self>
    where
        S: RecordSigner + ?Sized,
    {
        let payload = signing_payload(seq, &attributes);
        let signature = signer
            .sign(&payload)
            .map_err(|e| EnrError::SigningFailed(e.to_string()))?;

        trace!(seq, attributes = attributes.len(), "signed node record");
        Ok(Self {
            signature,
            seq,
            attributes,
        })
    }

    /// Build the next record (`seq + 1`) with new attributes.
    ///
    /// # Errors
    /// * `EnrError::MalformedRecord` - the sequence number is already `u64::MAX`
    /// * `EnrError::SigningFailed` - the signer reported an error
    pub fn successor<S>(&self, attributes: Attributes, signer: &S) -> EnrResult<Self>
    where
        S: RecordSigner + ?Sized,
    {
        let seq = self
            .seq
            .checked_add(1)
            .ok_or_else(|| EnrError::malformed("sequence number exhausted"))?;
        Self::build(seq, attributes, signer)
    }

    /// Decode and authenticate a record with the default configuration.
    pub fn decode(bytes: &[u8]) -> EnrResult<Self> {
        Self::decode_with_config(bytes, &EnrConfig::default())
    }

    /// Decode and authenticate a record.
    ///
    /// Checks, in order: size limit, RLP structure, pair count, sequence
    /// encoding, key order, then the signature under the scheme named by
    /// the `id` attribute. A record is only returned once all of them pass.
    ///
    /// # Errors
    /// * `EnrError::RecordTooLarge` - input exceeds the configured limit
    /// * `EnrError::MalformedRecord` - structural violation, including a
    ///   missing or wrongly sized identity key attribute
    /// * `EnrError::UnsupportedScheme` - `id` names an unknown scheme
    /// * `EnrError::InvalidSignature` - the identity key is not a valid
    ///   public key, or the signature does not verify under it
    pub fn decode_with_config(bytes: &[u8], config: &EnrConfig) -> EnrResult<Self> {
        let limit = config.record_size_limit();
        if bytes.len() > limit {
            debug!(size = bytes.len(), limit, "rejected oversized node record");
            return Err(EnrError::RecordTooLarge {
                size: bytes.len(),
                limit,
            });
        }

        let record = Self::parse(bytes).map_err(|e| {
            debug!(size = bytes.len(), error = %e, "rejected malformed node record");
            e
        })?;

        record.verify().map_err(|e| {
            debug!(seq = record.seq, error = %e, "rejected unauthenticated node record");
            e
        })?;

        trace!(seq = record.seq, size = bytes.len(), "decoded node record");
        Ok(record)
    }

    /// Structural decode without signature verification.
    fn parse(bytes: &[u8]) -> EnrResult<Self> {
        let rlp = Rlp::new(bytes);
        if !rlp.is_list() {
            return Err(EnrError::malformed("record is not an RLP list"));
        }
        if rlp.payload_info()?.total() != bytes.len() {
            return Err(EnrError::malformed("trailing bytes after record list"));
        }

        let item_count = rlp.item_count()?;
        if item_count < 2 {
            return Err(EnrError::malformed(
                "record must contain a signature and a sequence number",
            ));
        }
        if (item_count - 2) % 2 != 0 {
            return Err(EnrError::malformed("odd number of key/value items"));
        }

        let signature = byte_string(&rlp, 0)?;
        let seq = decode_uint(&byte_string(&rlp, 1)?).ok_or_else(|| {
            EnrError::malformed("sequence number is not a minimal 64-bit integer")
        })?;

        let mut attributes = Attributes::new();
        for index in (2..item_count).step_by(2) {
            let key = String::from_utf8(byte_string(&rlp, index)?)
                .map_err(|_| EnrError::malformed("attribute key is not valid UTF-8"))?;
            let value = byte_string(&rlp, index + 1)?;

            if let Some((last, _)) = attributes.last_key_value() {
                if key.as_str() <= last.as_str() {
                    return Err(EnrError::malformed(format!(
                        "attribute keys not strictly ascending: {key:?} after {last:?}"
                    )));
                }
            }
            attributes.insert(key, value);
        }

        Ok(Self {
            signature,
            seq,
            attributes,
        })
    }

    /// Verify the signature under the scheme named by the `id` attribute.
    pub fn verify(&self) -> EnrResult<()> {
        let scheme = self.scheme()?;
        scheme.verify(&self.attributes, &self.signing_payload(), &self.signature)
    }

    /// Encode to the wire format (`2 * attributes + 2` list items).
    pub fn encode(&self) -> Vec<u8> {
        let items = content(self.seq, &self.attributes);
        let mut stream = RlpStream::new_list(items.len() + 1);
        stream.append(&self.signature);
        for item in &items {
            stream.append(item);
        }
        stream.out().to_vec()
    }

    /// Encode, failing if the result exceeds the configured size limit.
    ///
    /// # Errors
    /// * `EnrError::RecordTooLarge` - encoding exceeds the limit
    pub fn encode_checked(&self, config: &EnrConfig) -> EnrResult<Vec<u8>> {
        let bytes = self.encode();
        let limit = config.record_size_limit();
        if bytes.len() > limit {
            return Err(EnrError::RecordTooLarge {
                size: bytes.len(),
                limit,
            });
        }
        Ok(bytes)
    }

    /// Check the encoded size against the configured limit.
    pub fn ensure_size(&self, config: &EnrConfig) -> EnrResult<()> {
        self.encode_checked(config).map(|_| ())
    }

    /// Length of [`NodeRecord::encode`] in bytes.
    pub fn encoded_len(&self) -> usize {
        self.encode().len()
    }

    /// Content items `[seq, k1, v1, ...]`.
    pub fn content(&self) -> Vec<Vec<u8>> {
        content(self.seq, &self.attributes)
    }

    /// The bytes the signature covers.
    pub fn signing_payload(&self) -> Vec<u8> {
        signing_payload(self.seq, &self.attributes)
    }

    /// Raw signature bytes.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// All attributes in ascending key order.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Raw value of an attribute.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.attributes.get(key).map(Vec::as_slice)
    }

    /// Raw `id` attribute.
    pub fn id(&self) -> Option<&[u8]> {
        self.get(keys::ID)
    }

    /// Identity scheme named by the `id` attribute.
    pub fn scheme(&self) -> EnrResult<IdentityScheme> {
        IdentityScheme::of(&self.attributes)
    }

    /// Compressed secp256k1 public key.
    pub fn public_key(&self) -> Option<&[u8]> {
        self.get(keys::SECP256K1)
    }

    /// Node identifier derived from the record's identity.
    pub fn node_id(&self) -> EnrResult<[u8; 32]> {
        match self.scheme()? {
            IdentityScheme::V4 => v4::node_id(&self.attributes),
        }
    }

    /// IP address, if present and 4 or 16 bytes long.
    pub fn ip(&self) -> Option<IpAddr> {
        self.get(keys::IP).and_then(v4::ip_from_bytes)
    }

    /// TCP port, if present and well formed.
    pub fn tcp(&self) -> Option<u16> {
        self.port(keys::TCP)
    }

    /// UDP port, if present and well formed.
    pub fn udp(&self) -> Option<u16> {
        self.port(keys::UDP)
    }

    /// TCP socket address.
    pub fn tcp_socket(&self) -> Option<SocketAddr> {
        Some(SocketAddr::new(self.ip()?, self.tcp()?))
    }

    /// UDP socket address.
    pub fn udp_socket(&self) -> Option<SocketAddr> {
        Some(SocketAddr::new(self.ip()?, self.udp()?))
    }

    fn port(&self, key: &str) -> Option<u16> {
        self.get(key)
            .and_then(decode_uint)
            .and_then(|value| u16::try_from(value).ok())
    }
}

/// Item `index` of the record list as a canonically encoded byte string.
///
/// Lists and non-canonical string headers (such as a single byte below
/// `0x80` behind a `0x81` prefix) are rejected.
fn byte_string(rlp: &Rlp<'_>, index: usize) -> EnrResult<Vec<u8>> {
    let item = rlp.at(index)?;
    if !item.is_data() {
        return Err(EnrError::malformed(format!(
            "record item {index} is a list, expected a byte string"
        )));
    }
    Ok(item.as_val::<Vec<u8>>()?)
}
