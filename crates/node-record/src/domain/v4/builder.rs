//! V4 record builder.

use std::net::IpAddr;

use k256::ecdsa::SigningKey;
use tracing::debug;

use super::security::{V4Signer, SCHEME_ID};
use crate::domain::content::encode_uint;
use crate::domain::errors::EnrResult;
use crate::domain::record::NodeRecord;
use crate::domain::{keys, Attributes};

/// Build a sequence-0 record under the v4 identity scheme.
///
/// Attributes: `id = "v4"`, `secp256k1` = compressed public key of
/// `secret_key`, `ip` = 4 or 16 raw bytes, `tcp`/`udp` = minimal big-endian
/// ports. Signed with a [`V4Signer`] for `secret_key`.
pub fn build_v4_record(
    secret_key: &SigningKey,
    ip: IpAddr,
    tcp_port: u16,
    udp_port: u16,
) -> EnrResult<NodeRecord> {
    let signer = V4Signer::new(secret_key.clone());

    let mut attributes = Attributes::new();
    attributes.insert(keys::ID.to_string(), SCHEME_ID.to_vec());
    attributes.insert(keys::SECP256K1.to_string(), signer.public_key().to_vec());
    attributes.insert(keys::IP.to_string(), ip_to_bytes(ip));
    attributes.insert(keys::TCP.to_string(), encode_uint(u64::from(tcp_port)));
    attributes.insert(keys::UDP.to_string(), encode_uint(u64::from(udp_port)));

    let record = NodeRecord::build(0, attributes, &signer)?;
    debug!(%ip, tcp_port, udp_port, "built v4 node record");
    Ok(record)
}

/// Raw network-order bytes of an address: 4 for IPv4, 16 for IPv6.
pub(crate) fn ip_to_bytes(ip: IpAddr) -> Vec<u8> {
    match ip {
        IpAddr::V4(addr) => addr.octets().to_vec(),
        IpAddr::V6(addr) => addr.octets().to_vec(),
    }
}

/// Inverse of [`ip_to_bytes`]; `None` for any other length.
pub(crate) fn ip_from_bytes(bytes: &[u8]) -> Option<IpAddr> {
    match bytes.len() {
        4 => <[u8; 4]>::try_from(bytes).ok().map(IpAddr::from),
        16 => <[u8; 16]>::try_from(bytes).ok().map(IpAddr::from),
        _ => None,
    }
}
