//! Human-readable structural dump of a record.

use std::fmt;

use super::NodeRecord;
use crate::domain::content::decode_uint;
use crate::domain::{keys, v4};

/// Renders the wire list: `[0x<signature>, <seq>, "key", <value>, ...]`.
///
/// `ip`, `tcp` and `udp` render as an address and port numbers when well
/// formed. Other printable ASCII values are quoted, everything else is
/// `0x`-prefixed hex.
impl fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{}, {}", hex::encode(&self.signature), self.seq)?;
        for (key, value) in &self.attributes {
            write!(f, ", {key:?}, ")?;
            write_value(f, key, value)?;
        }
        write!(f, "]")
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, key: &str, value: &[u8]) -> fmt::Result {
    match key {
        keys::IP => {
            if let Some(ip) = v4::ip_from_bytes(value) {
                return write!(f, "{ip}");
            }
        }
        keys::TCP | keys::UDP => {
            if let Some(port) = decode_uint(value) {
                return write!(f, "{port}");
            }
        }
        _ => {}
    }

    let printable = !value.is_empty() && value.iter().all(|b| b.is_ascii_graphic() || *b == b' ');
    match std::str::from_utf8(value) {
        Ok(text) if printable => write!(f, "{text:?}"),
        _ => write!(f, "0x{}", hex::encode(value)),
    }
}
