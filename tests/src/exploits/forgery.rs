//! # Record Forgery
//!
//! Attack: advertise someone else's identity, or reuse a victim's valid
//! signature while changing what it covers (address, ports, sequence).
//!
//! Defense: decode recomputes the signing payload from the received
//! content and verifies it against the key the record itself claims.

#[cfg(test)]
mod tests {
    use node_record::{keccak256, Attributes, EnrError, NodeRecord, SignerError};

    use super::super::{raw_list, wire_items};
    use crate::{fixture_signer, init_tracing, localhost_record};

    #[test]
    fn test_impersonation_with_own_key() {
        init_tracing();
        let victim = fixture_signer(0x31);
        let attacker = fixture_signer(0x32);
        let genuine = localhost_record(&victim, 30303);

        // Victim's attributes, attacker's signature
        let forged = NodeRecord::build(1, genuine.attributes().clone(), &attacker).unwrap();

        assert_eq!(
            NodeRecord::decode(&forged.encode()),
            Err(EnrError::InvalidSignature)
        );
    }

    #[test]
    fn test_redirect_traffic_with_stolen_signature() {
        let victim = fixture_signer(0x33);
        let genuine = localhost_record(&victim, 30303);

        let mut attributes = genuine.attributes().clone();
        attributes.insert("ip".to_string(), vec![198, 51, 100, 66]);
        let content = node_record::content(genuine.seq(), &attributes);

        let bytes = raw_list(&wire_items(genuine.signature(), content));
        assert_eq!(NodeRecord::decode(&bytes), Err(EnrError::InvalidSignature));
    }

    #[test]
    fn test_sequence_bump_without_resigning() {
        let victim = fixture_signer(0x34);
        let genuine = localhost_record(&victim, 30303);

        let content = node_record::content(genuine.seq() + 1, genuine.attributes());

        let bytes = raw_list(&wire_items(genuine.signature(), content));
        assert_eq!(NodeRecord::decode(&bytes), Err(EnrError::InvalidSignature));
    }

    #[test]
    fn test_payload_hashed_twice() {
        // Signing keccak(payload) instead of the payload hashes it twice
        let victim = fixture_signer(0x35);
        let genuine = localhost_record(&victim, 30303);
        let double_hashing = |payload: &[u8]| -> Result<Vec<u8>, SignerError> {
            use node_record::RecordSigner;
            victim.sign(&keccak256(payload))
        };

        let forged =
            NodeRecord::build(0, genuine.attributes().clone(), &double_hashing).unwrap();

        assert_eq!(forged.verify(), Err(EnrError::InvalidSignature));
    }

    #[test]
    fn test_empty_signature() {
        let victim = fixture_signer(0x36);
        let genuine = localhost_record(&victim, 30303);

        let bytes = raw_list(&wire_items(&[], genuine.content()));
        assert_eq!(NodeRecord::decode(&bytes), Err(EnrError::InvalidSignature));
    }

    #[test]
    fn test_scheme_downgrade() {
        let victim = fixture_signer(0x37);
        let genuine = localhost_record(&victim, 30303);

        let mut attributes: Attributes = genuine.attributes().clone();
        attributes.insert("id".to_string(), b"none".to_vec());
        let bytes = raw_list(&wire_items(
            genuine.signature(),
            node_record::content(0, &attributes),
        ));
        assert_eq!(
            NodeRecord::decode(&bytes),
            Err(EnrError::UnsupportedScheme("none".to_string()))
        );

        attributes.remove("id");
        let bytes = raw_list(&wire_items(
            genuine.signature(),
            node_record::content(0, &attributes),
        ));
        assert!(matches!(
            NodeRecord::decode(&bytes),
            Err(EnrError::MalformedRecord(_))
        ));
    }
}
