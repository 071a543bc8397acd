//! Network-scoped Ed25519 signing and verification.
//!
//! Every signature covers `SIGN_DOMAIN || protocol_magic (LE u32) || message`,
//! so a signature produced for one network never verifies for another.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use seedvault_types::{PrivateKey, ProtocolMagic, PublicKey, Signature};

const SIGN_DOMAIN: &[u8] = b"seedvault-sign-v1";

fn signing_payload(message: &[u8], magic: ProtocolMagic) -> Vec<u8> {
    let mut payload = Vec::with_capacity(SIGN_DOMAIN.len() + 4 + message.len());
    payload.extend_from_slice(SIGN_DOMAIN);
    payload.extend_from_slice(&magic.to_le_bytes());
    payload.extend_from_slice(message);
    payload
}

/// Sign a message for the given network.
pub fn sign_message(message: &[u8], private_key: &PrivateKey, magic: ProtocolMagic) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let sig = signing_key.sign(&signing_payload(message, magic));
    Signature(sig.to_bytes())
}

/// Verify a signature against a message, public key and network.
///
/// Returns `true` only if the signature was produced for this exact network.
pub fn verify_signature(
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
    magic: ProtocolMagic,
) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key
        .verify(&signing_payload(message, magic), &dalek_sig)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keypair_from_secret;

    const MAIN: ProtocolMagic = ProtocolMagic::MAINNET;
    const TEST: ProtocolMagic = ProtocolMagic::TESTNET;

    #[test]
    fn sign_and_verify() {
        let kp = keypair_from_secret(&[1u8; 32]);
        let msg = b"test message";
        let sig = sign_message(msg, &kp.private, MAIN);
        assert!(verify_signature(msg, &sig, &kp.public, MAIN));
    }

    #[test]
    fn other_network_rejects_signature() {
        let kp = keypair_from_secret(&[1u8; 32]);
        let sig = sign_message(b"pay 10", &kp.private, MAIN);
        assert!(!verify_signature(b"pay 10", &sig, &kp.public, TEST));
        assert!(!verify_signature(
            b"pay 10",
            &sig,
            &kp.public,
            ProtocolMagic::new(MAIN.value() + 1)
        ));
    }

    #[test]
    fn wrong_message_fails() {
        let kp = keypair_from_secret(&[2u8; 32]);
        let sig = sign_message(b"correct message", &kp.private, MAIN);
        assert!(!verify_signature(b"wrong message", &sig, &kp.public, MAIN));
    }

    #[test]
    fn wrong_key_fails() {
        let kp1 = keypair_from_secret(&[3u8; 32]);
        let kp2 = keypair_from_secret(&[4u8; 32]);
        let sig = sign_message(b"test", &kp1.private, MAIN);
        assert!(!verify_signature(b"test", &sig, &kp2.public, MAIN));
    }

    #[test]
    fn signature_deterministic() {
        let kp = keypair_from_secret(&[99u8; 32]);
        let sig1 = sign_message(b"deterministic", &kp.private, MAIN);
        let sig2 = sign_message(b"deterministic", &kp.private, MAIN);
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn invalid_public_key() {
        let kp = keypair_from_secret(&[5u8; 32]);
        let sig = sign_message(b"test", &kp.private, MAIN);
        let bad_key = PublicKey([0xFF; 32]);
        assert!(!verify_signature(b"test", &sig, &bad_key, MAIN));
    }
}
