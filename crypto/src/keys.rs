//! Ed25519 key derivation from wallet seeds.

use ed25519_dalek::SigningKey;
use seedvault_types::{KeyPair, PrivateKey, PublicKey, Seed};
use zeroize::Zeroizing;

use crate::hash::blake2b_256_multi;

/// Domain tag separating the root signing key from any other use of the seed.
const ROOT_KEY_DOMAIN: &[u8] = b"seedvault-root-key";

/// Derive the wallet's root key pair from its seed (deterministic).
pub fn keypair_from_wallet_seed(seed: &Seed) -> KeyPair {
    let secret = Zeroizing::new(blake2b_256_multi(&[ROOT_KEY_DOMAIN, seed.as_bytes()]));
    keypair_from_secret(&secret)
}

/// Build a key pair from a 32-byte Ed25519 secret.
pub fn keypair_from_secret(secret: &[u8; 32]) -> KeyPair {
    let signing_key = SigningKey::from_bytes(secret);
    let verifying_key = signing_key.verifying_key();
    KeyPair {
        public: PublicKey(verifying_key.to_bytes()),
        private: PrivateKey(signing_key.to_bytes()),
    }
}

/// Derive the public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let signing_key = SigningKey::from_bytes(&private.0);
    PublicKey(signing_key.verifying_key().to_bytes())
}
