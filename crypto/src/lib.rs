//! Cryptographic primitives for the seedvault wallet core.
//!
//! - **BIP39** mnemonic generation, validation and entropy recovery
//! - **Blake2b-256** seed derivation from mnemonic entropy
//! - **Argon2id** password key derivation
//! - **ChaCha20-Poly1305 / AES-256-GCM** sealing of seeds at rest
//! - **Ed25519** root keys, with signatures and addresses scoped to one network

pub mod address;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod keys;
pub mod mnemonic;
pub mod random;
pub mod sealer;
pub mod seed;
pub mod sign;

pub use address::{decode_address, derive_address, validate_address};
pub use error::CryptoError;
pub use hash::{blake2b_256, blake2b_256_multi};
pub use kdf::{derive_key, DerivedKey};
pub use keys::{keypair_from_secret, keypair_from_wallet_seed, public_from_private};
pub use mnemonic::{
    entropy_to_mnemonic, generate_mnemonic, generate_mnemonic_with, mnemonic_to_entropy,
    validate_mnemonic, DEFAULT_WORD_COUNT,
};
pub use random::{OsRandom, RandomSource};
pub use sealer::{seal, seal_with, unseal, SealOptions};
pub use seed::{derive_seed, seed_from_entropy};
pub use sign::{sign_message, verify_signature};
