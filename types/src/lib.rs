//! Fundamental types for the seedvault wallet core.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: secret material (entropy, seeds, phrases), sealed-seed envelopes,
//! network identifiers, keys, signatures and addresses.

pub mod address;
pub mod envelope;
pub mod keys;
pub mod network;
pub mod secret;

mod hex_bytes;

pub use address::WalletAddress;
pub use envelope::{CipherId, EncryptedEnvelope, KdfAlgorithm, KdfParams, ENVELOPE_VERSION};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use network::{NetworkId, ProtocolMagic};
pub use secret::{Entropy, MnemonicPhrase, MnemonicStrength, Seed};
