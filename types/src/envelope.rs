//! Sealed-seed envelope: ciphertext plus everything needed to reverse it.
//!
//! All binary fields serialize as lowercase hex. The password is never part
//! of the envelope.

use serde::{Deserialize, Serialize};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u32 = 1;

/// Domain tag prefixed to the authenticated header.
const HEADER_TAG: &[u8] = b"seedvault-envelope";

/// Authenticated cipher used to seal the seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherId {
    #[default]
    #[serde(rename = "chacha20-poly1305")]
    ChaCha20Poly1305,
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,
}

impl CipherId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChaCha20Poly1305 => "chacha20-poly1305",
            Self::Aes256Gcm => "aes-256-gcm",
        }
    }

    /// Stable one-byte code mixed into the authenticated header.
    pub fn code(&self) -> u8 {
        match self {
            Self::ChaCha20Poly1305 => 1,
            Self::Aes256Gcm => 2,
        }
    }
}

/// Password-based key-derivation algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KdfAlgorithm {
    #[default]
    Argon2id,
}

impl KdfAlgorithm {
    pub fn code(&self) -> u8 {
        match self {
            Self::Argon2id => 1,
        }
    }
}

/// Cost parameters for the password KDF.
///
/// | Parameter     | Default | Meaning                      |
/// |---------------|---------|------------------------------|
/// | `memory_kib`  | 65 536  | Memory usage in KiB (64 MiB) |
/// | `iterations`  | 3       | Number of passes             |
/// | `parallelism` | 1       | Number of lanes              |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    #[serde(default)]
    pub algorithm: KdfAlgorithm,
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            algorithm: KdfAlgorithm::Argon2id,
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 1,
        }
    }
}

/// A password-sealed seed, safe to persist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    pub version: u32,
    pub cipher: CipherId,
    pub kdf: KdfParams,
    #[serde(with = "hex")]
    pub salt: Vec<u8>,
    #[serde(with = "hex")]
    pub nonce: Vec<u8>,
    #[serde(with = "hex")]
    pub ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Canonical encoding of the header fields, used as AEAD associated data
    /// so that any change to the parameters fails authentication.
    pub fn associated_data(&self) -> Vec<u8> {
        header_bytes(self.version, self.cipher, &self.kdf, &self.salt)
    }
}

/// Header encoding shared by sealing (before the envelope exists) and
/// unsealing.
pub fn header_bytes(version: u32, cipher: CipherId, kdf: &KdfParams, salt: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_TAG.len() + 4 + 2 + 12 + 4 + salt.len());
    out.extend_from_slice(HEADER_TAG);
    out.extend_from_slice(&version.to_le_bytes());
    out.push(cipher.code());
    out.push(kdf.algorithm.code());
    out.extend_from_slice(&kdf.memory_kib.to_le_bytes());
    out.extend_from_slice(&kdf.iterations.to_le_bytes());
    out.extend_from_slice(&kdf.parallelism.to_le_bytes());
    out.extend_from_slice(&(salt.len() as u32).to_le_bytes());
    out.extend_from_slice(salt);
    out
}
