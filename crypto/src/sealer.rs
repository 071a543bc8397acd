//! Password sealing of wallet seeds for at-rest storage.
//!
//! 1. Argon2id derives a 32-byte key from the password and a fresh 32-byte salt
//! 2. An AEAD cipher (ChaCha20-Poly1305 by default, AES-256-GCM optionally)
//!    encrypts the seed under a fresh 12-byte nonce
//! 3. The envelope header (version, cipher, KDF parameters, salt) is bound
//!    to the ciphertext as associated data
//!
//! Unsealing reports every failure as [`CryptoError::Authentication`], so a
//! wrong password cannot be told apart from a damaged envelope.

use aes_gcm::Aes256Gcm;
use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::ChaCha20Poly1305;
use seedvault_types::envelope::header_bytes;
use seedvault_types::{CipherId, EncryptedEnvelope, KdfParams, Seed, ENVELOPE_VERSION};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::kdf::{derive_key, DerivedKey};
use crate::random::{OsRandom, RandomSource};

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;
/// AEAD nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Cipher and KDF cost used when sealing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealOptions {
    #[serde(default)]
    pub cipher: CipherId,
    #[serde(default)]
    pub kdf: KdfParams,
}

/// Seal a seed under a password with fresh OS randomness.
pub fn seal(
    password: &str,
    seed: &Seed,
    options: &SealOptions,
) -> Result<EncryptedEnvelope, CryptoError> {
    seal_with(password, seed, options, &OsRandom)
}

/// Seal a seed under a password, drawing salt and nonce from `rng`.
pub fn seal_with(
    password: &str,
    seed: &Seed,
    options: &SealOptions,
    rng: &dyn RandomSource,
) -> Result<EncryptedEnvelope, CryptoError> {
    let mut salt = vec![0u8; SALT_LEN];
    rng.try_fill(&mut salt)?;
    let mut nonce = [0u8; NONCE_LEN];
    rng.try_fill(&mut nonce)?;

    let key = derive_key(password.as_bytes(), &salt, &options.kdf)?;
    let aad = header_bytes(ENVELOPE_VERSION, options.cipher, &options.kdf, &salt);

    let ciphertext = encrypt(options.cipher, &key, &nonce, seed.as_bytes(), &aad)
        .map_err(|_| CryptoError::Cipher("encryption failed".to_string()))?;

    tracing::debug!(cipher = options.cipher.as_str(), "seed sealed");

    Ok(EncryptedEnvelope {
        version: ENVELOPE_VERSION,
        cipher: options.cipher,
        kdf: options.kdf,
        salt,
        nonce: nonce.to_vec(),
        ciphertext,
    })
}

/// Recover a seed from an envelope.
pub fn unseal(password: &str, envelope: &EncryptedEnvelope) -> Result<Seed, CryptoError> {
    match try_unseal(password, envelope) {
        Ok(seed) => {
            tracing::debug!(cipher = envelope.cipher.as_str(), "seed unsealed");
            Ok(seed)
        }
        Err(reason) => {
            tracing::debug!(reason, "envelope rejected");
            tracing::warn!("unseal failed: authentication error");
            Err(CryptoError::Authentication)
        }
    }
}

fn try_unseal(password: &str, envelope: &EncryptedEnvelope) -> Result<Seed, &'static str> {
    if envelope.version != ENVELOPE_VERSION {
        return Err("unsupported envelope version");
    }
    if envelope.nonce.len() != NONCE_LEN {
        return Err("malformed nonce");
    }

    let key = derive_key(password.as_bytes(), &envelope.salt, &envelope.kdf)
        .map_err(|_| "key derivation rejected stored parameters")?;
    let aad = envelope.associated_data();

    let plaintext = Zeroizing::new(
        decrypt(envelope.cipher, &key, &envelope.nonce, &envelope.ciphertext, &aad)
            .map_err(|_| "authentication tag mismatch")?,
    );

    Seed::from_slice(&plaintext).ok_or("unexpected plaintext length")
}

fn encrypt(
    cipher: CipherId,
    key: &DerivedKey,
    nonce: &[u8],
    msg: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, chacha20poly1305::aead::Error> {
    let payload = Payload { msg, aad };
    match cipher {
        CipherId::ChaCha20Poly1305 => {
            let aead = ChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(key.as_bytes()));
            aead.encrypt(chacha20poly1305::Nonce::from_slice(nonce), payload)
        }
        CipherId::Aes256Gcm => {
            let aead = Aes256Gcm::new(aes_gcm::Key::<Aes256Gcm>::from_slice(key.as_bytes()));
            aead.encrypt(aes_gcm::Nonce::from_slice(nonce), payload)
        }
    }
}

fn decrypt(
    cipher: CipherId,
    key: &DerivedKey,
    nonce: &[u8],
    msg: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, chacha20poly1305::aead::Error> {
    let payload = Payload { msg, aad };
    match cipher {
        CipherId::ChaCha20Poly1305 => {
            let aead = ChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(key.as_bytes()));
            aead.decrypt(chacha20poly1305::Nonce::from_slice(nonce), payload)
        }
        CipherId::Aes256Gcm => {
            let aead = Aes256Gcm::new(aes_gcm::Key::<Aes256Gcm>::from_slice(key.as_bytes()));
            aead.decrypt(aes_gcm::Nonce::from_slice(nonce), payload)
        }
    }
}
