//! Argon2id password key derivation.
//!
//! Turns a low-entropy password plus a random salt into a 256-bit symmetric
//! key. Every call allocates its own Argon2 working memory; nothing is shared
//! between concurrent derivations.

use argon2::{Algorithm, Argon2, Params, Version};
use seedvault_types::{KdfAlgorithm, KdfParams};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;

/// Output length of the derived key.
pub const DERIVED_KEY_LEN: usize = 32;
/// Minimum accepted salt length.
pub const MIN_SALT_LEN: usize = 16;

/// Upper bounds on stored cost parameters, so a corrupted envelope cannot
/// demand unbounded memory or time.
const MAX_MEMORY_KIB: u32 = 1_048_576; // 1 GiB
const MAX_ITERATIONS: u32 = 64;
const MAX_PARALLELISM: u32 = 16;

/// 256-bit key derived from a password. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; DERIVED_KEY_LEN]);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; DERIVED_KEY_LEN] {
        &self.0
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// Fails with [`CryptoError::Cipher`] if the parameters or salt are rejected.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<DerivedKey, CryptoError> {
    if salt.len() < MIN_SALT_LEN {
        return Err(CryptoError::Cipher(format!(
            "salt must be at least {MIN_SALT_LEN} bytes, got {}",
            salt.len()
        )));
    }
    check_bounds(params)?;

    match params.algorithm {
        KdfAlgorithm::Argon2id => argon2id(password, salt, params),
    }
}

fn check_bounds(params: &KdfParams) -> Result<(), CryptoError> {
    if params.memory_kib > MAX_MEMORY_KIB
        || params.iterations > MAX_ITERATIONS
        || params.parallelism > MAX_PARALLELISM
    {
        return Err(CryptoError::Cipher(format!(
            "KDF parameters out of range: memory={} KiB, iterations={}, parallelism={}",
            params.memory_kib, params.iterations, params.parallelism
        )));
    }
    Ok(())
}

fn argon2id(password: &[u8], salt: &[u8], params: &KdfParams) -> Result<DerivedKey, CryptoError> {
    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(DERIVED_KEY_LEN),
    )
    .map_err(|e| CryptoError::Cipher(format!("Argon2 params error: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = DerivedKey([0u8; DERIVED_KEY_LEN]);
    argon2
        .hash_password_into(password, salt, &mut key.0)
        .map_err(|e| CryptoError::Cipher(format!("Argon2 hashing failed: {e}")))?;
    Ok(key)
}
