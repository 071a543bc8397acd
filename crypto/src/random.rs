//! Secure randomness for phrases, salts and nonces.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CryptoError;

/// A source of cryptographically secure random bytes.
///
/// Implementations must fail rather than degrade: there is no fallback to a
/// weaker generator anywhere in this crate.
pub trait RandomSource: Send + Sync {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// The operating system CSPRNG.
///
/// Zero-sized; every call reads fresh bytes from the OS, so there is no
/// generator state shared between concurrent callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::RandomnessFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsRandom.try_fill(&mut a).unwrap();
        OsRandom.try_fill(&mut b).unwrap();
        assert_ne!(a, [0u8; 32]);
        assert_ne!(a, b);
    }
}
