//! Seed derivation: mnemonic entropy compressed to a 32-byte seed.
//!
//! The seed is `Blake2b-256(entropy)`. There is no salt, iteration count or
//! passphrase: this step normalizes entropy length, it does not add
//! brute-force resistance. Existing wallets depend on this exact mapping.

use seedvault_types::{Entropy, Seed};

use crate::error::CryptoError;
use crate::hash::blake2b_256;
use crate::mnemonic::mnemonic_to_entropy;

/// Derive the wallet seed from a recovery phrase.
///
/// Deterministic: the same phrase always yields the same seed.
pub fn derive_seed(phrase: &str) -> Result<Seed, CryptoError> {
    let entropy = mnemonic_to_entropy(phrase)?;
    Ok(seed_from_entropy(&entropy))
}

/// Hash raw entropy into a seed.
pub fn seed_from_entropy(entropy: &Entropy) -> Seed {
    Seed::from_bytes(blake2b_256(entropy.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // BIP39 reference phrases with their published entropy, and the
    // Blake2b-256 of that entropy.
    const VECTORS: [(&str, &str); 4] = [
        (
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            "94c1c088cc9453996779630ad3af45cbd92814828dd784cf2aa12df95d1b8afe",
        ),
        (
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
            "84df84a01a3c3ac99c3279dede48e43fcff44751a9345bc1fad68bc3f217ab78",
        ),
        (
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
            "63e8143f12c7569d0dacb1788d388af66cae3a5e5d39f9c095e6b473a5ff2c4a",
        ),
        (
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            "681467b3337425fd38fa3983531ca1a6214de9264eebabdf9c9bc5d157d202b4",
        ),
    ];

    #[test]
    fn derivation_vectors() {
        for (phrase, expected) in VECTORS {
            let seed = derive_seed(phrase).unwrap();
            assert_eq!(hex::encode(seed.as_bytes()), expected, "phrase: {phrase}");
        }
    }

    #[test]
    fn derive_seed_deterministic() {
        let (phrase, _) = VECTORS[1];
        let s1 = derive_seed(phrase).unwrap();
        let s2 = derive_seed(phrase).unwrap();
        assert_eq!(s1.as_bytes(), s2.as_bytes());
    }

    #[test]
    fn invalid_phrase_yields_no_seed() {
        let result = derive_seed("legal winner thank year wave sausage worth useful legal winner thank thank");
        assert!(matches!(result, Err(CryptoError::InvalidPhrase(_))));
    }

    #[test]
    fn entropy_path_matches_phrase_path() {
        let entropy = Entropy::from_bytes(vec![0x7f; 16]).unwrap();
        let seed = seed_from_entropy(&entropy);
        assert_eq!(
            seed.as_bytes(),
            derive_seed(VECTORS[1].0).unwrap().as_bytes()
        );
    }
}
