//! BIP39 mnemonic generation, validation and entropy recovery.
//!
//! Phrases use the English word list. Generation draws fresh entropy from a
//! [`RandomSource`] for every call; validation is a pure gate that never
//! errors on malformed input.

use bip39::{Language, Mnemonic};
use seedvault_types::{Entropy, MnemonicPhrase, MnemonicStrength};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::random::{OsRandom, RandomSource};

/// Word count the wallet lifecycle expects (128-bit entropy).
pub const DEFAULT_WORD_COUNT: usize = 12;

/// Generate a new phrase of the given strength from the OS CSPRNG.
pub fn generate_mnemonic(strength: MnemonicStrength) -> Result<MnemonicPhrase, CryptoError> {
    generate_mnemonic_with(strength, &OsRandom)
}

/// Generate a new phrase using the supplied random source.
///
/// A failing source aborts generation with [`CryptoError::RandomnessFailure`].
pub fn generate_mnemonic_with(
    strength: MnemonicStrength,
    rng: &dyn RandomSource,
) -> Result<MnemonicPhrase, CryptoError> {
    let mut bytes = Zeroizing::new(vec![0u8; strength.entropy_len()]);
    rng.try_fill(&mut bytes)?;
    let entropy = Entropy::from_bytes(bytes.to_vec())
        .ok_or_else(|| CryptoError::InvalidPhrase("illegal entropy length".to_string()))?;
    let phrase = entropy_to_mnemonic(&entropy)?;
    tracing::debug!(words = phrase.word_count(), "generated mnemonic");
    Ok(phrase)
}

/// Encode entropy as a phrase (entropy + checksum -> 11-bit indices -> words).
pub fn entropy_to_mnemonic(entropy: &Entropy) -> Result<MnemonicPhrase, CryptoError> {
    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy.as_bytes())
        .map_err(|e| CryptoError::InvalidPhrase(e.to_string()))?;
    Ok(MnemonicPhrase::new(mnemonic.to_string()))
}

/// Recover the entropy encoded in a phrase.
///
/// Fails with [`CryptoError::InvalidPhrase`] on unknown words, an illegal
/// word count or a checksum mismatch.
pub fn mnemonic_to_entropy(phrase: &str) -> Result<Entropy, CryptoError> {
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
        .map_err(|e| CryptoError::InvalidPhrase(e.to_string()))?;
    Entropy::from_bytes(mnemonic.to_entropy())
        .ok_or_else(|| CryptoError::InvalidPhrase("unexpected entropy length".to_string()))
}

/// Check a phrase before it is used for anything.
///
/// True iff the phrase has exactly `expected_word_count` whitespace-delimited
/// words and its checksum validates against the word list.
pub fn validate_mnemonic(phrase: &str, expected_word_count: usize) -> bool {
    phrase.split_whitespace().count() == expected_word_count
        && Mnemonic::parse_in_normalized(Language::English, phrase).is_ok()
}
