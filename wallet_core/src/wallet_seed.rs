//! Wallet seed lifecycle: phrase -> seed (raw or sealed) -> bound wallet.
//!
//! A [`WalletSeed`] is the durable form of a wallet. It carries either the
//! raw 32-byte seed or a password-sealed envelope, never both.

use std::fmt;

use seedvault_crypto::{
    derive_seed, generate_mnemonic, seal_with, unseal, validate_mnemonic, OsRandom, RandomSource,
    SealOptions,
};
use seedvault_types::{EncryptedEnvelope, MnemonicPhrase, MnemonicStrength, ProtocolMagic, Seed};

use crate::binder::{bind, CryptoWallet};
use crate::error::WalletError;

/// Durable seed form: raw when created without a password, sealed otherwise.
pub enum WalletSeed {
    Raw(Seed),
    Sealed(EncryptedEnvelope),
}

impl WalletSeed {
    pub fn is_sealed(&self) -> bool {
        matches!(self, Self::Sealed(_))
    }

    pub fn envelope(&self) -> Option<&EncryptedEnvelope> {
        match self {
            Self::Raw(_) => None,
            Self::Sealed(envelope) => Some(envelope),
        }
    }

    /// Recover the raw seed. A sealed seed needs the password it was sealed with.
    pub fn open(&self, password: Option<&str>) -> Result<Seed, WalletError> {
        match (self, given(password)) {
            (Self::Raw(seed), _) => Ok(seed.duplicate()),
            (Self::Sealed(_), None) => Err(WalletError::PasswordRequired),
            (Self::Sealed(envelope), Some(password)) => Ok(unseal(password, envelope)?),
        }
    }
}

impl fmt::Debug for WalletSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(_) => f.write_str("WalletSeed::Raw(<redacted>)"),
            Self::Sealed(envelope) => f
                .debug_struct("WalletSeed::Sealed")
                .field("cipher", &envelope.cipher)
                .field("kdf", &envelope.kdf)
                .finish_non_exhaustive(),
        }
    }
}

/// An empty password counts as no password.
fn given(password: Option<&str>) -> Option<&str> {
    password.filter(|p| !p.is_empty())
}

/// Fresh 12-word phrase from OS randomness.
pub fn generate_new_phrase() -> Result<MnemonicPhrase, WalletError> {
    Ok(generate_mnemonic(MnemonicStrength::Bits128)?)
}

/// Whether `phrase` is a checksum-valid phrase of exactly `word_count` words.
pub fn is_valid_phrase(phrase: &str, word_count: usize) -> bool {
    validate_mnemonic(phrase, word_count)
}

/// Turn a phrase into a durable wallet seed.
///
/// With a password the seed is sealed and only the envelope is returned.
/// Without one, or with an empty one, the raw seed is returned.
pub fn generate_wallet_seed(
    phrase: &MnemonicPhrase,
    password: Option<&str>,
    options: &SealOptions,
) -> Result<WalletSeed, WalletError> {
    generate_wallet_seed_with(phrase, password, options, &OsRandom)
}

/// [`generate_wallet_seed`] with an explicit randomness source for salt and nonce.
pub fn generate_wallet_seed_with(
    phrase: &MnemonicPhrase,
    password: Option<&str>,
    options: &SealOptions,
    rng: &dyn RandomSource,
) -> Result<WalletSeed, WalletError> {
    let seed = derive_seed(phrase.as_str())?;
    match given(password) {
        Some(password) => {
            let envelope = seal_with(password, &seed, options, rng)?;
            tracing::info!(cipher = envelope.cipher.as_str(), "sealed wallet seed created");
            Ok(WalletSeed::Sealed(envelope))
        }
        None => {
            tracing::info!("unsealed wallet seed created");
            Ok(WalletSeed::Raw(seed))
        }
    }
}

/// Open a wallet seed and bind it to `protocol_magic`.
///
/// A raw seed ignores `password`. A sealed seed without a password fails
/// with [`WalletError::PasswordRequired`].
pub fn crypto_wallet_from_seed(
    wallet_seed: &WalletSeed,
    password: Option<&str>,
    protocol_magic: ProtocolMagic,
) -> Result<CryptoWallet, WalletError> {
    let seed = wallet_seed.open(password)?;
    Ok(bind(&seed, protocol_magic))
}

/// Reseal a wallet seed under a new password.
///
/// The old password must open the current envelope; a raw seed ignores it.
/// With `new_password` set to `None` or empty the seed is returned raw.
pub fn change_password(
    wallet_seed: &WalletSeed,
    old_password: Option<&str>,
    new_password: Option<&str>,
    options: &SealOptions,
) -> Result<WalletSeed, WalletError> {
    change_password_with(wallet_seed, old_password, new_password, options, &OsRandom)
}

pub fn change_password_with(
    wallet_seed: &WalletSeed,
    old_password: Option<&str>,
    new_password: Option<&str>,
    options: &SealOptions,
    rng: &dyn RandomSource,
) -> Result<WalletSeed, WalletError> {
    let seed = wallet_seed.open(old_password)?;
    match given(new_password) {
        Some(new_password) => {
            let envelope = seal_with(new_password, &seed, options, rng)?;
            tracing::info!(cipher = envelope.cipher.as_str(), "wallet seed resealed");
            Ok(WalletSeed::Sealed(envelope))
        }
        None => {
            tracing::warn!("wallet seed password removed");
            Ok(WalletSeed::Raw(seed))
        }
    }
}
