//! Secret material: mnemonic phrases, entropy, and wallet seeds.
//!
//! None of these types implement `Clone`, `Serialize`, or a `Debug` that
//! prints their contents. All of them are zeroized on drop.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Legal BIP39 entropy strengths.
///
/// The wallet lifecycle creates 128-bit (12-word) phrases; the longer
/// strengths exist so that restoring from a longer backup is expressible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MnemonicStrength {
    #[default]
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl MnemonicStrength {
    pub const ALL: [Self; 5] = [
        Self::Bits128,
        Self::Bits160,
        Self::Bits192,
        Self::Bits224,
        Self::Bits256,
    ];

    pub const fn bits(self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    /// Entropy length in bytes.
    pub const fn entropy_len(self) -> usize {
        self.bits() / 8
    }

    /// Number of words: entropy bits plus one checksum bit per 32, in 11-bit groups.
    pub const fn word_count(self) -> usize {
        (self.bits() + self.bits() / 32) / 11
    }

    pub fn from_entropy_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.entropy_len() == len)
    }

    pub fn from_word_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.word_count() == count)
    }
}

/// Raw mnemonic entropy (16 to 32 bytes, in 4-byte steps).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// Wrap entropy bytes. Returns `None` unless the length matches a
    /// [`MnemonicStrength`].
    pub fn from_bytes(mut bytes: Vec<u8>) -> Option<Self> {
        if MnemonicStrength::from_entropy_len(bytes.len()).is_none() {
            bytes.zeroize();
            return None;
        }
        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn strength(&self) -> MnemonicStrength {
        // Length is checked on construction.
        MnemonicStrength::from_entropy_len(self.0.len()).unwrap_or_default()
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy(<{} bytes>)", self.0.len())
    }
}

/// A 32-byte wallet seed: the root of all key material of a wallet.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Fixed byte length of a seed.
    pub const LEN: usize = 32;

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Build a seed from a slice, e.g. decrypted plaintext.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Explicit copy, for the few places that need a second owner.
    pub fn duplicate(&self) -> Self {
        Self(self.0)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// A human-readable recovery phrase.
///
/// Holds the text as typed or generated; it is not validated on construction.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MnemonicPhrase(String);

impl MnemonicPhrase {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn words(&self) -> Vec<&str> {
        self.0.split_whitespace().collect()
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl fmt::Debug for MnemonicPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MnemonicPhrase(<{} words>)", self.word_count())
    }
}
