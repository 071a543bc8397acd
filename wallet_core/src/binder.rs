//! Wallet binding: a raw seed plus a protocol magic becomes an operable wallet.
//!
//! The magic is fixed at construction. There is no way to move an existing
//! wallet to another network; bind the seed again instead.

use std::fmt;

use seedvault_crypto::{derive_address, keypair_from_wallet_seed, sign_message, verify_signature};
use seedvault_types::{KeyPair, ProtocolMagic, PublicKey, Seed, Signature, WalletAddress};

/// A signing wallet scoped to exactly one network.
///
/// Holds key material for the lifetime of a session. It is not serializable:
/// only the `WalletSeed` form is durable.
pub struct CryptoWallet {
    keys: KeyPair,
    protocol_magic: ProtocolMagic,
}

/// Derive the wallet's key material from `seed` and stamp it with
/// `protocol_magic`.
///
/// Pure and synchronous: the same seed always yields the same keys.
pub fn bind(seed: &Seed, protocol_magic: ProtocolMagic) -> CryptoWallet {
    let keys = keypair_from_wallet_seed(seed);
    tracing::debug!(%protocol_magic, "wallet bound");
    CryptoWallet {
        keys,
        protocol_magic,
    }
}

impl CryptoWallet {
    /// The network this wallet's artifacts are valid for.
    pub fn protocol_magic(&self) -> ProtocolMagic {
        self.protocol_magic
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.keys.public
    }

    /// Address of this wallet on its bound network.
    pub fn address(&self) -> WalletAddress {
        derive_address(&self.keys.public, self.protocol_magic)
    }

    /// Sign a message for the bound network.
    pub fn sign(&self, message: &[u8]) -> Signature {
        sign_message(message, &self.keys.private, self.protocol_magic)
    }

    /// Check a signature of this wallet against its bound network.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        verify_signature(message, signature, &self.keys.public, self.protocol_magic)
    }
}

impl fmt::Debug for CryptoWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoWallet")
            .field("public_key", &self.keys.public.to_string())
            .field("protocol_magic", &self.protocol_magic)
            .finish_non_exhaustive()
    }
}
