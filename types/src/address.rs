//! Network-scoped wallet address type with `sv_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A seedvault wallet address, always prefixed with `sv_`.
///
/// Derived from the wallet's public key and the protocol magic it was bound
/// to; see `seedvault_crypto::address`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// The standard prefix for all wallet addresses.
    pub const PREFIX: &'static str = "sv_";

    /// Wrap a raw address string.
    ///
    /// Returns `None` if the string does not carry the `sv_` prefix. The
    /// checksum is only checked when the address is decoded for a network.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.starts_with(Self::PREFIX) && s.len() > Self::PREFIX.len() {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Build an address from its encoded body (everything after the prefix).
    pub fn from_encoded(body: &str) -> Self {
        Self(format!("{}{}", Self::PREFIX, body))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
