//! Wallet configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use seedvault_crypto::SealOptions;
use seedvault_types::{NetworkId, ProtocolMagic};

use crate::error::WalletError;

/// Configuration for a wallet session.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Which network new wallets are bound to.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// Explicit protocol magic, overriding the one implied by `network`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_magic: Option<u32>,

    /// Where the wallet seed record lives.
    #[serde(default = "default_wallet_file")]
    pub wallet_file: PathBuf,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter (e.g. "info", "debug", "seedvault_crypto=trace").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Cipher and KDF cost for sealing.
    #[serde(default)]
    pub seal: SealOptions,
}

// ── Defaults ───────────────────────────────────────────────────────────

fn default_network() -> NetworkId {
    NetworkId::Mainnet
}

fn default_wallet_file() -> PathBuf {
    PathBuf::from("./wallet.json")
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, WalletError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WalletError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// The magic wallets are bound to: the explicit override if set,
    /// otherwise the network's own.
    pub fn resolve_magic(&self) -> ProtocolMagic {
        self.protocol_magic
            .map(ProtocolMagic::new)
            .unwrap_or_else(|| self.network.protocol_magic())
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            protocol_magic: None,
            wallet_file: default_wallet_file(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            seal: SealOptions::default(),
        }
    }
}
