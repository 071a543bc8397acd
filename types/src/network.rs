//! Network identifiers and the protocol magic a wallet is bound to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric tag identifying which blockchain network a wallet's artifacts are
/// valid for.
///
/// The wallet core treats the value as opaque: it never selects or validates
/// it, it only stamps it into every signature and address it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolMagic(u32);

impl ProtocolMagic {
    /// Production network.
    pub const MAINNET: Self = Self(764_824_073);
    /// Public test network.
    pub const TESTNET: Self = Self(1_097_911_063);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Little-endian encoding used when mixing the magic into hashes and
    /// signed payloads.
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for ProtocolMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProtocolMagic {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Named networks a host application can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    Mainnet,
    /// The public test network.
    Testnet,
}

impl NetworkId {
    /// Protocol magic of this network.
    pub fn protocol_magic(&self) -> ProtocolMagic {
        match self {
            Self::Mainnet => ProtocolMagic::MAINNET,
            Self::Testnet => ProtocolMagic::TESTNET,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "live" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_magic_value() {
        assert_eq!(NetworkId::Mainnet.protocol_magic().value(), 764_824_073);
        assert_ne!(
            NetworkId::Mainnet.protocol_magic(),
            NetworkId::Testnet.protocol_magic()
        );
    }

    #[test]
    fn network_parses_case_insensitively() {
        assert_eq!("MainNet".parse::<NetworkId>().unwrap(), NetworkId::Mainnet);
        assert_eq!("test".parse::<NetworkId>().unwrap(), NetworkId::Testnet);
        assert!("moonnet".parse::<NetworkId>().is_err());
    }

    #[test]
    fn magic_serializes_as_plain_number() {
        let json = serde_json::to_string(&ProtocolMagic::MAINNET).unwrap();
        assert_eq!(json, "764824073");
    }
}
