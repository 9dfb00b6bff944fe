//! Identity Module - fixed test identities and chain types
//!
//! The keyring knows exactly five identities and two chains. Both sets are
//! closed: adding an identity means adding a variant here, which in turn
//! makes the keyring derive a keypair for it on every chain.

pub mod seed;

use crate::KeyringError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ALICE_KEY: &str = "alice";
pub const BOB_KEY: &str = "bob";
pub const CHARLIE_KEY: &str = "charlie";
pub const DAVE_KEY: &str = "dave";
pub const EVE_KEY: &str = "eve";

pub const ETH_CHAIN: &str = "ethereum";
pub const SUB_CHAIN: &str = "substrate";

/// A named test identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestIdentity {
    Alice,
    Bob,
    Charlie,
    Dave,
    Eve,
}

impl TestIdentity {
    /// Every identity, in registry order
    pub const ALL: [TestIdentity; 5] = [
        TestIdentity::Alice,
        TestIdentity::Bob,
        TestIdentity::Charlie,
        TestIdentity::Dave,
        TestIdentity::Eve,
    ];

    /// The identity's name, which is also the base of its seed
    pub const fn as_str(&self) -> &'static str {
        match self {
            TestIdentity::Alice => ALICE_KEY,
            TestIdentity::Bob => BOB_KEY,
            TestIdentity::Charlie => CHARLIE_KEY,
            TestIdentity::Dave => DAVE_KEY,
            TestIdentity::Eve => EVE_KEY,
        }
    }
}

impl fmt::Display for TestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestIdentity {
    type Err = KeyringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestIdentity::ALL
            .into_iter()
            .find(|identity| identity.as_str() == s)
            .ok_or_else(|| KeyringError::UnknownIdentity(s.to_string()))
    }
}

/// Which curve and keypair representation a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    /// secp256k1 ECDSA keys with Keccak-256 addresses
    Ethereum,
    /// sr25519 Schnorr keys with SS58 addresses
    Substrate,
}

impl ChainType {
    pub const ALL: [ChainType; 2] = [ChainType::Ethereum, ChainType::Substrate];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ChainType::Ethereum => ETH_CHAIN,
            ChainType::Substrate => SUB_CHAIN,
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = KeyringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ETH_CHAIN => Ok(ChainType::Ethereum),
            SUB_CHAIN => Ok(ChainType::Substrate),
            other => Err(KeyringError::UnrecognizedChainType(other.to_string())),
        }
    }
}
