//! Test Key Ring - deterministic keypairs for every test identity
//!
//! The ring holds one strongly typed map per chain. It is built once, on
//! first access to [`TEST_KEY_RING`], and never changes afterwards.

mod lookup;

pub use lookup::{insecure_keypair_from_address, KeypairRef};

use crate::crypto::{secp256k1, sr25519};
use crate::identity::seed::{ethereum_seed, substrate_seed};
use crate::identity::{ChainType, TestIdentity};
use crate::{KeyringError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Process wide test key ring.
///
/// Panics on first access if any keypair cannot be derived, since a
/// partial set of test identities is never usable.
pub static TEST_KEY_RING: Lazy<TestKeyRing> = Lazy::new(|| match TestKeyRing::build() {
    Ok(ring) => ring,
    Err(e) => panic!("failed to build test key ring: {}", e),
});

/// Keypairs for all test identities, keyed by identity name
pub struct TestKeyRing {
    ethereum_keys: HashMap<&'static str, secp256k1::Keypair>,
    substrate_keys: HashMap<&'static str, sr25519::Keypair>,
}

impl TestKeyRing {
    /// Derive the keypairs of every identity on both chains.
    ///
    /// Fails as a whole on the first derivation error.
    pub fn build() -> Result<Self> {
        let ethereum_keys = build_ring(ChainType::Ethereum, |identity| {
            secp256k1::Keypair::from_private_key(&ethereum_seed(identity))
        })?;
        let substrate_keys = build_ring(ChainType::Substrate, |identity| {
            sr25519::Keypair::from_seed_phrase(&substrate_seed(identity))
        })?;

        tracing::info!(
            "Test key ring ready: {} identities on {} chains",
            TestIdentity::ALL.len(),
            ChainType::ALL.len()
        );

        Ok(Self {
            ethereum_keys,
            substrate_keys,
        })
    }

    /// Ethereum keypair of a test identity
    pub fn ethereum(&self, identity: TestIdentity) -> &secp256k1::Keypair {
        &self.ethereum_keys[identity.as_str()]
    }

    /// Substrate keypair of a test identity
    pub fn substrate(&self, identity: TestIdentity) -> &sr25519::Keypair {
        &self.substrate_keys[identity.as_str()]
    }

    pub fn ethereum_keys(&self) -> &HashMap<&'static str, secp256k1::Keypair> {
        &self.ethereum_keys
    }

    pub fn substrate_keys(&self) -> &HashMap<&'static str, sr25519::Keypair> {
        &self.substrate_keys
    }

    /// Resolve a keypair by identity name and chain type.
    ///
    /// An unknown chain type is reported before an unknown identity.
    pub fn lookup(&self, name: &str, chain_type: &str) -> Result<KeypairRef<'_>> {
        let keypair = match chain_type.parse::<ChainType>()? {
            ChainType::Ethereum => self.ethereum_keys.get(name).map(KeypairRef::Ethereum),
            ChainType::Substrate => self.substrate_keys.get(name).map(KeypairRef::Substrate),
        };

        keypair.ok_or_else(|| KeyringError::UnknownIdentity(name.to_string()))
    }
}

fn build_ring<K, F>(chain: ChainType, derive: F) -> Result<HashMap<&'static str, K>>
where
    K: crate::crypto::Keypair,
    F: Fn(TestIdentity) -> std::result::Result<K, crate::crypto::CryptoError>,
{
    TestIdentity::ALL
        .into_iter()
        .map(|identity| {
            let keypair = derive(identity).map_err(|source| KeyringError::Derivation {
                identity,
                chain,
                source,
            })?;
            tracing::debug!("Derived {} key for {}: {}", chain, identity, keypair.address());
            Ok((identity.as_str(), keypair))
        })
        .collect()
}
