//! String keyed access to the process wide key ring

use super::TEST_KEY_RING;
use crate::crypto::{secp256k1, sr25519, Keypair};
use crate::identity::ChainType;
use crate::Result;

/// A keypair borrowed from a key ring, tagged with its chain
#[derive(Debug, Clone, Copy)]
pub enum KeypairRef<'a> {
    Ethereum(&'a secp256k1::Keypair),
    Substrate(&'a sr25519::Keypair),
}

impl<'a> KeypairRef<'a> {
    pub fn chain_type(&self) -> ChainType {
        match self {
            KeypairRef::Ethereum(_) => ChainType::Ethereum,
            KeypairRef::Substrate(_) => ChainType::Substrate,
        }
    }

    /// View as the chain agnostic keypair trait
    pub fn as_keypair(&self) -> &'a dyn Keypair {
        match *self {
            KeypairRef::Ethereum(kp) => kp as &'a dyn Keypair,
            KeypairRef::Substrate(kp) => kp,
        }
    }

    pub fn as_ethereum(&self) -> Option<&'a secp256k1::Keypair> {
        match *self {
            KeypairRef::Ethereum(kp) => Some(kp),
            KeypairRef::Substrate(_) => None,
        }
    }

    pub fn as_substrate(&self) -> Option<&'a sr25519::Keypair> {
        match *self {
            KeypairRef::Substrate(kp) => Some(kp),
            KeypairRef::Ethereum(_) => None,
        }
    }
}

/// Resolve a test keypair from an identity name and a chain type.
///
/// Used to turn fixture names like `"alice"` into signing identities.
/// Never use these keys outside of tests: their secrets are public.
pub fn insecure_keypair_from_address(
    name: &str,
    chain_type: &str,
) -> Result<KeypairRef<'static>> {
    TEST_KEY_RING.lookup(name, chain_type)
}
