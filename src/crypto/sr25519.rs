//! sr25519 keypairs with SS58 addresses
//!
//! Seeds are Substrate secret URIs. A bare `//name` path is a hard
//! derivation from the well known development phrase. Junctions are case
//! sensitive: `//alice` is a different key from a node's prefunded
//! `//Alice` dev account.

use super::{to_prefixed_hex, CryptoError, Keypair as KeypairT};
use crate::identity::ChainType;
use sp_core::crypto::{Ss58AddressFormat, Ss58AddressFormatRegistry, Ss58Codec};
use sp_core::{sr25519, Pair};
use std::fmt;

/// Length in bytes of an sr25519 public key
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// SS58 prefix used for addresses (generic Substrate, 42)
fn address_format() -> Ss58AddressFormat {
    Ss58AddressFormatRegistry::SubstrateAccount.into()
}

/// sr25519 key pair for the substrate chain
#[derive(Clone)]
pub struct Keypair {
    pair: sr25519::Pair,
}

impl Keypair {
    /// Create a key pair from a secret URI such as `//alice`
    pub fn from_seed_phrase(seed: &str) -> Result<Self, CryptoError> {
        let pair = sr25519::Pair::from_string(seed, None)
            .map_err(|e| CryptoError::InvalidSeed(format!("{:?}", e)))?;
        Ok(Self { pair })
    }

    /// Rebuild a key pair from the secret produced by [`KeypairT::encode`]
    pub fn decode(secret: &[u8]) -> Result<Self, CryptoError> {
        let pair = sr25519::Pair::from_seed_slice(secret)
            .map_err(|e| CryptoError::InvalidKey(format!("{:?}", e)))?;
        Ok(Self { pair })
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.pair.public().0
    }

    /// Get the underlying `sp-core` pair
    pub fn as_pair(&self) -> &sr25519::Pair {
        &self.pair
    }
}

impl KeypairT for Keypair {
    fn chain_type(&self) -> ChainType {
        ChainType::Substrate
    }

    fn address(&self) -> String {
        self.pair
            .public()
            .to_ss58check_with_version(address_format())
    }

    fn public_key(&self) -> String {
        to_prefixed_hex(&self.public_key_bytes())
    }

    fn encode(&self) -> Vec<u8> {
        self.pair.to_raw_vec()
    }

    fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.pair.sign(message).0.to_vec()
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = sr25519::Signature::try_from(signature) else {
            return false;
        };
        sr25519::Pair::verify(&signature, message, &self.pair.public())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sr25519::Keypair({})", self.address())
    }
}
