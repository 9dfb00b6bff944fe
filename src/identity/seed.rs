//! Deterministic seed construction
//!
//! Ethereum keys are the identity name left-padded with zeros to a full
//! private key. Substrate keys use the `//name` hard derivation path.

use super::TestIdentity;
use crate::crypto::secp256k1::PRIVATE_KEY_LENGTH;

/// Prefix marking a hard derivation junction in a Substrate secret URI
pub const SUBSTRATE_SEED_PREFIX: &str = "//";

/// Left-pad `key` with zero bytes up to `target_length`.
///
/// Keys that are already `target_length` bytes or longer are returned
/// unchanged; rejecting over-long keys is left to the key constructor.
pub fn pad_with_zeros(key: &[u8], target_length: usize) -> Vec<u8> {
    let mut padded = vec![0u8; target_length.saturating_sub(key.len())];
    padded.extend_from_slice(key);
    padded
}

/// Raw private key bytes for the identity's Ethereum keypair
pub fn ethereum_seed(identity: TestIdentity) -> Vec<u8> {
    pad_with_zeros(identity.as_str().as_bytes(), PRIVATE_KEY_LENGTH)
}

/// Secret URI for the identity's Substrate keypair
pub fn substrate_seed(identity: TestIdentity) -> String {
    format!("{}{}", SUBSTRATE_SEED_PREFIX, identity.as_str())
}
