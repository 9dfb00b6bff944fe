//! Cryptography Module - keypairs for the supported chains
//!
//! Key derivation and signing are done by `k256` (ethereum) and `sp-core`
//! (substrate). This module only wraps them behind a common [`Keypair`]
//! trait.

pub mod secp256k1;
pub mod sr25519;

use crate::identity::ChainType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

/// Behaviour shared by the chain specific keypairs
pub trait Keypair: Send + Sync {
    /// Chain this keypair belongs to
    fn chain_type(&self) -> ChainType;

    /// Chain native address of the public key
    fn address(&self) -> String;

    /// `0x` prefixed hex of the public key
    fn public_key(&self) -> String;

    /// Raw secret key material
    fn encode(&self) -> Vec<u8>;

    /// Sign a message
    fn sign(&self, message: &[u8]) -> Vec<u8>;

    /// Verify a signature made by this keypair
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}

pub(crate) fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
