//! Test Keyring - deterministic signing identities for tests
//!
//! This crate provides fixed keypairs for the test identities `alice`,
//! `bob`, `charlie`, `dave` and `eve` on an ethereum (secp256k1) and a
//! substrate (sr25519) chain. Keys are derived from the identity names, so
//! every run of every test process sees the same keys.

pub mod crypto;
pub mod identity;
pub mod keyring;

pub use crypto::Keypair;
pub use identity::{ChainType, TestIdentity};
pub use keyring::{insecure_keypair_from_address, KeypairRef, TestKeyRing, TEST_KEY_RING};

use thiserror::Error;

/// Main error type for key ring operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyringError {
    #[error("unrecognized chain type: {0}")]
    UnrecognizedChainType(String),

    #[error("invalid test key selection: {0}")]
    UnknownIdentity(String),

    #[error("failed to derive {chain} key for {identity}: {source}")]
    Derivation {
        identity: TestIdentity,
        chain: ChainType,
        #[source]
        source: crypto::CryptoError,
    },
}

pub type Result<T> = std::result::Result<T, KeyringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_error_message() {
        let err = KeyringError::Derivation {
            identity: TestIdentity::Dave,
            chain: ChainType::Ethereum,
            source: crypto::CryptoError::InvalidKey("out of range".into()),
        };

        assert_eq!(
            err.to_string(),
            "failed to derive ethereum key for dave: Invalid key: out of range"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_public_surface() {
        let keypair = insecure_keypair_from_address("charlie", "ethereum").unwrap();
        let expected = TEST_KEY_RING.ethereum(TestIdentity::Charlie);

        assert_eq!(keypair.as_keypair().address(), expected.address());
        assert!(keypair.as_keypair().address().starts_with("0x"));
    }
}
