//! secp256k1 keypairs with Ethereum addresses

use super::{to_prefixed_hex, CryptoError, Keypair as KeypairT};
use crate::identity::ChainType;
use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};
use std::fmt;

/// Length in bytes of a raw secp256k1 private key
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length in bytes of an Ethereum address
pub const ADDRESS_LENGTH: usize = 20;

/// secp256k1 key pair for the ethereum chain
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl Keypair {
    /// Create a key pair from a raw private key.
    ///
    /// The key must be exactly [`PRIVATE_KEY_LENGTH`] bytes and a valid
    /// non-zero scalar below the curve order.
    pub fn from_private_key(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(CryptoError::InvalidKey(format!(
                "secp256k1 private key must be {} bytes, got {}",
                PRIVATE_KEY_LENGTH,
                bytes.len()
            )));
        }

        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        let verifying_key = VerifyingKey::from(&signing_key);

        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Get the compressed SEC1 public key (33 bytes)
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.verifying_key.to_encoded_point(true).as_bytes().to_vec()
    }

    /// Derive the 20 byte Ethereum address.
    ///
    /// This is the tail of the Keccak-256 hash of the uncompressed public
    /// key, without its `0x04` tag byte.
    pub fn address_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        let point = self.verifying_key.to_encoded_point(false);
        let hash = Keccak256::digest(&point.as_bytes()[1..]);

        let mut address = [0u8; ADDRESS_LENGTH];
        address.copy_from_slice(&hash[32 - ADDRESS_LENGTH..]);
        address
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

/// Format an address with the EIP-55 mixed case checksum
pub fn to_checksum_address(address: &[u8; ADDRESS_LENGTH]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let checksummed: String = lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect();

    format!("0x{}", checksummed)
}

impl KeypairT for Keypair {
    fn chain_type(&self) -> ChainType {
        ChainType::Ethereum
    }

    fn address(&self) -> String {
        to_checksum_address(&self.address_bytes())
    }

    fn public_key(&self) -> String {
        to_prefixed_hex(&self.public_key_bytes())
    }

    fn encode(&self) -> Vec<u8> {
        self.signing_key.to_bytes().to_vec()
    }

    fn sign(&self, message: &[u8]) -> Vec<u8> {
        let signature: Signature = self.signing_key.sign(message);
        signature.to_bytes().to_vec()
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        self.verifying_key.verify(message, &signature).is_ok()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "secp256k1::Keypair({})", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_one() -> Vec<u8> {
        let mut key = vec![0u8; PRIVATE_KEY_LENGTH];
        key[31] = 1;
        key
    }

    #[test]
    fn test_known_address() {
        // Private key 1 maps to the generator point
        let keypair = Keypair::from_private_key(&key_one()).unwrap();

        assert_eq!(keypair.address(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
        assert_eq!(
            keypair.public_key(),
            "0x0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_checksum_vectors() {
        let vectors = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for expected in vectors {
            let bytes = hex::decode(expected[2..].to_lowercase()).unwrap();
            let address: [u8; ADDRESS_LENGTH] = bytes.try_into().unwrap();
            assert_eq!(to_checksum_address(&address), expected);
        }
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(matches!(
            Keypair::from_private_key(&[1u8; 31]),
            Err(CryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            Keypair::from_private_key(&[1u8; 33]),
            Err(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_rejects_zero_key() {
        assert!(Keypair::from_private_key(&[0u8; PRIVATE_KEY_LENGTH]).is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let keypair = Keypair::from_private_key(&[42u8; PRIVATE_KEY_LENGTH]).unwrap();
        let encoded = keypair.encode();

        assert_eq!(encoded, vec![42u8; PRIVATE_KEY_LENGTH]);

        let decoded = Keypair::from_private_key(&encoded).unwrap();
        assert_eq!(decoded.address(), keypair.address());
    }

    #[test]
    fn test_sign_verify() {
        let keypair = Keypair::from_private_key(&key_one()).unwrap();

        let message = b"Test message";
        let signature = keypair.sign(message);

        assert_eq!(signature.len(), 64);
        assert!(keypair.verify(message, &signature));
        assert!(!keypair.verify(b"Wrong message", &signature));
        assert!(!keypair.verify(message, &signature[..63]));

        // RFC 6979 nonces make signatures reproducible
        assert_eq!(keypair.sign(message), signature);
    }

    #[test]
    fn test_key_accessors() {
        let keypair = Keypair::from_private_key(&key_one()).unwrap();

        assert_eq!(keypair.signing_key().to_bytes().to_vec(), key_one());
        assert_eq!(
            keypair.verifying_key(),
            keypair.signing_key().verifying_key()
        );

        let signature: Signature = keypair.signing_key().sign(b"direct");
        assert!(keypair.verify(b"direct", &signature.to_bytes()));
    }
}
