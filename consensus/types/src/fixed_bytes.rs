//! Opaque, fixed-length byte strings carried by the beacon chain records.
//!
//! The bytes are never interpreted here: a `PublicKeyBytes` may or may not hold a valid
//! compressed BLS point. Only the length is checked.

use crate::test_utils::TestRandom;
use rand::RngCore;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use serde_utils::hex::{self, PrefixedHexVisitor};
use ssz::{Decode, DecodeError, Encode, SszSchema, TypeDescriptor};
use std::fmt;
use std::str::FromStr;
use tree_hash::TreeHash;

pub const PUBLIC_KEY_BYTES_LEN: usize = 48;
pub const SIGNATURE_BYTES_LEN: usize = 96;
pub const KZG_COMMITMENT_BYTES_LEN: usize = 48;
pub const GRAFFITI_BYTES_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum FixedBytesError {
    InvalidByteLength { got: usize, expected: usize },
    InvalidHex(String),
}

macro_rules! fixed_bytes_type {
    ($(#[$attr: meta])* $name: ident, $byte_size: expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $byte_size]);

        impl $name {
            /// Instantiates `Self` with all-zeros.
            pub fn empty() -> Self {
                Self([0; $byte_size])
            }

            /// Returns a slice of the bytes contained in `self`.
            pub fn as_serialized(&self) -> &[u8] {
                &self.0
            }

            /// Clones the bytes in `self`.
            pub fn serialize(&self) -> [u8; $byte_size] {
                self.0
            }

            /// Instantiates `Self` from bytes, checking only the length.
            pub fn deserialize(bytes: &[u8]) -> Result<Self, FixedBytesError> {
                if bytes.len() == $byte_size {
                    let mut array = [0; $byte_size];
                    array.copy_from_slice(bytes);
                    Ok(Self(array))
                } else {
                    Err(FixedBytesError::InvalidByteLength {
                        got: bytes.len(),
                        expected: $byte_size,
                    })
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl From<[u8; $byte_size]> for $name {
            fn from(bytes: [u8; $byte_size]) -> Self {
                Self(bytes)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = FixedBytesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = hex::decode(s).map_err(FixedBytesError::InvalidHex)?;
                Self::deserialize(&bytes)
            }
        }

        impl Encode for $name {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $byte_size
            }

            fn ssz_bytes_len(&self) -> usize {
                $byte_size
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.0)
            }
        }

        impl Decode for $name {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $byte_size
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
                Self::deserialize(bytes).map_err(|_| DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: $byte_size,
                })
            }
        }

        impl SszSchema for $name {
            fn ssz_schema() -> TypeDescriptor {
                TypeDescriptor::fixed_bytes($byte_size)
            }
        }

        impl TreeHash for $name {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Vector
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Vector should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Vector should never be packed.")
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                let values_per_chunk = tree_hash::BYTES_PER_CHUNK;
                let minimum_chunk_count = ($byte_size + values_per_chunk - 1) / values_per_chunk;
                tree_hash::merkle_root(&self.0, minimum_chunk_count)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&hex::encode(self.0))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let bytes = deserializer.deserialize_str(PrefixedHexVisitor)?;
                Self::deserialize(&bytes)
                    .map_err(|e| D::Error::custom(format!("invalid {}: {:?}", stringify!($name), e)))
            }
        }

        impl TestRandom for $name {
            fn random_for_test(rng: &mut impl RngCore) -> Self {
                Self(<[u8; $byte_size]>::random_for_test(rng))
            }
        }
    };
}

fixed_bytes_type!(
    /// A BLS public key in compressed form, not checked to be a valid point.
    PublicKeyBytes,
    PUBLIC_KEY_BYTES_LEN
);
fixed_bytes_type!(
    /// A BLS signature in compressed form, not checked to be a valid point.
    SignatureBytes,
    SIGNATURE_BYTES_LEN
);
fixed_bytes_type!(
    /// A KZG commitment to a blob.
    KzgCommitment,
    KZG_COMMITMENT_BYTES_LEN
);
fixed_bytes_type!(
    /// Arbitrary data set by the block proposer.
    Graffiti,
    GRAFFITI_BYTES_LEN
);

impl SignatureBytes {
    /// The compressed point at infinity, used by empty sync aggregates.
    pub fn infinity() -> Self {
        let mut bytes = [0; SIGNATURE_BYTES_LEN];
        bytes[0] = 0xc0;
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hash256;

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            PublicKeyBytes::from_ssz_bytes(&[0; 47]),
            Err(DecodeError::InvalidByteLength {
                len: 47,
                expected: 48
            })
        );
        assert!(SignatureBytes::from_ssz_bytes(&[0; 97]).is_err());
        assert!(PublicKeyBytes::from_str("0x00").is_err());
    }

    #[test]
    fn ssz_is_raw_bytes() {
        let pubkey = PublicKeyBytes::from([7; 48]);
        assert_eq!(pubkey.as_ssz_bytes(), vec![7; 48]);
        assert_eq!(PublicKeyBytes::from_ssz_bytes(&[7; 48]), Ok(pubkey));
    }

    #[test]
    fn tree_hash_of_48_bytes_spans_two_chunks() {
        let pubkey = PublicKeyBytes::from([7; 48]);

        let mut preimage = [0; 64];
        preimage[..48].copy_from_slice(&[7; 48]);
        let expected = Hash256::from_slice(&ethereum_hashing::hash(&preimage));

        assert_eq!(pubkey.tree_hash_root(), expected);
    }

    #[test]
    fn tree_hash_of_32_bytes_is_identity() {
        let graffiti = Graffiti::from([3; 32]);
        assert_eq!(graffiti.tree_hash_root(), Hash256::from_slice(&[3; 32]));
    }

    #[test]
    fn tree_hash_of_96_bytes_pads_to_four_chunks() {
        let signature = SignatureBytes::infinity();
        let mut chunks = [0; 128];
        chunks[0] = 0xc0;

        let left = ethereum_hashing::hash32_concat(&chunks[0..32], &chunks[32..64]);
        let right = ethereum_hashing::hash32_concat(&chunks[64..96], &chunks[96..128]);
        let expected = Hash256::from_slice(&ethereum_hashing::hash32_concat(&left, &right));

        assert_eq!(signature.tree_hash_root(), expected);
    }

    #[test]
    fn serde_hex() {
        let commitment = KzgCommitment::from([0xab; 48]);
        let json = serde_json::to_string(&commitment).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(48)));
        assert_eq!(
            serde_json::from_str::<KzgCommitment>(&json).unwrap(),
            commitment
        );
        assert!(serde_json::from_str::<KzgCommitment>("\"0xabab\"").is_err());
    }

    #[test]
    fn display_round_trips() {
        let signature = SignatureBytes::infinity();
        assert_eq!(
            SignatureBytes::from_str(&signature.to_string()).unwrap(),
            signature
        );
    }
}
