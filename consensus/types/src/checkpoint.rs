use crate::test_utils::TestRandom;
use crate::{Epoch, Hash256};
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// Casper FFG checkpoint, used in attestations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
    SszSchema,
    TestRandom,
)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Hash256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::{Decode, Encode};
    use tree_hash::TreeHash;

    ssz_and_tree_hash_tests!(Checkpoint);

    #[test]
    fn known_vector() {
        let checkpoint = Checkpoint {
            epoch: Epoch::new(5),
            root: Hash256::zero(),
        };

        let mut expected_bytes = vec![5, 0, 0, 0, 0, 0, 0, 0];
        expected_bytes.extend_from_slice(&[0; 32]);
        assert_eq!(checkpoint.as_ssz_bytes(), expected_bytes);
        assert_eq!(Checkpoint::from_ssz_bytes(&expected_bytes), Ok(checkpoint));

        let mut preimage = [0; 64];
        preimage[0] = 5;
        assert_eq!(
            checkpoint.tree_hash_root(),
            Hash256::from_slice(&ethereum_hashing::hash(&preimage))
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(Checkpoint::from_ssz_bytes(&[0; 39]).is_err());
        assert!(Checkpoint::from_ssz_bytes(&[0; 41]).is_err());
    }
}
