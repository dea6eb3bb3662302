use crate::consts::SyncCommitteeSize;
use crate::test_utils::TestRandom;
use crate::{FixedVector, PublicKeyBytes};
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// The validators assigned to sign block roots for one sync committee period.
#[derive(
    Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, SszSchema, TestRandom,
)]
pub struct SyncCommittee {
    pub pubkeys: FixedVector<PublicKeyBytes, SyncCommitteeSize>,
    pub aggregate_pubkey: PublicKeyBytes,
}

impl SyncCommittee {
    /// Create a temporary sync committee that should *never* be included in a legitimate consensus
    /// object.
    pub fn temporary() -> Self {
        Self {
            pubkeys: FixedVector::from_elem(PublicKeyBytes::empty()),
            aggregate_pubkey: PublicKeyBytes::empty(),
        }
    }

    /// Returns the position of `pubkey` in the committee, if any.
    pub fn position(&self, pubkey: &PublicKeyBytes) -> Option<usize> {
        self.pubkeys.iter().position(|member| member == pubkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::Encode;

    ssz_and_tree_hash_tests!(SyncCommittee);

    #[test]
    fn fixed_size() {
        assert_eq!(<SyncCommittee as Encode>::ssz_fixed_len(), 513 * 48);
    }

    #[test]
    fn position() {
        let mut committee = SyncCommittee::temporary();
        let pubkey = PublicKeyBytes::from([9; 48]);
        assert_eq!(committee.position(&pubkey), None);

        committee.pubkeys[3] = pubkey;
        assert_eq!(committee.position(&pubkey), Some(3));
    }
}
