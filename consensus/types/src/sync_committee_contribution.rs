use crate::consts::SyncSubcommitteeSize;
use crate::test_utils::TestRandom;
use crate::{BitVector, Hash256, SignatureBytes, Slot};
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// An aggregation of `SyncCommitteeMessage`s from one subcommittee, used in gossip.
#[derive(
    Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, SszSchema, TestRandom,
)]
pub struct SyncCommitteeContribution {
    pub slot: Slot,
    pub beacon_block_root: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub subcommittee_index: u64,
    pub aggregation_bits: BitVector<SyncSubcommitteeSize>,
    pub signature: SignatureBytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::Encode;

    ssz_and_tree_hash_tests!(SyncCommitteeContribution);

    #[test]
    fn fixed_size() {
        assert_eq!(
            <SyncCommitteeContribution as Encode>::ssz_fixed_len(),
            8 + 32 + 8 + 16 + 96
        );
    }
}
