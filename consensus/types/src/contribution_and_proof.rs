use super::{SignatureBytes, SignedRoot, SyncCommitteeContribution};
use crate::test_utils::TestRandom;
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A Validators aggregate sync committee contribution and selection proof.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash, SszSchema, TestRandom,
)]
pub struct ContributionAndProof {
    /// The index of the validator that created the sync contribution.
    #[serde(with = "serde_utils::quoted_u64")]
    pub aggregator_index: u64,
    /// The aggregate contribution.
    pub contribution: SyncCommitteeContribution,
    /// A proof provided by the validator that permits them to publish on the
    /// `sync_committee_contribution_and_proof` gossipsub topic.
    pub selection_proof: SignatureBytes,
}

impl SignedRoot for ContributionAndProof {}

#[cfg(test)]
mod tests {
    use super::*;

    ssz_and_tree_hash_tests!(ContributionAndProof);
}
