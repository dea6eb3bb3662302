use super::{ContributionAndProof, SignatureBytes};
use crate::test_utils::TestRandom;
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A Validators signed contribution proof to publish on the `sync_committee_contribution_and_proof`
/// gossipsub topic.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash, SszSchema, TestRandom,
)]
pub struct SignedContributionAndProof {
    /// The `ContributionAndProof` that was signed.
    pub message: ContributionAndProof,
    /// The validator's signature of `message`.
    pub signature: SignatureBytes,
}
