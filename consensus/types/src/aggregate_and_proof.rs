use super::{Attestation, SignatureBytes, SignedRoot};
use crate::test_utils::TestRandom;
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A Validators aggregate attestation and selection proof.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash, SszSchema, TestRandom,
)]
pub struct AggregateAndProof {
    /// The index of the validator that created the attestation.
    #[serde(with = "serde_utils::quoted_u64")]
    pub aggregator_index: u64,
    /// The aggregate attestation.
    pub aggregate: Attestation,
    /// A proof provided by the validator that permits them to publish on the
    /// `beacon_aggregate_and_proof` gossipsub topic.
    pub selection_proof: SignatureBytes,
}

impl SignedRoot for AggregateAndProof {}
