use crate::test_utils::TestRandom;
use crate::{Hash256, Uint256};

use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A proof-of-work block, as seen when checking the terminal block of the merge.
#[derive(
    Default,
    Debug,
    PartialEq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
    SszSchema,
    TestRandom,
)]
pub struct PowBlock {
    pub block_hash: Hash256,
    pub parent_hash: Hash256,
    #[serde(with = "serde_utils::quoted_u256")]
    pub total_difficulty: Uint256,
}
