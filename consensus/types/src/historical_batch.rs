use crate::consts::SlotsPerHistoricalRoot;
use crate::test_utils::TestRandom;
use crate::*;

use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// Historical block and state roots.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash, SszSchema, TestRandom,
)]
pub struct HistoricalBatch {
    pub block_roots: FixedVector<Hash256, SlotsPerHistoricalRoot>,
    pub state_roots: FixedVector<Hash256, SlotsPerHistoricalRoot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::Encode;

    ssz_and_tree_hash_tests!(HistoricalBatch);

    #[test]
    fn fixed_size() {
        assert_eq!(<HistoricalBatch as Encode>::ssz_fixed_len(), 2 * 8192 * 32);
    }
}
