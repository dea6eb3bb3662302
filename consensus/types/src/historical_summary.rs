use crate::test_utils::TestRandom;
use crate::Hash256;
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// `HistoricalSummary` matches the components of the phase0 `HistoricalBatch`
/// making the two hash_tree_root-compatible. This struct is introduced into the beacon state
/// in the Capella hard fork.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
    SszSchema,
    TestRandom,
)]
pub struct HistoricalSummary {
    pub block_summary_root: Hash256,
    pub state_summary_root: Hash256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_random_instance;
    use crate::HistoricalBatch;
    use tree_hash::TreeHash;

    ssz_and_tree_hash_tests!(HistoricalSummary);

    #[test]
    fn root_matches_historical_batch() {
        let batch = test_random_instance::<HistoricalBatch>();
        let summary = HistoricalSummary {
            block_summary_root: batch.block_roots.tree_hash_root(),
            state_summary_root: batch.state_roots.tree_hash_root(),
        };

        assert_eq!(summary.tree_hash_root(), batch.tree_hash_root());
    }
}
