use crate::consts::DepositContractTreeDepthPlusOne;
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

pub const DEPOSIT_TREE_DEPTH: usize = 32;

/// A deposit to potentially become a beacon chain validator.
#[derive(
    Debug, PartialEq, Hash, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, SszSchema, TestRandom,
)]
pub struct Deposit {
    /// Branch in the deposit tree, plus the mixed-in deposit count.
    pub proof: FixedVector<Hash256, DepositContractTreeDepthPlusOne>,
    pub data: DepositData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_random_instance;
    use ssz::{Decode, Encode};
    use ssz_types::typenum::Unsigned;

    ssz_and_tree_hash_tests!(Deposit);

    #[test]
    fn fixed_size() {
        assert!(<Deposit as Encode>::is_ssz_fixed_len());
        assert_eq!(
            <Deposit as Encode>::ssz_fixed_len(),
            33 * 32 + 48 + 32 + 8 + 96
        );
        assert_eq!(
            DepositContractTreeDepthPlusOne::to_usize(),
            DEPOSIT_TREE_DEPTH + 1
        );
    }

    #[test]
    fn short_proof_is_rejected() {
        let deposit = test_random_instance::<Deposit>();
        let bytes = deposit.as_ssz_bytes();
        assert_eq!(
            Deposit::from_ssz_bytes(&bytes[32..]).unwrap_err().kind(),
            ssz::ErrorKind::TruncatedBuffer
        );
    }
}
