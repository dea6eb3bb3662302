use crate::test_utils::TestRandom;
use crate::{DepositMessage, Hash256, PublicKeyBytes, SignatureBytes};

use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// The data supplied by the user to the deposit contract.
#[derive(
    Debug,
    PartialEq,
    Hash,
    Clone,
    Default,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
    SszSchema,
    TestRandom,
)]
pub struct DepositData {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
    pub signature: SignatureBytes,
}

impl DepositData {
    /// Create a `DepositMessage` corresponding to this `DepositData`, for signature verification.
    pub fn as_deposit_message(&self) -> DepositMessage {
        DepositMessage {
            pubkey: self.pubkey,
            withdrawal_credentials: self.withdrawal_credentials,
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_hash::TreeHash;

    ssz_and_tree_hash_tests!(DepositData);

    #[test]
    fn deposit_message_omits_signature() {
        let data = DepositData {
            pubkey: PublicKeyBytes::from([1; 48]),
            withdrawal_credentials: Hash256::repeat_byte(2),
            amount: 32_000_000_000,
            signature: SignatureBytes::from([3; 96]),
        };
        let message = data.as_deposit_message();

        assert_eq!(message.pubkey, data.pubkey);
        assert_eq!(message.amount, data.amount);
        assert_ne!(message.tree_hash_root(), data.tree_hash_root());
    }
}
