use crate::consts::MaxValidatorsPerCommittee;
use crate::test_utils::TestRandom;
use crate::{AttestationData, SignatureBytes, VariableList};
use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// Details an attestation that can be slashable.
///
/// To be included in an `AttesterSlashing`.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
    SszSchema,
    TestRandom,
)]
pub struct IndexedAttestation {
    /// Lists validator registry indices, not committee indices.
    #[serde(with = "ssz_types::serde_utils::quoted_u64_var_list")]
    pub attesting_indices: VariableList<u64, MaxValidatorsPerCommittee>,
    pub data: AttestationData,
    pub signature: SignatureBytes,
}

impl IndexedAttestation {
    /// Check if ``attestation_data_1`` and ``attestation_data_2`` have the same target.
    pub fn is_double_vote(&self, other: &Self) -> bool {
        self.data.target.epoch == other.data.target.epoch && self.data != other.data
    }

    /// Check if ``attestation_data_1`` surrounds ``attestation_data_2``.
    pub fn is_surround_vote(&self, other: &Self) -> bool {
        self.data.source.epoch < other.data.source.epoch
            && other.data.target.epoch < self.data.target.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checkpoint, Epoch};

    ssz_and_tree_hash_tests!(IndexedAttestation);

    fn create_indexed_attestation(
        target_epoch: u64,
        source_epoch: u64,
        slot: u64,
    ) -> IndexedAttestation {
        IndexedAttestation {
            attesting_indices: VariableList::empty(),
            data: AttestationData {
                slot: slot.into(),
                source: Checkpoint {
                    epoch: Epoch::new(source_epoch),
                    ..Checkpoint::default()
                },
                target: Checkpoint {
                    epoch: Epoch::new(target_epoch),
                    ..Checkpoint::default()
                },
                ..AttestationData::default()
            },
            signature: SignatureBytes::empty(),
        }
    }

    #[test]
    pub fn test_is_double_vote_true() {
        let indexed_vote_first = create_indexed_attestation(3, 1, 1);
        let indexed_vote_second = create_indexed_attestation(3, 2, 2);

        assert!(indexed_vote_first.is_double_vote(&indexed_vote_second))
    }

    #[test]
    pub fn test_is_double_vote_false() {
        let indexed_vote_first = create_indexed_attestation(1, 1, 1);
        let indexed_vote_second = create_indexed_attestation(2, 1, 1);

        assert!(!indexed_vote_first.is_double_vote(&indexed_vote_second));
    }

    #[test]
    pub fn test_is_surround_vote_true() {
        let indexed_vote_first = create_indexed_attestation(3, 1, 1);
        let indexed_vote_second = create_indexed_attestation(2, 2, 2);

        assert!(indexed_vote_first.is_surround_vote(&indexed_vote_second));
    }

    #[test]
    pub fn test_is_surround_vote_false_source_epoch_fails() {
        let indexed_vote_first = create_indexed_attestation(2, 2, 2);
        let indexed_vote_second = create_indexed_attestation(1, 1, 1);

        assert!(!indexed_vote_first.is_surround_vote(&indexed_vote_second));
    }
}
