use crate::consts::{
    EpochsPerHistoricalVector, EpochsPerSlashingsVector, HistoricalRootsLimit,
    JustificationBitsLength, MaxPendingAttestations, SlotsPerEth1VotingPeriod,
    SlotsPerHistoricalRoot, ValidatorRegistryLimit,
};
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// The state of the `BeaconChain` at some slot.
#[superstruct(
    variants(Base, Altair, Bellatrix, Capella, Deneb),
    variant_attributes(
        derive(
            Debug,
            PartialEq,
            Clone,
            Serialize,
            Deserialize,
            Encode,
            Decode,
            TreeHash,
            SszSchema,
            TestRandom,
        ),
        serde(deny_unknown_fields),
    ),
    cast_error(ty = "Error", expr = "Error::IncorrectForkVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectForkVariant")
)]
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, TreeHash, SszSchema)]
#[serde(untagged)]
#[tree_hash(enum_behaviour = "transparent")]
#[ssz(enum_behaviour = "transparent")]
pub struct BeaconState {
    // Versioning
    #[superstruct(getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub genesis_time: u64,
    #[superstruct(getter(copy))]
    pub genesis_validators_root: Hash256,
    #[superstruct(getter(copy))]
    pub slot: Slot,
    #[superstruct(getter(copy))]
    pub fork: Fork,

    // History
    pub latest_block_header: BeaconBlockHeader,
    pub block_roots: FixedVector<Hash256, SlotsPerHistoricalRoot>,
    pub state_roots: FixedVector<Hash256, SlotsPerHistoricalRoot>,
    // Frozen in Capella, replaced by historical_summaries
    pub historical_roots: VariableList<Hash256, HistoricalRootsLimit>,

    // Ethereum 1.0 chain data
    pub eth1_data: Eth1Data,
    pub eth1_data_votes: VariableList<Eth1Data, SlotsPerEth1VotingPeriod>,
    #[superstruct(getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub eth1_deposit_index: u64,

    // Registry
    pub validators: VariableList<Validator, ValidatorRegistryLimit>,
    #[serde(with = "ssz_types::serde_utils::quoted_u64_var_list")]
    pub balances: VariableList<u64, ValidatorRegistryLimit>,

    // Randomness
    pub randao_mixes: FixedVector<Hash256, EpochsPerHistoricalVector>,

    // Slashings
    #[serde(with = "ssz_types::serde_utils::quoted_u64_fixed_vec")]
    pub slashings: FixedVector<u64, EpochsPerSlashingsVector>,

    // Attestations (genesis fork only)
    #[superstruct(only(Base))]
    pub previous_epoch_attestations: VariableList<PendingAttestation, MaxPendingAttestations>,
    #[superstruct(only(Base))]
    pub current_epoch_attestations: VariableList<PendingAttestation, MaxPendingAttestations>,

    // Participation (Altair and later)
    #[superstruct(only(Altair, Bellatrix, Capella, Deneb))]
    pub previous_epoch_participation: VariableList<u8, ValidatorRegistryLimit>,
    #[superstruct(only(Altair, Bellatrix, Capella, Deneb))]
    pub current_epoch_participation: VariableList<u8, ValidatorRegistryLimit>,

    // Finality
    pub justification_bits: BitVector<JustificationBitsLength>,
    #[superstruct(getter(copy))]
    pub previous_justified_checkpoint: Checkpoint,
    #[superstruct(getter(copy))]
    pub current_justified_checkpoint: Checkpoint,
    #[superstruct(getter(copy))]
    pub finalized_checkpoint: Checkpoint,

    // Inactivity
    #[serde(with = "ssz_types::serde_utils::quoted_u64_var_list")]
    #[superstruct(only(Altair, Bellatrix, Capella, Deneb))]
    pub inactivity_scores: VariableList<u64, ValidatorRegistryLimit>,

    // Light-client sync committees
    #[superstruct(only(Altair, Bellatrix, Capella, Deneb))]
    pub current_sync_committee: SyncCommittee,
    #[superstruct(only(Altair, Bellatrix, Capella, Deneb))]
    pub next_sync_committee: SyncCommittee,

    // Execution
    #[superstruct(
        only(Bellatrix),
        partial_getter(rename = "latest_execution_payload_header_bellatrix")
    )]
    pub latest_execution_payload_header: ExecutionPayloadHeaderBellatrix,
    #[superstruct(
        only(Capella),
        partial_getter(rename = "latest_execution_payload_header_capella")
    )]
    pub latest_execution_payload_header: ExecutionPayloadHeaderCapella,
    #[superstruct(
        only(Deneb),
        partial_getter(rename = "latest_execution_payload_header_deneb")
    )]
    pub latest_execution_payload_header: ExecutionPayloadHeaderDeneb,

    // Capella
    #[superstruct(only(Capella, Deneb), partial_getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub next_withdrawal_index: u64,
    #[superstruct(only(Capella, Deneb), partial_getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub next_withdrawal_validator_index: u64,
    // Deep history valid from Capella onwards.
    #[superstruct(only(Capella, Deneb))]
    pub historical_summaries: VariableList<HistoricalSummary, HistoricalRootsLimit>,
}

impl BeaconState {
    /// SSZ decoder for the state shape of `fork_name`.
    ///
    /// The fixed parts of adjacent forks differ in length, so the state bytes of one fork fail
    /// to decode as another with a truncated buffer or malformed offsets.
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        Ok(match fork_name {
            ForkName::Base => Self::Base(BeaconStateBase::from_ssz_bytes(bytes)?),
            ForkName::Altair => Self::Altair(BeaconStateAltair::from_ssz_bytes(bytes)?),
            ForkName::Bellatrix => Self::Bellatrix(BeaconStateBellatrix::from_ssz_bytes(bytes)?),
            ForkName::Capella => Self::Capella(BeaconStateCapella::from_ssz_bytes(bytes)?),
            ForkName::Deneb => Self::Deneb(BeaconStateDeneb::from_ssz_bytes(bytes)?),
        })
    }

    /// Returns the name of the fork pertaining to `self`.
    ///
    /// Does not check if `self` is consistent with the fork dictated by `self.slot()`.
    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            BeaconState::Base { .. } => ForkName::Base,
            BeaconState::Altair { .. } => ForkName::Altair,
            BeaconState::Bellatrix { .. } => ForkName::Bellatrix,
            BeaconState::Capella { .. } => ForkName::Capella,
            BeaconState::Deneb { .. } => ForkName::Deneb,
        }
    }

    /// Returns the name of the fork pertaining to `self`.
    ///
    /// Will return an `Err` if `self` has been instantiated to a variant conflicting with the fork
    /// dictated by `self.slot()`.
    pub fn fork_name(&self, spec: &ChainSpec) -> Result<ForkName, InconsistentFork> {
        let fork_at_slot = spec.fork_name_at_slot(self.slot());
        let object_fork = self.fork_name_unchecked();

        if fork_at_slot == object_fork {
            Ok(object_fork)
        } else {
            Err(InconsistentFork {
                fork_at_slot,
                object_fork,
            })
        }
    }

    /// Returns the `tree_hash_root` of the state.
    pub fn canonical_root(&self) -> Hash256 {
        self.tree_hash_root()
    }

    /// Returns the epoch corresponding to `self.slot()`.
    pub fn current_epoch(&self, slots_per_epoch: u64) -> Epoch {
        self.slot().epoch(slots_per_epoch)
    }

    /// Returns the latest execution payload header, if the fork of `self` has one.
    pub fn latest_execution_payload_header(&self) -> Result<ExecutionPayloadHeader, Error> {
        match self {
            BeaconState::Base(_) | BeaconState::Altair(_) => Err(Error::SchemaMismatch {
                fork_name: self.fork_name_unchecked(),
                role: Role::ExecutionPayloadHeader,
            }),
            BeaconState::Bellatrix(state) => Ok(ExecutionPayloadHeader::Bellatrix(
                state.latest_execution_payload_header.clone(),
            )),
            BeaconState::Capella(state) => Ok(ExecutionPayloadHeader::Capella(
                state.latest_execution_payload_header.clone(),
            )),
            BeaconState::Deneb(state) => Ok(ExecutionPayloadHeader::Deneb(
                state.latest_execution_payload_header.clone(),
            )),
        }
    }

    /// Returns the summary of the block and state roots that is appended to the historical
    /// accumulator at the end of each `SLOTS_PER_HISTORICAL_ROOT` period.
    pub fn historical_summary(&self) -> HistoricalSummary {
        HistoricalSummary {
            block_summary_root: self.block_roots().tree_hash_root(),
            state_summary_root: self.state_roots().tree_hash_root(),
        }
    }

    /// Returns the number of validators in the registry.
    pub fn validator_count(&self) -> usize {
        self.validators().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_random_instance;
    use ssz::Encode;

    mod base {
        use super::super::*;
        ssz_and_tree_hash_tests!(BeaconStateBase);
    }
    mod altair {
        use super::super::*;
        ssz_and_tree_hash_tests!(BeaconStateAltair);
    }
    mod bellatrix {
        use super::super::*;
        ssz_and_tree_hash_tests!(BeaconStateBellatrix);
    }
    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(BeaconStateCapella);
    }
    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(BeaconStateDeneb);
    }

    #[test]
    fn decode_for_fork() {
        let state = BeaconState::Bellatrix(test_random_instance());
        let bytes = state.as_ssz_bytes();

        let decoded = BeaconState::from_ssz_bytes_for_fork(&bytes, ForkName::Bellatrix).unwrap();
        assert_eq!(decoded.fork_name_unchecked(), ForkName::Bellatrix);
        assert_eq!(decoded.canonical_root(), state.canonical_root());
        assert_eq!(decoded, state);
    }

    #[test]
    fn base_state_is_not_an_altair_state() {
        let state = BeaconState::Base(test_random_instance());
        let bytes = state.as_ssz_bytes();

        let kind = BeaconState::from_ssz_bytes_for_fork(&bytes, ForkName::Altair)
            .unwrap_err()
            .kind();
        assert!(
            kind == ssz::ErrorKind::TruncatedBuffer || kind == ssz::ErrorKind::MalformedOffsets,
            "unexpected error kind {:?}",
            kind
        );
    }

    #[test]
    fn fork_specific_accessors() {
        let altair = BeaconState::Altair(test_random_instance());
        assert!(altair.current_sync_committee().is_ok());
        assert!(altair.previous_epoch_attestations().is_err());
        assert!(altair.next_withdrawal_index().is_err());
        assert!(altair.latest_execution_payload_header().is_err());

        let deneb = BeaconState::Deneb(test_random_instance());
        assert_eq!(
            deneb.latest_execution_payload_header().unwrap().fork_name_unchecked(),
            ForkName::Deneb
        );
        assert_eq!(deneb.validator_count(), deneb.validators().len());
    }

    #[test]
    fn historical_summary_matches_batch() {
        let state = BeaconState::Capella(test_random_instance());
        let batch = HistoricalBatch {
            block_roots: state.block_roots().clone(),
            state_roots: state.state_roots().clone(),
        };
        assert_eq!(
            state.historical_summary().tree_hash_root(),
            batch.tree_hash_root()
        );
    }

    #[test]
    fn fork_name_checks_slot() {
        let spec = ChainSpec::mainnet();
        let mut state: BeaconStateAltair = test_random_instance();
        state.slot = Slot::new(0);
        let state = BeaconState::Altair(state);

        assert_eq!(
            state.fork_name(&spec),
            Err(InconsistentFork {
                fork_at_slot: ForkName::Base,
                object_fork: ForkName::Altair,
            })
        );
    }
}
