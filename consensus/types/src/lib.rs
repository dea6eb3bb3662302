//! Ethereum consensus records for the phase0, altair, bellatrix, capella and deneb forks, with
//! SSZ encodings, tree hash roots and type descriptors.
//!
//! Records whose shape changes between forks are *superstructs*: an enum over one struct per
//! fork. The fork is always supplied by the caller (see `ForkVersioned` and `schema_for`); bytes
//! are never inspected to guess it.

// Required for big type-level numbers
#![recursion_limit = "128"]

#[macro_use]
pub mod test_utils;
#[macro_use]
mod slot_epoch_macros;

pub mod aggregate_and_proof;
pub mod attestation;
pub mod attestation_data;
pub mod attester_slashing;
pub mod beacon_block;
pub mod beacon_block_body;
pub mod beacon_block_header;
pub mod beacon_state;
pub mod blinded_beacon_block;
pub mod bls_to_execution_change;
pub mod chain_spec;
pub mod checkpoint;
pub mod consts;
pub mod contribution_and_proof;
pub mod deposit;
pub mod deposit_data;
pub mod deposit_message;
pub mod error;
pub mod eth1_block;
pub mod eth1_data;
pub mod execution_payload;
pub mod execution_payload_header;
pub mod fixed_bytes;
pub mod fork;
pub mod fork_data;
pub mod fork_name;
pub mod fork_versioned;
pub mod historical_batch;
pub mod historical_summary;
pub mod indexed_attestation;
pub mod light_client_bootstrap;
pub mod light_client_finality_update;
pub mod light_client_header;
pub mod light_client_optimistic_update;
pub mod light_client_update;
pub mod pending_attestation;
pub mod pow_block;
pub mod proposer_slashing;
pub mod role;
pub mod schema;
pub mod signed_aggregate_and_proof;
pub mod signed_beacon_block;
pub mod signed_beacon_block_header;
pub mod signed_bls_to_execution_change;
pub mod signed_contribution_and_proof;
pub mod signed_voluntary_exit;
pub mod signing_data;
pub mod slot_epoch;
pub mod sync_aggregate;
pub mod sync_aggregator_selection_data;
pub mod sync_committee;
pub mod sync_committee_contribution;
pub mod sync_committee_message;
pub mod validator;
pub mod voluntary_exit;
pub mod withdrawal;

use ethereum_types::{H160, H256, U256};

pub use crate::aggregate_and_proof::AggregateAndProof;
pub use crate::attestation::Attestation;
pub use crate::attestation_data::AttestationData;
pub use crate::attester_slashing::AttesterSlashing;
pub use crate::beacon_block::{
    BeaconBlock, BeaconBlockAltair, BeaconBlockBase, BeaconBlockBellatrix, BeaconBlockCapella,
    BeaconBlockDeneb, BeaconBlockRef,
};
pub use crate::beacon_block_body::{
    BeaconBlockBody, BeaconBlockBodyAltair, BeaconBlockBodyBase, BeaconBlockBodyBellatrix,
    BeaconBlockBodyCapella, BeaconBlockBodyDeneb, BeaconBlockBodyRef, KzgCommitments,
};
pub use crate::beacon_block_header::BeaconBlockHeader;
pub use crate::beacon_state::{
    BeaconState, BeaconStateAltair, BeaconStateBase, BeaconStateBellatrix, BeaconStateCapella,
    BeaconStateDeneb,
};
pub use crate::blinded_beacon_block::{
    BlindedBeaconBlock, BlindedBeaconBlockBody, SignedBlindedBeaconBlock,
};
pub use crate::bls_to_execution_change::BlsToExecutionChange;
pub use crate::chain_spec::{ChainSpec, Config, Domain};
pub use crate::checkpoint::Checkpoint;
pub use crate::contribution_and_proof::ContributionAndProof;
pub use crate::deposit::{Deposit, DEPOSIT_TREE_DEPTH};
pub use crate::deposit_data::DepositData;
pub use crate::deposit_message::DepositMessage;
pub use crate::error::Error;
pub use crate::eth1_block::Eth1Block;
pub use crate::eth1_data::Eth1Data;
pub use crate::execution_payload::{
    ExecutionPayload, ExecutionPayloadBellatrix, ExecutionPayloadCapella, ExecutionPayloadDeneb,
    Transaction, Transactions, Withdrawals,
};
pub use crate::execution_payload_header::{
    ExecutionPayloadHeader, ExecutionPayloadHeaderBellatrix, ExecutionPayloadHeaderCapella,
    ExecutionPayloadHeaderDeneb,
};
pub use crate::fixed_bytes::{
    FixedBytesError, Graffiti, KzgCommitment, PublicKeyBytes, SignatureBytes,
};
pub use crate::fork::Fork;
pub use crate::fork_data::ForkData;
pub use crate::fork_name::{ForkName, InconsistentFork};
pub use crate::fork_versioned::{ForkVersioned, Record};
pub use crate::historical_batch::HistoricalBatch;
pub use crate::historical_summary::HistoricalSummary;
pub use crate::indexed_attestation::IndexedAttestation;
pub use crate::light_client_bootstrap::{
    LightClientBootstrap, LightClientBootstrapAltair, LightClientBootstrapCapella,
    LightClientBootstrapDeneb,
};
pub use crate::light_client_finality_update::{
    LightClientFinalityUpdate, LightClientFinalityUpdateAltair, LightClientFinalityUpdateCapella,
    LightClientFinalityUpdateDeneb,
};
pub use crate::light_client_header::{
    ExecutionBranch, LightClientHeader, LightClientHeaderAltair, LightClientHeaderCapella,
    LightClientHeaderDeneb,
};
pub use crate::light_client_optimistic_update::{
    LightClientOptimisticUpdate, LightClientOptimisticUpdateAltair,
    LightClientOptimisticUpdateCapella, LightClientOptimisticUpdateDeneb,
};
pub use crate::light_client_update::{
    LightClientUpdate, LightClientUpdateAltair, LightClientUpdateCapella, LightClientUpdateDeneb,
};
pub use crate::pending_attestation::PendingAttestation;
pub use crate::pow_block::PowBlock;
pub use crate::proposer_slashing::ProposerSlashing;
pub use crate::role::Role;
pub use crate::schema::schema_for;
pub use crate::signed_aggregate_and_proof::SignedAggregateAndProof;
pub use crate::signed_beacon_block::{
    SignedBeaconBlock, SignedBeaconBlockAltair, SignedBeaconBlockBase, SignedBeaconBlockBellatrix,
    SignedBeaconBlockCapella, SignedBeaconBlockDeneb,
};
pub use crate::signed_beacon_block_header::SignedBeaconBlockHeader;
pub use crate::signed_bls_to_execution_change::SignedBlsToExecutionChange;
pub use crate::signed_contribution_and_proof::SignedContributionAndProof;
pub use crate::signed_voluntary_exit::SignedVoluntaryExit;
pub use crate::signing_data::{SignedRoot, SigningData};
pub use crate::slot_epoch::{Epoch, Slot};
pub use crate::sync_aggregate::SyncAggregate;
pub use crate::sync_aggregator_selection_data::SyncAggregatorSelectionData;
pub use crate::sync_committee::SyncCommittee;
pub use crate::sync_committee_contribution::SyncCommitteeContribution;
pub use crate::sync_committee_message::SyncCommitteeMessage;
pub use crate::validator::Validator;
pub use crate::voluntary_exit::VoluntaryExit;
pub use crate::withdrawal::Withdrawal;

pub type Hash256 = H256;
pub type Address = H160;
pub type Uint256 = U256;

pub use ssz_types::{typenum, typenum::Unsigned, BitList, BitVector, FixedVector, VariableList};
