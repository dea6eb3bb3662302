use crate::consts::{
    MaxAttestations, MaxAttesterSlashings, MaxBlobCommitmentsPerBlock, MaxBlsToExecutionChanges,
    MaxDeposits, MaxProposerSlashings, MaxVoluntaryExits,
};
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

pub type KzgCommitments = VariableList<KzgCommitment, MaxBlobCommitmentsPerBlock>;

/// The body of a `BeaconChain` block, containing operations.
///
/// This *superstruct* abstracts over the hard-fork.
#[superstruct(
    variants(Base, Altair, Bellatrix, Capella, Deneb),
    variant_attributes(
        derive(
            Debug,
            Clone,
            Default,
            PartialEq,
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
    ref_attributes(
        derive(Debug, PartialEq, TreeHash),
        tree_hash(enum_behaviour = "transparent")
    ),
    cast_error(ty = "Error", expr = "Error::IncorrectForkVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectForkVariant")
)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, TreeHash, SszSchema)]
#[serde(untagged)]
#[tree_hash(enum_behaviour = "transparent")]
#[ssz(enum_behaviour = "transparent")]
pub struct BeaconBlockBody {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Graffiti,
    pub proposer_slashings: VariableList<ProposerSlashing, MaxProposerSlashings>,
    pub attester_slashings: VariableList<AttesterSlashing, MaxAttesterSlashings>,
    pub attestations: VariableList<Attestation, MaxAttestations>,
    pub deposits: VariableList<Deposit, MaxDeposits>,
    pub voluntary_exits: VariableList<SignedVoluntaryExit, MaxVoluntaryExits>,
    #[superstruct(only(Altair, Bellatrix, Capella, Deneb))]
    pub sync_aggregate: SyncAggregate,
    #[superstruct(only(Bellatrix), partial_getter(rename = "execution_payload_bellatrix"))]
    pub execution_payload: ExecutionPayloadBellatrix,
    #[superstruct(only(Capella), partial_getter(rename = "execution_payload_capella"))]
    pub execution_payload: ExecutionPayloadCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "execution_payload_deneb"))]
    pub execution_payload: ExecutionPayloadDeneb,
    #[superstruct(only(Capella, Deneb))]
    pub bls_to_execution_changes: VariableList<SignedBlsToExecutionChange, MaxBlsToExecutionChanges>,
    #[superstruct(only(Deneb))]
    pub blob_kzg_commitments: KzgCommitments,
}

impl BeaconBlockBody {
    /// Decodes `bytes` with the body shape of `fork_name`.
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        Ok(match fork_name {
            ForkName::Base => Self::Base(BeaconBlockBodyBase::from_ssz_bytes(bytes)?),
            ForkName::Altair => Self::Altair(BeaconBlockBodyAltair::from_ssz_bytes(bytes)?),
            ForkName::Bellatrix => {
                Self::Bellatrix(BeaconBlockBodyBellatrix::from_ssz_bytes(bytes)?)
            }
            ForkName::Capella => Self::Capella(BeaconBlockBodyCapella::from_ssz_bytes(bytes)?),
            ForkName::Deneb => Self::Deneb(BeaconBlockBodyDeneb::from_ssz_bytes(bytes)?),
        })
    }

    /// Returns an empty body with the shape of `fork_name`.
    pub fn empty(fork_name: ForkName) -> Self {
        match fork_name {
            ForkName::Base => Self::Base(<_>::default()),
            ForkName::Altair => Self::Altair(<_>::default()),
            ForkName::Bellatrix => Self::Bellatrix(<_>::default()),
            ForkName::Capella => Self::Capella(<_>::default()),
            ForkName::Deneb => Self::Deneb(<_>::default()),
        }
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        self.to_ref().fork_name_unchecked()
    }

    /// Returns the execution payload, if the fork of `self` has one.
    pub fn execution_payload(&self) -> Result<ExecutionPayload, Error> {
        match self {
            BeaconBlockBody::Base(_) | BeaconBlockBody::Altair(_) => Err(Error::SchemaMismatch {
                fork_name: self.fork_name_unchecked(),
                role: Role::ExecutionPayload,
            }),
            BeaconBlockBody::Bellatrix(body) => {
                Ok(ExecutionPayload::Bellatrix(body.execution_payload.clone()))
            }
            BeaconBlockBody::Capella(body) => {
                Ok(ExecutionPayload::Capella(body.execution_payload.clone()))
            }
            BeaconBlockBody::Deneb(body) => {
                Ok(ExecutionPayload::Deneb(body.execution_payload.clone()))
            }
        }
    }
}

impl<'a> BeaconBlockBodyRef<'a> {
    /// Get the fork_name of this object
    pub fn fork_name_unchecked(self) -> ForkName {
        match self {
            BeaconBlockBodyRef::Base { .. } => ForkName::Base,
            BeaconBlockBodyRef::Altair { .. } => ForkName::Altair,
            BeaconBlockBodyRef::Bellatrix { .. } => ForkName::Bellatrix,
            BeaconBlockBodyRef::Capella { .. } => ForkName::Capella,
            BeaconBlockBodyRef::Deneb { .. } => ForkName::Deneb,
        }
    }
}

impl BeaconBlockBodyBellatrix {
    /// Returns the blinded form of `self`, with the payload replaced by its header.
    pub fn clone_as_blinded(&self) -> BlindedBeaconBlockBody {
        BlindedBeaconBlockBody {
            randao_reveal: self.randao_reveal,
            eth1_data: self.eth1_data.clone(),
            graffiti: self.graffiti,
            proposer_slashings: self.proposer_slashings.clone(),
            attester_slashings: self.attester_slashings.clone(),
            attestations: self.attestations.clone(),
            deposits: self.deposits.clone(),
            voluntary_exits: self.voluntary_exits.clone(),
            sync_aggregate: self.sync_aggregate.clone(),
            execution_payload_header: ExecutionPayloadHeaderBellatrix::from(
                &self.execution_payload,
            ),
        }
    }
}
