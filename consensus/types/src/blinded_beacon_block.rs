//! Bellatrix blocks whose execution payload has been replaced by its header.
//!
//! Blinded blocks are exchanged with external block builders, which only released them for the
//! Bellatrix fork, so there is no fork-variant form.
use crate::consts::{
    MaxAttestations, MaxAttesterSlashings, MaxDeposits, MaxProposerSlashings, MaxVoluntaryExits,
};
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

#[derive(
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
)]
#[serde(deny_unknown_fields)]
pub struct BlindedBeaconBlockBody {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Graffiti,
    pub proposer_slashings: VariableList<ProposerSlashing, MaxProposerSlashings>,
    pub attester_slashings: VariableList<AttesterSlashing, MaxAttesterSlashings>,
    pub attestations: VariableList<Attestation, MaxAttestations>,
    pub deposits: VariableList<Deposit, MaxDeposits>,
    pub voluntary_exits: VariableList<SignedVoluntaryExit, MaxVoluntaryExits>,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload_header: ExecutionPayloadHeaderBellatrix,
}

#[derive(
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
)]
#[serde(deny_unknown_fields)]
pub struct BlindedBeaconBlock {
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: Hash256,
    pub state_root: Hash256,
    pub body: BlindedBeaconBlockBody,
}

#[derive(
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
)]
#[serde(deny_unknown_fields)]
pub struct SignedBlindedBeaconBlock {
    pub message: BlindedBeaconBlock,
    pub signature: SignatureBytes,
}

/// Returns an error unless `fork_name` is the one fork with blinded blocks.
fn check_blinded_fork(fork_name: ForkName, role: Role) -> Result<(), Error> {
    if fork_name == ForkName::Bellatrix {
        Ok(())
    } else {
        Err(Error::SchemaMismatch { fork_name, role })
    }
}

impl BlindedBeaconBlock {
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        check_blinded_fork(fork_name, Role::BlindedBeaconBlock)?;
        Ok(Self::from_ssz_bytes(bytes)?)
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        ForkName::Bellatrix
    }

    /// Returns the `tree_hash_root` of the block, which equals that of the full block.
    pub fn canonical_root(&self) -> Hash256 {
        self.tree_hash_root()
    }

    /// Returns a full `BeaconBlockHeader` of this block.
    pub fn block_header(&self) -> BeaconBlockHeader {
        BeaconBlockHeader {
            slot: self.slot,
            proposer_index: self.proposer_index,
            parent_root: self.parent_root,
            state_root: self.state_root,
            body_root: self.body.tree_hash_root(),
        }
    }
}

impl SignedRoot for BlindedBeaconBlock {}

impl SignedBlindedBeaconBlock {
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        check_blinded_fork(fork_name, Role::SignedBlindedBeaconBlock)?;
        Ok(Self::from_ssz_bytes(bytes)?)
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        ForkName::Bellatrix
    }

    /// Produce a signed beacon block header corresponding to this block.
    pub fn signed_block_header(&self) -> SignedBeaconBlockHeader {
        SignedBeaconBlockHeader {
            message: self.message.block_header(),
            signature: self.signature,
        }
    }
}

impl BeaconBlockBellatrix {
    /// Returns the blinded form of `self`, which has the same root.
    pub fn clone_as_blinded(&self) -> BlindedBeaconBlock {
        BlindedBeaconBlock {
            slot: self.slot,
            proposer_index: self.proposer_index,
            parent_root: self.parent_root,
            state_root: self.state_root,
            body: self.body.clone_as_blinded(),
        }
    }
}
