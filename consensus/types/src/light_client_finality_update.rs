use crate::consts::FinalizedRootProofLen;
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A LightClientFinalityUpdate is the update light clients request or receive on gossip when
/// the finalized checkpoint advances.
#[superstruct(
    variants(Altair, Capella, Deneb),
    variant_attributes(
        derive(
            Debug,
            Clone,
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
    cast_error(ty = "Error", expr = "Error::IncorrectForkVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectForkVariant")
)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, TreeHash, SszSchema)]
#[serde(untagged)]
#[tree_hash(enum_behaviour = "transparent")]
#[ssz(enum_behaviour = "transparent")]
pub struct LightClientFinalityUpdate {
    /// The last `BeaconBlockHeader` from the last attested block by the sync committee.
    #[superstruct(only(Altair), partial_getter(rename = "attested_header_altair"))]
    pub attested_header: LightClientHeaderAltair,
    #[superstruct(only(Capella), partial_getter(rename = "attested_header_capella"))]
    pub attested_header: LightClientHeaderCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "attested_header_deneb"))]
    pub attested_header: LightClientHeaderDeneb,
    /// The last `BeaconBlockHeader` from the last attested finalized block (end of epoch).
    #[superstruct(only(Altair), partial_getter(rename = "finalized_header_altair"))]
    pub finalized_header: LightClientHeaderAltair,
    #[superstruct(only(Capella), partial_getter(rename = "finalized_header_capella"))]
    pub finalized_header: LightClientHeaderCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "finalized_header_deneb"))]
    pub finalized_header: LightClientHeaderDeneb,
    /// Merkle proof attesting finalized header.
    pub finality_branch: FixedVector<Hash256, FinalizedRootProofLen>,
    /// current sync aggregate
    pub sync_aggregate: SyncAggregate,
    /// Slot of the sync aggregated signature
    #[superstruct(getter(copy))]
    pub signature_slot: Slot,
}

impl LightClientFinalityUpdate {
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        match fork_name {
            ForkName::Base => Err(Error::SchemaMismatch {
                fork_name,
                role: Role::LightClientFinalityUpdate,
            }),
            ForkName::Altair | ForkName::Bellatrix => Ok(Self::Altair(
                LightClientFinalityUpdateAltair::from_ssz_bytes(bytes)?,
            )),
            ForkName::Capella => Ok(Self::Capella(
                LightClientFinalityUpdateCapella::from_ssz_bytes(bytes)?,
            )),
            ForkName::Deneb => Ok(Self::Deneb(
                LightClientFinalityUpdateDeneb::from_ssz_bytes(bytes)?,
            )),
        }
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            LightClientFinalityUpdate::Altair(_) => ForkName::Altair,
            LightClientFinalityUpdate::Capella(_) => ForkName::Capella,
            LightClientFinalityUpdate::Deneb(_) => ForkName::Deneb,
        }
    }
}

#[cfg(test)]
mod tests {
    mod altair {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientFinalityUpdateAltair);
    }
    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientFinalityUpdateCapella);
    }
    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientFinalityUpdateDeneb);
    }
}
