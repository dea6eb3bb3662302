use crate::consts::{FinalizedRootProofLen, NextSyncCommitteeProofLen};
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A LightClientUpdate is the update we request solely to either complete the bootstrapping process,
/// or to sync up to the last committee period, we need to have one ready for each ALTAIR period
/// we go over, note: there is no need to keep all of the updates from [ALTAIR_PERIOD, CURRENT_PERIOD].
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
pub struct LightClientUpdate {
    /// The last `BeaconBlockHeader` from the last attested block by the sync committee.
    #[superstruct(only(Altair), partial_getter(rename = "attested_header_altair"))]
    pub attested_header: LightClientHeaderAltair,
    #[superstruct(only(Capella), partial_getter(rename = "attested_header_capella"))]
    pub attested_header: LightClientHeaderCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "attested_header_deneb"))]
    pub attested_header: LightClientHeaderDeneb,
    /// The `SyncCommittee` used in the next period.
    pub next_sync_committee: SyncCommittee,
    /// Merkle proof for next sync committee
    pub next_sync_committee_branch: FixedVector<Hash256, NextSyncCommitteeProofLen>,
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

impl LightClientUpdate {
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        match fork_name {
            ForkName::Base => Err(Error::SchemaMismatch {
                fork_name,
                role: Role::LightClientUpdate,
            }),
            ForkName::Altair | ForkName::Bellatrix => Ok(Self::Altair(
                LightClientUpdateAltair::from_ssz_bytes(bytes)?,
            )),
            ForkName::Capella => Ok(Self::Capella(LightClientUpdateCapella::from_ssz_bytes(
                bytes,
            )?)),
            ForkName::Deneb => Ok(Self::Deneb(LightClientUpdateDeneb::from_ssz_bytes(bytes)?)),
        }
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            LightClientUpdate::Altair(_) => ForkName::Altair,
            LightClientUpdate::Capella(_) => ForkName::Capella,
            LightClientUpdate::Deneb(_) => ForkName::Deneb,
        }
    }

    /// Returns the finality update contained in `self`.
    pub fn to_finality_update(&self) -> LightClientFinalityUpdate {
        match self {
            LightClientUpdate::Altair(update) => {
                LightClientFinalityUpdate::Altair(LightClientFinalityUpdateAltair {
                    attested_header: update.attested_header.clone(),
                    finalized_header: update.finalized_header.clone(),
                    finality_branch: update.finality_branch.clone(),
                    sync_aggregate: update.sync_aggregate.clone(),
                    signature_slot: update.signature_slot,
                })
            }
            LightClientUpdate::Capella(update) => {
                LightClientFinalityUpdate::Capella(LightClientFinalityUpdateCapella {
                    attested_header: update.attested_header.clone(),
                    finalized_header: update.finalized_header.clone(),
                    finality_branch: update.finality_branch.clone(),
                    sync_aggregate: update.sync_aggregate.clone(),
                    signature_slot: update.signature_slot,
                })
            }
            LightClientUpdate::Deneb(update) => {
                LightClientFinalityUpdate::Deneb(LightClientFinalityUpdateDeneb {
                    attested_header: update.attested_header.clone(),
                    finalized_header: update.finalized_header.clone(),
                    finality_branch: update.finality_branch.clone(),
                    sync_aggregate: update.sync_aggregate.clone(),
                    signature_slot: update.signature_slot,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_random_instance;
    use ssz::Encode;

    mod altair {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientUpdateAltair);
    }
    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientUpdateCapella);
    }
    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientUpdateDeneb);
    }

    #[test]
    fn altair_update_is_fixed_size() {
        let update = LightClientUpdate::Altair(test_random_instance());
        let bytes = update.as_ssz_bytes();
        assert_eq!(
            bytes.len(),
            112 + 513 * 48 + 5 * 32 + 112 + 6 * 32 + (64 + 96) + 8
        );
        assert_eq!(
            LightClientUpdate::from_ssz_bytes_for_fork(&bytes, ForkName::Bellatrix),
            Ok(update)
        );
    }

    #[test]
    fn finality_update_keeps_fork() {
        let update = LightClientUpdate::Deneb(test_random_instance());
        let finality = update.to_finality_update();

        assert_eq!(finality.fork_name_unchecked(), ForkName::Deneb);
        assert_eq!(finality.signature_slot(), update.signature_slot());
    }
}
