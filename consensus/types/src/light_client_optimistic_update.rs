use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A LightClientOptimisticUpdate is the update we send on each slot,
/// it is based off the current unfinalized epoch is verified only against BLS signature.
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
pub struct LightClientOptimisticUpdate {
    /// The last `BeaconBlockHeader` from the last attested block by the sync committee.
    #[superstruct(only(Altair), partial_getter(rename = "attested_header_altair"))]
    pub attested_header: LightClientHeaderAltair,
    #[superstruct(only(Capella), partial_getter(rename = "attested_header_capella"))]
    pub attested_header: LightClientHeaderCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "attested_header_deneb"))]
    pub attested_header: LightClientHeaderDeneb,
    /// current sync aggregate
    pub sync_aggregate: SyncAggregate,
    /// Slot of the sync aggregated signature
    #[superstruct(getter(copy))]
    pub signature_slot: Slot,
}

impl LightClientOptimisticUpdate {
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        match fork_name {
            ForkName::Base => Err(Error::SchemaMismatch {
                fork_name,
                role: Role::LightClientOptimisticUpdate,
            }),
            ForkName::Altair | ForkName::Bellatrix => Ok(Self::Altair(
                LightClientOptimisticUpdateAltair::from_ssz_bytes(bytes)?,
            )),
            ForkName::Capella => Ok(Self::Capella(
                LightClientOptimisticUpdateCapella::from_ssz_bytes(bytes)?,
            )),
            ForkName::Deneb => Ok(Self::Deneb(
                LightClientOptimisticUpdateDeneb::from_ssz_bytes(bytes)?,
            )),
        }
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            LightClientOptimisticUpdate::Altair(_) => ForkName::Altair,
            LightClientOptimisticUpdate::Capella(_) => ForkName::Capella,
            LightClientOptimisticUpdate::Deneb(_) => ForkName::Deneb,
        }
    }
}

impl From<&LightClientFinalityUpdate> for LightClientOptimisticUpdate {
    fn from(update: &LightClientFinalityUpdate) -> Self {
        match update {
            LightClientFinalityUpdate::Altair(update) => {
                Self::Altair(LightClientOptimisticUpdateAltair {
                    attested_header: update.attested_header.clone(),
                    sync_aggregate: update.sync_aggregate.clone(),
                    signature_slot: update.signature_slot,
                })
            }
            LightClientFinalityUpdate::Capella(update) => {
                Self::Capella(LightClientOptimisticUpdateCapella {
                    attested_header: update.attested_header.clone(),
                    sync_aggregate: update.sync_aggregate.clone(),
                    signature_slot: update.signature_slot,
                })
            }
            LightClientFinalityUpdate::Deneb(update) => {
                Self::Deneb(LightClientOptimisticUpdateDeneb {
                    attested_header: update.attested_header.clone(),
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
        ssz_and_tree_hash_tests!(LightClientOptimisticUpdateAltair);
    }
    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientOptimisticUpdateCapella);
    }
    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientOptimisticUpdateDeneb);
    }

    #[test]
    fn from_finality_update() {
        let finality = LightClientFinalityUpdate::Capella(test_random_instance());
        let optimistic = LightClientOptimisticUpdate::from(&finality);

        assert_eq!(optimistic.fork_name_unchecked(), ForkName::Capella);
        assert_eq!(optimistic.signature_slot(), finality.signature_slot());

        let bytes = optimistic.as_ssz_bytes();
        assert_eq!(
            LightClientOptimisticUpdate::from_ssz_bytes_for_fork(&bytes, ForkName::Capella),
            Ok(optimistic)
        );
    }
}
