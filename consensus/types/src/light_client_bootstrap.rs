use crate::consts::CurrentSyncCommitteeProofLen;
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A LightClientBootstrap is the initializer we send over to light client nodes
/// that are trying to generate their basic storage when booting up.
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
pub struct LightClientBootstrap {
    /// The requested beacon block header.
    #[superstruct(only(Altair), partial_getter(rename = "header_altair"))]
    pub header: LightClientHeaderAltair,
    #[superstruct(only(Capella), partial_getter(rename = "header_capella"))]
    pub header: LightClientHeaderCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "header_deneb"))]
    pub header: LightClientHeaderDeneb,
    /// The `SyncCommittee` used in the requested period.
    pub current_sync_committee: SyncCommittee,
    /// Merkle proof for sync committee
    pub current_sync_committee_branch: FixedVector<Hash256, CurrentSyncCommitteeProofLen>,
}

impl LightClientBootstrap {
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        match fork_name {
            ForkName::Base => Err(Error::SchemaMismatch {
                fork_name,
                role: Role::LightClientBootstrap,
            }),
            ForkName::Altair | ForkName::Bellatrix => Ok(Self::Altair(
                LightClientBootstrapAltair::from_ssz_bytes(bytes)?,
            )),
            ForkName::Capella => Ok(Self::Capella(
                LightClientBootstrapCapella::from_ssz_bytes(bytes)?,
            )),
            ForkName::Deneb => Ok(Self::Deneb(LightClientBootstrapDeneb::from_ssz_bytes(
                bytes,
            )?)),
        }
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            LightClientBootstrap::Altair(_) => ForkName::Altair,
            LightClientBootstrap::Capella(_) => ForkName::Capella,
            LightClientBootstrap::Deneb(_) => ForkName::Deneb,
        }
    }

    /// Returns the beacon block header of the bootstrap, whatever its shape.
    pub fn beacon_header(&self) -> BeaconBlockHeader {
        match self {
            LightClientBootstrap::Altair(inner) => inner.header.beacon,
            LightClientBootstrap::Capella(inner) => inner.header.beacon,
            LightClientBootstrap::Deneb(inner) => inner.header.beacon,
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
        ssz_and_tree_hash_tests!(LightClientBootstrapAltair);
    }
    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientBootstrapCapella);
    }
    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientBootstrapDeneb);
    }

    #[test]
    fn decode_for_fork() {
        let bootstrap = LightClientBootstrap::Capella(test_random_instance());
        let bytes = bootstrap.as_ssz_bytes();

        let decoded = LightClientBootstrap::from_ssz_bytes_for_fork(&bytes, ForkName::Capella)
            .unwrap();
        assert_eq!(decoded.beacon_header(), bootstrap.beacon_header());
        assert_eq!(decoded, bootstrap);

        assert_eq!(
            LightClientBootstrap::from_ssz_bytes_for_fork(&bytes, ForkName::Base)
                .unwrap_err()
                .kind(),
            ssz::ErrorKind::SchemaMismatch
        );
    }
}
