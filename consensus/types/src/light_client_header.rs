use crate::consts::ExecutionProofLen;
use crate::test_utils::TestRandom;
use crate::*;
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

pub type ExecutionBranch = FixedVector<Hash256, ExecutionProofLen>;

/// The header a light client tracks for a block.
///
/// Bellatrix reuses the Altair shape, since light clients were not taught about execution
/// payloads until Capella.
#[superstruct(
    variants(Altair, Capella, Deneb),
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
    cast_error(ty = "Error", expr = "Error::IncorrectForkVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectForkVariant")
)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, TreeHash, SszSchema)]
#[serde(untagged)]
#[tree_hash(enum_behaviour = "transparent")]
#[ssz(enum_behaviour = "transparent")]
pub struct LightClientHeader {
    #[superstruct(getter(copy))]
    pub beacon: BeaconBlockHeader,
    #[superstruct(only(Capella), partial_getter(rename = "execution_payload_header_capella"))]
    pub execution: ExecutionPayloadHeaderCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "execution_payload_header_deneb"))]
    pub execution: ExecutionPayloadHeaderDeneb,
    #[superstruct(only(Capella, Deneb))]
    pub execution_branch: ExecutionBranch,
}

impl LightClientHeader {
    /// Decodes `bytes` with the header shape used at `fork_name`.
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        match fork_name {
            ForkName::Base => Err(Error::SchemaMismatch {
                fork_name,
                role: Role::LightClientHeader,
            }),
            ForkName::Altair | ForkName::Bellatrix => Ok(Self::Altair(
                LightClientHeaderAltair::from_ssz_bytes(bytes)?,
            )),
            ForkName::Capella => Ok(Self::Capella(LightClientHeaderCapella::from_ssz_bytes(
                bytes,
            )?)),
            ForkName::Deneb => Ok(Self::Deneb(LightClientHeaderDeneb::from_ssz_bytes(bytes)?)),
        }
    }

    /// Returns the first fork that uses the shape of `self`.
    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            LightClientHeader::Altair(_) => ForkName::Altair,
            LightClientHeader::Capella(_) => ForkName::Capella,
            LightClientHeader::Deneb(_) => ForkName::Deneb,
        }
    }
}

impl From<BeaconBlockHeader> for LightClientHeaderAltair {
    fn from(beacon: BeaconBlockHeader) -> Self {
        LightClientHeaderAltair { beacon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::Encode;

    mod altair {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientHeaderAltair);
    }
    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientHeaderCapella);
    }
    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(LightClientHeaderDeneb);
    }

    #[test]
    fn bellatrix_uses_the_altair_shape() {
        let header = LightClientHeader::Altair(LightClientHeaderAltair::from(BeaconBlockHeader {
            slot: Slot::new(9),
            ..<_>::default()
        }));
        let bytes = header.as_ssz_bytes();
        assert_eq!(bytes.len(), 112);

        let decoded = LightClientHeader::from_ssz_bytes_for_fork(&bytes, ForkName::Bellatrix);
        assert_eq!(decoded, Ok(header));

        assert_eq!(
            LightClientHeader::from_ssz_bytes_for_fork(&bytes, ForkName::Base),
            Err(Error::SchemaMismatch {
                fork_name: ForkName::Base,
                role: Role::LightClientHeader,
            })
        );
        assert!(LightClientHeader::from_ssz_bytes_for_fork(&bytes, ForkName::Capella).is_err());
    }
}
