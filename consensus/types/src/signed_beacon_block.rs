use crate::beacon_block::{
    BeaconBlockAltair, BeaconBlockBase, BeaconBlockBellatrix, BeaconBlockCapella, BeaconBlockDeneb,
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

/// A `BeaconBlock` and a signature from its proposer.
#[superstruct(
    variants(Base, Altair, Bellatrix, Capella, Deneb),
    variant_attributes(
        derive(
            Debug,
            PartialEq,
            Clone,
            Default,
            Serialize,
            Deserialize,
            Encode,
            Decode,
            TreeHash,
            SszSchema,
            TestRandom
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
pub struct SignedBeaconBlock {
    #[superstruct(only(Base), partial_getter(rename = "message_base"))]
    pub message: BeaconBlockBase,
    #[superstruct(only(Altair), partial_getter(rename = "message_altair"))]
    pub message: BeaconBlockAltair,
    #[superstruct(only(Bellatrix), partial_getter(rename = "message_bellatrix"))]
    pub message: BeaconBlockBellatrix,
    #[superstruct(only(Capella), partial_getter(rename = "message_capella"))]
    pub message: BeaconBlockCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "message_deneb"))]
    pub message: BeaconBlockDeneb,
    #[superstruct(getter(copy))]
    pub signature: SignatureBytes,
}

impl SignedBeaconBlock {
    /// SSZ decoder for the signed block shape of `fork_name`.
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        Ok(match fork_name {
            ForkName::Base => Self::Base(SignedBeaconBlockBase::from_ssz_bytes(bytes)?),
            ForkName::Altair => Self::Altair(SignedBeaconBlockAltair::from_ssz_bytes(bytes)?),
            ForkName::Bellatrix => {
                Self::Bellatrix(SignedBeaconBlockBellatrix::from_ssz_bytes(bytes)?)
            }
            ForkName::Capella => Self::Capella(SignedBeaconBlockCapella::from_ssz_bytes(bytes)?),
            ForkName::Deneb => Self::Deneb(SignedBeaconBlockDeneb::from_ssz_bytes(bytes)?),
        })
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        self.message().fork_name_unchecked()
    }

    /// Returns the name of the fork pertaining to `self`.
    ///
    /// Will return an `Err` if `self` has been instantiated to a variant conflicting with the fork
    /// dictated by `self.slot()`.
    pub fn fork_name(&self, spec: &ChainSpec) -> Result<ForkName, InconsistentFork> {
        self.message().fork_name(spec)
    }

    /// Create a new `SignedBeaconBlock` from a `BeaconBlock` and `SignatureBytes`.
    pub fn from_block(block: BeaconBlock, signature: SignatureBytes) -> Self {
        match block {
            BeaconBlock::Base(message) => {
                SignedBeaconBlock::Base(SignedBeaconBlockBase { message, signature })
            }
            BeaconBlock::Altair(message) => {
                SignedBeaconBlock::Altair(SignedBeaconBlockAltair { message, signature })
            }
            BeaconBlock::Bellatrix(message) => {
                SignedBeaconBlock::Bellatrix(SignedBeaconBlockBellatrix { message, signature })
            }
            BeaconBlock::Capella(message) => {
                SignedBeaconBlock::Capella(SignedBeaconBlockCapella { message, signature })
            }
            BeaconBlock::Deneb(message) => {
                SignedBeaconBlock::Deneb(SignedBeaconBlockDeneb { message, signature })
            }
        }
    }

    /// Deconstruct the `SignedBeaconBlock` into a `BeaconBlock` and `SignatureBytes`.
    ///
    /// This is necessary to get a `&BeaconBlock` from a `SignedBeaconBlock` because
    /// `SignedBeaconBlock` only contains a `BeaconBlock` _variant_.
    pub fn deconstruct(self) -> (BeaconBlock, SignatureBytes) {
        match self {
            SignedBeaconBlock::Base(block) => (BeaconBlock::Base(block.message), block.signature),
            SignedBeaconBlock::Altair(block) => {
                (BeaconBlock::Altair(block.message), block.signature)
            }
            SignedBeaconBlock::Bellatrix(block) => {
                (BeaconBlock::Bellatrix(block.message), block.signature)
            }
            SignedBeaconBlock::Capella(block) => {
                (BeaconBlock::Capella(block.message), block.signature)
            }
            SignedBeaconBlock::Deneb(block) => (BeaconBlock::Deneb(block.message), block.signature),
        }
    }

    /// Accessor for the block's `message` field as a ref.
    pub fn message(&self) -> BeaconBlockRef<'_> {
        match self {
            SignedBeaconBlock::Base(inner) => BeaconBlockRef::Base(&inner.message),
            SignedBeaconBlock::Altair(inner) => BeaconBlockRef::Altair(&inner.message),
            SignedBeaconBlock::Bellatrix(inner) => BeaconBlockRef::Bellatrix(&inner.message),
            SignedBeaconBlock::Capella(inner) => BeaconBlockRef::Capella(&inner.message),
            SignedBeaconBlock::Deneb(inner) => BeaconBlockRef::Deneb(&inner.message),
        }
    }

    /// Returns the root that the proposer signs under `domain`.
    pub fn message_signing_root(&self, domain: Hash256) -> Hash256 {
        self.message().signing_root(domain)
    }

    /// Produce a signed beacon block header corresponding to this block.
    pub fn signed_block_header(&self) -> SignedBeaconBlockHeader {
        SignedBeaconBlockHeader {
            message: self.message().block_header(),
            signature: self.signature(),
        }
    }

    /// Convenience accessor for the block's slot.
    pub fn slot(&self) -> Slot {
        self.message().slot()
    }

    /// Convenience accessor for the block's parent root.
    pub fn parent_root(&self) -> Hash256 {
        self.message().parent_root()
    }

    /// Convenience accessor for the block's state root.
    pub fn state_root(&self) -> Hash256 {
        self.message().state_root()
    }

    /// Returns the `tree_hash_root` of the block.
    pub fn canonical_root(&self) -> Hash256 {
        self.message().tree_hash_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_random_instance;
    use ssz::Encode;

    mod base {
        use super::super::*;
        ssz_and_tree_hash_tests!(SignedBeaconBlockBase);
    }
    mod altair {
        use super::super::*;
        ssz_and_tree_hash_tests!(SignedBeaconBlockAltair);
    }
    mod bellatrix {
        use super::super::*;
        ssz_and_tree_hash_tests!(SignedBeaconBlockBellatrix);
    }
    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(SignedBeaconBlockCapella);
    }
    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(SignedBeaconBlockDeneb);
    }

    #[test]
    fn from_block_and_deconstruct() {
        let block = BeaconBlock::Deneb(test_random_instance());
        let signature = SignatureBytes::from([7; 96]);

        let signed = SignedBeaconBlock::from_block(block.clone(), signature);
        assert_eq!(signed.fork_name_unchecked(), ForkName::Deneb);
        assert_eq!(signed.canonical_root(), block.canonical_root());
        assert_eq!(signed.slot(), block.slot());

        let header = signed.signed_block_header();
        assert_eq!(header.message, block.block_header());
        assert_eq!(header.signature, signature);

        assert_eq!(signed.deconstruct(), (block, signature));
    }

    #[test]
    fn decode_for_fork() {
        for fork_name in ForkName::list_all() {
            let signed =
                SignedBeaconBlock::from_block(BeaconBlock::empty(fork_name), SignatureBytes::empty());
            let bytes = signed.as_ssz_bytes();

            assert_eq!(
                SignedBeaconBlock::from_ssz_bytes_for_fork(&bytes, fork_name),
                Ok(signed)
            );
        }
    }

    #[test]
    fn signing_root_uses_message() {
        let signed = SignedBeaconBlock::Altair(test_random_instance());
        let domain = Hash256::repeat_byte(3);

        let expected = SigningData {
            object_root: signed.canonical_root(),
            domain,
        }
        .tree_hash_root();
        assert_eq!(signed.message_signing_root(domain), expected);
    }
}
