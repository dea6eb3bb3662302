use crate::beacon_block_body::{
    BeaconBlockBodyAltair, BeaconBlockBodyBase, BeaconBlockBodyBellatrix, BeaconBlockBodyCapella,
    BeaconBlockBodyDeneb, BeaconBlockBodyRef,
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

/// A block of the `BeaconChain`.
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
    ref_attributes(
        derive(Debug, PartialEq, TreeHash),
        tree_hash(enum_behaviour = "transparent")
    ),
    cast_error(ty = "Error", expr = "Error::IncorrectForkVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectForkVariant")
)]
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, TreeHash, SszSchema)]
#[serde(untagged)]
#[tree_hash(enum_behaviour = "transparent")]
#[ssz(enum_behaviour = "transparent")]
pub struct BeaconBlock {
    #[superstruct(getter(copy))]
    pub slot: Slot,
    #[superstruct(getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    #[superstruct(getter(copy))]
    pub parent_root: Hash256,
    #[superstruct(getter(copy))]
    pub state_root: Hash256,
    #[superstruct(only(Base), partial_getter(rename = "body_base"))]
    pub body: BeaconBlockBodyBase,
    #[superstruct(only(Altair), partial_getter(rename = "body_altair"))]
    pub body: BeaconBlockBodyAltair,
    #[superstruct(only(Bellatrix), partial_getter(rename = "body_bellatrix"))]
    pub body: BeaconBlockBodyBellatrix,
    #[superstruct(only(Capella), partial_getter(rename = "body_capella"))]
    pub body: BeaconBlockBodyCapella,
    #[superstruct(only(Deneb), partial_getter(rename = "body_deneb"))]
    pub body: BeaconBlockBodyDeneb,
}

impl SignedRoot for BeaconBlock {}
impl<'a> SignedRoot for BeaconBlockRef<'a> {}

impl BeaconBlock {
    /// Returns an empty block with the shape of `fork_name`.
    pub fn empty(fork_name: ForkName) -> Self {
        match fork_name {
            ForkName::Base => Self::Base(<_>::default()),
            ForkName::Altair => Self::Altair(<_>::default()),
            ForkName::Bellatrix => Self::Bellatrix(<_>::default()),
            ForkName::Capella => Self::Capella(<_>::default()),
            ForkName::Deneb => Self::Deneb(<_>::default()),
        }
    }

    /// SSZ decoder for the block shape of `fork_name`.
    ///
    /// The slot inside `bytes` is never consulted, a caller holding only the bytes must learn
    /// the fork elsewhere.
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        Ok(match fork_name {
            ForkName::Base => Self::Base(BeaconBlockBase::from_ssz_bytes(bytes)?),
            ForkName::Altair => Self::Altair(BeaconBlockAltair::from_ssz_bytes(bytes)?),
            ForkName::Bellatrix => Self::Bellatrix(BeaconBlockBellatrix::from_ssz_bytes(bytes)?),
            ForkName::Capella => Self::Capella(BeaconBlockCapella::from_ssz_bytes(bytes)?),
            ForkName::Deneb => Self::Deneb(BeaconBlockDeneb::from_ssz_bytes(bytes)?),
        })
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        self.to_ref().fork_name_unchecked()
    }

    /// Returns the name of the fork pertaining to `self`.
    ///
    /// Will return an `Err` if `self` has been instantiated to a variant conflicting with the fork
    /// dictated by `self.slot()`.
    pub fn fork_name(&self, spec: &ChainSpec) -> Result<ForkName, InconsistentFork> {
        self.to_ref().fork_name(spec)
    }

    /// Convenience accessor for the `body` as a `BeaconBlockBodyRef`.
    pub fn body(&self) -> BeaconBlockBodyRef<'_> {
        self.to_ref().body()
    }

    /// Returns the epoch corresponding to `self.slot()`.
    pub fn epoch(&self, slots_per_epoch: u64) -> Epoch {
        self.slot().epoch(slots_per_epoch)
    }

    /// Returns the `tree_hash_root` of the block.
    pub fn canonical_root(&self) -> Hash256 {
        self.tree_hash_root()
    }

    /// Returns a full `BeaconBlockHeader` of this block.
    ///
    /// Note: performs a full tree-hash of `self.body`.
    pub fn block_header(&self) -> BeaconBlockHeader {
        self.to_ref().block_header()
    }

    /// Return the tree hash root of the block's body.
    pub fn body_root(&self) -> Hash256 {
        self.to_ref().body_root()
    }
}

impl<'a> BeaconBlockRef<'a> {
    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            BeaconBlockRef::Base { .. } => ForkName::Base,
            BeaconBlockRef::Altair { .. } => ForkName::Altair,
            BeaconBlockRef::Bellatrix { .. } => ForkName::Bellatrix,
            BeaconBlockRef::Capella { .. } => ForkName::Capella,
            BeaconBlockRef::Deneb { .. } => ForkName::Deneb,
        }
    }

    /// Returns the name of the fork pertaining to `self`, checked against the fork scheduled
    /// for `self.slot()`.
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

    /// Convenience accessor for the `body` as a `BeaconBlockBodyRef`.
    pub fn body(&self) -> BeaconBlockBodyRef<'a> {
        match self {
            BeaconBlockRef::Base(block) => BeaconBlockBodyRef::Base(&block.body),
            BeaconBlockRef::Altair(block) => BeaconBlockBodyRef::Altair(&block.body),
            BeaconBlockRef::Bellatrix(block) => BeaconBlockBodyRef::Bellatrix(&block.body),
            BeaconBlockRef::Capella(block) => BeaconBlockBodyRef::Capella(&block.body),
            BeaconBlockRef::Deneb(block) => BeaconBlockBodyRef::Deneb(&block.body),
        }
    }

    /// Return the tree hash root of the block's body.
    pub fn body_root(&self) -> Hash256 {
        self.body().tree_hash_root()
    }

    /// Returns a full `BeaconBlockHeader` of this block.
    pub fn block_header(&self) -> BeaconBlockHeader {
        BeaconBlockHeader {
            slot: self.slot(),
            proposer_index: self.proposer_index(),
            parent_root: self.parent_root(),
            state_root: self.state_root(),
            body_root: self.body_root(),
        }
    }

    /// Returns a "temporary" header, where the `state_root` is `Hash256::zero()`.
    pub fn temporary_block_header(self) -> BeaconBlockHeader {
        BeaconBlockHeader {
            state_root: Hash256::zero(),
            ..self.block_header()
        }
    }
}
