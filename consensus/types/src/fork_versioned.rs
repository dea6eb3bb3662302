use crate::*;
use serde_derive::Serialize;
use ssz::TypeDescriptor;
use ssz_derive::Encode;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// A record of any role, in whatever shape it has.
#[derive(Debug, Clone, PartialEq, Serialize, Encode, TreeHash)]
#[serde(untagged)]
#[ssz(enum_behaviour = "transparent")]
#[tree_hash(enum_behaviour = "transparent")]
pub enum Record {
    BeaconBlock(BeaconBlock),
    SignedBeaconBlock(SignedBeaconBlock),
    BeaconBlockBody(BeaconBlockBody),
    BeaconState(BeaconState),
    ExecutionPayload(ExecutionPayload),
    ExecutionPayloadHeader(ExecutionPayloadHeader),
    BlindedBeaconBlock(BlindedBeaconBlock),
    SignedBlindedBeaconBlock(SignedBlindedBeaconBlock),
    LightClientHeader(LightClientHeader),
    LightClientBootstrap(LightClientBootstrap),
    LightClientUpdate(LightClientUpdate),
    LightClientFinalityUpdate(LightClientFinalityUpdate),
    LightClientOptimisticUpdate(LightClientOptimisticUpdate),
}

impl Record {
    /// Decodes `bytes` as the shape that `role` takes at `fork_name`.
    pub fn from_ssz_bytes(bytes: &[u8], fork_name: ForkName, role: Role) -> Result<Self, Error> {
        Ok(match role {
            Role::BeaconBlock => {
                Record::BeaconBlock(BeaconBlock::from_ssz_bytes_for_fork(bytes, fork_name)?)
            }
            Role::SignedBeaconBlock => Record::SignedBeaconBlock(
                SignedBeaconBlock::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::BeaconBlockBody => Record::BeaconBlockBody(
                BeaconBlockBody::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::BeaconState => {
                Record::BeaconState(BeaconState::from_ssz_bytes_for_fork(bytes, fork_name)?)
            }
            Role::ExecutionPayload => Record::ExecutionPayload(
                ExecutionPayload::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::ExecutionPayloadHeader => Record::ExecutionPayloadHeader(
                ExecutionPayloadHeader::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::BlindedBeaconBlock => Record::BlindedBeaconBlock(
                BlindedBeaconBlock::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::SignedBlindedBeaconBlock => Record::SignedBlindedBeaconBlock(
                SignedBlindedBeaconBlock::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::LightClientHeader => Record::LightClientHeader(
                LightClientHeader::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::LightClientBootstrap => Record::LightClientBootstrap(
                LightClientBootstrap::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::LightClientUpdate => Record::LightClientUpdate(
                LightClientUpdate::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::LightClientFinalityUpdate => Record::LightClientFinalityUpdate(
                LightClientFinalityUpdate::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
            Role::LightClientOptimisticUpdate => Record::LightClientOptimisticUpdate(
                LightClientOptimisticUpdate::from_ssz_bytes_for_fork(bytes, fork_name)?,
            ),
        })
    }

    pub fn role(&self) -> Role {
        match self {
            Record::BeaconBlock(_) => Role::BeaconBlock,
            Record::SignedBeaconBlock(_) => Role::SignedBeaconBlock,
            Record::BeaconBlockBody(_) => Role::BeaconBlockBody,
            Record::BeaconState(_) => Role::BeaconState,
            Record::ExecutionPayload(_) => Role::ExecutionPayload,
            Record::ExecutionPayloadHeader(_) => Role::ExecutionPayloadHeader,
            Record::BlindedBeaconBlock(_) => Role::BlindedBeaconBlock,
            Record::SignedBlindedBeaconBlock(_) => Role::SignedBlindedBeaconBlock,
            Record::LightClientHeader(_) => Role::LightClientHeader,
            Record::LightClientBootstrap(_) => Role::LightClientBootstrap,
            Record::LightClientUpdate(_) => Role::LightClientUpdate,
            Record::LightClientFinalityUpdate(_) => Role::LightClientFinalityUpdate,
            Record::LightClientOptimisticUpdate(_) => Role::LightClientOptimisticUpdate,
        }
    }

    /// Returns the first fork that uses the shape of `self`.
    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            Record::BeaconBlock(inner) => inner.fork_name_unchecked(),
            Record::SignedBeaconBlock(inner) => inner.fork_name_unchecked(),
            Record::BeaconBlockBody(inner) => inner.fork_name_unchecked(),
            Record::BeaconState(inner) => inner.fork_name_unchecked(),
            Record::ExecutionPayload(inner) => inner.fork_name_unchecked(),
            Record::ExecutionPayloadHeader(inner) => inner.fork_name_unchecked(),
            Record::BlindedBeaconBlock(inner) => inner.fork_name_unchecked(),
            Record::SignedBlindedBeaconBlock(inner) => inner.fork_name_unchecked(),
            Record::LightClientHeader(inner) => inner.fork_name_unchecked(),
            Record::LightClientBootstrap(inner) => inner.fork_name_unchecked(),
            Record::LightClientUpdate(inner) => inner.fork_name_unchecked(),
            Record::LightClientFinalityUpdate(inner) => inner.fork_name_unchecked(),
            Record::LightClientOptimisticUpdate(inner) => inner.fork_name_unchecked(),
        }
    }

    /// Returns the root that is signed for `self` under `domain`.
    ///
    /// For a signed envelope this is the signing root of its message.
    pub fn signing_root(&self, domain: Hash256) -> Hash256 {
        let object_root = match self {
            Record::SignedBeaconBlock(inner) => inner.canonical_root(),
            Record::SignedBlindedBeaconBlock(inner) => inner.message.tree_hash_root(),
            other => other.tree_hash_root(),
        };
        SigningData {
            object_root,
            domain,
        }
        .tree_hash_root()
    }
}

/// A record paired with the fork it belongs to.
///
/// The fork is always supplied by the caller, never read from the record bytes. Several forks
/// may share one shape (e.g. light client records at Altair and Bellatrix), so the fork is kept
/// alongside the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForkVersioned {
    fork_name: ForkName,
    record: Record,
}

impl ForkVersioned {
    /// Decodes `bytes` as the record `role` at `fork_name`.
    pub fn from_ssz_bytes(bytes: &[u8], fork_name: ForkName, role: Role) -> Result<Self, Error> {
        let record = Record::from_ssz_bytes(bytes, fork_name, role)?;
        Ok(Self { fork_name, record })
    }

    /// Pairs `record` with `fork_name`, checking that the record has the shape used at that fork.
    pub fn new(fork_name: ForkName, record: Record) -> Result<Self, Error> {
        let role = record.role();
        let expected_shape = role
            .shape_fork(fork_name)
            .ok_or(Error::SchemaMismatch { fork_name, role })?;

        if record.fork_name_unchecked() == expected_shape {
            Ok(Self { fork_name, record })
        } else {
            Err(Error::IncorrectForkVariant)
        }
    }

    pub fn as_ssz_bytes(&self) -> Vec<u8> {
        ssz::Encode::as_ssz_bytes(&self.record)
    }

    pub fn tree_hash_root(&self) -> Hash256 {
        self.record.tree_hash_root()
    }

    /// Returns the root that is signed for the record under `domain`.
    pub fn signing_root(&self, domain: Hash256) -> Hash256 {
        self.record.signing_root(domain)
    }

    /// Returns the descriptor of the record's shape.
    pub fn schema(&self) -> Result<&'static TypeDescriptor, Error> {
        schema_for(self.fork_name, self.role())
    }

    pub fn fork_name(&self) -> ForkName {
        self.fork_name
    }

    pub fn role(&self) -> Role {
        self.record.role()
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}
