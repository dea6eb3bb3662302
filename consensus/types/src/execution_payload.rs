use crate::consts::{
    BytesPerLogsBloom, MaxBytesPerTransaction, MaxExtraDataBytes, MaxTransactionsPerPayload,
    MaxWithdrawalsPerPayload,
};
use crate::{test_utils::TestRandom, *};
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

pub type Transaction = VariableList<u8, MaxBytesPerTransaction>;
pub type Transactions = VariableList<Transaction, MaxTransactionsPerPayload>;
pub type Withdrawals = VariableList<Withdrawal, MaxWithdrawalsPerPayload>;

/// The execution-layer block carried in a beacon block body from Bellatrix onwards.
#[superstruct(
    variants(Bellatrix, Capella, Deneb),
    variant_attributes(
        derive(
            Default,
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
pub struct ExecutionPayload {
    #[superstruct(getter(copy))]
    pub parent_hash: Hash256,
    #[superstruct(getter(copy))]
    pub fee_recipient: Address,
    #[superstruct(getter(copy))]
    pub state_root: Hash256,
    #[superstruct(getter(copy))]
    pub receipts_root: Hash256,
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub logs_bloom: FixedVector<u8, BytesPerLogsBloom>,
    #[superstruct(getter(copy))]
    pub prev_randao: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    #[superstruct(getter(copy))]
    pub block_number: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    #[superstruct(getter(copy))]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    #[superstruct(getter(copy))]
    pub gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    #[superstruct(getter(copy))]
    pub timestamp: u64,
    #[serde(with = "ssz_types::serde_utils::hex_var_list")]
    pub extra_data: VariableList<u8, MaxExtraDataBytes>,
    #[serde(with = "serde_utils::quoted_u256")]
    #[superstruct(getter(copy))]
    pub base_fee_per_gas: Uint256,
    #[superstruct(getter(copy))]
    pub block_hash: Hash256,
    #[serde(with = "ssz_types::serde_utils::list_of_hex_var_list")]
    pub transactions: Transactions,
    #[superstruct(only(Capella, Deneb))]
    pub withdrawals: Withdrawals,
    #[superstruct(only(Deneb), partial_getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub blob_gas_used: u64,
    #[superstruct(only(Deneb), partial_getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub excess_blob_gas: u64,
}

impl ExecutionPayload {
    /// Decodes `bytes` with the payload shape of `fork_name`.
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        match fork_name {
            ForkName::Base | ForkName::Altair => Err(Error::SchemaMismatch {
                fork_name,
                role: Role::ExecutionPayload,
            }),
            ForkName::Bellatrix => Ok(Self::Bellatrix(ExecutionPayloadBellatrix::from_ssz_bytes(
                bytes,
            )?)),
            ForkName::Capella => Ok(Self::Capella(ExecutionPayloadCapella::from_ssz_bytes(
                bytes,
            )?)),
            ForkName::Deneb => Ok(Self::Deneb(ExecutionPayloadDeneb::from_ssz_bytes(bytes)?)),
        }
    }

    /// Returns the fork whose shape `self` has, without consulting a `ChainSpec`.
    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            ExecutionPayload::Bellatrix(_) => ForkName::Bellatrix,
            ExecutionPayload::Capella(_) => ForkName::Capella,
            ExecutionPayload::Deneb(_) => ForkName::Deneb,
        }
    }

    /// Returns the header committing to `self`.
    pub fn to_header(&self) -> ExecutionPayloadHeader {
        match self {
            ExecutionPayload::Bellatrix(payload) => {
                ExecutionPayloadHeader::Bellatrix(ExecutionPayloadHeaderBellatrix::from(payload))
            }
            ExecutionPayload::Capella(payload) => {
                ExecutionPayloadHeader::Capella(ExecutionPayloadHeaderCapella::from(payload))
            }
            ExecutionPayload::Deneb(payload) => {
                ExecutionPayloadHeader::Deneb(ExecutionPayloadHeaderDeneb::from(payload))
            }
        }
    }
}
