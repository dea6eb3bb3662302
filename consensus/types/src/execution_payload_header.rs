use crate::consts::{BytesPerLogsBloom, MaxExtraDataBytes};
use crate::{test_utils::TestRandom, *};
use serde_derive::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode, SszSchema};
use superstruct::superstruct;
use test_random_derive::TestRandom;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// An execution payload with its transactions and withdrawals replaced by their roots.
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
pub struct ExecutionPayloadHeader {
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
    #[superstruct(getter(copy))]
    pub transactions_root: Hash256,
    #[superstruct(only(Capella, Deneb), partial_getter(copy))]
    pub withdrawals_root: Hash256,
    #[superstruct(only(Deneb), partial_getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub blob_gas_used: u64,
    #[superstruct(only(Deneb), partial_getter(copy))]
    #[serde(with = "serde_utils::quoted_u64")]
    pub excess_blob_gas: u64,
}

impl ExecutionPayloadHeader {
    /// Decodes `bytes` with the header shape of `fork_name`.
    pub fn from_ssz_bytes_for_fork(bytes: &[u8], fork_name: ForkName) -> Result<Self, Error> {
        match fork_name {
            ForkName::Base | ForkName::Altair => Err(Error::SchemaMismatch {
                fork_name,
                role: Role::ExecutionPayloadHeader,
            }),
            ForkName::Bellatrix => Ok(Self::Bellatrix(
                ExecutionPayloadHeaderBellatrix::from_ssz_bytes(bytes)?,
            )),
            ForkName::Capella => Ok(Self::Capella(
                ExecutionPayloadHeaderCapella::from_ssz_bytes(bytes)?,
            )),
            ForkName::Deneb => Ok(Self::Deneb(ExecutionPayloadHeaderDeneb::from_ssz_bytes(
                bytes,
            )?)),
        }
    }

    pub fn fork_name_unchecked(&self) -> ForkName {
        match self {
            ExecutionPayloadHeader::Bellatrix(_) => ForkName::Bellatrix,
            ExecutionPayloadHeader::Capella(_) => ForkName::Capella,
            ExecutionPayloadHeader::Deneb(_) => ForkName::Deneb,
        }
    }
}

impl<'a> From<&'a ExecutionPayloadBellatrix> for ExecutionPayloadHeaderBellatrix {
    fn from(payload: &'a ExecutionPayloadBellatrix) -> Self {
        Self {
            parent_hash: payload.parent_hash,
            fee_recipient: payload.fee_recipient,
            state_root: payload.state_root,
            receipts_root: payload.receipts_root,
            logs_bloom: payload.logs_bloom.clone(),
            prev_randao: payload.prev_randao,
            block_number: payload.block_number,
            gas_limit: payload.gas_limit,
            gas_used: payload.gas_used,
            timestamp: payload.timestamp,
            extra_data: payload.extra_data.clone(),
            base_fee_per_gas: payload.base_fee_per_gas,
            block_hash: payload.block_hash,
            transactions_root: payload.transactions.tree_hash_root(),
        }
    }
}

impl<'a> From<&'a ExecutionPayloadCapella> for ExecutionPayloadHeaderCapella {
    fn from(payload: &'a ExecutionPayloadCapella) -> Self {
        Self {
            parent_hash: payload.parent_hash,
            fee_recipient: payload.fee_recipient,
            state_root: payload.state_root,
            receipts_root: payload.receipts_root,
            logs_bloom: payload.logs_bloom.clone(),
            prev_randao: payload.prev_randao,
            block_number: payload.block_number,
            gas_limit: payload.gas_limit,
            gas_used: payload.gas_used,
            timestamp: payload.timestamp,
            extra_data: payload.extra_data.clone(),
            base_fee_per_gas: payload.base_fee_per_gas,
            block_hash: payload.block_hash,
            transactions_root: payload.transactions.tree_hash_root(),
            withdrawals_root: payload.withdrawals.tree_hash_root(),
        }
    }
}

impl<'a> From<&'a ExecutionPayloadDeneb> for ExecutionPayloadHeaderDeneb {
    fn from(payload: &'a ExecutionPayloadDeneb) -> Self {
        Self {
            parent_hash: payload.parent_hash,
            fee_recipient: payload.fee_recipient,
            state_root: payload.state_root,
            receipts_root: payload.receipts_root,
            logs_bloom: payload.logs_bloom.clone(),
            prev_randao: payload.prev_randao,
            block_number: payload.block_number,
            gas_limit: payload.gas_limit,
            gas_used: payload.gas_used,
            timestamp: payload.timestamp,
            extra_data: payload.extra_data.clone(),
            base_fee_per_gas: payload.base_fee_per_gas,
            block_hash: payload.block_hash,
            transactions_root: payload.transactions.tree_hash_root(),
            withdrawals_root: payload.withdrawals.tree_hash_root(),
            blob_gas_used: payload.blob_gas_used,
            excess_blob_gas: payload.excess_blob_gas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::Encode;

    mod bellatrix {
        use super::super::*;
        ssz_and_tree_hash_tests!(ExecutionPayloadHeaderBellatrix);
    }

    mod capella {
        use super::super::*;
        ssz_and_tree_hash_tests!(ExecutionPayloadHeaderCapella);
    }

    mod deneb {
        use super::super::*;
        ssz_and_tree_hash_tests!(ExecutionPayloadHeaderDeneb);
    }

    #[test]
    fn headers_are_fixed_apart_from_extra_data() {
        let bellatrix = ExecutionPayloadHeaderBellatrix::default().as_ssz_bytes();
        assert_eq!(bellatrix.len(), 32 * 6 + 20 + 256 + 8 * 4 + 4 + 32);
        assert_eq!(
            ExecutionPayloadHeaderCapella::default().as_ssz_bytes().len(),
            bellatrix.len() + 32
        );
        assert_eq!(
            ExecutionPayloadHeaderDeneb::default().as_ssz_bytes().len(),
            bellatrix.len() + 32 + 16
        );
    }

    #[test]
    fn partial_getters() {
        let header = ExecutionPayloadHeader::Bellatrix(<_>::default());
        assert_eq!(header.withdrawals_root(), Err(Error::IncorrectForkVariant));
        assert!(header.as_bellatrix().is_ok());
        assert!(header.as_capella().is_err());
    }
}
