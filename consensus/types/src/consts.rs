//! Mainnet list and vector lengths, expressed at the type level.
//!
//! Each name matches the corresponding preset value in the consensus specifications.

use ssz_types::typenum::{
    U1048576, U1073741824, U1099511627776, U128, U16, U16777216, U2, U2048, U256, U32, U33, U4,
    U4096, U5, U512, U6, U65536, U8192,
};

/*
 * Phase0
 */
pub type JustificationBitsLength = U4;
pub type MaxValidatorsPerCommittee = U2048;
pub type SlotsPerHistoricalRoot = U8192;
pub type EpochsPerHistoricalVector = U65536;
pub type EpochsPerSlashingsVector = U8192;
pub type HistoricalRootsLimit = U16777216;
pub type ValidatorRegistryLimit = U1099511627776;
pub type MaxProposerSlashings = U16;
pub type MaxAttesterSlashings = U2;
pub type MaxAttestations = U128;
pub type MaxDeposits = U16;
pub type MaxVoluntaryExits = U16;
/// 128 max attestations * 32 slots per epoch.
pub type MaxPendingAttestations = U4096;
/// 64 epochs * 32 slots per epoch.
pub type SlotsPerEth1VotingPeriod = U2048;
pub type DepositContractTreeDepthPlusOne = U33;

/*
 * Altair
 */
pub type SyncCommitteeSize = U512;
/// 512 committee size / 4 sync committee subnet count.
pub type SyncSubcommitteeSize = U128;
pub type CurrentSyncCommitteeProofLen = U5;
pub type NextSyncCommitteeProofLen = U5;
pub type FinalizedRootProofLen = U6;

/*
 * Bellatrix
 */
pub type MaxBytesPerTransaction = U1073741824;
pub type MaxTransactionsPerPayload = U1048576;
pub type BytesPerLogsBloom = U256;
pub type MaxExtraDataBytes = U32;

/*
 * Capella
 */
pub type MaxBlsToExecutionChanges = U16;
pub type MaxWithdrawalsPerPayload = U16;
pub type ExecutionProofLen = U4;

/*
 * Deneb
 */
pub type MaxBlobCommitmentsPerBlock = U4096;

pub const GENESIS_SLOT: u64 = 0;
pub const GENESIS_EPOCH: u64 = 0;
pub const FAR_FUTURE_EPOCH: u64 = u64::MAX;
pub const SLOTS_PER_EPOCH: u64 = 32;
