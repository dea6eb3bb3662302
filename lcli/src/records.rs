use clap::ArgMatches;
use snap::raw::Decoder;
use std::fs;
use std::path::Path;
use types::{ChainSpec, ForkName, Slot};

/// Calls `$handler::<T>(..)` where `T` is the fork-invariant record called `$type_str`.
///
/// Evaluates to `None` if no such record exists.
macro_rules! dispatch_fixed_record {
    ($type_str: expr, $handler: ident ( $($arg: expr),* )) => {
        match $type_str {
            "AggregateAndProof" => Some($handler::<types::AggregateAndProof>($($arg),*)),
            "Attestation" => Some($handler::<types::Attestation>($($arg),*)),
            "AttestationData" => Some($handler::<types::AttestationData>($($arg),*)),
            "AttesterSlashing" => Some($handler::<types::AttesterSlashing>($($arg),*)),
            "BeaconBlockHeader" => Some($handler::<types::BeaconBlockHeader>($($arg),*)),
            "BlsToExecutionChange" => Some($handler::<types::BlsToExecutionChange>($($arg),*)),
            "Checkpoint" => Some($handler::<types::Checkpoint>($($arg),*)),
            "ContributionAndProof" => Some($handler::<types::ContributionAndProof>($($arg),*)),
            "Deposit" => Some($handler::<types::Deposit>($($arg),*)),
            "DepositData" => Some($handler::<types::DepositData>($($arg),*)),
            "DepositMessage" => Some($handler::<types::DepositMessage>($($arg),*)),
            "Eth1Block" => Some($handler::<types::Eth1Block>($($arg),*)),
            "Eth1Data" => Some($handler::<types::Eth1Data>($($arg),*)),
            "Fork" => Some($handler::<types::Fork>($($arg),*)),
            "ForkData" => Some($handler::<types::ForkData>($($arg),*)),
            "HistoricalBatch" => Some($handler::<types::HistoricalBatch>($($arg),*)),
            "HistoricalSummary" => Some($handler::<types::HistoricalSummary>($($arg),*)),
            "IndexedAttestation" => Some($handler::<types::IndexedAttestation>($($arg),*)),
            "PendingAttestation" => Some($handler::<types::PendingAttestation>($($arg),*)),
            "PowBlock" => Some($handler::<types::PowBlock>($($arg),*)),
            "ProposerSlashing" => Some($handler::<types::ProposerSlashing>($($arg),*)),
            "SignedAggregateAndProof" => {
                Some($handler::<types::SignedAggregateAndProof>($($arg),*))
            }
            "SignedBeaconBlockHeader" => {
                Some($handler::<types::SignedBeaconBlockHeader>($($arg),*))
            }
            "SignedBlsToExecutionChange" => {
                Some($handler::<types::SignedBlsToExecutionChange>($($arg),*))
            }
            "SignedContributionAndProof" => {
                Some($handler::<types::SignedContributionAndProof>($($arg),*))
            }
            "SignedVoluntaryExit" => Some($handler::<types::SignedVoluntaryExit>($($arg),*)),
            "SigningData" => Some($handler::<types::SigningData>($($arg),*)),
            "SyncAggregate" => Some($handler::<types::SyncAggregate>($($arg),*)),
            "SyncAggregatorSelectionData" => {
                Some($handler::<types::SyncAggregatorSelectionData>($($arg),*))
            }
            "SyncCommittee" => Some($handler::<types::SyncCommittee>($($arg),*)),
            "SyncCommitteeContribution" => {
                Some($handler::<types::SyncCommitteeContribution>($($arg),*))
            }
            "SyncCommitteeMessage" => Some($handler::<types::SyncCommitteeMessage>($($arg),*)),
            "Validator" => Some($handler::<types::Validator>($($arg),*)),
            "VoluntaryExit" => Some($handler::<types::VoluntaryExit>($($arg),*)),
            "Withdrawal" => Some($handler::<types::Withdrawal>($($arg),*)),
            _ => None,
        }
    };
}

/// Reads SSZ bytes from `path`, decompressing them first if the file ends in `ssz_snappy`.
pub fn read_ssz_file(path: &Path) -> Result<Vec<u8>, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("Unable to read {}: {}", path.display(), e))?;

    if path.to_string_lossy().ends_with("ssz_snappy") {
        Decoder::new()
            .decompress_vec(&bytes)
            .map_err(|e| format!("Unable to decompress {}: {}", path.display(), e))
    } else {
        Ok(bytes)
    }
}

/// Returns the fork named by `--fork`, or the fork scheduled at `--slot`, or the latest fork.
pub fn resolve_fork(matches: &ArgMatches, spec: &ChainSpec) -> Result<ForkName, String> {
    if let Some(fork_name) = matches.get_one::<String>("fork") {
        return fork_name.parse();
    }

    if let Some(slot) = matches.get_one::<u64>("slot") {
        let fork_name = spec.fork_name_at_slot(Slot::new(*slot));
        debug!("Slot {} is in the {} fork", slot, fork_name);
        return Ok(fork_name);
    }

    Ok(ForkName::latest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snap::raw::Encoder;
    use tempfile::tempdir;

    #[test]
    fn reads_plain_and_snappy_files() {
        let dir = tempdir().unwrap();
        let bytes = (0..200u8).collect::<Vec<_>>();

        let plain = dir.path().join("record.ssz");
        fs::write(&plain, &bytes).unwrap();
        assert_eq!(read_ssz_file(&plain).unwrap(), bytes);

        let compressed = dir.path().join("record.ssz_snappy");
        fs::write(&compressed, Encoder::new().compress_vec(&bytes).unwrap()).unwrap();
        assert_eq!(read_ssz_file(&compressed).unwrap(), bytes);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_ssz_file(&dir.path().join("absent.ssz")).is_err());
    }

    #[test]
    fn corrupt_snappy_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.ssz_snappy");
        fs::write(&path, [0xff; 8]).unwrap();
        assert!(read_ssz_file(&path).is_err());
    }
}
