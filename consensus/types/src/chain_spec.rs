use crate::*;
use serde::{Deserializer, Serializer};
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tree_hash::TreeHash;

/// Each of the BLS signature domains.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Domain {
    BeaconProposer,
    BeaconAttester,
    Randao,
    Deposit,
    VoluntaryExit,
    SelectionProof,
    AggregateAndProof,
    SyncCommittee,
    SyncCommitteeSelectionProof,
    ContributionAndProof,
    BlsToExecutionChange,
}

/// Holds the fork schedule of a beacon chain, along with the constants needed to compute
/// signing domains.
///
/// List and vector lengths are fixed at the type level (see `consts`) and are not part of the
/// runtime spec.
#[derive(PartialEq, Debug, Clone)]
pub struct ChainSpec {
    pub config_name: Option<String>,

    /*
     * Time parameters
     */
    pub genesis_slot: Slot,
    pub far_future_epoch: Epoch,
    pub slots_per_epoch: u64,

    /*
     * Fork choice
     */
    pub genesis_fork_version: [u8; 4],
    pub altair_fork_version: [u8; 4],
    /// The Altair fork epoch is optional, with `None` representing "Altair never happens".
    pub altair_fork_epoch: Option<Epoch>,
    pub bellatrix_fork_version: [u8; 4],
    pub bellatrix_fork_epoch: Option<Epoch>,
    pub capella_fork_version: [u8; 4],
    pub capella_fork_epoch: Option<Epoch>,
    pub deneb_fork_version: [u8; 4],
    pub deneb_fork_epoch: Option<Epoch>,

    /*
     * Signature domains
     */
    pub(crate) domain_beacon_proposer: u32,
    pub(crate) domain_beacon_attester: u32,
    pub(crate) domain_randao: u32,
    pub(crate) domain_deposit: u32,
    pub(crate) domain_voluntary_exit: u32,
    pub(crate) domain_selection_proof: u32,
    pub(crate) domain_aggregate_and_proof: u32,
    pub(crate) domain_sync_committee: u32,
    pub(crate) domain_sync_committee_selection_proof: u32,
    pub(crate) domain_contribution_and_proof: u32,
    pub(crate) domain_bls_to_execution_change: u32,
}

impl ChainSpec {
    /// Returns the name of the fork which is active at `slot`.
    pub fn fork_name_at_slot(&self, slot: Slot) -> ForkName {
        self.fork_name_at_epoch(slot.epoch(self.slots_per_epoch))
    }

    /// Returns the name of the fork which is active at `epoch`.
    pub fn fork_name_at_epoch(&self, epoch: Epoch) -> ForkName {
        ForkName::list_all()
            .into_iter()
            .rev()
            .find(|fork| {
                self.fork_epoch(*fork)
                    .map_or(false, |fork_epoch| epoch >= fork_epoch)
            })
            .unwrap_or(ForkName::Base)
    }

    /// Returns the fork version for a named fork.
    pub fn fork_version_for_name(&self, fork_name: ForkName) -> [u8; 4] {
        match fork_name {
            ForkName::Base => self.genesis_fork_version,
            ForkName::Altair => self.altair_fork_version,
            ForkName::Bellatrix => self.bellatrix_fork_version,
            ForkName::Capella => self.capella_fork_version,
            ForkName::Deneb => self.deneb_fork_version,
        }
    }

    /// For a given fork name, return the epoch at which it activates.
    pub fn fork_epoch(&self, fork_name: ForkName) -> Option<Epoch> {
        match fork_name {
            ForkName::Base => Some(Epoch::new(0)),
            ForkName::Altair => self.altair_fork_epoch,
            ForkName::Bellatrix => self.bellatrix_fork_epoch,
            ForkName::Capella => self.capella_fork_epoch,
            ForkName::Deneb => self.deneb_fork_epoch,
        }
    }

    /// Returns the `Fork` record in effect at `epoch`.
    pub fn fork_at_epoch(&self, epoch: Epoch) -> Fork {
        let current_fork_name = self.fork_name_at_epoch(epoch);
        let previous_fork_name = current_fork_name.previous_fork().unwrap_or(ForkName::Base);

        Fork {
            previous_version: self.fork_version_for_name(previous_fork_name),
            current_version: self.fork_version_for_name(current_fork_name),
            epoch: self.fork_epoch(current_fork_name).unwrap_or_else(|| Epoch::new(0)),
        }
    }

    /// Get the domain number, unmodified by the fork.
    pub fn get_domain_constant(&self, domain: Domain) -> u32 {
        match domain {
            Domain::BeaconProposer => self.domain_beacon_proposer,
            Domain::BeaconAttester => self.domain_beacon_attester,
            Domain::Randao => self.domain_randao,
            Domain::Deposit => self.domain_deposit,
            Domain::VoluntaryExit => self.domain_voluntary_exit,
            Domain::SelectionProof => self.domain_selection_proof,
            Domain::AggregateAndProof => self.domain_aggregate_and_proof,
            Domain::SyncCommittee => self.domain_sync_committee,
            Domain::SyncCommitteeSelectionProof => self.domain_sync_committee_selection_proof,
            Domain::ContributionAndProof => self.domain_contribution_and_proof,
            Domain::BlsToExecutionChange => self.domain_bls_to_execution_change,
        }
    }

    /// Get the domain that represents the fork meta and signature domain.
    pub fn get_domain(
        &self,
        epoch: Epoch,
        domain: Domain,
        fork: &Fork,
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let fork_version = fork.get_fork_version(epoch);
        self.compute_domain(domain, fork_version, genesis_validators_root)
    }

    /// Compute a domain by applying the given `fork_version`.
    pub fn compute_domain(
        &self,
        domain: Domain,
        fork_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let domain_constant = self.get_domain_constant(domain);

        let mut domain = [0; 32];
        domain[0..4].copy_from_slice(&domain_constant.to_le_bytes());
        domain[4..].copy_from_slice(
            &Self::compute_fork_data_root(fork_version, genesis_validators_root).as_bytes()[..28],
        );

        Hash256::from(domain)
    }

    /// Return the 32-byte fork data root for the `current_version` and `genesis_validators_root`.
    ///
    /// This is used primarily in signature domains to avoid collisions across forks/chains.
    pub fn compute_fork_data_root(
        current_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        ForkData {
            current_version,
            genesis_validators_root,
        }
        .tree_hash_root()
    }

    /// Returns a `ChainSpec` compatible with the Ethereum Foundation mainnet.
    pub fn mainnet() -> Self {
        Self {
            config_name: Some("mainnet".to_string()),

            /*
             * Time parameters
             */
            genesis_slot: Slot::new(consts::GENESIS_SLOT),
            far_future_epoch: Epoch::new(consts::FAR_FUTURE_EPOCH),
            slots_per_epoch: consts::SLOTS_PER_EPOCH,

            /*
             * Fork schedule
             */
            genesis_fork_version: [0; 4],
            altair_fork_version: [0x01, 0x00, 0x00, 0x00],
            altair_fork_epoch: Some(Epoch::new(74240)),
            bellatrix_fork_version: [0x02, 0x00, 0x00, 0x00],
            bellatrix_fork_epoch: Some(Epoch::new(144896)),
            capella_fork_version: [0x03, 0x00, 0x00, 0x00],
            capella_fork_epoch: Some(Epoch::new(194048)),
            deneb_fork_version: [0x04, 0x00, 0x00, 0x00],
            deneb_fork_epoch: Some(Epoch::new(269568)),

            /*
             * Signature domains
             */
            domain_beacon_proposer: 0,
            domain_beacon_attester: 1,
            domain_randao: 2,
            domain_deposit: 3,
            domain_voluntary_exit: 4,
            domain_selection_proof: 5,
            domain_aggregate_and_proof: 6,
            domain_sync_committee: 7,
            domain_sync_committee_selection_proof: 8,
            domain_contribution_and_proof: 9,
            domain_bls_to_execution_change: 10,
        }
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Exact implementation of the *config* object from the Ethereum consensus specs.
///
/// Only the fork schedule is read. Unknown keys are ignored, so a complete upstream config
/// file can be loaded as-is.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "UPPERCASE")]
pub struct Config {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,

    #[serde(default = "default_slots_per_epoch")]
    #[serde(with = "serde_utils::quoted_u64")]
    pub slots_per_epoch: u64,

    #[serde(with = "serde_utils::fixed_bytes_hex")]
    pub genesis_fork_version: [u8; 4],
    #[serde(with = "serde_utils::fixed_bytes_hex")]
    pub altair_fork_version: [u8; 4],
    #[serde(default)]
    #[serde(serialize_with = "serialize_fork_epoch")]
    #[serde(deserialize_with = "deserialize_fork_epoch")]
    pub altair_fork_epoch: Option<Epoch>,
    #[serde(with = "serde_utils::fixed_bytes_hex")]
    pub bellatrix_fork_version: [u8; 4],
    #[serde(default)]
    #[serde(serialize_with = "serialize_fork_epoch")]
    #[serde(deserialize_with = "deserialize_fork_epoch")]
    pub bellatrix_fork_epoch: Option<Epoch>,
    #[serde(with = "serde_utils::fixed_bytes_hex")]
    pub capella_fork_version: [u8; 4],
    #[serde(default)]
    #[serde(serialize_with = "serialize_fork_epoch")]
    #[serde(deserialize_with = "deserialize_fork_epoch")]
    pub capella_fork_epoch: Option<Epoch>,
    #[serde(default = "default_deneb_fork_version")]
    #[serde(with = "serde_utils::fixed_bytes_hex")]
    pub deneb_fork_version: [u8; 4],
    #[serde(default)]
    #[serde(serialize_with = "serialize_fork_epoch")]
    #[serde(deserialize_with = "deserialize_fork_epoch")]
    pub deneb_fork_epoch: Option<Epoch>,
}

fn default_slots_per_epoch() -> u64 {
    consts::SLOTS_PER_EPOCH
}

fn default_deneb_fork_version() -> [u8; 4] {
    // This value shouldn't be used.
    [0xff, 0xff, 0xff, 0xff]
}

/// Fork epochs are written as the far-future epoch when the fork is not scheduled.
fn serialize_fork_epoch<S>(val: &Option<Epoch>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let epoch = val.unwrap_or_else(|| Epoch::new(consts::FAR_FUTURE_EPOCH));
    serde_utils::quoted_u64::serialize(&epoch.as_u64(), s)
}

fn deserialize_fork_epoch<'de, D>(deserializer: D) -> Result<Option<Epoch>, D::Error>
where
    D: Deserializer<'de>,
{
    let epoch: u64 = serde_utils::quoted_u64::deserialize(deserializer)?;
    Ok(if epoch == consts::FAR_FUTURE_EPOCH {
        None
    } else {
        Some(Epoch::new(epoch))
    })
}

impl Default for Config {
    fn default() -> Self {
        Config::from_chain_spec(&ChainSpec::mainnet())
    }
}

impl Config {
    pub fn from_chain_spec(spec: &ChainSpec) -> Self {
        Self {
            config_name: spec.config_name.clone(),
            slots_per_epoch: spec.slots_per_epoch,

            genesis_fork_version: spec.genesis_fork_version,
            altair_fork_version: spec.altair_fork_version,
            altair_fork_epoch: spec.altair_fork_epoch,
            bellatrix_fork_version: spec.bellatrix_fork_version,
            bellatrix_fork_epoch: spec.bellatrix_fork_epoch,
            capella_fork_version: spec.capella_fork_version,
            capella_fork_epoch: spec.capella_fork_epoch,
            deneb_fork_version: spec.deneb_fork_version,
            deneb_fork_epoch: spec.deneb_fork_epoch,
        }
    }

    pub fn from_file(filename: &Path) -> Result<Self, String> {
        let f = File::open(filename)
            .map_err(|e| format!("Error opening spec at {}: {:?}", filename.display(), e))?;
        serde_yaml::from_reader(f)
            .map_err(|e| format!("Error parsing spec at {}: {:?}", filename.display(), e))
    }

    /// Overwrite the fork schedule of `chain_spec` with the values in `self`.
    ///
    /// Returns an error if the schedule activates a fork before its predecessor, or if
    /// `SLOTS_PER_EPOCH` is zero.
    pub fn apply_to_chain_spec(&self, chain_spec: &ChainSpec) -> Result<ChainSpec, String> {
        if self.slots_per_epoch == 0 {
            return Err("SLOTS_PER_EPOCH must be non-zero".to_string());
        }

        let spec = ChainSpec {
            config_name: self.config_name.clone(),
            slots_per_epoch: self.slots_per_epoch,
            genesis_fork_version: self.genesis_fork_version,
            altair_fork_version: self.altair_fork_version,
            altair_fork_epoch: self.altair_fork_epoch,
            bellatrix_fork_version: self.bellatrix_fork_version,
            bellatrix_fork_epoch: self.bellatrix_fork_epoch,
            capella_fork_version: self.capella_fork_version,
            capella_fork_epoch: self.capella_fork_epoch,
            deneb_fork_version: self.deneb_fork_version,
            deneb_fork_epoch: self.deneb_fork_epoch,
            ..chain_spec.clone()
        };

        let mut previous: Option<(ForkName, Epoch)> = None;
        for fork in ForkName::list_all() {
            match (spec.fork_epoch(fork), previous) {
                (Some(epoch), Some((prev_fork, prev_epoch))) if epoch < prev_epoch => {
                    return Err(format!(
                        "{} fork epoch {} precedes {} fork epoch {}",
                        fork, epoch, prev_fork, prev_epoch
                    ))
                }
                (Some(_), None) if fork != ForkName::Base => {
                    return Err(format!(
                        "{} fork is scheduled but its predecessor is not",
                        fork
                    ))
                }
                (Some(epoch), _) => previous = Some((fork, epoch)),
                (None, _) => previous = None,
            }
        }

        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_spec_can_be_constructed() {
        let _ = ChainSpec::mainnet();
    }

    #[test]
    fn mainnet_fork_schedule() {
        let spec = ChainSpec::mainnet();

        assert_eq!(spec.fork_name_at_epoch(Epoch::new(0)), ForkName::Base);
        assert_eq!(spec.fork_name_at_epoch(Epoch::new(74239)), ForkName::Base);
        assert_eq!(spec.fork_name_at_epoch(Epoch::new(74240)), ForkName::Altair);
        assert_eq!(
            spec.fork_name_at_epoch(Epoch::new(144896)),
            ForkName::Bellatrix
        );
        assert_eq!(
            spec.fork_name_at_epoch(Epoch::new(194048)),
            ForkName::Capella
        );
        assert_eq!(spec.fork_name_at_epoch(Epoch::new(269568)), ForkName::Deneb);
        assert_eq!(
            spec.fork_name_at_slot(Slot::new(74240 * 32 - 1)),
            ForkName::Base
        );
        assert_eq!(
            spec.fork_name_at_slot(Slot::new(74240 * 32)),
            ForkName::Altair
        );
    }

    #[test]
    fn unscheduled_fork_is_never_active() {
        let spec = ChainSpec {
            capella_fork_epoch: None,
            deneb_fork_epoch: None,
            ..ChainSpec::mainnet()
        };

        assert_eq!(
            spec.fork_name_at_epoch(Epoch::max_value()),
            ForkName::Bellatrix
        );
    }

    #[test]
    fn fork_versions() {
        let spec = ChainSpec::mainnet();

        assert_eq!(spec.fork_version_for_name(ForkName::Base), [0, 0, 0, 0]);
        assert_eq!(spec.fork_version_for_name(ForkName::Deneb), [4, 0, 0, 0]);

        let fork = spec.fork_at_epoch(Epoch::new(200000));
        assert_eq!(fork.previous_version, [2, 0, 0, 0]);
        assert_eq!(fork.current_version, [3, 0, 0, 0]);
        assert_eq!(fork.epoch, Epoch::new(194048));
    }

    fn test_domain(domain_type: Domain, raw_domain: u32, spec: &ChainSpec) {
        let genesis_validators_root = Hash256::from_low_u64_le(77);
        let fork_epoch = Epoch::new(1024);
        let fork = Fork {
            previous_version: spec.genesis_fork_version,
            current_version: spec.altair_fork_version,
            epoch: fork_epoch,
        };
        let domain = spec.get_domain(fork_epoch, domain_type, &fork, genesis_validators_root);

        let mut expected = raw_domain.to_le_bytes().to_vec();
        expected.extend_from_slice(
            &ChainSpec::compute_fork_data_root(spec.altair_fork_version, genesis_validators_root)
                .as_bytes()[..28],
        );

        assert_eq!(domain.as_bytes(), &expected[..]);
    }

    #[test]
    fn test_get_domain() {
        let spec = ChainSpec::mainnet();

        test_domain(Domain::BeaconProposer, spec.domain_beacon_proposer, &spec);
        test_domain(Domain::BeaconAttester, spec.domain_beacon_attester, &spec);
        test_domain(Domain::Randao, spec.domain_randao, &spec);
        test_domain(Domain::Deposit, spec.domain_deposit, &spec);
        test_domain(Domain::VoluntaryExit, spec.domain_voluntary_exit, &spec);
        test_domain(Domain::SelectionProof, spec.domain_selection_proof, &spec);
        test_domain(
            Domain::AggregateAndProof,
            spec.domain_aggregate_and_proof,
            &spec,
        );
        test_domain(Domain::SyncCommittee, spec.domain_sync_committee, &spec);
        test_domain(
            Domain::BlsToExecutionChange,
            spec.domain_bls_to_execution_change,
            &spec,
        );
    }
}

#[cfg(test)]
mod yaml_tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn mainnet_round_trip() {
        let mut file = NamedTempFile::new().expect("failed to create tmp file");
        let yamlconfig = Config::from_chain_spec(&ChainSpec::mainnet());
        serde_yaml::to_writer(file.as_file_mut(), &yamlconfig).expect("failed to write");

        let from = Config::from_file(file.path()).expect("error loading file");
        assert_eq!(from, yamlconfig);
        assert_eq!(
            from.apply_to_chain_spec(&ChainSpec::mainnet()),
            Ok(ChainSpec::mainnet())
        );
    }

    #[test]
    fn upstream_style_config() {
        let yaml = r#"
PRESET_BASE: 'mainnet'
CONFIG_NAME: 'sepolia'
MIN_GENESIS_ACTIVE_VALIDATOR_COUNT: 1300
GENESIS_FORK_VERSION: 0x90000069
ALTAIR_FORK_VERSION: 0x90000070
ALTAIR_FORK_EPOCH: 50
BELLATRIX_FORK_VERSION: 0x90000071
BELLATRIX_FORK_EPOCH: "100"
CAPELLA_FORK_VERSION: 0x90000072
CAPELLA_FORK_EPOCH: 56832
DENEB_FORK_VERSION: 0x90000073
DENEB_FORK_EPOCH: 18446744073709551615
"#;
        let mut file = NamedTempFile::new().expect("failed to create tmp file");
        file.write_all(yaml.as_bytes()).expect("failed to write");

        let config = Config::from_file(file.path()).expect("error loading file");
        assert_eq!(config.config_name.as_deref(), Some("sepolia"));
        assert_eq!(config.slots_per_epoch, 32);
        assert_eq!(config.genesis_fork_version, [0x90, 0x00, 0x00, 0x69]);
        assert_eq!(config.altair_fork_epoch, Some(Epoch::new(50)));
        assert_eq!(config.bellatrix_fork_epoch, Some(Epoch::new(100)));
        assert_eq!(config.deneb_fork_epoch, None);

        let spec = config
            .apply_to_chain_spec(&ChainSpec::mainnet())
            .expect("valid schedule");
        assert_eq!(spec.fork_name_at_epoch(Epoch::new(99)), ForkName::Altair);
        assert_eq!(
            spec.fork_name_at_epoch(Epoch::max_value()),
            ForkName::Capella
        );
    }

    #[test]
    fn out_of_order_schedule_is_rejected() {
        let config = Config {
            altair_fork_epoch: Some(Epoch::new(10)),
            bellatrix_fork_epoch: Some(Epoch::new(5)),
            ..Config::default()
        };
        assert!(config.apply_to_chain_spec(&ChainSpec::mainnet()).is_err());

        let config = Config {
            altair_fork_epoch: None,
            ..Config::default()
        };
        assert!(config.apply_to_chain_spec(&ChainSpec::mainnet()).is_err());
    }
}
