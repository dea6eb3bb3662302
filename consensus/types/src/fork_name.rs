use crate::{ChainSpec, Epoch};
use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub enum ForkName {
    Base,
    Altair,
    Bellatrix,
    Capella,
    Deneb,
}

impl ForkName {
    pub fn list_all() -> Vec<ForkName> {
        vec![
            ForkName::Base,
            ForkName::Altair,
            ForkName::Bellatrix,
            ForkName::Capella,
            ForkName::Deneb,
        ]
    }

    pub fn latest() -> ForkName {
        ForkName::Deneb
    }

    /// Set the activation slots in the given `ChainSpec` so that the fork named by `self`
    /// is the only fork in effect from genesis.
    pub fn make_genesis_spec(&self, mut spec: ChainSpec) -> ChainSpec {
        // Assumes GENESIS_EPOCH = 0, which is safe because it's a constant.
        let activation = |fork: ForkName| (fork <= *self).then(|| Epoch::new(0));

        spec.altair_fork_epoch = activation(ForkName::Altair);
        spec.bellatrix_fork_epoch = activation(ForkName::Bellatrix);
        spec.capella_fork_epoch = activation(ForkName::Capella);
        spec.deneb_fork_epoch = activation(ForkName::Deneb);
        spec
    }

    /// Return the name of the fork immediately prior to the current one.
    ///
    /// If `self` is `ForkName::Base` then `None` is returned.
    pub fn previous_fork(self) -> Option<ForkName> {
        match self {
            ForkName::Base => None,
            ForkName::Altair => Some(ForkName::Base),
            ForkName::Bellatrix => Some(ForkName::Altair),
            ForkName::Capella => Some(ForkName::Bellatrix),
            ForkName::Deneb => Some(ForkName::Capella),
        }
    }

    /// Return the name of the fork immediately after the current one.
    ///
    /// If `self` is the last known fork and has no successor, `None` is returned.
    pub fn next_fork(self) -> Option<ForkName> {
        match self {
            ForkName::Base => Some(ForkName::Altair),
            ForkName::Altair => Some(ForkName::Bellatrix),
            ForkName::Bellatrix => Some(ForkName::Capella),
            ForkName::Capella => Some(ForkName::Deneb),
            ForkName::Deneb => None,
        }
    }

    /// True from Bellatrix onwards, when blocks carry an execution payload.
    pub fn execution_enabled(self) -> bool {
        self >= ForkName::Bellatrix
    }

    /// True from Altair onwards, when sync committees and light clients exist.
    pub fn altair_enabled(self) -> bool {
        self >= ForkName::Altair
    }
}

impl FromStr for ForkName {
    type Err = String;

    fn from_str(fork_name: &str) -> Result<Self, String> {
        Ok(match fork_name.to_lowercase().as_ref() {
            "phase0" | "base" => ForkName::Base,
            "altair" => ForkName::Altair,
            "bellatrix" | "merge" => ForkName::Bellatrix,
            "capella" => ForkName::Capella,
            "deneb" => ForkName::Deneb,
            _ => return Err(format!("unknown fork name: {}", fork_name)),
        })
    }
}

impl Display for ForkName {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ForkName::Base => "phase0".fmt(f),
            ForkName::Altair => "altair".fmt(f),
            ForkName::Bellatrix => "bellatrix".fmt(f),
            ForkName::Capella => "capella".fmt(f),
            ForkName::Deneb => "deneb".fmt(f),
        }
    }
}

impl From<ForkName> for String {
    fn from(fork: ForkName) -> String {
        fork.to_string()
    }
}

impl TryFrom<String> for ForkName {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InconsistentFork {
    pub fork_at_slot: ForkName,
    pub object_fork: ForkName,
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn test_fork_name_at_epoch(fork_name: ForkName) {
        let spec = fork_name.make_genesis_spec(ChainSpec::mainnet());
        assert_eq!(spec.fork_name_at_epoch(Epoch::new(0)), fork_name);
        assert_eq!(spec.fork_name_at_epoch(Epoch::max_value()), fork_name);
    }

    #[test]
    fn make_genesis_spec_for_every_fork() {
        for fork_name in ForkName::list_all() {
            test_fork_name_at_epoch(fork_name);
        }
    }

    #[test]
    fn previous_and_next_fork_consistent() {
        assert_eq!(ForkName::Deneb.next_fork(), None);
        assert_eq!(ForkName::Base.previous_fork(), None);

        for (prev_fork, fork) in ForkName::list_all().into_iter().tuple_windows() {
            assert_eq!(prev_fork.next_fork(), Some(fork));
            assert_eq!(fork.previous_fork(), Some(prev_fork));
        }
    }

    #[test]
    fn fork_name_case_insensitive_match() {
        assert_eq!(ForkName::from_str("BASE"), Ok(ForkName::Base));
        assert_eq!(ForkName::from_str("phase0"), Ok(ForkName::Base));
        assert_eq!(ForkName::from_str("Bellatrix"), Ok(ForkName::Bellatrix));
        assert_eq!(ForkName::from_str("merge"), Ok(ForkName::Bellatrix));
        assert_eq!(ForkName::from_str("deneb"), Ok(ForkName::Deneb));
        assert!(ForkName::from_str("electra").is_err());
    }

    #[test]
    fn fork_name_display_round_trips() {
        for fork in ForkName::list_all() {
            assert_eq!(ForkName::from_str(&fork.to_string()), Ok(fork));
        }
    }

    #[test]
    fn fork_ordering() {
        assert!(ForkName::Base < ForkName::Altair);
        assert!(ForkName::Capella < ForkName::Deneb);
        assert!(!ForkName::Altair.execution_enabled());
        assert!(ForkName::Bellatrix.execution_enabled());
        assert!(!ForkName::Base.altair_enabled());
    }

    #[test]
    fn latest_fork_is_last_listed() {
        assert_eq!(ForkName::list_all().last(), Some(&ForkName::latest()));
    }
}
