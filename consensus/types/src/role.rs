use crate::ForkName;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A logical record whose concrete shape depends on the fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    BeaconBlock,
    SignedBeaconBlock,
    BeaconBlockBody,
    BeaconState,
    ExecutionPayload,
    ExecutionPayloadHeader,
    BlindedBeaconBlock,
    SignedBlindedBeaconBlock,
    LightClientHeader,
    LightClientBootstrap,
    LightClientUpdate,
    LightClientFinalityUpdate,
    LightClientOptimisticUpdate,
}

impl Role {
    pub fn list_all() -> Vec<Role> {
        vec![
            Role::BeaconBlock,
            Role::SignedBeaconBlock,
            Role::BeaconBlockBody,
            Role::BeaconState,
            Role::ExecutionPayload,
            Role::ExecutionPayloadHeader,
            Role::BlindedBeaconBlock,
            Role::SignedBlindedBeaconBlock,
            Role::LightClientHeader,
            Role::LightClientBootstrap,
            Role::LightClientUpdate,
            Role::LightClientFinalityUpdate,
            Role::LightClientOptimisticUpdate,
        ]
    }

    /// Returns the fork that introduced the shape `self` has at `fork_name`.
    ///
    /// Returns `None` if there is no such record at `fork_name`.
    pub fn shape_fork(self, fork_name: ForkName) -> Option<ForkName> {
        match self {
            Role::BeaconBlock | Role::SignedBeaconBlock | Role::BeaconBlockBody | Role::BeaconState => {
                Some(fork_name)
            }
            Role::ExecutionPayload | Role::ExecutionPayloadHeader => {
                fork_name.execution_enabled().then_some(fork_name)
            }
            Role::BlindedBeaconBlock | Role::SignedBlindedBeaconBlock => {
                (fork_name == ForkName::Bellatrix).then_some(fork_name)
            }
            Role::LightClientHeader
            | Role::LightClientBootstrap
            | Role::LightClientUpdate
            | Role::LightClientFinalityUpdate
            | Role::LightClientOptimisticUpdate => match fork_name {
                ForkName::Base => None,
                ForkName::Altair | ForkName::Bellatrix => Some(ForkName::Altair),
                ForkName::Capella | ForkName::Deneb => Some(fork_name),
            },
        }
    }

    /// True if the record is a message wrapped with its signature.
    pub fn is_signed_envelope(self) -> bool {
        matches!(self, Role::SignedBeaconBlock | Role::SignedBlindedBeaconBlock)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(role: &str) -> Result<Self, String> {
        Role::list_all()
            .into_iter()
            .find(|candidate| candidate.to_string() == role)
            .ok_or_else(|| format!("unknown role: {}", role))
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let name = match self {
            Role::BeaconBlock => "BeaconBlock",
            Role::SignedBeaconBlock => "SignedBeaconBlock",
            Role::BeaconBlockBody => "BeaconBlockBody",
            Role::BeaconState => "BeaconState",
            Role::ExecutionPayload => "ExecutionPayload",
            Role::ExecutionPayloadHeader => "ExecutionPayloadHeader",
            Role::BlindedBeaconBlock => "BlindedBeaconBlock",
            Role::SignedBlindedBeaconBlock => "SignedBlindedBeaconBlock",
            Role::LightClientHeader => "LightClientHeader",
            Role::LightClientBootstrap => "LightClientBootstrap",
            Role::LightClientUpdate => "LightClientUpdate",
            Role::LightClientFinalityUpdate => "LightClientFinalityUpdate",
            Role::LightClientOptimisticUpdate => "LightClientOptimisticUpdate",
        };
        name.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for role in Role::list_all() {
            assert_eq!(Role::from_str(&role.to_string()), Ok(role));
        }
        assert_eq!(Role::from_str("BeaconState"), Ok(Role::BeaconState));
        assert!(Role::from_str("beacon_state").is_err());
        assert!(Role::from_str("Checkpoint").is_err());
    }

    #[test]
    fn shape_forks() {
        assert_eq!(Role::BeaconState.shape_fork(ForkName::Base), Some(ForkName::Base));
        assert_eq!(Role::ExecutionPayload.shape_fork(ForkName::Altair), None);
        assert_eq!(
            Role::ExecutionPayload.shape_fork(ForkName::Deneb),
            Some(ForkName::Deneb)
        );
        assert_eq!(Role::BlindedBeaconBlock.shape_fork(ForkName::Capella), None);
        assert_eq!(Role::LightClientUpdate.shape_fork(ForkName::Base), None);
        assert_eq!(
            Role::LightClientUpdate.shape_fork(ForkName::Bellatrix),
            Some(ForkName::Altair)
        );
    }
}
