use crate::test_utils::TestRandom;
use crate::Epoch;

use serde_derive::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode, SszSchema};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// Specifies a fork of the `BeaconChain`, to prevent replay attacks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
    SszSchema,
    TestRandom,
)]
pub struct Fork {
    #[serde(with = "serde_utils::fixed_bytes_hex")]
    pub previous_version: [u8; 4],
    #[serde(with = "serde_utils::fixed_bytes_hex")]
    pub current_version: [u8; 4],
    pub epoch: Epoch,
}

impl Fork {
    /// Return the fork version of the given ``epoch``.
    pub fn get_fork_version(&self, epoch: Epoch) -> [u8; 4] {
        if epoch < self.epoch {
            return self.previous_version;
        }
        self.current_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    ssz_and_tree_hash_tests!(Fork);

    fn test_genesis(epoch: Epoch) {
        let fork = Fork {
            previous_version: [0, 0, 0, 1],
            current_version: [0, 0, 0, 1],
            epoch,
        };

        assert_eq!(fork.epoch, epoch, "epoch incorrect");
        assert_eq!(
            fork.previous_version, fork.current_version,
            "previous and current are not identical"
        );
    }

    #[test]
    fn genesis() {
        test_genesis(Epoch::new(0));
        test_genesis(Epoch::new(11));
        test_genesis(Epoch::new(2_u64.pow(63)));
        test_genesis(Epoch::max_value());
    }

    #[test]
    fn get_fork_version() {
        let previous_version = [1; 4];
        let current_version = [2; 4];
        let epoch = Epoch::new(10);

        let fork = Fork {
            previous_version,
            current_version,
            epoch,
        };

        assert_eq!(fork.get_fork_version(epoch - 1), previous_version);
        assert_eq!(fork.get_fork_version(epoch), current_version);
        assert_eq!(fork.get_fork_version(epoch + 1), current_version);
    }

    #[test]
    fn json_versions_are_hex() {
        let fork = Fork {
            previous_version: [0, 0, 0, 0],
            current_version: [1, 0, 0, 0],
            epoch: Epoch::new(74240),
        };
        assert_eq!(
            serde_json::to_string(&fork).unwrap(),
            r#"{"previous_version":"0x00000000","current_version":"0x01000000","epoch":"74240"}"#
        );
    }
}
