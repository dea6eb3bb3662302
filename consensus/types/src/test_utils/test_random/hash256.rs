use super::*;
use crate::Hash256;

impl TestRandom for Hash256 {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        Hash256::from(<[u8; 32]>::random_for_test(rng))
    }
}
