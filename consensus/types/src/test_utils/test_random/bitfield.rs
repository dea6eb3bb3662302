use super::*;
use crate::{BitList, BitVector, Unsigned};
use smallvec::smallvec;

impl<N: Unsigned + Clone> TestRandom for BitList<N> {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        let mut bitlist = BitList::with_capacity(usize::random_for_test(rng) % (N::to_usize() + 1))
            .expect("length is within the maximum");

        for i in 0..bitlist.len() {
            bitlist
                .set(i, bool::random_for_test(rng))
                .expect("index is within the length");
        }

        bitlist
    }
}

impl<N: Unsigned + Clone> TestRandom for BitVector<N> {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        let mut raw_bytes = smallvec![0; std::cmp::max(1, (N::to_usize() + 7) / 8)];
        rng.fill_bytes(&mut raw_bytes);
        Self::from_bytes(raw_bytes).expect("we generate a valid BitVector")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typenum::{U4, U5};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use ssz::{Decode, Encode};

    #[test]
    fn random_bitvectors_fit_their_length() {
        let mut rng = XorShiftRng::from_seed([0x42; 16]);

        for _ in 0..64 {
            let bits = BitVector::<U4>::random_for_test(&mut rng);
            assert!(bits.as_slice()[0] < 1 << 4);
            assert_eq!(BitVector::<U4>::from_ssz_bytes(&bits.as_ssz_bytes()), Ok(bits));

            let bits = BitVector::<U5>::random_for_test(&mut rng);
            assert!(bits.as_slice()[0] < 1 << 5);
        }
    }
}
