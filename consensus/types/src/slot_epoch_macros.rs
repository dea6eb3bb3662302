macro_rules! impl_from_into_u64 {
    ($main: ident) => {
        impl From<u64> for $main {
            fn from(n: u64) -> $main {
                $main(n)
            }
        }

        impl From<$main> for u64 {
            fn from(from: $main) -> u64 {
                from.0
            }
        }

        impl $main {
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }
    };
}

macro_rules! impl_from_into_usize {
    ($main: ident) => {
        impl From<usize> for $main {
            fn from(n: usize) -> $main {
                $main(n as u64)
            }
        }

        impl $main {
            pub fn as_usize(&self) -> usize {
                self.0 as usize
            }
        }
    };
}

macro_rules! impl_math_between {
    ($main: ident, $other: ident) => {
        impl PartialOrd<$other> for $main {
            /// Utilizes `partial_cmp` on the underlying `u64`.
            fn partial_cmp(&self, other: &$other) -> Option<Ordering> {
                Some(self.0.cmp(&(*other).into()))
            }
        }

        impl PartialEq<$other> for $main {
            fn eq(&self, other: &$other) -> bool {
                let other: u64 = (*other).into();
                self.0 == other
            }
        }

        impl Add<$other> for $main {
            type Output = $main;

            fn add(self, other: $other) -> $main {
                $main::from(self.0.saturating_add(other.into()))
            }
        }

        impl AddAssign<$other> for $main {
            fn add_assign(&mut self, other: $other) {
                self.0 = self.0.saturating_add(other.into());
            }
        }

        impl Sub<$other> for $main {
            type Output = $main;

            fn sub(self, other: $other) -> $main {
                $main::from(self.0.saturating_sub(other.into()))
            }
        }

        impl SubAssign<$other> for $main {
            fn sub_assign(&mut self, other: $other) {
                self.0 = self.0.saturating_sub(other.into());
            }
        }

        impl Div<$other> for $main {
            type Output = $main;

            /// Panics when dividing by zero.
            fn div(self, rhs: $other) -> $main {
                let rhs: u64 = rhs.into();
                $main::from(self.0 / rhs)
            }
        }

        impl Rem<$other> for $main {
            type Output = $main;

            /// Panics when the modulus is zero.
            fn rem(self, modulus: $other) -> $main {
                let modulus: u64 = modulus.into();
                $main::from(self.0 % modulus)
            }
        }
    };
}

macro_rules! impl_display {
    ($type: ident) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! impl_ssz {
    ($type: ident) => {
        impl Encode for $type {
            fn is_ssz_fixed_len() -> bool {
                <u64 as Encode>::is_ssz_fixed_len()
            }

            fn ssz_fixed_len() -> usize {
                <u64 as Encode>::ssz_fixed_len()
            }

            fn ssz_bytes_len(&self) -> usize {
                self.0.ssz_bytes_len()
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                self.0.ssz_append(buf)
            }
        }

        impl Decode for $type {
            fn is_ssz_fixed_len() -> bool {
                <u64 as Decode>::is_ssz_fixed_len()
            }

            fn ssz_fixed_len() -> usize {
                <u64 as Decode>::ssz_fixed_len()
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
                Ok($type(u64::from_ssz_bytes(bytes)?))
            }
        }

        impl SszSchema for $type {
            fn ssz_schema() -> TypeDescriptor {
                u64::ssz_schema()
            }
        }

        impl tree_hash::TreeHash for $type {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Basic
            }

            fn tree_hash_packed_encoding(&self) -> PackedEncoding {
                self.0.tree_hash_packed_encoding()
            }

            fn tree_hash_packing_factor() -> usize {
                u64::tree_hash_packing_factor()
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                self.0.tree_hash_root()
            }
        }

        impl TestRandom for $type {
            fn random_for_test(rng: &mut impl RngCore) -> Self {
                $type::from(u64::random_for_test(rng))
            }
        }
    };
}

#[cfg(test)]
macro_rules! math_between_tests {
    ($type: ident, $other: ident) => {
        #[test]
        fn partial_ord() {
            let assert_partial_ord = |a: u64, partial_ord: Ordering, b: u64| {
                let other: $other = $type(b).into();
                assert_eq!($type(a).partial_cmp(&other), Some(partial_ord));
            };

            assert_partial_ord(1, Ordering::Less, 2);
            assert_partial_ord(2, Ordering::Greater, 1);
            assert_partial_ord(0, Ordering::Less, u64::max_value());
            assert_partial_ord(u64::max_value(), Ordering::Greater, 0);
            assert_partial_ord(0, Ordering::Equal, 0);
            assert_partial_ord(u64::max_value(), Ordering::Equal, u64::max_value());
        }

        #[test]
        fn add_and_sub_saturate() {
            let max = $type(u64::max_value());
            let one: $other = $type(1).into();

            assert_eq!(max + one, $type(u64::max_value()));
            assert_eq!($type(0) - one, $type(0));
            assert_eq!($type(7) - one, $type(6));

            let mut a = $type(5);
            a += one;
            assert_eq!(a, $type(6));
            a -= one;
            a -= one;
            assert_eq!(a, $type(4));
        }

        #[test]
        fn div_and_rem() {
            let three: $other = $type(3).into();

            assert_eq!($type(10) / three, $type(3));
            assert_eq!($type(10) % three, $type(1));
        }
    };
}

#[cfg(test)]
macro_rules! all_tests {
    ($type: ident) => {
        mod self_tests {
            use super::*;
            math_between_tests!($type, $type);
        }

        mod u64_tests {
            use super::*;
            math_between_tests!($type, u64);
        }

        #[test]
        fn ssz_is_little_endian_u64() {
            let bytes = $type(0x0102).as_ssz_bytes();
            assert_eq!(bytes, vec![2, 1, 0, 0, 0, 0, 0, 0]);
            assert_eq!($type::from_ssz_bytes(&bytes), Ok($type(0x0102)));
        }

        #[test]
        fn tree_hash_matches_u64() {
            use tree_hash::TreeHash;

            assert_eq!($type(42).tree_hash_root(), 42u64.tree_hash_root());
        }

        #[test]
        fn serde_is_quoted() {
            assert_eq!(serde_json::to_string(&$type(42)).unwrap(), "\"42\"");
            assert_eq!(
                serde_json::from_str::<$type>("42").unwrap(),
                $type(42)
            );
            assert_eq!(
                serde_json::from_str::<$type>("\"42\"").unwrap(),
                $type(42)
            );
        }
    };
}
