use super::*;
use ethereum_types::{H160, H256, U256};
use std::sync::Arc;

/// Implements `Encode` for a type that always occupies `$len` bytes, written by `$write`.
macro_rules! impl_encode_fixed {
    ($type: ty, $len: expr, |$value: ident, $buf: ident| $write: expr) => {
        impl Encode for $type {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $len
            }

            fn ssz_bytes_len(&self) -> usize {
                $len
            }

            fn ssz_append(&self, $buf: &mut Vec<u8>) {
                let $value = self;
                $write
            }
        }
    };
}

impl_encode_fixed!(u8, 1, |value, buf| buf.push(*value));
impl_encode_fixed!(u16, 2, |value, buf| buf.extend_from_slice(&value.to_le_bytes()));
impl_encode_fixed!(u32, 4, |value, buf| buf.extend_from_slice(&value.to_le_bytes()));
impl_encode_fixed!(u64, 8, |value, buf| buf.extend_from_slice(&value.to_le_bytes()));
impl_encode_fixed!(bool, 1, |value, buf| buf.push(u8::from(*value)));
impl_encode_fixed!(H160, 20, |value, buf| buf.extend_from_slice(value.as_bytes()));
impl_encode_fixed!(H256, 32, |value, buf| buf.extend_from_slice(value.as_bytes()));
impl_encode_fixed!(U256, 32, |value, buf| {
    let start = buf.len();
    buf.resize(start + 32, 0);
    value.to_little_endian(&mut buf[start..]);
});

impl<const N: usize> Encode for [u8; N] {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn ssz_bytes_len(&self) -> usize {
        N
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }
}

/// Forwards every method of `Encode` to the pointee of a smart pointer or reference.
macro_rules! impl_encode_via_deref {
    ($($wrapper: ty),*) => {
        $(
            impl<T: Encode> Encode for $wrapper {
                fn is_ssz_fixed_len() -> bool {
                    T::is_ssz_fixed_len()
                }

                fn ssz_fixed_len() -> usize {
                    T::ssz_fixed_len()
                }

                fn ssz_append(&self, buf: &mut Vec<u8>) {
                    T::ssz_append(self, buf)
                }

                fn ssz_bytes_len(&self) -> usize {
                    T::ssz_bytes_len(self)
                }
            }
        )*
    };
}

impl_encode_via_deref!(Arc<T>, &T);

impl<T: Encode> Encode for Vec<T> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_bytes_len(&self) -> usize {
        sequence_ssz_bytes_len(self.iter())
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        sequence_ssz_append(self.iter(), buf)
    }
}

/// The encoded length of a list or vector holding the items of `iter`.
pub fn sequence_ssz_bytes_len<I, T>(iter: I) -> usize
where
    I: Iterator<Item = T> + ExactSizeIterator,
    T: Encode,
{
    let count = iter.len();

    if T::is_ssz_fixed_len() {
        T::ssz_fixed_len() * count
    } else {
        BYTES_PER_LENGTH_OFFSET * count + iter.map(|item| item.ssz_bytes_len()).sum::<usize>()
    }
}

/// Appends the items of `iter` to `buf` as the body of a list or vector.
///
/// Fixed-size items are concatenated. Variable-size items get an offset table, one entry per
/// item, ahead of their payloads.
pub fn sequence_ssz_append<I, T>(iter: I, buf: &mut Vec<u8>)
where
    I: Iterator<Item = T> + ExactSizeIterator,
    T: Encode,
{
    if T::is_ssz_fixed_len() {
        buf.reserve(T::ssz_fixed_len() * iter.len());
        iter.for_each(|item| item.ssz_append(buf));
        return;
    }

    let mut encoder = SszEncoder::container(buf, iter.len() * BYTES_PER_LENGTH_OFFSET);
    for item in iter {
        encoder.append(&item);
    }
    encoder.finalize();
}
