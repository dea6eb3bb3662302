use crate::{Decode, DecodeError, Encode, ErrorKind, SszSchema, TypeDescriptor};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use smallvec::{smallvec, SmallVec, ToSmallVec};
use std::marker::PhantomData;
use typenum::Unsigned;

/// Bitfields up to this many bytes are stored inline.
const SMALLVEC_LEN: usize = 32;

/// Returned when a bitfield cannot be constructed or accessed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BitfieldError {
    /// The bit at index `i` does not exist in a bitfield of length `len`, or a bitlist would be
    /// longer than its maximum `len`.
    OutOfBounds { i: usize, len: usize },
    /// A bitlist has no sentinel bit, so its length cannot be recovered.
    MissingLengthInformation,
    /// Bits at or beyond the bitfield length are set.
    ExcessBits,
    /// The number of bytes does not match the number of bits.
    InvalidByteCount { given: usize, expected: usize },
}

impl BitfieldError {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BitfieldError::OutOfBounds { .. } => ErrorKind::CapacityExceeded,
            BitfieldError::MissingLengthInformation | BitfieldError::ExcessBits => {
                ErrorKind::MalformedBitlist
            }
            BitfieldError::InvalidByteCount { .. } => ErrorKind::SizeViolation,
        }
    }
}

/// How to treat set bits beyond the length of a `BitVector` when reading it from bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingBits {
    /// Clear any trailing bits.
    Ignore,
    /// Fail with `BitfieldError::ExcessBits`.
    Reject,
}

/// A marker trait applied to `Variable` and `Fixed` that defines the behaviour of a `Bitfield`.
pub trait BitfieldBehaviour: Clone {}

/// A marker struct used to declare SSZ `Variable` behaviour on a `Bitfield`.
///
/// See the [`Bitfield`](struct.Bitfield.html) docs for usage.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variable<N> {
    _phantom: PhantomData<N>,
}

/// A marker struct used to declare SSZ `Fixed` behaviour on a `Bitfield`.
///
/// See the [`Bitfield`](struct.Bitfield.html) docs for usage.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fixed<N> {
    _phantom: PhantomData<N>,
}

impl<N: Unsigned + Clone> BitfieldBehaviour for Variable<N> {}
impl<N: Unsigned + Clone> BitfieldBehaviour for Fixed<N> {}

/// A heap-allocated, ordered, variable-length collection of `bool` values, limited to `N` bits.
pub type BitList<N> = Bitfield<Variable<N>>;

/// A heap-allocated, ordered, fixed-length collection of `bool` values, with `N` bits.
///
/// See [Bitfield](struct.Bitfield.html) documentation.
pub type BitVector<N> = Bitfield<Fixed<N>>;

/// A heap-allocated, ordered, fixed-length, collection of `bool` values. Use of
/// [`BitList`](type.BitList.html) or [`BitVector`](type.BitVector.html) type aliases is preferred
/// over direct use of this struct.
///
/// The `T` type parameter is used to define length behaviour with the `Variable` or `Fixed` marker
/// structs.
///
/// Bit `i` lives in byte `i / 8` at position `i % 8` (least-significant bit first). The struct
/// never stores the bitlist sentinel; it is added by `into_bytes` and stripped by `from_bytes`.
///
/// ## Example
///
/// ```
/// use ssz::{BitList, BitVector};
/// use typenum;
///
/// // `BitList` has a type-level maximum length. The length of the list is specified at runtime
/// // and it must be less than or equal to `N`. After instantiation, `BitList` cannot grow or
/// // shrink.
/// type BitList8 = BitList<typenum::U8>;
///
/// // Creating a `BitList` with a larger-than-`N` capacity returns `None`.
/// assert!(BitList8::with_capacity(9).is_err());
///
/// let mut bitlist = BitList8::with_capacity(4).unwrap();  // `BitList` permits a capacity of less than the maximum.
/// assert!(bitlist.set(3, true).is_ok());  // Setting inside the instantiation capacity is permitted.
/// assert!(bitlist.set(5, true).is_err());  // Setting outside that capacity is not.
///
/// // `BitVector` has a type-level fixed length. Unlike `BitList`, it cannot be instantiated with a custom length
/// // or grow/shrink.
/// type BitVector8 = BitVector<typenum::U8>;
///
/// let mut bitvector = BitVector8::new();
/// assert_eq!(bitvector.len(), 8); // `BitVector` length is fixed at the type-level.
/// assert!(bitvector.set(7, true).is_ok());  // Setting inside the capacity is permitted.
/// assert!(bitvector.set(9, true).is_err());  // Setting outside the capacity is not.
///
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitfield<T> {
    bytes: SmallVec<[u8; SMALLVEC_LEN]>,
    len: usize,
    _phantom: PhantomData<T>,
}

impl<N: Unsigned + Clone> Bitfield<Variable<N>> {
    /// Instantiate with capacity for `num_bits` boolean values. The length cannot be grown or
    /// shrunk after instantiation.
    ///
    /// All bits are initialized to `false`.
    ///
    /// Returns an error if `num_bits > N`.
    pub fn with_capacity(num_bits: usize) -> Result<Self, BitfieldError> {
        if num_bits <= N::to_usize() {
            Ok(Self {
                bytes: smallvec![0; bytes_for_bit_len(num_bits)],
                len: num_bits,
                _phantom: PhantomData,
            })
        } else {
            Err(BitfieldError::OutOfBounds {
                i: num_bits,
                len: N::to_usize(),
            })
        }
    }

    /// Equal to `N` regardless of the value supplied to `with_capacity`.
    pub fn max_len() -> usize {
        N::to_usize()
    }

    /// Consumes `self`, returning a serialized representation.
    ///
    /// The output is faithful to the SSZ encoding of `self`, such that a sentinel bit is set at
    /// index `self.len()`.
    ///
    /// ## Example
    /// ```
    /// use ssz::BitList;
    /// use typenum;
    ///
    /// type BitList8 = BitList<typenum::U8>;
    ///
    /// let b = BitList8::with_capacity(4).unwrap();
    ///
    /// assert_eq!(b.into_bytes().as_slice(), &[0b0001_0000]);
    /// ```
    pub fn into_bytes(self) -> SmallVec<[u8; SMALLVEC_LEN]> {
        let len = self.len();
        let mut bytes = self.bytes;

        bytes.resize(bytes_for_bit_len(len + 1), 0);
        bytes[len / 8] |= 1 << (len % 8);

        bytes
    }

    /// Instantiates a new instance from `bytes`. Consumes the same format that `self.into_bytes()`
    /// produces (SSZ).
    ///
    /// Returns an error if:
    ///
    /// - `bytes` is empty or has no set bit (there is no sentinel),
    /// - the sentinel is not in the last byte,
    /// - the length indicated by the sentinel is greater than `N`.
    pub fn from_bytes(bytes: SmallVec<[u8; SMALLVEC_LEN]>) -> Result<Self, BitfieldError> {
        let bytes_len = bytes.len();

        let mut initial_bitfield: Bitfield<Variable<N>> = {
            let num_bits = bytes.len() * 8;
            Bitfield::from_raw_bytes(bytes, num_bits)?
        };

        let len = initial_bitfield
            .highest_set_bit()
            .ok_or(BitfieldError::MissingLengthInformation)?;

        // The sentinel bit must be in the last byte, or else there are surplus bytes.
        if len / 8 + 1 != bytes_len {
            return Err(BitfieldError::InvalidByteCount {
                given: bytes_len,
                expected: len / 8 + 1,
            });
        }

        if len <= Self::max_len() {
            initial_bitfield.bytes[len / 8] &= !(1 << (len % 8));

            let mut bytes = initial_bitfield.into_raw_bytes();
            bytes.truncate(bytes_for_bit_len(len));

            Self::from_raw_bytes(bytes, len)
        } else {
            Err(BitfieldError::OutOfBounds {
                i: len,
                len: Self::max_len(),
            })
        }
    }
}

impl<N: Unsigned + Clone> Bitfield<Fixed<N>> {
    /// Instantiate a new `Bitfield` with a fixed-length of `N` bits.
    ///
    /// All bits are initialized to `false`.
    pub fn new() -> Self {
        Self {
            bytes: smallvec![0; bytes_for_bit_len(Self::capacity())],
            len: Self::capacity(),
            _phantom: PhantomData,
        }
    }

    /// Returns `N`, the number of bits in `Self`.
    pub fn capacity() -> usize {
        N::to_usize()
    }

    /// Consumes `self`, returning a serialized representation.
    ///
    /// The output is faithful to the SSZ encoding of `self`.
    ///
    /// ## Example
    /// ```
    /// use ssz::BitVector;
    /// use typenum;
    ///
    /// type BitVector4 = BitVector<typenum::U4>;
    ///
    /// assert_eq!(BitVector4::new().into_bytes().as_slice(), &[0b0000_0000]);
    /// ```
    pub fn into_bytes(self) -> SmallVec<[u8; SMALLVEC_LEN]> {
        self.into_raw_bytes()
    }

    /// Instantiates a new instance from `bytes`, clearing any set bit beyond `N` as SSZ
    /// decoding does. Use `from_bytes_with` and `TrailingBits::Reject` to refuse them instead.
    pub fn from_bytes(bytes: SmallVec<[u8; SMALLVEC_LEN]>) -> Result<Self, BitfieldError> {
        Self::from_bytes_with(bytes, TrailingBits::Ignore)
    }

    /// Instantiates a new instance from `bytes`, treating set bits beyond `N` according to
    /// `trailing_bits`.
    ///
    /// Returns an error if `bytes.len()` is not the number of bytes needed for `N` bits.
    pub fn from_bytes_with(
        mut bytes: SmallVec<[u8; SMALLVEC_LEN]>,
        trailing_bits: TrailingBits,
    ) -> Result<Self, BitfieldError> {
        let expected = bytes_for_bit_len(Self::capacity());

        if bytes.len() != expected {
            return Err(BitfieldError::InvalidByteCount {
                given: bytes.len(),
                expected,
            });
        }

        if trailing_bits == TrailingBits::Ignore {
            if let Some(last) = bytes.last_mut() {
                *last &= last_byte_mask(Self::capacity());
            }
        }

        Self::from_raw_bytes(bytes, Self::capacity())
    }
}

impl<N: Unsigned + Clone> Default for Bitfield<Fixed<N>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BitfieldBehaviour> Bitfield<T> {
    /// Sets the `i`'th bit to `value`.
    ///
    /// Returns `Err` if `i` is out-of-bounds of `self`.
    pub fn set(&mut self, i: usize, value: bool) -> Result<(), BitfieldError> {
        let len = self.len;

        if i < len {
            let byte = self
                .bytes
                .get_mut(i / 8)
                .ok_or(BitfieldError::OutOfBounds { i, len })?;

            if value {
                *byte |= 1 << (i % 8)
            } else {
                *byte &= !(1 << (i % 8))
            }

            Ok(())
        } else {
            Err(BitfieldError::OutOfBounds { i, len: self.len })
        }
    }

    /// Returns the value of the `i`'th bit.
    ///
    /// Returns `Error` if `i` is out-of-bounds of `self`.
    pub fn get(&self, i: usize) -> Result<bool, BitfieldError> {
        if i < self.len {
            let byte = self
                .bytes
                .get(i / 8)
                .ok_or(BitfieldError::OutOfBounds { i, len: self.len })?;

            Ok(*byte & 1 << (i % 8) > 0)
        } else {
            Err(BitfieldError::OutOfBounds { i, len: self.len })
        }
    }

    /// Returns the number of bits stored in `self`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `self.len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the underlying bytes representation of the bitfield, without any sentinel bit.
    pub fn into_raw_bytes(self) -> SmallVec<[u8; SMALLVEC_LEN]> {
        self.bytes
    }

    /// Returns a view into the underlying bytes representation of the bitfield.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Instantiates from the given `bytes`, which are the same format as output from
    /// `self.into_raw_bytes()`.
    ///
    /// Returns `None` if:
    ///
    /// - `bytes` is not the minimal required bytes to represent a bitfield of `bit_len` bits.
    /// - `bit_len` is not a multiple of 8 and `bytes` contains set bits that are higher than, or
    /// equal to `bit_len`.
    fn from_raw_bytes(
        bytes: SmallVec<[u8; SMALLVEC_LEN]>,
        bit_len: usize,
    ) -> Result<Self, BitfieldError> {
        let expected = bytes_for_bit_len(bit_len);

        if bytes.len() != expected {
            return Err(BitfieldError::InvalidByteCount {
                given: bytes.len(),
                expected,
            });
        }

        if let Some(last) = bytes.last() {
            if last & !last_byte_mask(bit_len) != 0 {
                return Err(BitfieldError::ExcessBits);
            }
        }

        Ok(Self {
            bytes,
            len: bit_len,
            _phantom: PhantomData,
        })
    }

    /// Returns the `Some(i)` where `i` is the highest index with a set bit. Returns `None` if
    /// there are no set bits.
    pub fn highest_set_bit(&self) -> Option<usize> {
        self.bytes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, byte)| **byte > 0)
            .map(|(i, byte)| i * 8 + 7 - byte.leading_zeros() as usize)
    }

    /// Returns an iterator across bitfield `bool` values, starting at the lowest index.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bytes[i / 8] & 1 << (i % 8) > 0)
    }

    /// Returns the number of bits that are set to `true`.
    pub fn num_set_bits(&self) -> usize {
        self.bytes
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    /// Returns `true` if no bits are set.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|byte| *byte == 0)
    }
}

/// Returns the minimum required bytes to represent a given number of bits.
///
/// `bit_len == 0` requires a single byte.
fn bytes_for_bit_len(bit_len: usize) -> usize {
    std::cmp::max(1, (bit_len + 7) / 8)
}

/// Returns a mask of the bits of the final byte that lie inside a bitfield of `bit_len` bits.
fn last_byte_mask(bit_len: usize) -> u8 {
    match bit_len % 8 {
        0 if bit_len > 0 => u8::max_value(),
        0 => 0,
        rem => (1_u8 << rem) - 1,
    }
}

impl<N: Unsigned + Clone> Encode for Bitfield<Variable<N>> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_bytes_len(&self) -> usize {
        // We could likely do better than turning this into bytes and reading the length, however
        // it is kept this way for simplicity.
        self.clone().into_bytes().len()
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.append(&mut self.clone().into_bytes().to_vec())
    }
}

impl<N: Unsigned + Clone> Decode for Bitfield<Variable<N>> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_bytes(bytes.to_smallvec()).map_err(DecodeError::InvalidBitList)
    }
}

impl<N: Unsigned + Clone> Encode for Bitfield<Fixed<N>> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_bytes_len(&self) -> usize {
        self.as_slice().len()
    }

    fn ssz_fixed_len() -> usize {
        bytes_for_bit_len(N::to_usize())
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_slice())
    }
}

impl<N: Unsigned + Clone> Decode for Bitfield<Fixed<N>> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        bytes_for_bit_len(N::to_usize())
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_bytes_with(bytes.to_smallvec(), TrailingBits::Ignore)
            .map_err(DecodeError::InvalidBitVector)
    }
}

impl<N: Unsigned + Clone> SszSchema for Bitfield<Variable<N>> {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::bitlist(N::to_usize())
    }
}

impl<N: Unsigned + Clone> SszSchema for Bitfield<Fixed<N>> {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::bitvector(N::to_usize())
    }
}

/// Bitfields are serialized as the `0x`-prefixed hex of their SSZ encoding.
impl<T: BitfieldBehaviour> Serialize for Bitfield<T>
where
    Bitfield<T>: Encode,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.as_ssz_bytes())))
    }
}

impl<'de, T: BitfieldBehaviour> Deserialize<'de> for Bitfield<T>
where
    Bitfield<T>: Decode,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        let stripped = string
            .strip_prefix("0x")
            .ok_or_else(|| serde::de::Error::custom("bitfield hex must be 0x-prefixed"))?;
        let bytes = hex::decode(stripped)
            .map_err(|e| serde::de::Error::custom(format!("invalid hex ({:?})", e)))?;

        Self::from_ssz_bytes(&bytes)
            .map_err(|e| serde::de::Error::custom(format!("invalid bitfield ({:?})", e)))
    }
}


#[cfg(test)]
mod bitlist {
    use super::*;
    use crate::Decode;
    use typenum::{U0, U1, U1024, U16, U8};

    pub type BitList0 = BitList<U0>;
    pub type BitList1 = BitList<U1>;
    pub type BitList8 = BitList<U8>;
    pub type BitList16 = BitList<U16>;
    pub type BitList1024 = BitList<U1024>;

    #[test]
    fn empty_list_is_a_lone_sentinel() {
        let empty = BitList16::with_capacity(0).unwrap();
        assert_eq!(empty.as_ssz_bytes(), vec![0b0000_0001]);

        let decoded = BitList16::from_ssz_bytes(&[0x01]).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(decoded, empty);
    }

    #[test]
    fn missing_sentinel() {
        let err = BitList16::from_ssz_bytes(&[0x00]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidBitList(BitfieldError::MissingLengthInformation)
        );
        assert_eq!(err.kind(), ErrorKind::MalformedBitlist);

        let err = BitList16::from_ssz_bytes(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedBitlist);
    }

    #[test]
    fn sentinel_recovers_length() {
        let decoded = BitList8::from_ssz_bytes(&[0x05]).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.get(0), Ok(true));
        assert_eq!(decoded.get(1), Ok(false));
        assert!(decoded.get(2).is_err());
    }

    #[test]
    fn bytes_after_sentinel_byte_are_rejected() {
        let err = BitList16::from_ssz_bytes(&[0x01, 0x00]).unwrap_err();

        assert_eq!(
            err,
            DecodeError::InvalidBitList(BitfieldError::InvalidByteCount {
                given: 2,
                expected: 1
            })
        );
        assert_eq!(err.kind(), ErrorKind::MalformedBitlist);
    }

    #[test]
    fn length_above_maximum_is_rejected() {
        // Sentinel at bit 9 declares a length of 9 bits.
        let err = BitList8::from_ssz_bytes(&[0x00, 0b0000_0010]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedBitlist);
        assert!(BitList16::from_ssz_bytes(&[0x00, 0b0000_0010]).is_ok());
    }

    #[test]
    fn ssz_encode() {
        assert_eq!(
            BitList0::with_capacity(0).unwrap().as_ssz_bytes(),
            vec![0b0000_0001],
        );

        assert_eq!(
            BitList1::with_capacity(0).unwrap().as_ssz_bytes(),
            vec![0b0000_0001],
        );

        assert_eq!(
            BitList1::with_capacity(1).unwrap().as_ssz_bytes(),
            vec![0b0000_0010],
        );

        assert_eq!(
            BitList8::with_capacity(8).unwrap().as_ssz_bytes(),
            vec![0b0000_0000, 0b0000_0001],
        );

        assert_eq!(
            BitList8::with_capacity(7).unwrap().as_ssz_bytes(),
            vec![0b1000_0000]
        );

        let mut b = BitList8::with_capacity(8).unwrap();
        for i in 0..8 {
            b.set(i, true).unwrap();
        }
        assert_eq!(b.as_ssz_bytes(), vec![255, 0b0000_0001]);

        let mut b = BitList8::with_capacity(8).unwrap();
        for i in 0..4 {
            b.set(i, true).unwrap();
        }
        assert_eq!(b.as_ssz_bytes(), vec![0b0000_1111, 0b0000_0001]);

        assert_eq!(
            BitList16::with_capacity(16).unwrap().as_ssz_bytes(),
            vec![0b0000_0000, 0b0000_0000, 0b0000_0001]
        );
    }

    #[test]
    fn ssz_round_trip() {
        let mut b = BitList1024::with_capacity(1000).unwrap();
        for i in (0..1000).step_by(3) {
            b.set(i, true).unwrap();
        }

        let bytes = b.as_ssz_bytes();
        assert_eq!(bytes.len(), b.ssz_bytes_len());
        assert_eq!(BitList1024::from_ssz_bytes(&bytes), Ok(b));
    }

    #[test]
    fn with_capacity_above_max() {
        assert_eq!(
            BitList8::with_capacity(9),
            Err(BitfieldError::OutOfBounds { i: 9, len: 8 })
        );
        assert_eq!(
            BitList8::with_capacity(9).unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );
    }

    #[test]
    fn num_set_bits() {
        let mut b = BitList16::with_capacity(16).unwrap();
        assert!(b.is_zero());

        b.set(0, true).unwrap();
        b.set(15, true).unwrap();

        assert_eq!(b.num_set_bits(), 2);
        assert_eq!(b.highest_set_bit(), Some(15));
        assert!(!b.is_zero());
    }

    #[test]
    fn serde_hex_round_trip() {
        let mut b = BitList8::with_capacity(3).unwrap();
        b.set(1, true).unwrap();

        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "\"0x0a\"");
        assert_eq!(serde_json::from_str::<BitList8>(&json).unwrap(), b);
    }

    fn bitlist_from(bits: &[bool]) -> BitList1024 {
        let mut list = BitList1024::with_capacity(bits.len()).unwrap();
        for (i, bit) in bits.iter().enumerate() {
            list.set(i, *bit).unwrap();
        }
        list
    }

    #[quickcheck_macros::quickcheck]
    fn sentinel_marks_length(mut bits: Vec<bool>) -> bool {
        bits.truncate(1024);
        let bytes = bitlist_from(&bits).as_ssz_bytes();

        bytes.len() == bits.len() / 8 + 1
            && bytes[bits.len() / 8] >> (bits.len() % 8) == 1
    }

    #[quickcheck_macros::quickcheck]
    fn decode_recovers_every_bit(mut bits: Vec<bool>) -> bool {
        bits.truncate(1024);
        let decoded = BitList1024::from_ssz_bytes(&bitlist_from(&bits).as_ssz_bytes()).unwrap();

        decoded.len() == bits.len() && decoded.iter().eq(bits.iter().copied())
    }
}
