use crate::tree_hash::vec_tree_hash_root;
use crate::Error;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use ssz::{Decode, DecodeError, Encode, SszSchema, TypeDescriptor};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;
use tree_hash::Hash256;
use typenum::Unsigned;

/// Emulates a SSZ `List`.
///
/// An ordered, heap-allocated, variable-length, homogeneous collection of `T`, with no more than
/// `N` values.
///
/// This struct is backed by a Rust `Vec` but constrained such that it can never hold more than
/// `N` values. Every constructor rejects a longer `Vec` rather than truncating it.
///
/// The maximum length of this struct is fixed at the type-level using
/// [typenum](https://crates.io/crates/typenum).
///
/// ## Example
///
/// ```
/// use ssz_types::{VariableList, typenum};
///
/// let base: Vec<u64> = vec![1, 2, 3, 4];
///
/// // Create a `VariableList` from a `Vec` that has the expected length.
/// let exact: VariableList<_, typenum::U4> = VariableList::new(base.clone()).unwrap();
/// assert_eq!(&exact[..], &[1, 2, 3, 4]);
///
/// // A `Vec` that is too long is rejected.
/// assert!(VariableList::<_, typenum::U3>::new(base.clone()).is_err());
///
/// // Create a `VariableList` from a `Vec` that is shorter than the maximum.
/// let mut long: VariableList<_, typenum::U5> = VariableList::new(base).unwrap();
/// assert_eq!(&long[..], &[1, 2, 3, 4]);
///
/// // Push a value to if it does not exceed the maximum
/// long.push(5).unwrap();
/// assert_eq!(&long[..], &[1, 2, 3, 4, 5]);
///
/// // Push a value to if it _does_ exceed the maximum.
/// assert!(long.push(6).is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct VariableList<T, N> {
    vec: Vec<T>,
    _phantom: PhantomData<N>,
}

impl<T, N: Unsigned> VariableList<T, N> {
    /// Returns `Ok` if the given `vec` is no longer than the maximum length of `Self`. Otherwise
    /// returns `Err`.
    pub fn new(vec: Vec<T>) -> Result<Self, Error> {
        if vec.len() <= N::to_usize() {
            Ok(Self {
                vec,
                _phantom: PhantomData,
            })
        } else {
            Err(Error::CapacityExceeded {
                len: vec.len(),
                max: Self::max_len(),
            })
        }
    }

    /// Create an empty list.
    pub fn empty() -> Self {
        Self {
            vec: vec![],
            _phantom: PhantomData,
        }
    }

    /// Returns the number of values presently in `self`.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// True if `self` does not contain any values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the type-level maximum length.
    pub fn max_len() -> usize {
        N::to_usize()
    }

    /// Appends `value` to the back of `self`.
    ///
    /// Returns `Err` when appending `value` would exceed the maximum length.
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.vec.len() < Self::max_len() {
            self.vec.push(value);
            Ok(())
        } else {
            Err(Error::CapacityExceeded {
                len: self.vec.len() + 1,
                max: Self::max_len(),
            })
        }
    }
}

impl<T, N: Unsigned> TryFrom<Vec<T>> for VariableList<T, N> {
    type Error = Error;

    fn try_from(vec: Vec<T>) -> Result<Self, Error> {
        Self::new(vec)
    }
}

impl<T, N: Unsigned> From<VariableList<T, N>> for Vec<T> {
    fn from(list: VariableList<T, N>) -> Vec<T> {
        list.vec
    }
}

impl<T, N: Unsigned> Default for VariableList<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, N: Unsigned, I: SliceIndex<[T]>> Index<I> for VariableList<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&self.vec, index)
    }
}

impl<T, N: Unsigned, I: SliceIndex<[T]>> IndexMut<I> for VariableList<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut self.vec, index)
    }
}

impl<T, N: Unsigned> Deref for VariableList<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.vec[..]
    }
}

impl<T, N: Unsigned> DerefMut for VariableList<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.vec[..]
    }
}

impl<'a, T, N: Unsigned> IntoIterator for &'a VariableList<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, N: Unsigned> tree_hash::TreeHash for VariableList<T, N>
where
    T: tree_hash::TreeHash,
{
    fn tree_hash_type() -> tree_hash::TreeHashType {
        tree_hash::TreeHashType::List
    }

    fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
        unreachable!("List should never be packed.")
    }

    fn tree_hash_packing_factor() -> usize {
        unreachable!("List should never be packed.")
    }

    fn tree_hash_root(&self) -> Hash256 {
        let root = vec_tree_hash_root::<T, N>(&self.vec);

        tree_hash::mix_in_length(&root, self.len())
    }
}

impl<T, N: Unsigned> Encode for VariableList<T, N>
where
    T: Encode,
{
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_bytes_len(&self) -> usize {
        self.vec.ssz_bytes_len()
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        self.vec.ssz_append(buf)
    }
}

impl<T, N: Unsigned> Decode for VariableList<T, N>
where
    T: Decode,
{
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let max_len = Some(N::to_usize());

        let vec = if T::is_ssz_fixed_len() {
            ssz::decode_list_of_fixed_length_items(bytes, max_len)?
        } else {
            ssz::decode_list_of_variable_length_items(bytes, max_len)?
        };

        Ok(Self {
            vec,
            _phantom: PhantomData,
        })
    }
}

impl<T: SszSchema, N: Unsigned> SszSchema for VariableList<T, N> {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::list(T::ssz_schema(), N::to_usize())
    }
}

impl<T: Serialize, N: Unsigned> Serialize for VariableList<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.vec.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, N: Unsigned> Deserialize<'de> for VariableList<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let vec = Vec::<T>::deserialize(deserializer)?;
        Self::new(vec)
            .map_err(|e| serde::de::Error::custom(format!("invalid variable list: {:?}", e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ssz::ErrorKind;
    use tree_hash::{merkle_root, mix_in_length, TreeHash};
    use tree_hash_derive::TreeHash;
    use typenum::*;

    #[test]
    fn new() {
        let vec = vec![42; 5];
        let list: Result<VariableList<u64, U4>, _> = VariableList::new(vec);
        assert_eq!(list, Err(Error::CapacityExceeded { len: 5, max: 4 }));

        let vec = vec![42; 3];
        let list: Result<VariableList<u64, U4>, _> = VariableList::new(vec);
        assert!(list.is_ok());

        let vec = vec![42; 4];
        let list: Result<VariableList<u64, U4>, _> = VariableList::try_from(vec);
        assert!(list.is_ok());
    }

    #[test]
    fn indexing() {
        let vec = vec![1, 2];

        let mut list: VariableList<u64, U8192> = VariableList::new(vec.clone()).unwrap();

        assert_eq!(list[0], 1);
        assert_eq!(&list[0..1], &vec[0..1]);
        assert_eq!(list[..].len(), 2);

        list[1] = 3;
        assert_eq!(list[1], 3);
    }

    #[test]
    fn push() {
        let mut list: VariableList<u64, U2> = VariableList::empty();

        list.push(1).unwrap();
        list.push(2).unwrap();

        let err = list.push(3).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { len: 3, max: 2 });
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(&list[..], &[1, 2]);
    }

    #[test]
    fn deref() {
        let list: VariableList<u64, U4> = VariableList::new(vec![0, 2, 4, 6]).unwrap();

        assert_eq!(list.first(), Some(&0));
        assert_eq!(list.get(3), Some(&6));
        assert_eq!(list.get(4), None);
    }

    #[test]
    fn encode() {
        let list: VariableList<u16, U2> = VariableList::new(vec![0; 2]).unwrap();
        assert_eq!(list.as_ssz_bytes(), vec![0, 0, 0, 0]);
        assert_eq!(<VariableList<u16, U2> as Encode>::ssz_fixed_len(), 4);
    }

    fn round_trip<T: Encode + Decode + std::fmt::Debug + PartialEq>(item: T) {
        let encoded = &item.as_ssz_bytes();
        assert_eq!(item.ssz_bytes_len(), encoded.len());
        assert_eq!(T::from_ssz_bytes(encoded), Ok(item));
    }

    #[test]
    fn u16_len_8() {
        round_trip::<VariableList<u16, U8>>(VariableList::new(vec![42; 8]).unwrap());
        round_trip::<VariableList<u16, U8>>(VariableList::new(vec![0; 8]).unwrap());
        round_trip::<VariableList<u16, U8>>(VariableList::empty());
    }

    #[test]
    fn nested_lists() {
        let inner: VariableList<u8, U4> = VariableList::new(vec![1, 2]).unwrap();
        round_trip::<VariableList<VariableList<u8, U4>, U3>>(
            VariableList::new(vec![inner.clone(), VariableList::empty(), inner]).unwrap(),
        );
    }

    #[test]
    fn decode_too_long() {
        let bytes = vec![0; 17 * 8];
        let result = VariableList::<u64, U16>::from_ssz_bytes(&bytes);

        assert_eq!(
            result,
            Err(DecodeError::ListTooLong { len: 17, max: 16 })
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn decode_variable_elements_too_long() {
        let inner: VariableList<u8, U4> = VariableList::new(vec![1]).unwrap();
        let three: VariableList<VariableList<u8, U4>, U3> =
            VariableList::new(vec![inner.clone(), inner.clone(), inner]).unwrap();

        let result = VariableList::<VariableList<u8, U4>, U2>::from_ssz_bytes(&three.as_ssz_bytes());
        assert_eq!(result, Err(DecodeError::ListTooLong { len: 3, max: 2 }));
    }

    #[test]
    fn decode_partial_element() {
        let result = VariableList::<u64, U16>::from_ssz_bytes(&[0; 12]);

        assert_eq!(
            result,
            Err(DecodeError::InvalidListByteLength {
                len: 12,
                item_len: 8
            })
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::SizeViolation);
    }

    #[test]
    fn decode_huge_max_allocates_by_input() {
        // A list bounded at 2^40 items must not reserve space for them.
        let list = VariableList::<u64, U1099511627776>::from_ssz_bytes(&[1, 0, 0, 0, 0, 0, 0, 0])
            .unwrap();
        assert_eq!(&list[..], &[1]);
    }

    fn root_with_length(bytes: &[u8], len: usize) -> Hash256 {
        let root = merkle_root(bytes, 0);
        mix_in_length(&root, len)
    }

    #[test]
    fn tree_hash_u8() {
        let list: VariableList<u8, U0> = VariableList::empty();
        assert_eq!(list.tree_hash_root(), root_with_length(&[0; 8], 0));

        for i in 0..=1 {
            let list: VariableList<u8, U1> = VariableList::new(vec![0; i]).unwrap();
            assert_eq!(list.tree_hash_root(), root_with_length(&vec![0; i], i));
        }

        for i in 0..=8 {
            let list: VariableList<u8, U8> = VariableList::new(vec![0; i]).unwrap();
            assert_eq!(list.tree_hash_root(), root_with_length(&vec![0; i], i));
        }

        for i in 0..=13 {
            let list: VariableList<u8, U13> = VariableList::new(vec![0; i]).unwrap();
            assert_eq!(list.tree_hash_root(), root_with_length(&vec![0; i], i));
        }

        for i in 0..=16 {
            let list: VariableList<u8, U16> = VariableList::new(vec![0; i]).unwrap();
            assert_eq!(list.tree_hash_root(), root_with_length(&vec![0; i], i));
        }

        let source: Vec<u8> = (0..16).collect();
        let list: VariableList<u8, U16> = VariableList::new(source.clone()).unwrap();
        assert_eq!(list.tree_hash_root(), root_with_length(&source, 16));
    }

    #[derive(Clone, Copy, TreeHash, Default)]
    struct A {
        a: u32,
        b: u32,
    }

    fn repeat(input: &[u8], n: usize) -> Vec<u8> {
        let mut output = vec![];

        for _ in 0..n {
            output.append(&mut input.to_vec());
        }

        output
    }

    fn padded_root_with_length(bytes: &[u8], len: usize, min_nodes: usize) -> Hash256 {
        let root = merkle_root(bytes, min_nodes);
        mix_in_length(&root, len)
    }

    #[test]
    fn tree_hash_composite() {
        let a = A { a: 0, b: 1 };

        let list: VariableList<A, U0> = VariableList::empty();
        assert_eq!(
            list.tree_hash_root(),
            padded_root_with_length(&[0; 32], 0, 0),
        );

        let list: VariableList<A, U1> = VariableList::new(vec![a]).unwrap();
        assert_eq!(
            list.tree_hash_root(),
            padded_root_with_length(a.tree_hash_root().as_bytes(), 1, 1),
        );

        let list: VariableList<A, U8> = VariableList::new(vec![a; 8]).unwrap();
        assert_eq!(
            list.tree_hash_root(),
            padded_root_with_length(&repeat(a.tree_hash_root().as_bytes(), 8), 8, 8)
        );

        let list: VariableList<A, U13> = VariableList::new(vec![a; 13]).unwrap();
        assert_eq!(
            list.tree_hash_root(),
            padded_root_with_length(&repeat(a.tree_hash_root().as_bytes(), 13), 13, 13)
        );

        let list: VariableList<A, U16> = VariableList::new(vec![a; 16]).unwrap();
        assert_eq!(
            list.tree_hash_root(),
            padded_root_with_length(&repeat(a.tree_hash_root().as_bytes(), 16), 16, 16)
        );
    }

    #[test]
    fn tree_hash_sparse_list() {
        // Three values in a list with a capacity of 2^40 values.
        let list: VariableList<u64, U1099511627776> = VariableList::new(vec![1, 2, 3]).unwrap();

        let mut bytes = vec![];
        for i in 1..=3u64 {
            bytes.extend_from_slice(&i.to_le_bytes());
        }
        let root = tree_hash::merkleize_padded(&bytes, (1 << 40) / 4);

        assert_eq!(list.tree_hash_root(), mix_in_length(&root, 3));
    }

    #[test]
    fn length_changes_root() {
        let list_a: VariableList<u64, U16> = VariableList::new(vec![0]).unwrap();
        let list_b: VariableList<u64, U16> = VariableList::new(vec![0, 0]).unwrap();

        // The packed chunks are identical; only the mixed-in length differs.
        assert_ne!(list_a.tree_hash_root(), list_b.tree_hash_root());
    }

    #[test]
    fn schema() {
        let schema = <VariableList<u64, U2048> as SszSchema>::ssz_schema();
        assert_eq!(schema.type_name(), "List[uint64, 2048]");
        assert_eq!(schema.chunk_count(), Some(512));
        assert!(schema.is_variable_size());
    }

    #[test]
    fn serde_checks_capacity() {
        let list: VariableList<u64, U2> = serde_json::from_str("[1]").unwrap();
        assert_eq!(&list[..], &[1]);

        serde_json::from_str::<VariableList<u64, U2>>("[1, 2, 3]").unwrap_err();
    }
}
