//! Provides types with unique properties required for SSZ serialization and Merklization:
//!
//! - `FixedVector`: A heap-allocated list with a size that is fixed at compile time.
//! - `VariableList`: A heap-allocated list that cannot grow past a type-level maximum length.
//! - `BitList`: A heap-allocated bitfield with a type-level _maximum_ length.
//! - `BitVector`: A heap-allocated bitfield with a type-level _fixed_ length.
//!
//! These structs are required as SSZ serialization and Merklization rely upon type-level lengths
//! for padding and verification. The bitfields themselves live in the `ssz` crate and are
//! re-exported here.
//!
//! ## Example
//! ```
//! use ssz_types::*;
//!
//! pub struct Example {
//!     bit_vector: BitVector<typenum::U8>,
//!     bit_list: BitList<typenum::U8>,
//!     variable_list: VariableList<u64, typenum::U8>,
//!     fixed_vector: FixedVector<u64, typenum::U8>,
//! }
//!
//! let mut example = Example {
//!     bit_vector: Bitfield::new(),
//!     bit_list: Bitfield::with_capacity(4).unwrap(),
//!     variable_list: <_>::try_from(vec![0, 1]).unwrap(),
//!     fixed_vector: FixedVector::from_elem(0),
//! };
//!
//! assert_eq!(example.bit_vector.len(), 8);
//! assert_eq!(example.bit_list.len(), 4);
//! assert_eq!(&example.variable_list[..], &[0, 1]);
//! assert_eq!(&example.fixed_vector[..], &[0; 8]);
//! ```

mod fixed_vector;
pub mod serde_utils;
mod tree_hash;
mod variable_list;

pub use fixed_vector::FixedVector;
pub use ssz::{BitList, BitVector, Bitfield, BitfieldError};
pub use typenum;
pub use variable_list::VariableList;

/// Returned when a vector or list cannot be built from the given values.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {
    /// A list would hold more than its type-level maximum.
    CapacityExceeded { len: usize, max: usize },
    /// A vector was given a number of values other than its type-level length.
    SizeViolation { len: usize, expected: usize },
}

impl Error {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ssz::ErrorKind {
        match self {
            Error::SizeViolation { .. } => ssz::ErrorKind::SizeViolation,
            Error::CapacityExceeded { .. } => ssz::ErrorKind::CapacityExceeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::U4;

    #[test]
    fn construction_errors_have_kinds() {
        let err = FixedVector::<u8, U4>::new(vec![0; 3]).unwrap_err();
        assert_eq!(err, Error::SizeViolation { len: 3, expected: 4 });
        assert_eq!(err.kind(), ssz::ErrorKind::SizeViolation);

        let err = VariableList::<u8, U4>::new(vec![0; 5]).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { len: 5, max: 4 });
        assert_eq!(err.kind(), ssz::ErrorKind::CapacityExceeded);
    }
}
