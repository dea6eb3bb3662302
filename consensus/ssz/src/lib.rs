//! Provides encoding (serialization) and decoding (deserialization) in the SimpleSerialize (SSZ)
//! format designed for use in Ethereum 2.0.
//!
//! Adheres to the Ethereum 2.0 [SSZ
//! specification](https://github.com/ethereum/consensus-specs/blob/v1.4.0/ssz/simple-serialize.md).
//!
//! ## Example
//!
//! ```rust
//! use ssz_derive::{Encode, Decode};
//! use ssz::{Decode, Encode};
//!
//! #[derive(PartialEq, Debug, Encode, Decode)]
//! struct Foo {
//!     a: u64,
//!     b: u16,
//! }
//!
//! fn ssz_encode_decode_example() {
//!     let foo = Foo { a: 42, b: 7 };
//!
//!     let ssz_bytes: Vec<u8> = foo.as_ssz_bytes();
//!
//!     let decoded_foo = Foo::from_ssz_bytes(&ssz_bytes).unwrap();
//!
//!     assert_eq!(foo, decoded_foo);
//! }
//! ```
//!
//! Every type in this crate also implements [`SszSchema`], which returns a runtime
//! [`TypeDescriptor`] describing the shape the codec will read and write.

mod bitfield;
mod decode;
mod descriptor;
mod encode;

pub use bitfield::{BitList, BitVector, Bitfield, BitfieldError, Fixed, TrailingBits, Variable};
pub use decode::{
    decode_list_of_fixed_length_items, decode_list_of_variable_length_items, read_offset,
    sanitize_offset, Decode, DecodeError, SszDecoder, SszDecoderBuilder,
};
pub use descriptor::{Field, Kind, SszSchema, TypeDescriptor, Variant};
pub use encode::{encode_length, sequence_ssz_append, sequence_ssz_bytes_len, Encode, SszEncoder};

/// The number of bytes used to represent an offset.
pub const BYTES_PER_LENGTH_OFFSET: usize = 4;
/// The maximum value that can be represented using `BYTES_PER_LENGTH_OFFSET`.
#[cfg(target_pointer_width = "32")]
pub const MAX_LENGTH_VALUE: usize = (std::u32::MAX >> (8 * (4 - BYTES_PER_LENGTH_OFFSET))) as usize;
#[cfg(target_pointer_width = "64")]
pub const MAX_LENGTH_VALUE: usize = (std::u64::MAX >> (8 * (8 - BYTES_PER_LENGTH_OFFSET))) as usize;

/// The coarse category of a failure, shared by every error type in the codec stack.
///
/// Callers that only need to know *why* some bytes or values were rejected should match on this
/// rather than on the detailed error enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A fixed-size item had the wrong length, or a list payload was not a multiple of its
    /// element width.
    SizeViolation,
    /// A list or bitlist holds more elements than its declared maximum.
    CapacityExceeded,
    /// The offsets of a variable-size encoding are out of order or out of bounds.
    MalformedOffsets,
    /// The buffer ended before the fixed part of the encoding.
    TruncatedBuffer,
    /// A bitlist was missing its sentinel bit or had bytes after it.
    MalformedBitlist,
    /// No record shape exists for the requested fork and role.
    SchemaMismatch,
}

/// Convenience function to SSZ encode an object supporting ssz::Encode.
///
/// Equivalent to `val.as_ssz_bytes()`.
pub fn ssz_encode<T>(val: &T) -> Vec<u8>
where
    T: Encode,
{
    val.as_ssz_bytes()
}
