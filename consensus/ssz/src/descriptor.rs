//! Runtime descriptions of SSZ types.
//!
//! The `Encode`, `Decode` and `TreeHash` traits describe a type statically. A `TypeDescriptor`
//! carries the same information as a value, so that a record shape can be looked up, inspected
//! and printed at runtime (e.g., by fork and role).

use crate::{BYTES_PER_LENGTH_OFFSET, MAX_LENGTH_VALUE};
use ethereum_types::{H160, H256, U256};
use std::fmt;
use std::sync::Arc;

/// Number of bytes in a Merkle chunk.
const BYTES_PER_CHUNK: usize = 32;
/// Number of bits in a Merkle chunk.
const BITS_PER_CHUNK: usize = BYTES_PER_CHUNK * 8;

/// Implemented by every type that can describe its own SSZ shape.
///
/// Usually obtained with `#[derive(SszSchema)]`.
pub trait SszSchema {
    fn ssz_schema() -> TypeDescriptor;
}

/// The shape of some SSZ type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// An unsigned integer of `bits` bits.
    Uint { bits: usize },
    Boolean,
    /// An opaque byte string of exactly `len` bytes.
    FixedBytes { len: usize },
    /// Up to `max_len` items of `elem`.
    List {
        elem: Box<TypeDescriptor>,
        max_len: usize,
    },
    /// Exactly `len` items of `elem`.
    Vector {
        elem: Box<TypeDescriptor>,
        len: usize,
    },
    Bitlist { max_len: usize },
    Bitvector { len: usize },
    /// An ordered sequence of named fields.
    Container {
        name: &'static str,
        fields: Vec<Field>,
    },
    /// One of several named shapes, selected by context rather than by the encoding.
    Union {
        name: &'static str,
        variants: Vec<Variant>,
    },
}

/// A named field of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: TypeDescriptor,
}

impl Field {
    pub fn new(name: &'static str, ty: TypeDescriptor) -> Self {
        Self { name, ty }
    }
}

/// A named alternative of a union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub ty: TypeDescriptor,
}

impl Variant {
    pub fn new(name: &'static str, ty: TypeDescriptor) -> Self {
        Self { name, ty }
    }
}

/// A `Kind` together with its encoded width, which is computed once at construction.
///
/// `fixed_len` is `None` for variable-size types: lists, bitlists, containers with any
/// variable-size field and unions whose variants are not all the same fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    kind: Kind,
    fixed_len: Option<usize>,
}

impl TypeDescriptor {
    pub fn uint(bits: usize) -> Self {
        Self {
            kind: Kind::Uint { bits },
            fixed_len: Some(bits / 8),
        }
    }

    pub fn boolean() -> Self {
        Self {
            kind: Kind::Boolean,
            fixed_len: Some(1),
        }
    }

    pub fn fixed_bytes(len: usize) -> Self {
        Self {
            kind: Kind::FixedBytes { len },
            fixed_len: Some(len),
        }
    }

    pub fn list(elem: TypeDescriptor, max_len: usize) -> Self {
        Self {
            kind: Kind::List {
                elem: Box::new(elem),
                max_len,
            },
            fixed_len: None,
        }
    }

    /// A vector of `len` items. A vector of bytes is described as `FixedBytes`.
    pub fn vector(elem: TypeDescriptor, len: usize) -> Self {
        if elem.kind == (Kind::Uint { bits: 8 }) {
            return Self::fixed_bytes(len);
        }

        let fixed_len = elem.fixed_len.map(|elem_len| elem_len * len);

        Self {
            kind: Kind::Vector {
                elem: Box::new(elem),
                len,
            },
            fixed_len,
        }
    }

    pub fn bitlist(max_len: usize) -> Self {
        Self {
            kind: Kind::Bitlist { max_len },
            fixed_len: None,
        }
    }

    pub fn bitvector(len: usize) -> Self {
        Self {
            kind: Kind::Bitvector { len },
            fixed_len: Some(std::cmp::max(1, (len + 7) / 8)),
        }
    }

    pub fn container(name: &'static str, fields: Vec<Field>) -> Self {
        let fixed_len = fields
            .iter()
            .try_fold(0, |acc, field| Some(acc + field.ty.fixed_len?));

        Self {
            kind: Kind::Container { name, fields },
            fixed_len,
        }
    }

    pub fn union(name: &'static str, variants: Vec<Variant>) -> Self {
        let first = variants.first().and_then(|variant| variant.ty.fixed_len);
        let fixed_len = if variants.iter().all(|variant| variant.ty.fixed_len == first) {
            first
        } else {
            None
        };

        Self {
            kind: Kind::Union { name, variants },
            fixed_len,
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn is_variable_size(&self) -> bool {
        self.fixed_len.is_none()
    }

    /// The encoded length of a fixed-size type, or `None` for a variable-size type.
    pub fn fixed_len(&self) -> Option<usize> {
        self.fixed_len
    }

    /// The number of bytes this type occupies in the fixed part of an enclosing container.
    pub fn ssz_fixed_len(&self) -> usize {
        self.fixed_len.unwrap_or(BYTES_PER_LENGTH_OFFSET)
    }

    /// The shortest valid encoding of this type.
    ///
    /// For a container, this is its fixed part plus the shortest encoding of every
    /// variable-size field. Any shorter buffer is truncated.
    pub fn min_len(&self) -> usize {
        if let Some(len) = self.fixed_len {
            return len;
        }

        match &self.kind {
            // An empty bitlist is a lone sentinel byte.
            Kind::Bitlist { .. } => 1,
            Kind::Vector { elem, len } => len * (BYTES_PER_LENGTH_OFFSET + elem.min_len()),
            Kind::Container { fields, .. } => fields
                .iter()
                .map(|field| {
                    if field.ty.is_variable_size() {
                        BYTES_PER_LENGTH_OFFSET + field.ty.min_len()
                    } else {
                        field.ty.ssz_fixed_len()
                    }
                })
                .sum(),
            Kind::Union { variants, .. } => variants
                .iter()
                .map(|variant| variant.ty.min_len())
                .min()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// The declared maximum (or exact) number of elements of a collection.
    pub fn max_elements(&self) -> Option<usize> {
        match &self.kind {
            Kind::List { max_len, .. } | Kind::Bitlist { max_len } => Some(*max_len),
            Kind::Vector { len, .. } | Kind::Bitvector { len } => Some(*len),
            Kind::FixedBytes { len } => Some(*len),
            _ => None,
        }
    }

    /// The number of 32-byte leaves the Merkle tree of this type is padded to.
    ///
    /// Basic elements are packed into chunks, composite elements take one chunk each. For lists
    /// the count is derived from the declared maximum. Unions have no tree of their own.
    pub fn chunk_count(&self) -> Option<usize> {
        let packed = |elem: &TypeDescriptor, count: usize| match elem.kind {
            Kind::Uint { .. } | Kind::Boolean => {
                let size = elem.fixed_len.unwrap_or(BYTES_PER_CHUNK);
                (count * size + BYTES_PER_CHUNK - 1) / BYTES_PER_CHUNK
            }
            _ => count,
        };

        match &self.kind {
            Kind::Uint { .. } | Kind::Boolean => Some(1),
            Kind::FixedBytes { len } => Some((len + BYTES_PER_CHUNK - 1) / BYTES_PER_CHUNK),
            Kind::List { elem, max_len } => Some(packed(elem, *max_len)),
            Kind::Vector { elem, len } => Some(packed(elem, *len)),
            Kind::Bitlist { max_len } => Some((max_len + BITS_PER_CHUNK - 1) / BITS_PER_CHUNK),
            Kind::Bitvector { len } => Some((len + BITS_PER_CHUNK - 1) / BITS_PER_CHUNK),
            Kind::Container { fields, .. } => Some(fields.len()),
            Kind::Union { .. } => None,
        }
    }

    /// The fields of a container, or an empty slice for any other kind.
    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            Kind::Container { fields, .. } => fields,
            _ => &[],
        }
    }

    /// Returns the field called `name`, if this is a container that has one.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// The variants of a union, or an empty slice for any other kind.
    pub fn variants(&self) -> &[Variant] {
        match &self.kind {
            Kind::Union { variants, .. } => variants,
            _ => &[],
        }
    }

    /// A short, human-readable name, e.g. `List[uint64, 2048]`.
    pub fn type_name(&self) -> String {
        match &self.kind {
            Kind::Uint { bits } => format!("uint{}", bits),
            Kind::Boolean => "boolean".to_string(),
            Kind::FixedBytes { len } => format!("Bytes{}", len),
            Kind::List { elem, max_len } => format!("List[{}, {}]", elem.type_name(), max_len),
            Kind::Vector { elem, len } => format!("Vector[{}, {}]", elem.type_name(), len),
            Kind::Bitlist { max_len } => format!("Bitlist[{}]", max_len),
            Kind::Bitvector { len } => format!("Bitvector[{}]", len),
            Kind::Container { name, .. } | Kind::Union { name, .. } => name.to_string(),
        }
    }

    /// The container or union nested directly in this type, looking through collections.
    fn composite(&self) -> Option<&TypeDescriptor> {
        match &self.kind {
            Kind::Container { .. } | Kind::Union { .. } => Some(self),
            Kind::List { elem, .. } | Kind::Vector { elem, .. } => elem.composite(),
            _ => None,
        }
    }

    fn fmt_members(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let members = self
            .fields()
            .iter()
            .map(|field| (field.name, &field.ty))
            .chain(
                self.variants()
                    .iter()
                    .map(|variant| (variant.name, &variant.ty)),
            );

        for (name, ty) in members {
            writeln!(
                f,
                "{:indent$}{}: {}",
                "",
                name,
                ty.type_name(),
                indent = depth * 2
            )?;

            if let Some(composite) = ty.composite() {
                composite.fmt_members(f, depth + 1)?;
            }
        }

        Ok(())
    }
}

/// Prints the type name, its size and, for containers and unions, the full tree of members.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_len {
            Some(len) => writeln!(f, "{} (fixed, {} bytes)", self.type_name(), len)?,
            None => writeln!(
                f,
                "{} (variable, at least {} bytes)",
                self.type_name(),
                self.min_len()
            )?,
        }

        self.fmt_members(f, 1)
    }
}

macro_rules! impl_ssz_schema_for_uint {
    ($type: ident, $bit_size: expr) => {
        impl SszSchema for $type {
            fn ssz_schema() -> TypeDescriptor {
                TypeDescriptor::uint($bit_size)
            }
        }
    };
}

impl_ssz_schema_for_uint!(u8, 8);
impl_ssz_schema_for_uint!(u16, 16);
impl_ssz_schema_for_uint!(u32, 32);
impl_ssz_schema_for_uint!(u64, 64);
impl_ssz_schema_for_uint!(U256, 256);

impl SszSchema for bool {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::boolean()
    }
}

impl SszSchema for H160 {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::fixed_bytes(20)
    }
}

impl SszSchema for H256 {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::fixed_bytes(32)
    }
}

impl<const N: usize> SszSchema for [u8; N] {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::fixed_bytes(N)
    }
}

impl<T: SszSchema> SszSchema for Arc<T> {
    fn ssz_schema() -> TypeDescriptor {
        T::ssz_schema()
    }
}

/// A `Vec` has no declared maximum, so it is described with the largest length an offset can
/// address.
impl<T: SszSchema> SszSchema for Vec<T> {
    fn ssz_schema() -> TypeDescriptor {
        TypeDescriptor::list(T::ssz_schema(), MAX_LENGTH_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint() -> TypeDescriptor {
        TypeDescriptor::container(
            "Checkpoint",
            vec![
                Field::new("epoch", u64::ssz_schema()),
                Field::new("root", H256::ssz_schema()),
            ],
        )
    }

    #[test]
    fn fixed_container() {
        let schema = checkpoint();

        assert!(!schema.is_variable_size());
        assert_eq!(schema.fixed_len(), Some(40));
        assert_eq!(schema.min_len(), 40);
        assert_eq!(schema.chunk_count(), Some(2));
        assert_eq!(schema.field("root").map(|f| f.ty.clone()), Some(H256::ssz_schema()));
        assert!(schema.field("slot").is_none());
    }

    #[test]
    fn variable_container() {
        let schema = TypeDescriptor::container(
            "Attestation",
            vec![
                Field::new("aggregation_bits", TypeDescriptor::bitlist(2048)),
                Field::new("data", checkpoint()),
                Field::new("signature", <[u8; 96]>::ssz_schema()),
            ],
        );

        assert!(schema.is_variable_size());
        assert_eq!(schema.fixed_len(), None);
        assert_eq!(schema.ssz_fixed_len(), BYTES_PER_LENGTH_OFFSET);
        // Offset, checkpoint, signature and the sentinel byte of an empty bitlist.
        assert_eq!(schema.min_len(), 4 + 40 + 96 + 1);
    }

    #[test]
    fn byte_vectors_are_fixed_bytes() {
        assert_eq!(
            TypeDescriptor::vector(u8::ssz_schema(), 256),
            TypeDescriptor::fixed_bytes(256)
        );
        assert_eq!(
            TypeDescriptor::vector(u64::ssz_schema(), 8192).fixed_len(),
            Some(8 * 8192)
        );
    }

    #[test]
    fn chunk_counts_use_declared_capacity() {
        assert_eq!(
            TypeDescriptor::list(u64::ssz_schema(), 1 << 40).chunk_count(),
            Some(1 << 38)
        );
        assert_eq!(
            TypeDescriptor::list(checkpoint(), 16).chunk_count(),
            Some(16)
        );
        assert_eq!(TypeDescriptor::bitlist(2048).chunk_count(), Some(8));
        assert_eq!(TypeDescriptor::bitvector(4).chunk_count(), Some(1));
    }

    #[test]
    fn unions_of_equal_width_are_fixed() {
        let fixed = TypeDescriptor::union(
            "Either",
            vec![
                Variant::new("A", u64::ssz_schema()),
                Variant::new("B", <[u8; 8]>::ssz_schema()),
            ],
        );
        assert_eq!(fixed.fixed_len(), Some(8));

        let mixed = TypeDescriptor::union(
            "Either",
            vec![
                Variant::new("A", u64::ssz_schema()),
                Variant::new("B", TypeDescriptor::list(u8::ssz_schema(), 4)),
            ],
        );
        assert!(mixed.is_variable_size());
        assert_eq!(mixed.min_len(), 0);
    }

    #[test]
    fn display_lists_nested_fields() {
        let schema = TypeDescriptor::container(
            "Wrapper",
            vec![Field::new(
                "checkpoints",
                TypeDescriptor::list(checkpoint(), 4),
            )],
        );

        assert_eq!(
            schema.to_string(),
            "Wrapper (variable, at least 4 bytes)\n  \
             checkpoints: List[Checkpoint, 4]\n    \
             epoch: uint64\n    \
             root: Bytes32\n"
        );
    }
}
