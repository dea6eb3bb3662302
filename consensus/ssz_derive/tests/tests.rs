use ethereum_types::H256;
use ssz::{Decode, DecodeError, Encode, ErrorKind, Kind, SszSchema};
use ssz_derive::{Decode, Encode, SszSchema};

fn assert_encode<T: Encode>(item: &T, bytes: &[u8]) {
    assert_eq!(item.as_ssz_bytes(), bytes);
    assert_eq!(item.ssz_bytes_len(), bytes.len());
}

fn assert_encode_decode<T: Encode + Decode + PartialEq + std::fmt::Debug>(item: &T, bytes: &[u8]) {
    assert_encode(item, bytes);
    assert_eq!(T::from_ssz_bytes(bytes).unwrap(), *item);
}

#[derive(PartialEq, Debug, Encode, Decode, SszSchema)]
struct Checkpoint {
    epoch: u64,
    root: H256,
}

#[derive(PartialEq, Debug, Encode, Decode, SszSchema)]
struct VariableA {
    a: u16,
    b: Vec<u8>,
    c: u8,
}

#[derive(PartialEq, Debug, Encode, Decode, SszSchema)]
struct TwoLists {
    a: Vec<u8>,
    b: Vec<u16>,
}

#[derive(PartialEq, Debug, Encode, Decode, SszSchema)]
struct Nested {
    checkpoint: Checkpoint,
    inner: VariableA,
}

#[derive(PartialEq, Debug, Encode, SszSchema)]
#[ssz(enum_behaviour = "transparent")]
enum Either {
    Fixed(Checkpoint),
    Variable(VariableA),
}

#[derive(PartialEq, Debug, Encode, SszSchema)]
#[ssz(enum_behaviour = "transparent")]
enum SameWidth {
    A(u64),
    B([u8; 8]),
}

#[test]
fn checkpoint_vector() {
    let checkpoint = Checkpoint {
        epoch: 5,
        root: H256::zero(),
    };

    let mut expected = vec![5, 0, 0, 0, 0, 0, 0, 0];
    expected.extend_from_slice(&[0; 32]);

    assert_eq!(expected.len(), 40);
    assert_encode_decode(&checkpoint, &expected);
    assert!(<Checkpoint as Encode>::is_ssz_fixed_len());
    assert_eq!(<Checkpoint as Encode>::ssz_fixed_len(), 40);
}

#[test]
fn fixed_container_length_is_exact() {
    let err = Checkpoint::from_ssz_bytes(&[0; 39]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidByteLength {
            len: 39,
            expected: 40
        }
    );
    assert_eq!(err.kind(), ErrorKind::TruncatedBuffer);

    let err = Checkpoint::from_ssz_bytes(&[0; 41]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SizeViolation);
}

#[test]
fn variable_field_is_an_offset() {
    let item = VariableA {
        a: 1,
        b: vec![2, 3],
        c: 4,
    };

    //          | a      | offset of b = 7  | c | b     |
    let bytes = [1, 0, 7, 0, 0, 0, 4, 2, 3];

    assert_encode_decode(&item, &bytes);
    assert!(!<VariableA as Encode>::is_ssz_fixed_len());
}

#[test]
fn empty_lists_encode_as_nothing() {
    let item = TwoLists {
        a: vec![],
        b: vec![],
    };

    assert_encode_decode(&item, &[8, 0, 0, 0, 8, 0, 0, 0]);
}

#[test]
fn offsets_must_not_decrease() {
    let item = TwoLists {
        a: vec![1, 2],
        b: vec![3],
    };
    let mut bytes = item.as_ssz_bytes();
    assert_eq!(bytes, vec![8, 0, 0, 0, 10, 0, 0, 0, 1, 2, 3, 0]);

    // Point the second offset before the first.
    bytes[4] = 7;

    let err = TwoLists::from_ssz_bytes(&bytes).unwrap_err();
    assert_eq!(err, DecodeError::OffsetsAreDecreasing(7));
    assert_eq!(err.kind(), ErrorKind::MalformedOffsets);
}

#[test]
fn first_offset_must_follow_fixed_part() {
    let bytes = [9, 0, 0, 0, 9, 0, 0, 0, 0];

    let err = TwoLists::from_ssz_bytes(&bytes).unwrap_err();
    assert_eq!(err, DecodeError::OffsetSkipsVariableBytes(9));
    assert_eq!(err.kind(), ErrorKind::MalformedOffsets);
}

#[test]
fn offset_out_of_bounds() {
    let bytes = [8, 0, 0, 0, 20, 0, 0, 0];

    let err = TwoLists::from_ssz_bytes(&bytes).unwrap_err();
    assert_eq!(err, DecodeError::OffsetOutOfBounds(20));
}

#[test]
fn truncated_fixed_part() {
    let err = TwoLists::from_ssz_bytes(&[8, 0, 0, 0, 8]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedBuffer);
}

#[test]
fn nested_containers() {
    let item = Nested {
        checkpoint: Checkpoint {
            epoch: 1,
            root: H256::repeat_byte(0xaa),
        },
        inner: VariableA {
            a: 2,
            b: vec![9],
            c: 3,
        },
    };

    let bytes = item.as_ssz_bytes();

    // Checkpoint (40), then the offset of `inner` which starts right after the fixed part.
    assert_eq!(&bytes[40..44], &[44, 0, 0, 0]);
    assert_eq!(bytes.len(), 44 + 7 + 1);
    assert_eq!(Nested::from_ssz_bytes(&bytes).unwrap(), item);
}

#[test]
fn transparent_enum_encodes_inner_value() {
    let checkpoint = Checkpoint {
        epoch: 5,
        root: H256::zero(),
    };
    let inner = VariableA {
        a: 1,
        b: vec![],
        c: 2,
    };

    assert_eq!(
        Either::Fixed(Checkpoint {
            epoch: 5,
            root: H256::zero()
        })
        .as_ssz_bytes(),
        checkpoint.as_ssz_bytes()
    );
    assert_eq!(
        Either::Variable(VariableA {
            a: 1,
            b: vec![],
            c: 2
        })
        .as_ssz_bytes(),
        inner.as_ssz_bytes()
    );

    assert!(!<Either as Encode>::is_ssz_fixed_len());
    assert!(<SameWidth as Encode>::is_ssz_fixed_len());
    assert_eq!(<SameWidth as Encode>::ssz_fixed_len(), 8);
}

#[test]
fn schema_matches_codec() {
    let schema = Checkpoint::ssz_schema();

    assert_eq!(
        schema
            .fields()
            .iter()
            .map(|field| field.name)
            .collect::<Vec<_>>(),
        vec!["epoch", "root"]
    );
    assert_eq!(schema.fixed_len(), Some(<Checkpoint as Encode>::ssz_fixed_len()));

    let schema = Nested::ssz_schema();
    assert!(schema.is_variable_size());
    assert_eq!(schema.min_len(), 40 + 4 + 7);
}

#[test]
fn schema_of_enum_is_a_union() {
    let schema = Either::ssz_schema();

    match schema.kind() {
        Kind::Union { name, variants } => {
            assert_eq!(*name, "Either");
            assert_eq!(variants[0].name, "Fixed");
            assert_eq!(variants[1].ty, VariableA::ssz_schema());
        }
        other => panic!("expected a union, got {:?}", other),
    }

    assert_eq!(SameWidth::ssz_schema().fixed_len(), Some(8));
}
