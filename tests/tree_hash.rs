use ssz_codec::hash::hash_pair;
use ssz_codec::{
    hash_tree_root, ByteList, ByteVector, Sedes, SerializationError, Serializable, Value, BOOLEAN,
    BYTE, BYTES32, UINT64, UINT8,
};

fn chunk_of(bytes: &[u8]) -> [u8; 32] {
    let mut chunk = [0u8; 32];
    chunk[..bytes.len()].copy_from_slice(bytes);
    chunk
}

fn length_chunk(length: u64) -> [u8; 32] {
    chunk_of(&length.to_le_bytes())
}

#[test]
fn basic_scalar_roots_are_padded_chunks() {
    assert_eq!(
        hash_tree_root(&Value::from(5u64), &UINT64).unwrap(),
        chunk_of(&5u64.to_le_bytes())
    );
    assert_eq!(
        hash_tree_root(&Value::from(true), &BOOLEAN).unwrap(),
        chunk_of(&[1])
    );
    assert_eq!(
        hash_tree_root(&Value::Bytes(vec![0xaa]), &BYTE).unwrap(),
        chunk_of(&[0xaa])
    );
}

#[test]
fn single_chunk_byte_vector_root_is_the_value() {
    let value = Value::from([0x11u8; 32]);
    assert_eq!(hash_tree_root(&value, &BYTES32).unwrap(), [0x11u8; 32]);
}

#[test]
fn two_chunk_byte_vector_root_pairs_the_chunks() {
    let sedes = Sedes::ByteVector(ByteVector::new(64));
    let mut bytes = vec![0x11u8; 32];
    bytes.extend_from_slice(&[0x22u8; 32]);
    let root = hash_tree_root(&Value::Bytes(bytes), &sedes).unwrap();
    assert_eq!(root, hash_pair(&[0x11u8; 32], &[0x22u8; 32]));
}

#[test]
fn roots_are_deterministic() {
    let sedes = Sedes::list(UINT64, 16);
    let value = Value::sequence([Value::from(1u64), Value::from(2u64)]);
    assert_eq!(
        hash_tree_root(&value, &sedes).unwrap(),
        hash_tree_root(&value, &sedes).unwrap()
    );
}

#[test]
fn changing_one_element_changes_the_root() {
    let sedes = Sedes::list(UINT64, 16);
    let left = Value::sequence([Value::from(1u64), Value::from(2u64), Value::from(3u64)]);
    let right = Value::sequence([Value::from(1u64), Value::from(2u64), Value::from(4u64)]);
    assert_ne!(
        hash_tree_root(&left, &sedes).unwrap(),
        hash_tree_root(&right, &sedes).unwrap()
    );
}

#[test]
fn length_mixing_distinguishes_zero_padded_suffixes() {
    // The longer list only appends a zero element, so the packed chunks are
    // identical; only the mixed-in length separates the roots.
    let sedes = Sedes::list(UINT8, 32);
    let short = Value::sequence([Value::from(1u8), Value::from(2u8)]);
    let long = Value::sequence([Value::from(1u8), Value::from(2u8), Value::from(0u8)]);
    assert_ne!(
        hash_tree_root(&short, &sedes).unwrap(),
        hash_tree_root(&long, &sedes).unwrap()
    );

    let bytes = Sedes::ByteList(ByteList::new(64));
    assert_ne!(
        hash_tree_root(&Value::Bytes(vec![]), &bytes).unwrap(),
        hash_tree_root(&Value::Bytes(vec![0]), &bytes).unwrap()
    );
}

#[test]
fn composite_list_root_matches_manual_merkleization() {
    let sedes = Sedes::list(BYTES32, 4);
    let element = [0x33u8; 32];
    let value = Value::sequence([Value::from(element)]);

    // Depth two for a limit of four chunks, then the length mix.
    let zero = [0u8; 32];
    let level_one = hash_pair(&element, &zero);
    let zero_pair = hash_pair(&zero, &zero);
    let inner = hash_pair(&level_one, &zero_pair);
    let expected = hash_pair(&inner, &length_chunk(1));

    assert_eq!(hash_tree_root(&value, &sedes).unwrap(), expected);
}

#[test]
fn byte_list_root_matches_list_of_bytes() {
    let bytes = vec![1u8, 2, 3];
    let byte_list = Sedes::ByteList(ByteList::new(10));
    let as_list = Sedes::list(BYTE, 10);
    let elements = Value::sequence(bytes.iter().map(|byte| Value::Bytes(vec![*byte])));
    assert_eq!(
        hash_tree_root(&Value::Bytes(bytes), &byte_list).unwrap(),
        hash_tree_root(&elements, &as_list).unwrap()
    );
}

#[test]
fn container_root_follows_declared_field_order() {
    let forward = Serializable::new(vec![("a", UINT8), ("b", BOOLEAN)]);
    let reversed = Serializable::new(vec![("b", BOOLEAN), ("a", UINT8)]);
    let record_forward = forward
        .create(vec![("a", Value::from(2u8)), ("b", Value::from(true))])
        .unwrap();
    let record_reversed = reversed
        .create(vec![("a", Value::from(2u8)), ("b", Value::from(true))])
        .unwrap();
    assert_ne!(
        forward.hash_tree_root(&record_forward).unwrap(),
        reversed.hash_tree_root(&record_reversed).unwrap()
    );
}

#[test]
fn single_field_container_root_is_the_field_root() {
    let schema = Serializable::new(vec![("slot", UINT64)]);
    let record = schema.create(vec![("slot", Value::from(9u64))]).unwrap();
    assert_eq!(
        schema.hash_tree_root(&record).unwrap(),
        hash_tree_root(&Value::from(9u64), &UINT64).unwrap()
    );
}

#[test]
fn two_field_container_root_pairs_the_field_roots() {
    let schema = Serializable::new(vec![("slot", UINT64), ("root", BYTES32)]);
    let record = schema
        .create(vec![
            ("slot", Value::from(7u64)),
            ("root", Value::from([0x44u8; 32])),
        ])
        .unwrap();
    let expected = hash_pair(&chunk_of(&7u64.to_le_bytes()), &[0x44u8; 32]);
    assert_eq!(schema.hash_tree_root(&record).unwrap(), expected);
}

#[test]
fn composite_vector_root_pairs_element_roots() {
    let sedes = Sedes::vector(BYTES32, 2);
    let value = Value::sequence([Value::from([0x01u8; 32]), Value::from([0x02u8; 32])]);
    assert_eq!(
        hash_tree_root(&value, &sedes).unwrap(),
        hash_pair(&[0x01u8; 32], &[0x02u8; 32])
    );
}

#[test]
fn schema_root_agrees_with_generic_path() {
    let schema = Serializable::new(vec![
        ("slot", UINT64),
        ("payload", Sedes::ByteList(ByteList::new(16))),
    ]);
    let record = schema
        .create(vec![
            ("slot", Value::from(3u64)),
            ("payload", Value::Bytes(vec![1, 2, 3])),
        ])
        .unwrap();
    assert_eq!(
        schema.hash_tree_root(&record).unwrap(),
        hash_tree_root(&Value::Record(record.clone()), &schema.sedes()).unwrap()
    );
}

#[test]
fn malformed_values_fail_instead_of_hashing() {
    let err = hash_tree_root(&Value::from(256u16), &UINT8).unwrap_err();
    assert!(matches!(err, SerializationError::ValueOutOfRange { .. }));

    let sedes = Sedes::list(UINT8, 1);
    let value = Value::sequence([Value::from(1u8), Value::from(2u8)]);
    let err = hash_tree_root(&value, &sedes).unwrap_err();
    assert!(matches!(err, SerializationError::MaxLengthExceeded { .. }));

    let err = hash_tree_root(&Value::from(true), &BYTES32).unwrap_err();
    assert!(matches!(err, SerializationError::TypeMismatch { .. }));
}
