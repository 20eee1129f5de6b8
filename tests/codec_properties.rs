use proptest::collection::vec;
use proptest::prelude::*;
use ssz_codec::{
    decode, encode, hash_tree_root, ByteList, Sedes, Serializable, Value, BOOLEAN, BYTE, UINT16,
    UINT32, UINT64,
};

proptest! {
    #[test]
    fn byte_list_roundtrip(bytes in vec(any::<u8>(), 0..64), slack in 0usize..4) {
        let sedes = Sedes::ByteList(ByteList::new(bytes.len() + slack));
        let value = Value::Bytes(bytes.clone());
        let encoded = encode(&value, &sedes).unwrap();
        // Byte lists are raw byte strings on the wire.
        prop_assert_eq!(&encoded, &bytes);
        prop_assert_eq!(decode(&encoded, &sedes).unwrap(), value);
    }

    #[test]
    fn byte_list_matches_list_of_single_bytes(bytes in vec(any::<u8>(), 0..64), same_size in any::<bool>()) {
        let max_length = if same_size { bytes.len() } else { bytes.len() + 1 };
        let byte_list = Sedes::ByteList(ByteList::new(max_length));
        let as_list = Sedes::list(BYTE, max_length);
        let elements = Value::sequence(bytes.iter().map(|byte| Value::Bytes(vec![*byte])));

        let serialized = encode(&Value::Bytes(bytes.clone()), &byte_list).unwrap();
        prop_assert_eq!(&serialized, &encode(&elements, &as_list).unwrap());
        prop_assert_eq!(decode(&serialized, &byte_list).unwrap(), Value::Bytes(bytes.clone()));
        prop_assert_eq!(decode(&serialized, &as_list).unwrap(), elements.clone());
        prop_assert_eq!(
            hash_tree_root(&Value::Bytes(bytes.clone()), &byte_list).unwrap(),
            hash_tree_root(&elements, &as_list).unwrap()
        );
    }

    #[test]
    fn fixed_element_list_roundtrip(values in vec(any::<u64>(), 0..32)) {
        let sedes = Sedes::list(UINT64, 32);
        let value = Value::sequence(values.iter().map(|v| Value::from(*v)));
        let encoded = encode(&value, &sedes).unwrap();
        prop_assert_eq!(encoded.len(), values.len() * 8);
        prop_assert_eq!(decode(&encoded, &sedes).unwrap(), value);
    }

    #[test]
    fn variable_element_list_roundtrip(chunks in vec(vec(any::<u8>(), 0..16), 0..8)) {
        let sedes = Sedes::list(Sedes::ByteList(ByteList::new(16)), 8);
        let value = Value::sequence(chunks.iter().map(|chunk| Value::Bytes(chunk.clone())));
        let encoded = encode(&value, &sedes).unwrap();
        prop_assert_eq!(decode(&encoded, &sedes).unwrap(), value);
    }

    #[test]
    fn container_roundtrip(slot in any::<u64>(), flag in any::<bool>(), payload in vec(any::<u8>(), 0..32)) {
        let schema = Serializable::new(vec![
            ("slot", UINT64),
            ("flag", BOOLEAN),
            ("payload", Sedes::ByteList(ByteList::new(32))),
        ]);
        let record = schema.create(vec![
            ("slot", Value::from(slot)),
            ("flag", Value::from(flag)),
            ("payload", Value::Bytes(payload)),
        ]).unwrap();
        let encoded = schema.encode(&record).unwrap();
        prop_assert_eq!(schema.decode(&encoded).unwrap(), record);
    }

    #[test]
    fn fixed_size_encodings_have_declared_length(value in any::<u64>()) {
        let cases = [
            (&UINT16, Value::from(value as u16)),
            (&UINT32, Value::from(value as u32)),
            (&UINT64, Value::from(value)),
        ];
        for (sedes, value) in cases {
            let encoded = encode(&value, sedes).unwrap();
            prop_assert_eq!(encoded.len(), sedes.fixed_size().unwrap());
        }
    }

    #[test]
    fn list_root_is_a_pure_function_of_the_value(values in vec(any::<u64>(), 0..16)) {
        let sedes = Sedes::list(UINT64, 16);
        let value = Value::sequence(values.iter().map(|v| Value::from(*v)));
        prop_assert_eq!(
            hash_tree_root(&value, &sedes).unwrap(),
            hash_tree_root(&value.clone(), &sedes.clone()).unwrap()
        );
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(bytes in vec(any::<u8>(), 0..64)) {
        let nested = Sedes::list(Sedes::ByteList(ByteList::new(8)), 8);
        let mixed = Sedes::container(vec![
            ("a", UINT16),
            ("b", Sedes::ByteList(ByteList::new(4))),
        ]);
        // Any outcome is fine as long as malformed input fails cleanly.
        let _ = decode(&bytes, &nested);
        let _ = decode(&bytes, &mixed);
        let _ = decode(&bytes, &UINT32);
    }
}
