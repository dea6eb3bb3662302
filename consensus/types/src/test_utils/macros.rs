#[cfg(test)]
#[macro_export]
macro_rules! ssz_tests {
    ($type: ty) => {
        #[test]
        pub fn test_ssz_round_trip() {
            use ssz::{ssz_encode, Decode, Encode};
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let mut rng = XorShiftRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);

            let bytes = ssz_encode(&original);
            assert_eq!(original.ssz_bytes_len(), bytes.len());

            let decoded = <$type>::from_ssz_bytes(&bytes).unwrap();

            assert_eq!(original, decoded);
        }

        #[test]
        pub fn test_ssz_schema_matches_encoding() {
            use ssz::{ssz_encode, Encode, SszSchema};
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let mut rng = XorShiftRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);
            let bytes = ssz_encode(&original);
            let schema = <$type>::ssz_schema();

            assert_eq!(schema.is_variable_size(), !<$type as Encode>::is_ssz_fixed_len());
            match schema.fixed_len() {
                Some(len) => assert_eq!(bytes.len(), len),
                None => assert!(bytes.len() >= schema.min_len()),
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! tree_hash_tests {
    ($type: ty) => {
        #[test]
        pub fn test_tree_hash_root() {
            use tree_hash::TreeHash;
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let mut rng = XorShiftRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);

            // Tree hashing must be a pure function of the value.
            assert_eq!(original.tree_hash_root(), original.clone().tree_hash_root());

            let other = <$type>::random_for_test(&mut rng);
            if other != original {
                assert_ne!(original.tree_hash_root(), other.tree_hash_root());
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! serde_field_name_tests {
    ($type: ty) => {
        #[test]
        pub fn test_json_field_names_match_schema() {
            use ssz::SszSchema;
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let mut rng = XorShiftRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);

            let json = serde_json::to_value(&original).unwrap();
            let mut json_names = json
                .as_object()
                .expect("containers serialize as objects")
                .keys()
                .cloned()
                .collect::<Vec<_>>();
            json_names.sort();

            let mut schema_names = <$type>::ssz_schema()
                .fields()
                .iter()
                .map(|field| field.name.to_string())
                .collect::<Vec<_>>();
            schema_names.sort();

            assert_eq!(json_names, schema_names);

            let decoded: $type = serde_json::from_value(json).unwrap();
            assert_eq!(decoded, original);
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! ssz_and_tree_hash_tests {
    ($type: ty) => {
        ssz_tests!($type);
        tree_hash_tests!($type);
        serde_field_name_tests!($type);
    };
}
