//! Property-based tests - pragmatic approach testing core roundtrip guarantees
//!
//! These tests complement the integration tests by verifying properties
//! across a wide range of generated inputs.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_tob::{from_slice, to_vec, TobValue};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_vec(value) {
        Ok(bytes) => match from_slice::<T>(&bytes) {
            Ok(decoded) => *value == decoded,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Encoded was: {:02x?}", bytes);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

proptest! {
    // Test primitive types
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    // NaN never compares equal to itself, so compare bit patterns instead
    // of going through the generic roundtrip helper.
    #[test]
    fn prop_f64(x in any::<f64>()) {
        let bytes = to_vec(&x).unwrap();
        let back: f64 = from_slice(&bytes).unwrap();
        prop_assert_eq!(back.to_bits(), x.to_bits());
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(roundtrip(&s));
    }

    // Test collections
    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }

    #[test]
    fn prop_map_string_i32(
        m in prop::collection::btree_map(any::<String>(), any::<i32>(), 0..10)
    ) {
        prop_assert!(roundtrip(&m));
    }

    // Value-level properties

    #[test]
    fn prop_small_integer_encodes_one_byte(n in -32i64..=127) {
        let bytes = to_vec(&n).unwrap();
        prop_assert_eq!(bytes.len(), 1);
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_value_equality_cross_width(n in any::<i16>()) {
        let narrow = TobValue::from(n);
        let wide = TobValue::from(n as i64);
        prop_assert_eq!(narrow, wide);
    }

    #[test]
    fn prop_value_size_matches_iter(v in prop::collection::vec(any::<i32>(), 0..10)) {
        let value: TobValue = TobValue::Array(v.into_iter().map(TobValue::from).collect());
        prop_assert_eq!(value.size(), value.iter().count());
    }
}
