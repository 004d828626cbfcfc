//! Construction tests for the tob! macro.

use serde_tob::{from_slice, tob, to_vec, TobMap, TobValue};

#[test]
fn test_scalar_literals() {
    assert_eq!(tob!(null), TobValue::Null);
    assert_eq!(tob!(true), TobValue::from(true));
    assert_eq!(tob!(-7), TobValue::from(-7));
    assert_eq!(tob!(2.25), TobValue::from(2.25));
    assert_eq!(tob!("text"), TobValue::from("text"));
}

#[test]
fn test_expression_fallback() {
    let n = 5i16;
    let value = tob!(n);
    assert!(value.same::<i16>());

    let s = String::from("owned");
    assert_eq!(tob!(s), TobValue::from("owned"));
}

#[test]
fn test_heterogeneous_array() {
    let value = tob!([1, "two", 3.0, null, [4]]);
    assert!(value.is_array());
    assert_eq!(value.size(), 5);
    assert_eq!(value[1], tob!("two"));
    assert_eq!(value[3], TobValue::Null);
    assert_eq!(value[4][0], tob!(4));
}

#[test]
fn test_map_literal_matches_manual_build() {
    let literal = tob!({ "a": 1, "b": [true, false] });
    let mut map = TobMap::new();
    map.insert(TobValue::from("a"), TobValue::from(1));
    map.insert(
        TobValue::from("b"),
        TobValue::Array(vec![TobValue::from(true), TobValue::from(false)]),
    );
    assert_eq!(literal, TobValue::Map(map));
}

#[test]
fn test_pair_array_becomes_map() {
    let value = tob!([["x", 10], ["y", 20]]);
    assert!(value.is_map());
    assert_eq!(value["x"], tob!(10));
    assert_eq!(value["y"], tob!(20));
    // the explicit map literal is identical
    assert_eq!(value, tob!({ "x": 10, "y": 20 }));
}

#[test]
fn test_macro_value_survives_wire() {
    let value = tob!({
        "config": { "retries": 3, "verbose": false },
        "servers": ["alpha", "bravo"]
    });
    let bytes = to_vec(&value).unwrap();
    let back: TobValue = from_slice(&bytes).unwrap();
    assert_eq!(value, back);
}
