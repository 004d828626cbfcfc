//! Behavioral tests for the dynamic value type.

use serde_tob::value::{Code, Symbol};
use serde_tob::{tob, Error, TobMap, TobValue};

#[test]
fn test_tag_introspection() {
    let cases = [
        (tob!(null), Code::Null, Symbol::Null),
        (tob!(true), Code::Boolean, Symbol::Boolean),
        (TobValue::from(1u8), Code::U8, Symbol::Integer),
        (TobValue::from(1i64), Code::I64, Symbol::Integer),
        (TobValue::from(1.0f32), Code::F32, Symbol::Real),
        (tob!("x"), Code::String, Symbol::String),
        (tob!([1]), Code::Array, Symbol::Array),
        (tob!({}), Code::Map, Symbol::Map),
    ];
    for (value, code, symbol) in cases {
        assert_eq!(value.code(), code);
        assert_eq!(value.symbol(), symbol);
    }
}

#[test]
fn test_tag_group_ordering() {
    let ascending = [
        TobValue::Null,
        TobValue::from(-5),
        TobValue::from(true),
        TobValue::from(2.5),
        TobValue::from("a"),
        TobValue::from(vec!['a']),
        TobValue::from(vec![97u16]),
        TobValue::from(vec![97u32]),
        tob!([1]),
        tob!({ "k": 1 }),
    ];
    for window in ascending.windows(2) {
        assert!(
            window[0] < window[1],
            "{} should order before {}",
            window[0],
            window[1]
        );
    }
}

#[test]
fn test_nan_total_order() {
    let nan = TobValue::from(f64::NAN);
    assert_eq!(nan, TobValue::from(f64::NAN));
    assert!(TobValue::from(f64::MAX) < nan);
    assert!(TobValue::from(i64::MAX) < nan);
    // NaN still orders before every string
    assert!(nan < TobValue::from(""));
}

#[test]
fn test_numeric_keys_collapse_across_tags() {
    let mut map = TobMap::new();
    map.insert(TobValue::from(1i8), TobValue::from("first"));
    // true == 1, so this overwrites rather than inserting
    map.insert(TobValue::from(true), TobValue::from("second"));
    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get(&TobValue::from(1u64)).and_then(|v| v.as_str()),
        Some("second")
    );
}

#[test]
fn test_reverse_iteration() {
    let value = tob!([1, 2, 3]);
    let reversed: Vec<_> = value.iter().rev().cloned().collect();
    assert_eq!(reversed, vec![tob!(3), tob!(2), tob!(1)]);
    // scalar iteration is symmetric
    let scalar = tob!(7);
    assert_eq!(scalar.iter().rev().count(), 1);
}

#[test]
fn test_iter_mut() {
    let mut value = tob!([1, 2, 3]);
    for element in value.iter_mut() {
        element.append(&tob!(10)).unwrap();
    }
    assert_eq!(value, tob!([11, 12, 13]));
}

#[test]
fn test_insert_at_positions() {
    let mut value = tob!([1, 3]);
    value.insert_at(1, tob!(2)).unwrap();
    assert_eq!(value, tob!([1, 2, 3]));
    assert!(matches!(
        value.insert_at(9, tob!(0)),
        Err(Error::InvalidValue { .. })
    ));
}

#[test]
fn test_erase_map_by_position_and_key() {
    let mut value = tob!({ "a": 1, "b": 2, "c": 3 });
    // position follows key order
    assert_eq!(value.erase(1), Some(tob!(2)));
    assert_eq!(value.size(), 2);
    assert_eq!(value.erase_key(&tob!("c")), Some(tob!(3)));
    assert_eq!(value.erase_key(&tob!("missing")), None);
    assert_eq!(value.size(), 1);
}

#[test]
fn test_find_key() {
    let value = tob!({ "alpha": 1, "bravo": 2 });
    assert_eq!(value.find_key(&tob!("alpha")), Some(0));
    assert_eq!(value.find_key(&tob!("bravo")), Some(1));
    assert_eq!(value.find_key(&tob!("charlie")), None);
    // arrays have no keys
    assert_eq!(tob!([1, 2]).find_key(&tob!(1)), None);
}

#[test]
fn test_append_null_adopts_tag() {
    let mut value = TobValue::Null;
    value.append(&tob!({ "k": 1 })).unwrap();
    assert!(value.is_map());
    assert_eq!(value["k"], tob!(1));
}

#[test]
fn test_append_keeps_lhs_width() {
    let mut value = TobValue::from(100i8);
    value.append(&TobValue::from(27i64)).unwrap();
    assert!(value.same::<i8>());
    assert_eq!(value.value::<i8>().unwrap(), 127);
}

#[test]
fn test_append_real_plus_integer() {
    let mut value = TobValue::from(1.5f64);
    value.append(&TobValue::from(2)).unwrap();
    assert_eq!(value, TobValue::from(3.5));
    assert!(value.same::<f64>());
}

#[test]
fn test_wide_string_concat() {
    let mut value = TobValue::from(vec!['a', 'b']);
    value.append(&TobValue::from(vec!['c'])).unwrap();
    assert_eq!(value, TobValue::from(vec!['a', 'b', 'c']));
    // different string kinds never mix
    assert!(value.append(&TobValue::from("d")).is_err());
}

#[test]
fn test_value_extraction_set() {
    let value = tob!("hello");
    assert_eq!(value.value::<String>().unwrap(), "hello");
    assert!(value.value::<i32>().is_err());

    let value = tob!([1, 2]);
    let elements = value.value::<Vec<TobValue>>().unwrap();
    assert_eq!(elements.len(), 2);

    let value = tob!({ "k": true });
    let map = value.value::<TobMap>().unwrap();
    assert_eq!(map.len(), 1);
}

#[test]
fn test_unsigned_narrowing() {
    let value = TobValue::from(-1i32);
    assert!(matches!(
        value.value::<u32>(),
        Err(Error::Overflow { .. })
    ));
    let value = TobValue::from(u64::MAX);
    assert_eq!(value.value::<u64>().unwrap(), u64::MAX);
    assert!(value.value::<i64>().is_err());
}

#[test]
fn test_index_panics_documented() {
    let result = std::panic::catch_unwind(|| {
        let value = tob!([1, 2]);
        let _ = &value[5];
    });
    assert!(result.is_err());

    let result = std::panic::catch_unwind(|| {
        let value = tob!(1);
        let _ = &value["key"];
    });
    assert!(result.is_err());
}

#[test]
fn test_auto_vivification_chain() {
    let mut value = TobValue::Null;
    value["outer"]["inner"] = tob!(42);
    assert_eq!(value["outer"]["inner"], tob!(42));
    assert!(value["outer"].is_map());
}

#[test]
fn test_display() {
    assert_eq!(tob!(null).to_string(), "null");
    assert_eq!(tob!([1, true]).to_string(), "[1,true]");
    assert_eq!(tob!({ "a": 1 }).to_string(), "{\"a\":1}");
}
