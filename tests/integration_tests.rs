//! End-to-end scenarios through the serde entry points.

use serde::{Deserialize, Serialize};
use serde_tob::token::opcode;
use serde_tob::{from_slice, from_value, tob, to_value, to_vec, Error, TobValue, Writer};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Inventory {
    name: String,
    count: u32,
    tags: Vec<String>,
    location: Option<String>,
}

#[test]
fn test_struct_roundtrip() {
    let item = Inventory {
        name: "bolt".to_string(),
        count: 400,
        tags: vec!["m4".to_string(), "steel".to_string()],
        location: None,
    };
    let bytes = to_vec(&item).unwrap();
    assert_eq!(from_slice::<Inventory>(&bytes).unwrap(), item);
}

#[test]
fn test_spec_byte_scenarios() {
    // a single small-integer byte is a complete value
    assert_eq!(from_slice::<i32>(&[0x7F]).unwrap(), 127);

    // int16 0x0100 widens and narrows per the conversion rules
    assert_eq!(from_slice::<i16>(&[0xA1, 0x00, 0x01]).unwrap(), 256);
    assert_eq!(from_slice::<f32>(&[0xA1, 0x00, 0x01]).unwrap(), 256.0);
    assert!(matches!(
        from_slice::<i8>(&[0xA1, 0x00, 0x01]),
        Err(Error::Overflow { .. })
    ));

    // empty counted array
    let empty: Vec<bool> = from_slice(&[0x92, 0x00, 0x93]).unwrap();
    assert!(empty.is_empty());

    // two-element counted boolean array
    let bools: Vec<bool> = from_slice(&[0x92, 0x02, 0x81, 0x80, 0x93]).unwrap();
    assert_eq!(bools, vec![true, false]);

    // string8 "AB"
    assert_eq!(
        from_slice::<String>(&[0xB0, 0x02, b'A', b'B']).unwrap(),
        "AB"
    );
}

#[test]
fn test_map_framing_equivalence_via_writer() {
    // {"alpha": null, "bravo": true} in classic framing
    let mut classic = Writer::new();
    classic.begin_map();
    classic.integer(2);
    classic.string("alpha");
    classic.null();
    classic.string("bravo");
    classic.boolean(true);
    classic.end_map().unwrap();

    // same pairs in the deprecated record-wrapped framing
    let mut deprecated = Vec::new();
    deprecated.push(opcode::DEPRECATED_BEGIN_MAP);
    deprecated.push(0x02);
    for (key, value) in [("alpha", opcode::NULL), ("bravo", opcode::TRUE)] {
        deprecated.push(opcode::BEGIN_RECORD);
        deprecated.push(opcode::STRING8);
        deprecated.push(key.len() as u8);
        deprecated.extend_from_slice(key.as_bytes());
        deprecated.push(value);
        deprecated.push(opcode::END_RECORD);
    }
    deprecated.push(opcode::DEPRECATED_END_MAP);

    let a: TobValue = from_slice(classic.as_bytes()).unwrap();
    let b: TobValue = from_slice(&deprecated).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.size(), 2);
    assert_eq!(a["alpha"], TobValue::Null);
    assert_eq!(a["bravo"], TobValue::from(true));
}

#[test]
fn test_btreemap_roundtrip() {
    let mut map = BTreeMap::new();
    map.insert("one".to_string(), 1i32);
    map.insert("two".to_string(), 2i32);
    let bytes = to_vec(&map).unwrap();
    assert_eq!(from_slice::<BTreeMap<String, i32>>(&bytes).unwrap(), map);
}

#[test]
fn test_value_tree_roundtrip() {
    let value = tob!({
        "title": "report",
        "pages": [1, 2, 3],
        "published": false,
        "extra": null,
        "nested": { "depth": 2 }
    });
    let bytes = to_vec(&value).unwrap();
    let back: TobValue = from_slice(&bytes).unwrap();
    assert_eq!(value, back);
}

#[test]
fn test_to_value_from_value_inverse() {
    let item = Inventory {
        name: "nut".to_string(),
        count: 7,
        tags: vec![],
        location: Some("bin 3".to_string()),
    };
    let value = to_value(&item).unwrap();
    assert_eq!(value["name"], tob!("nut"));
    let back: Inventory = from_value(&value).unwrap();
    assert_eq!(back, item);
}

#[test]
fn test_compact_array_into_serde_seq() {
    let mut writer = Writer::new();
    writer.compact_int32(&[1, -1, 65536]).unwrap();
    let ints: Vec<i64> = from_slice(writer.as_bytes()).unwrap();
    assert_eq!(ints, vec![1, -1, 65536]);
}

#[test]
fn test_malformed_inputs() {
    // unknown byte
    assert!(matches!(
        from_slice::<TobValue>(&[0xCE]),
        Err(Error::UnknownToken { .. })
    ));
    // negative 64-bit string length
    let mut bytes = vec![opcode::STRING64];
    bytes.extend_from_slice(&(-5i64).to_le_bytes());
    assert!(matches!(
        from_slice::<TobValue>(&bytes),
        Err(Error::NegativeLength { length: -5, .. })
    ));
    // mismatched end marker
    assert!(matches!(
        from_slice::<TobValue>(&[opcode::BEGIN_MAP, 0x00, opcode::END_ARRAY]),
        Err(Error::UnexpectedToken { .. })
    ));
    // truncated container
    assert!(matches!(
        from_slice::<TobValue>(&[opcode::BEGIN_ARRAY, 0x01]),
        Err(Error::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_deeply_nested_roundtrip() {
    let mut value = tob!(0);
    for _ in 0..16 {
        value = TobValue::Array(vec![value]);
    }
    let bytes = to_vec(&value).unwrap();
    let back: TobValue = from_slice(&bytes).unwrap();
    assert_eq!(value, back);
}

#[test]
fn test_unit_and_newtype() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Meters(f64);

    let bytes = to_vec(&Meters(1.5)).unwrap();
    assert_eq!(from_slice::<Meters>(&bytes).unwrap(), Meters(1.5));

    let bytes = to_vec(&()).unwrap();
    assert_eq!(bytes, vec![opcode::NULL]);
}

#[test]
fn test_char_and_bytes() {
    let bytes = to_vec(&'é').unwrap();
    assert_eq!(from_slice::<char>(&bytes).unwrap(), 'é');

    let blob = serde_bytes_roundtrip(&[0u8, 255, 7]);
    assert_eq!(blob, vec![0u8, 255, 7]);
}

fn serde_bytes_roundtrip(input: &[u8]) -> Vec<u8> {
    let mut writer = Writer::new();
    writer.binary(input);
    from_slice::<serde::de::IgnoredAny>(writer.as_bytes()).unwrap();
    let decoded: Vec<TobValue> = match from_slice::<TobValue>(writer.as_bytes()).unwrap() {
        TobValue::Array(values) => values,
        other => panic!("binary should decode to an array of bytes, got {}", other),
    };
    decoded
        .iter()
        .map(|v| v.value::<u8>().unwrap())
        .collect()
}
