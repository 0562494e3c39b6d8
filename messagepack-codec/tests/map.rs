use messagepack_codec::{loads, pack, Error, PackOptions, UnpackOptions, Value};

#[test]
fn round_trips_preserving_insertion_order() {
    let value = Value::Map(vec![
        (Value::from("b"), Value::from(2i64)),
        (Value::from("a"), Value::from(1i64)),
    ]);
    let bytes = pack(&value, &PackOptions::default()).unwrap();
    assert_eq!(loads(&bytes, &UnpackOptions::default()).unwrap(), value);
}

#[test]
fn duplicate_keys_are_rejected() {
    // fixmap(2) { "a": nil, "a": nil }
    let wire = [0x82, 0xa1, b'a', 0xc0, 0xa1, b'a', 0xc0];
    let err = loads(&wire, &UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { .. }));
}

#[test]
fn array_keyed_map_is_unhashable() {
    // fixmap(1) { [] : nil }
    let wire = [0x81, 0x90, 0xc0];
    let err = loads(&wire, &UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnhashableKey { .. }));
}

#[test]
fn signed_and_unsigned_equal_keys_collide() {
    // fixmap(2) { 1: "a", 1 (as 0xcc 0x01 uint8): "b" } -- both decode to the
    // same integer value, so this must be a duplicate key even though the
    // wire bytes differ.
    let wire = [0x82, 0x01, 0xa1, b'a', 0xcc, 0x01, 0xa1, b'b'];
    let err = loads(&wire, &UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { .. }));
}

#[test]
fn nested_maps_round_trip() {
    let inner = Value::Map(vec![(Value::from("x"), Value::from(1i64))]);
    let outer = Value::Map(vec![(Value::from("inner"), inner)]);
    let bytes = pack(&outer, &PackOptions::default()).unwrap();
    assert_eq!(loads(&bytes, &UnpackOptions::default()).unwrap(), outer);
}
