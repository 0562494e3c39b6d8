use messagepack_codec::{loads, pack, Int, PackOptions, UnpackOptions, Value};
use rstest::rstest;

#[rstest]
#[case(0, 0x90)]
#[case(15, 0x9f)]
fn fixarray_marker_encodes_length(#[case] len: usize, #[case] expected_marker: u8) {
    let items: Vec<Value> = (0..len as i64).map(Value::from).collect();
    let bytes = pack(&Value::from(items), &PackOptions::default()).unwrap();
    assert_eq!(bytes[0], expected_marker);
}

#[test]
fn sixteen_elements_uses_array16() {
    let items: Vec<Value> = (0..16i64).map(Value::from).collect();
    let bytes = pack(&Value::from(items), &PackOptions::default()).unwrap();
    assert_eq!(bytes[0], 0xdc);
}

#[test]
fn nested_arrays_round_trip() {
    let value = Value::Array(vec![
        Value::from(1i64),
        Value::Array(vec![Value::from(2i64), Value::Nil]),
        Value::from("x"),
    ]);
    let bytes = pack(&value, &PackOptions::default()).unwrap();
    let decoded = loads(&bytes, &UnpackOptions::default()).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn empty_array_round_trips() {
    let value = Value::Array(vec![]);
    let bytes = pack(&value, &PackOptions::default()).unwrap();
    assert_eq!(loads(&bytes, &UnpackOptions::default()).unwrap(), value);
}

#[test]
fn array_containing_all_scalar_kinds() {
    let value = Value::Array(vec![
        Value::Nil,
        Value::Bool(true),
        Value::Int(Int::Signed(-1)),
        Value::Float(1.25),
        Value::from("s"),
        Value::Bin(vec![1, 2, 3]),
    ]);
    let bytes = pack(&value, &PackOptions::default()).unwrap();
    assert_eq!(loads(&bytes, &UnpackOptions::default()).unwrap(), value);
}
