use messagepack_codec::{loads, pack, Error, ExtValue, PackOptions, UnpackOptions, Value};
use rstest::rstest;

#[rstest]
#[case(1, 0xd4)]
#[case(2, 0xd5)]
#[case(4, 0xd6)]
#[case(8, 0xd7)]
#[case(16, 0xd8)]
#[case(3, 0xc7)] // not a fixext length -> ext8
#[case(256, 0xc8)] // -> ext16
#[case(65536, 0xc9)] // -> ext32
fn format_selection_by_payload_length(#[case] len: usize, #[case] expected_marker: u8) {
    let value = Value::Ext(ExtValue {
        type_code: 7,
        data: vec![0u8; len],
    });
    let bytes = pack(&value, &PackOptions::default()).unwrap();
    assert_eq!(bytes[0], expected_marker);
}

#[test]
fn opaque_ext_round_trips_without_a_registration() {
    let value = Value::Ext(ExtValue {
        type_code: 99,
        data: vec![1, 2, 3],
    });
    let bytes = pack(&value, &PackOptions::default()).unwrap();
    assert_eq!(loads(&bytes, &UnpackOptions::default()).unwrap(), value);
}

#[test]
fn negative_type_code_is_a_reserved_code_error() {
    // fixext1 with type code -1 (the timestamp family, unimplemented).
    let wire = [0xd4, 0xff, 0x00];
    let err = loads(&wire, &UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, Error::ReservedCode { .. }));
}

#[test]
fn never_used_marker_is_rejected() {
    let wire = [0xc1];
    let err = loads(&wire, &UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, Error::ReservedCode { .. }));
}
