use messagepack_codec::{loads, pack, PackOptions, UnpackOptions, Value};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0, 0xc4)]
#[case(255, 0xc4)]
#[case(256, 0xc5)]
#[case(65535, 0xc5)]
#[case(65536, 0xc6)]
fn minimal_width_by_length(#[case] len: usize, #[case] expected_marker: u8) {
    let data = vec![0u8; len];
    let bytes = pack(&Value::from(data), &PackOptions::default()).unwrap();
    assert_eq!(bytes[0], expected_marker);
}

proptest! {
    #[test]
    fn roundtrip_bin(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let bytes = pack(&Value::from(data.clone()), &PackOptions::default()).unwrap();
        let value = loads(&bytes, &UnpackOptions::default()).unwrap();
        prop_assert_eq!(value.as_bin(), Some(data.as_slice()));
    }
}
