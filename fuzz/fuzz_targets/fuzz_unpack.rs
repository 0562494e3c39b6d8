#![no_main]

use libfuzzer_sys::fuzz_target;
use messagepack_codec::{pack, unpack, PackOptions, UnpackOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = unpack(data, &UnpackOptions::default()) else {
        return;
    };
    // A decoded value must always be re-packable; pack must never panic.
    let _ = pack(&value, &PackOptions::default()).unwrap();
});
