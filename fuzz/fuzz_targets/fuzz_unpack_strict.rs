#![no_main]

use libfuzzer_sys::fuzz_target;
use messagepack_codec::{unpack_strict, UnpackOptions};

fuzz_target!(|data: &[u8]| {
    // Must never panic, whether the bytes are a valid document, a valid
    // document with trailing garbage, or not a document at all.
    let _ = unpack_strict(data, &UnpackOptions::default());
});
