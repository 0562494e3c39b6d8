#![allow(unexpected_cfgs)]

use messagepack_codec::{pack, PackOptions};
use messagepack_codec_bench::{bytes, composite, map, primitives, strings};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

#[divan::bench]
fn pack_primitives(bencher: divan::Bencher) {
    let value = primitives();
    bencher.bench(|| pack(core::hint::black_box(&value), &PackOptions::default()).unwrap());
}

#[divan::bench]
fn pack_strings(bencher: divan::Bencher) {
    let value = strings();
    bencher.bench(|| pack(core::hint::black_box(&value), &PackOptions::default()).unwrap());
}

#[divan::bench]
fn pack_bytes(bencher: divan::Bencher) {
    let value = bytes();
    bencher.bench(|| pack(core::hint::black_box(&value), &PackOptions::default()).unwrap());
}

#[divan::bench(args = [32, 128, 512])]
fn pack_map(bencher: divan::Bencher, len: usize) {
    let value = map(len);
    bencher.bench(|| pack(core::hint::black_box(&value), &PackOptions::default()).unwrap());
}

#[divan::bench]
fn pack_composite(bencher: divan::Bencher) {
    let value = composite();
    bencher.bench(|| pack(core::hint::black_box(&value), &PackOptions::default()).unwrap());
}
