#![no_main]

use futures_util::stream::{self, StreamExt};
use libfuzzer_sys::fuzz_target;
use messagepack_codec::{stream_load, UnpackOptions};

/// Every chunk split of the same bytes must decode to the same sequence of
/// values (or fail identically) as decoding the bytes whole — the streaming
/// front end must never depend on where chunk boundaries happen to fall.
fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, split_points) = input;
    if data.is_empty() {
        return;
    }
    let mut chunks = Vec::new();
    let mut start = 0;
    for &p in &split_points {
        let len = (p as usize % (data.len() - start).max(1)).max(1);
        let end = (start + len).min(data.len());
        if end > start {
            chunks.push(data[start..end].to_vec());
            start = end;
        }
        if start >= data.len() {
            break;
        }
    }
    if start < data.len() {
        chunks.push(data[start..].to_vec());
    }

    let source = stream::iter(chunks.into_iter().map(Ok::<_, std::io::Error>));
    futures_executor::block_on(async {
        let out = stream_load(source, UnpackOptions::default(), None);
        futures_util::pin_mut!(out);
        while out.next().await.is_some() {}
    });
});
