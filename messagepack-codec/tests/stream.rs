use futures_util::{pin_mut, StreamExt};
use messagepack_codec::{stream_load, Observer, UnpackOptions, Value};

fn chunks(parts: Vec<&'static [u8]>) -> impl futures_core::Stream<Item = Result<Vec<u8>, std::io::Error>> {
    futures_util::stream::iter(parts.into_iter().map(|p| Ok(p.to_vec())))
}

/// Three packed documents (nil, an array of three ints, a one-entry map),
/// concatenated and delivered in chunks of sizes [1, 3, 2, 5] — chunk 3
/// (`03 81`) straddles the boundary between document 2 and document 3, so
/// this is the case that would catch an observer implementation that hands
/// out whole raw chunks instead of just the bytes a given read consumed.
#[test]
fn boundary_straddling_chunk_is_split_correctly_between_documents() {
    let wire: &[u8] = &[
        0xc0, // nil
        0x93, 0x01, 0x02, 0x03, // [1, 2, 3]
        0x81, 0xa3, b'f', b'o', b'o', 0x01, // {"foo": 1}
    ];
    assert_eq!(wire.len(), 11);

    let stream = chunks(vec![&wire[0..1], &wire[1..4], &wire[4..6], &wire[6..11]]);

    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_cb = seen.clone();
    let observer: Observer = Box::new(move |chunk| seen_cb.lock().unwrap().push(chunk.to_vec()));

    let values = futures_executor::block_on(async {
        let out = stream_load(stream, UnpackOptions::default(), Some(observer));
        pin_mut!(out);
        let mut values = Vec::new();
        while let Some(item) = out.next().await {
            values.push(item.unwrap());
        }
        values
    });

    assert_eq!(
        values,
        vec![
            Value::Nil,
            Value::Array(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]),
            Value::Map(vec![(Value::from("foo"), Value::from(1i64))]),
        ]
    );

    // Split the observer's log at each empty-slice document marker and
    // concatenate the non-empty entries within each group: that must equal
    // the full bytes of the corresponding document, regardless of where the
    // underlying chunk boundaries fell.
    let log = seen.lock().unwrap();
    let mut documents: Vec<Vec<u8>> = vec![Vec::new()];
    for chunk in log.iter() {
        if chunk.is_empty() {
            documents.push(Vec::new());
        } else {
            documents.last_mut().unwrap().extend_from_slice(chunk);
        }
    }
    assert_eq!(documents.len(), 4); // one trailing empty group after the last marker
    assert_eq!(documents[0], wire[0..1]);
    assert_eq!(documents[1], wire[1..5]);
    assert_eq!(documents[2], wire[5..11]);
    assert!(documents[3].is_empty());
}
