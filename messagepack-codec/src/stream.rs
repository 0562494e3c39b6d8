//! The streaming front end: decodes a `Stream` of arbitrarily-chunked bytes
//! into a `Stream` of [`Value`]s, reusing [`decode_core::decode_value`]
//! unchanged — only the [`ByteSource`] differs from the sync front end.

use async_stream::try_stream;
use futures_core::Stream;

use crate::decode_core::decode_value;
use crate::error::Error;
use crate::options::UnpackOptions;
use crate::source::ByteSource;
use crate::value::Value;

/// Called with the bytes consumed by each underlying "read exactly N" —
/// which may be a whole raw chunk, part of one, or span several — and with
/// an empty slice once a full [`Value`] has been yielded. The concatenation
/// of calls between two empty-slice markers always equals that document's
/// bytes exactly, regardless of where the underlying chunk boundaries fell.
pub type Observer = Box<dyn FnMut(&[u8]) + Send>;

struct StreamSource<St> {
    inner: std::pin::Pin<Box<St>>,
    buffer: Vec<u8>,
    offset: usize,
    observer: Option<Observer>,
}

impl<St, E> StreamSource<St>
where
    St: Stream<Item = Result<Vec<u8>, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    fn new(inner: St, observer: Option<Observer>) -> Self {
        StreamSource {
            inner: Box::pin(inner),
            buffer: Vec::new(),
            offset: 0,
            observer,
        }
    }

    async fn pull_chunk(&mut self) -> Result<bool, Error> {
        use futures_util::StreamExt;
        match self.inner.next().await {
            Some(Ok(chunk)) => {
                self.buffer.extend_from_slice(&chunk);
                Ok(true)
            }
            Some(Err(err)) => Err(Error::io(err)),
            None => Ok(false),
        }
    }

    fn signal_value_complete(&mut self) {
        if let Some(cb) = self.observer.as_mut() {
            cb(&[]);
        }
    }

    /// True once the underlying stream is exhausted with no partial value
    /// pending — used to tell "clean end of stream" apart from "stream
    /// ended mid-value".
    fn is_exhausted_cleanly(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl<St, E> ByteSource for StreamSource<St>
where
    St: Stream<Item = Result<Vec<u8>, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    async fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        while self.buffer.len() < len {
            if !self.pull_chunk().await? {
                return Err(Error::insufficient_data(self.offset));
            }
        }
        let out: Vec<u8> = self.buffer.drain(..len).collect();
        self.offset += len;
        // Hand the observer exactly the bytes this read_exact consumed, not
        // whatever raw chunk(s) happened to be pulled to supply them — a
        // chunk that straddles a document boundary must not be attributed
        // in full to whichever document's read triggered the pull.
        if let Some(cb) = self.observer.as_mut() {
            cb(&out);
        }
        Ok(out)
    }

    fn offset(&self) -> usize {
        self.offset
    }
}

/// Decode `chunks` into a stream of [`Value`]s.
///
/// Ends cleanly once `chunks` is exhausted between values; a stream that
/// ends mid-value yields a final `Err(Error::InsufficientData)`.
pub fn stream_load<St, E>(
    chunks: St,
    opts: UnpackOptions,
    observer: Option<Observer>,
) -> impl Stream<Item = Result<Value, Error>>
where
    St: Stream<Item = Result<Vec<u8>, E>> + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    try_stream! {
        let mut src = StreamSource::new(chunks, observer);
        loop {
            if src.is_exhausted_cleanly() {
                // Peek for more input before committing to decode a value,
                // so a clean end-of-stream doesn't surface as an error.
                if !src.pull_chunk().await? {
                    break;
                }
            }
            let value = decode_value(&mut src, &opts).await?;
            src.signal_value_complete();
            yield value;
        }
    }
}
