//! The "await exactly N bytes" capability shared by every unpack front end.
//!
//! [`decode_core`](crate::decode_core) is written once, against
//! [`ByteSource`]. The sync front ends in [`unpack`](crate::unpack) supply a
//! source that never truly suspends (a slice or a blocking [`std::io::Read`])
//! and drive it with [`block_on`]; the streaming front end in
//! [`stream`](crate::stream) supplies a source that awaits the next chunk of
//! an async [`futures_core::Stream`]. Because the decoder body is a single
//! recursive `async fn`, a real suspension at a `read_exact` point preserves
//! the whole call stack — including how deep into nested arrays/maps it has
//! recursed — without a hand-written state machine.

use std::future::Future;
use std::task::Poll;

use futures_util::task::noop_waker_ref;

use crate::error::Error;

/// Pulls exactly `len` bytes from the source, or fails.
pub(crate) trait ByteSource {
    fn read_exact(&mut self, len: usize) -> impl Future<Output = Result<Vec<u8>, Error>>;

    /// Total bytes consumed so far, for error offsets.
    fn offset(&self) -> usize;
}

/// A `ByteSource` over an in-memory slice. Never actually suspends.
pub(crate) struct SliceSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        SliceSource { buf, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    async fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| Error::insufficient_data(self.pos))?;
        let out = self.buf[self.pos..end].to_vec();
        self.pos = end;
        Ok(out)
    }

    fn offset(&self) -> usize {
        self.pos
    }
}

/// A `ByteSource` over a blocking [`std::io::Read`]. Never actually suspends.
pub(crate) struct ReadSource<'a, R: std::io::Read> {
    reader: &'a mut R,
    pos: usize,
}

impl<'a, R: std::io::Read> ReadSource<'a, R> {
    pub(crate) fn new(reader: &'a mut R) -> Self {
        ReadSource { reader, pos: 0 }
    }
}

impl<R: std::io::Read> ByteSource for ReadSource<'_, R> {
    async fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf).map_err(|err| {
            if err.kind() == std::io::ErrorKind::UnexpectedEof {
                Error::insufficient_data(self.pos)
            } else {
                Error::io(err)
            }
        })?;
        self.pos += len;
        Ok(buf)
    }

    fn offset(&self) -> usize {
        self.pos
    }
}

/// Drives a future to completion on the current thread without pulling in an
/// async runtime. Valid only for futures that never genuinely return
/// `Poll::Pending` with no waker wake-up pending — true of [`SliceSource`]
/// and [`ReadSource`], both of which always resolve their `read_exact` in a
/// single poll.
pub(crate) fn block_on<F: Future>(fut: F) -> F::Output {
    let mut fut = std::pin::pin!(fut);
    let waker = noop_waker_ref();
    let mut cx = std::task::Context::from_waker(waker);
    loop {
        if let Poll::Ready(v) = fut.as_mut().poll(&mut cx) {
            return v;
        }
    }
}
