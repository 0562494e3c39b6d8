//! The codec's closed error taxonomy.
//!
//! Every unpack error carries the byte offset of the marker that triggered
//! it so a caller can locate the bad input without re-walking the buffer.

use std::fmt;

/// Everything that can go wrong packing or unpacking a [`crate::Value`].
#[derive(Debug)]
pub enum Error {
    /// A value (or a registered Rust type) has no wire representation this
    /// codec can produce — an unregistered type passed to [`crate::pack_ext`],
    /// or a string/bin/array/map/ext whose length exceeds `u32::MAX`.
    UnsupportedType,
    /// The source ran out of bytes before a complete value could be read.
    InsufficientData { offset: usize },
    /// A string field was not valid UTF-8 and `allow_invalid_utf8` was false.
    InvalidString { offset: usize },
    /// The marker byte is reserved (0xc1) or names an ext type code this
    /// process has no unpack registration for.
    ReservedCode { offset: usize, code: u8 },
    /// A map key decoded to a container (array or map), which this codec
    /// treats as unhashable, mirroring the dynamically-typed source model's
    /// restriction on dict keys.
    UnhashableKey { offset: usize },
    /// A map had two keys that compare equal under [`crate::Value`]'s
    /// structural equality.
    DuplicateKey { offset: usize },
    /// The underlying reader, writer, or byte stream failed.
    Io(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn insufficient_data(offset: usize) -> Self {
        tracing::debug!(offset, "insufficient data while decoding messagepack value");
        Error::InsufficientData { offset }
    }

    pub(crate) fn invalid_string(offset: usize) -> Self {
        tracing::debug!(offset, "invalid utf-8 in messagepack str field");
        Error::InvalidString { offset }
    }

    pub(crate) fn reserved_code(offset: usize, code: u8) -> Self {
        tracing::debug!(offset, code, "reserved or unregistered messagepack ext code");
        Error::ReservedCode { offset, code }
    }

    pub(crate) fn unhashable_key(offset: usize) -> Self {
        tracing::debug!(offset, "unhashable (container) key in messagepack map");
        Error::UnhashableKey { offset }
    }

    pub(crate) fn duplicate_key(offset: usize) -> Self {
        tracing::debug!(offset, "duplicate key in messagepack map");
        Error::DuplicateKey { offset }
    }

    pub(crate) fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Io(Box::new(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedType => write!(f, "value has no messagepack representation"),
            Error::InsufficientData { offset } => {
                write!(f, "insufficient data at byte offset {offset}")
            }
            Error::InvalidString { offset } => {
                write!(f, "invalid utf-8 string at byte offset {offset}")
            }
            Error::ReservedCode { offset, code } => {
                write!(f, "reserved or unregistered ext code {code} at byte offset {offset}")
            }
            Error::UnhashableKey { offset } => {
                write!(f, "unhashable map key at byte offset {offset}")
            }
            Error::DuplicateKey { offset } => {
                write!(f, "duplicate map key at byte offset {offset}")
            }
            Error::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// Error returned by [`crate::unpack_strict`]: either a normal decode
/// failure, or leftover bytes after an otherwise successful decode.
///
/// Kept separate from [`Error`] so that enum's six-kind taxonomy stays
/// closed; the strict variant is an opt-in convenience, not part of the
/// core decode algorithm.
#[derive(Debug)]
pub enum StrictError {
    Decode(Error),
    TrailingData { consumed: usize, total: usize },
}

impl fmt::Display for StrictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrictError::Decode(err) => write!(f, "{err}"),
            StrictError::TrailingData { consumed, total } => write!(
                f,
                "trailing data: consumed {consumed} of {total} bytes"
            ),
        }
    }
}

impl std::error::Error for StrictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StrictError::Decode(err) => Some(err),
            StrictError::TrailingData { .. } => None,
        }
    }
}

impl From<Error> for StrictError {
    fn from(err: Error) -> Self {
        StrictError::Decode(err)
    }
}
