//! Sync front ends for the shared decoder: a byte slice, or a blocking
//! [`std::io::Read`].

use crate::decode_core::decode_value;
use crate::error::{Error, StrictError};
use crate::options::UnpackOptions;
use crate::source::{block_on, ReadSource, SliceSource};
use crate::value::Value;

/// Decode the first value in `bytes`. Trailing bytes, if any, are ignored.
pub fn unpack(bytes: &[u8], opts: &UnpackOptions) -> Result<Value, Error> {
    let mut src = SliceSource::new(bytes);
    block_on(decode_value(&mut src, opts))
}

/// Like [`unpack`], but fails with [`StrictError::TrailingData`] if the
/// decoded value does not consume every byte of `bytes`.
pub fn unpack_strict(bytes: &[u8], opts: &UnpackOptions) -> Result<Value, StrictError> {
    let mut src = SliceSource::new(bytes);
    let value = block_on(decode_value(&mut src, opts))?;
    let consumed = src.offset();
    if consumed != bytes.len() {
        return Err(StrictError::TrailingData {
            consumed,
            total: bytes.len(),
        });
    }
    Ok(value)
}

/// Decode one value from a blocking reader.
pub fn unpack_reader<R: std::io::Read>(
    reader: &mut R,
    opts: &UnpackOptions,
) -> Result<Value, Error> {
    let mut src = ReadSource::new(reader);
    block_on(decode_value(&mut src, opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_trailing_bytes_by_default() {
        let bytes = [0xc0, 0xc0]; // two nils
        let opts = UnpackOptions::default();
        assert_eq!(unpack(&bytes, &opts).unwrap(), Value::Nil);
    }

    #[test]
    fn strict_rejects_trailing_bytes() {
        let bytes = [0xc0, 0xc0];
        let opts = UnpackOptions::default();
        let err = unpack_strict(&bytes, &opts).unwrap_err();
        assert!(matches!(
            err,
            StrictError::TrailingData {
                consumed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn strict_accepts_exact_consumption() {
        let bytes = [0xc0];
        let opts = UnpackOptions::default();
        assert_eq!(unpack_strict(&bytes, &opts).unwrap(), Value::Nil);
    }
}
