//! A MessagePack packer, recursive unpacker, streaming unpacker, and a
//! runtime extension registry mapping Rust types onto one-byte ext codes.
//!
//! No timestamp extension, no pre-2013 wire compatibility, no schema or
//! named-field layer atop the format — callers work with the tagged-union
//! [`Value`] directly.
//!
//! ```
//! use messagepack_codec::{dumps, loads, PackOptions, UnpackOptions, Value};
//!
//! let bytes = dumps(&Value::from("hello"), &PackOptions::default()).unwrap();
//! let value = loads(&bytes, &UnpackOptions::default()).unwrap();
//! assert_eq!(value.as_str(), Some("hello"));
//! ```

#![forbid(unsafe_code)]

mod decode_core;
mod error;
mod formats;
mod io;
mod options;
mod pack;
mod registry;
mod source;
mod stream;
mod unpack;
mod value;

pub use error::{Error, StrictError};
pub use io::IoWrite;
pub use options::{FloatPrecision, PackOptions, UnpackOptions};
pub use pack::{pack, pack_into};
pub use registry::{pack_ext, register_builtin, register_user, unpack_ext};
pub use stream::{stream_load, Observer};
pub use unpack::{unpack, unpack_reader, unpack_strict};
pub use value::{ExtValue, Int, Value};

/// Alias for [`pack`], for callers more familiar with `dumps`/`loads`
/// naming than `pack`/`unpack`.
pub fn dumps(value: &Value, opts: &PackOptions) -> Result<Vec<u8>, Error> {
    pack(value, opts)
}

/// Alias for [`pack_into`].
pub fn dump<W: IoWrite>(value: &Value, opts: &PackOptions, out: &mut W) -> Result<(), Error> {
    pack_into(value, opts, out)
}

/// Alias for [`unpack`].
pub fn loads(bytes: &[u8], opts: &UnpackOptions) -> Result<Value, Error> {
    unpack(bytes, opts)
}

/// Alias for [`unpack_strict`].
pub fn loads_strict(bytes: &[u8], opts: &UnpackOptions) -> Result<Value, StrictError> {
    unpack_strict(bytes, opts)
}

/// Alias for [`unpack_reader`].
pub fn load<R: std::io::Read>(reader: &mut R, opts: &UnpackOptions) -> Result<Value, Error> {
    unpack_reader(reader, opts)
}
