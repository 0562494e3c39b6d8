//! The single recursive decoder, generic over [`ByteSource`]. Both the sync
//! front end and the streaming front end call [`decode_value`]; the only
//! difference between them is which `ByteSource` they hand it.

use std::future::Future;
use std::pin::Pin;

use crate::error::Error;
use crate::formats::Format;
use crate::options::UnpackOptions;
use crate::source::ByteSource;
use crate::value::{ExtValue, Int, Value};

macro_rules! read_be {
    ($name:ident, $ty:ty) => {
        async fn $name(src: &mut impl ByteSource) -> Result<$ty, Error> {
            const SIZE: usize = core::mem::size_of::<$ty>();
            let offset = src.offset();
            let bytes = src.read_exact(SIZE).await?;
            let arr: [u8; SIZE] = bytes
                .try_into()
                .map_err(|_| Error::insufficient_data(offset))?;
            Ok(<$ty>::from_be_bytes(arr))
        }
    };
}

read_be!(read_u16, u16);
read_be!(read_u32, u32);
read_be!(read_u64, u64);
read_be!(read_i8, i8);
read_be!(read_i16, i16);
read_be!(read_i32, i32);
read_be!(read_i64, i64);
read_be!(read_f32, f32);
read_be!(read_f64, f64);

async fn read_u8(src: &mut impl ByteSource) -> Result<u8, Error> {
    Ok(src.read_exact(1).await?[0])
}

/// Decode one value, starting from its marker byte.
///
/// Boxed because the recursion (array/map elements, ext payload) would
/// otherwise produce an infinitely-sized future type.
pub(crate) fn decode_value<'a, S: ByteSource>(
    src: &'a mut S,
    opts: &'a UnpackOptions,
) -> Pin<Box<dyn Future<Output = Result<Value, Error>> + 'a>> {
    Box::pin(async move {
        let offset = src.offset();
        let marker = read_u8(src).await?;
        let format = Format::from_byte(marker);
        decode_with_format(format, src, opts, offset).await
    })
}

fn decode_with_format<'a, S: ByteSource>(
    format: Format,
    src: &'a mut S,
    opts: &'a UnpackOptions,
    offset: usize,
) -> Pin<Box<dyn Future<Output = Result<Value, Error>> + 'a>> {
    Box::pin(async move {
        match format {
            Format::Nil => Ok(Value::Nil),
            Format::True => Ok(Value::Bool(true)),
            Format::False => Ok(Value::Bool(false)),
            Format::NeverUsed => Err(Error::reserved_code(offset, format.as_byte())),

            Format::PositiveFixInt(v) => Ok(Value::Int(Int::Unsigned(v as u64))),
            Format::NegativeFixInt(v) => Ok(Value::Int(Int::Signed(v as i64))),
            Format::Uint8 => Ok(Value::Int(Int::Unsigned(read_u8(src).await? as u64))),
            Format::Uint16 => Ok(Value::Int(Int::Unsigned(read_u16(src).await? as u64))),
            Format::Uint32 => Ok(Value::Int(Int::Unsigned(read_u32(src).await? as u64))),
            Format::Uint64 => Ok(Value::Int(Int::Unsigned(read_u64(src).await?))),
            Format::Int8 => Ok(Value::Int(Int::Signed(read_i8(src).await? as i64))),
            Format::Int16 => Ok(Value::Int(Int::Signed(read_i16(src).await? as i64))),
            Format::Int32 => Ok(Value::Int(Int::Signed(read_i32(src).await? as i64))),
            Format::Int64 => Ok(Value::Int(Int::Signed(read_i64(src).await?))),

            Format::Float32 => Ok(Value::Float(read_f32(src).await? as f64)),
            Format::Float64 => Ok(Value::Float(read_f64(src).await?)),

            Format::FixStr(n) => decode_str(src, n as usize, opts, offset).await,
            Format::Str8 => {
                let len = read_u8(src).await? as usize;
                decode_str(src, len, opts, offset).await
            }
            Format::Str16 => {
                let len = read_u16(src).await? as usize;
                decode_str(src, len, opts, offset).await
            }
            Format::Str32 => {
                let len = read_u32(src).await? as usize;
                decode_str(src, len, opts, offset).await
            }

            Format::Bin8 => {
                let len = read_u8(src).await? as usize;
                Ok(Value::Bin(src.read_exact(len).await?))
            }
            Format::Bin16 => {
                let len = read_u16(src).await? as usize;
                Ok(Value::Bin(src.read_exact(len).await?))
            }
            Format::Bin32 => {
                let len = read_u32(src).await? as usize;
                Ok(Value::Bin(src.read_exact(len).await?))
            }

            Format::FixArray(n) => decode_array(src, n as usize, opts).await,
            Format::Array16 => {
                let len = read_u16(src).await? as usize;
                decode_array(src, len, opts).await
            }
            Format::Array32 => {
                let len = read_u32(src).await? as usize;
                decode_array(src, len, opts).await
            }

            Format::FixMap(n) => decode_map(src, n as usize, opts).await,
            Format::Map16 => {
                let len = read_u16(src).await? as usize;
                decode_map(src, len, opts).await
            }
            Format::Map32 => {
                let len = read_u32(src).await? as usize;
                decode_map(src, len, opts).await
            }

            Format::FixExt1 => decode_ext(src, 1, offset).await,
            Format::FixExt2 => decode_ext(src, 2, offset).await,
            Format::FixExt4 => decode_ext(src, 4, offset).await,
            Format::FixExt8 => decode_ext(src, 8, offset).await,
            Format::FixExt16 => decode_ext(src, 16, offset).await,
            Format::Ext8 => {
                let len = read_u8(src).await? as usize;
                decode_ext(src, len, offset).await
            }
            Format::Ext16 => {
                let len = read_u16(src).await? as usize;
                decode_ext(src, len, offset).await
            }
            Format::Ext32 => {
                let len = read_u32(src).await? as usize;
                decode_ext(src, len, offset).await
            }
        }
    })
}

async fn decode_str<S: ByteSource>(
    src: &mut S,
    len: usize,
    opts: &UnpackOptions,
    offset: usize,
) -> Result<Value, Error> {
    let bytes = src.read_exact(len).await?;
    match String::from_utf8(bytes) {
        Ok(s) => Ok(Value::Str(s)),
        Err(err) if opts.allow_invalid_utf8 => Ok(Value::Bin(err.into_bytes())),
        Err(_) => Err(Error::invalid_string(offset)),
    }
}

async fn decode_array<S: ByteSource>(
    src: &mut S,
    len: usize,
    opts: &UnpackOptions,
) -> Result<Value, Error> {
    let mut items = Vec::with_capacity(len.min(1 << 16));
    for _ in 0..len {
        items.push(decode_value(src, opts).await?);
    }
    Ok(Value::Array(items))
}

async fn decode_map<S: ByteSource>(
    src: &mut S,
    len: usize,
    opts: &UnpackOptions,
) -> Result<Value, Error> {
    let mut pairs: Vec<(Value, Value)> = Vec::with_capacity(len.min(1 << 16));
    for _ in 0..len {
        let key_offset = src.offset();
        let key = decode_value(src, opts).await?;
        if key.is_unhashable() {
            return Err(Error::unhashable_key(key_offset));
        }
        if pairs.iter().any(|(existing, _)| existing == &key) {
            return Err(Error::duplicate_key(key_offset));
        }
        let value = decode_value(src, opts).await?;
        pairs.push((key, value));
    }
    Ok(Value::Map(pairs))
}

async fn decode_ext<S: ByteSource>(
    src: &mut S,
    len: usize,
    offset: usize,
) -> Result<Value, Error> {
    let type_code = read_i8(src).await?;
    let data = src.read_exact(len).await?;
    if type_code < 0 {
        // This codec implements no reserved (timestamp or otherwise)
        // extension types; every negative type code is rejected.
        return Err(Error::reserved_code(offset, type_code as u8));
    }
    Ok(Value::Ext(ExtValue { type_code, data }))
}
