//! The packer: encodes a [`Value`] using the mandatory minimal-width rule
//! (the smallest format family that represents the value).

use crate::error::Error;
use crate::formats::Format;
use crate::io::IoWrite;
use crate::options::{FloatPrecision, PackOptions};
use crate::value::{ExtValue, Int, Value};

/// Encode `value` into a freshly allocated buffer.
pub fn pack(value: &Value, opts: &PackOptions) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    pack_into(value, opts, &mut buf)?;
    Ok(buf)
}

/// Encode `value` into `out`.
pub fn pack_into<W: IoWrite>(value: &Value, opts: &PackOptions, out: &mut W) -> Result<(), Error> {
    match value {
        Value::Nil => write_format(out, Format::Nil),
        Value::Bool(true) => write_format(out, Format::True),
        Value::Bool(false) => write_format(out, Format::False),
        Value::Int(i) => pack_int(*i, out),
        Value::Float(f) => pack_float(*f, opts, out),
        Value::Str(s) => pack_str(s, out),
        Value::Bin(b) => pack_bin(b, out),
        Value::Array(items) => pack_array(items, opts, out),
        Value::Map(pairs) => pack_map(pairs, opts, out),
        Value::Ext(ext) => pack_ext_raw(ext, out),
    }
}

fn write_format<W: IoWrite>(out: &mut W, format: Format) -> Result<(), Error> {
    out.write(&format.as_slice()).map_err(Error::io)
}

fn write_bytes<W: IoWrite>(out: &mut W, bytes: &[u8]) -> Result<(), Error> {
    out.write(bytes).map_err(Error::io)
}

fn pack_int<W: IoWrite>(value: Int, out: &mut W) -> Result<(), Error> {
    match value {
        Int::Unsigned(v) => pack_uint(v, out),
        Int::Signed(v) if v >= 0 => pack_uint(v as u64, out),
        Int::Signed(v) => pack_negint(v, out),
    }
}

fn pack_uint<W: IoWrite>(v: u64, out: &mut W) -> Result<(), Error> {
    match v {
        0..=0x7f => write_format(out, Format::PositiveFixInt(v as u8)),
        0x80..=0xff => {
            write_format(out, Format::Uint8)?;
            write_bytes(out, &(v as u8).to_be_bytes())
        }
        0x100..=0xffff => {
            write_format(out, Format::Uint16)?;
            write_bytes(out, &(v as u16).to_be_bytes())
        }
        0x1_0000..=0xffff_ffff => {
            write_format(out, Format::Uint32)?;
            write_bytes(out, &(v as u32).to_be_bytes())
        }
        _ => {
            write_format(out, Format::Uint64)?;
            write_bytes(out, &v.to_be_bytes())
        }
    }
}

fn pack_negint<W: IoWrite>(v: i64, out: &mut W) -> Result<(), Error> {
    match v {
        -32..=-1 => write_format(out, Format::NegativeFixInt(v as i8)),
        -128..=-33 => {
            write_format(out, Format::Int8)?;
            write_bytes(out, &(v as i8).to_be_bytes())
        }
        -32768..=-129 => {
            write_format(out, Format::Int16)?;
            write_bytes(out, &(v as i16).to_be_bytes())
        }
        -2_147_483_648..=-32769 => {
            write_format(out, Format::Int32)?;
            write_bytes(out, &(v as i32).to_be_bytes())
        }
        _ => {
            write_format(out, Format::Int64)?;
            write_bytes(out, &v.to_be_bytes())
        }
    }
}

fn pack_float<W: IoWrite>(v: f64, opts: &PackOptions, out: &mut W) -> Result<(), Error> {
    let emit_single = match opts.force_float_precision {
        FloatPrecision::Single => true,
        FloatPrecision::Double | FloatPrecision::Auto => false,
    };
    if emit_single {
        write_format(out, Format::Float32)?;
        write_bytes(out, &(v as f32).to_be_bytes())
    } else {
        write_format(out, Format::Float64)?;
        write_bytes(out, &v.to_be_bytes())
    }
}

fn pack_str<W: IoWrite>(s: &str, out: &mut W) -> Result<(), Error> {
    let bytes = s.as_bytes();
    pack_len_prefixed(
        bytes.len(),
        out,
        |n| Format::FixStr(n as u8),
        Format::Str8,
        Format::Str16,
        Format::Str32,
        31,
    )?;
    write_bytes(out, bytes)
}

fn pack_bin<W: IoWrite>(b: &[u8], out: &mut W) -> Result<(), Error> {
    let len = b.len();
    match len {
        0..=0xff => {
            write_format(out, Format::Bin8)?;
            write_bytes(out, &(len as u8).to_be_bytes())?;
        }
        0x100..=0xffff => {
            write_format(out, Format::Bin16)?;
            write_bytes(out, &(len as u16).to_be_bytes())?;
        }
        0x1_0000..=0xffff_ffff => {
            write_format(out, Format::Bin32)?;
            write_bytes(out, &(len as u32).to_be_bytes())?;
        }
        _ => return Err(Error::UnsupportedType),
    }
    write_bytes(out, b)
}

#[allow(clippy::too_many_arguments)]
fn pack_len_prefixed<W: IoWrite>(
    len: usize,
    out: &mut W,
    fix: impl FnOnce(usize) -> Format,
    fmt8: Format,
    fmt16: Format,
    fmt32: Format,
    fix_max: usize,
) -> Result<(), Error> {
    match len {
        n if n <= fix_max => write_format(out, fix(n)),
        0..=0xff => {
            write_format(out, fmt8)?;
            write_bytes(out, &(len as u8).to_be_bytes())
        }
        0x100..=0xffff => {
            write_format(out, fmt16)?;
            write_bytes(out, &(len as u16).to_be_bytes())
        }
        0x1_0000..=0xffff_ffff => {
            write_format(out, fmt32)?;
            write_bytes(out, &(len as u32).to_be_bytes())
        }
        _ => Err(Error::UnsupportedType),
    }
}

/// `array`/`map` only have a fix family plus 16- and 32-bit widths (no
/// 8-bit family, unlike `str`/`bin`), so they share this two-tier helper
/// instead of [`pack_len_prefixed`].
fn pack_len16_32<W: IoWrite>(
    len: usize,
    out: &mut W,
    fix: impl FnOnce(usize) -> Format,
    fmt16: Format,
    fmt32: Format,
    fix_max: usize,
) -> Result<(), Error> {
    match len {
        n if n <= fix_max => write_format(out, fix(n)),
        0..=0xffff => {
            write_format(out, fmt16)?;
            write_bytes(out, &(len as u16).to_be_bytes())
        }
        0x1_0000..=0xffff_ffff => {
            write_format(out, fmt32)?;
            write_bytes(out, &(len as u32).to_be_bytes())
        }
        _ => Err(Error::UnsupportedType),
    }
}

fn pack_array<W: IoWrite>(items: &[Value], opts: &PackOptions, out: &mut W) -> Result<(), Error> {
    pack_len16_32(
        items.len(),
        out,
        |n| Format::FixArray(n as u8),
        Format::Array16,
        Format::Array32,
        15,
    )?;
    for item in items {
        pack_into(item, opts, out)?;
    }
    Ok(())
}

fn pack_map<W: IoWrite>(
    pairs: &[(Value, Value)],
    opts: &PackOptions,
    out: &mut W,
) -> Result<(), Error> {
    pack_len16_32(
        pairs.len(),
        out,
        |n| Format::FixMap(n as u8),
        Format::Map16,
        Format::Map32,
        15,
    )?;
    for (k, v) in pairs {
        pack_into(k, opts, out)?;
        pack_into(v, opts, out)?;
    }
    Ok(())
}

pub(crate) fn pack_ext_raw<W: IoWrite>(ext: &ExtValue, out: &mut W) -> Result<(), Error> {
    let len = ext.data.len();
    match len {
        1 => write_format(out, Format::FixExt1)?,
        2 => write_format(out, Format::FixExt2)?,
        4 => write_format(out, Format::FixExt4)?,
        8 => write_format(out, Format::FixExt8)?,
        16 => write_format(out, Format::FixExt16)?,
        0..=0xff => {
            write_format(out, Format::Ext8)?;
            write_bytes(out, &(len as u8).to_be_bytes())?;
        }
        0x100..=0xffff => {
            write_format(out, Format::Ext16)?;
            write_bytes(out, &(len as u16).to_be_bytes())?;
        }
        0x1_0000..=0xffff_ffff => {
            write_format(out, Format::Ext32)?;
            write_bytes(out, &(len as u32).to_be_bytes())?;
        }
        _ => return Err(Error::UnsupportedType),
    }
    write_bytes(out, &ext.type_code.to_be_bytes())?;
    write_bytes(out, &ext.data)
}
