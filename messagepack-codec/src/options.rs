//! Pack/unpack configuration. Plain, `Copy` structs — no environment or
//! file-based configuration layer; every knob is an explicit argument.

/// Controls which wire width `pack` chooses for `Value::Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatPrecision {
    /// Resolve once per pack call to `Double` — Rust's native float width.
    #[default]
    Auto,
    /// Always emit `float32`, narrowing the stored `f64` (lossy).
    Single,
    /// Always emit `float64`.
    Double,
}

/// Options consulted by [`crate::pack`]/[`crate::dumps`]/[`crate::dump`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PackOptions {
    pub force_float_precision: FloatPrecision,
}

/// Options consulted by the unpacker, sync or streaming.
#[derive(Debug, Clone, Copy)]
pub struct UnpackOptions {
    /// When a `str` field is not valid UTF-8: if `true`, the field is
    /// returned as `Value::Bin` instead of failing with `InvalidString`.
    pub allow_invalid_utf8: bool,
    /// Reserved for API parity with the source model's "preserve dict
    /// insertion order" toggle. `Value::Map` is always a `Vec` of pairs in
    /// encounter order regardless of this flag, so it has no observable
    /// effect on this codec's output — it exists only so callers porting
    /// option sets from the original codec have somewhere to put it.
    pub use_ordered_dict: bool,
    /// Reserved for API parity with the source model's list-vs-tuple
    /// distinction. Rust has no analogous mutable/immutable sequence split
    /// at the `Value` level, so `Value::Array` is unaffected either way.
    pub use_tuple: bool,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        UnpackOptions {
            allow_invalid_utf8: false,
            use_ordered_dict: false,
            use_tuple: false,
        }
    }
}
