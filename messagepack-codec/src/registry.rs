//! The process-wide extension registry: maps Rust types to ext codes for
//! packing, and ext codes back to unpack closures for extraction.
//!
//! Two indices: `TypeId -> (ext_code, pack_fn)` and `ext_code -> unpack_fn`.
//! Reads take a shared lock; registration takes
//! an exclusive lock — registration is expected at process start-up, lookups
//! on every pack/unpack call.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::error::Error;
use crate::options::{PackOptions, UnpackOptions};
use crate::pack::pack;
use crate::value::{ExtValue, Value};

type PackFn = Arc<dyn Fn(&dyn Any, &PackOptions) -> Result<Vec<u8>, Error> + Send + Sync>;
type UnpackFn =
    Arc<dyn Fn(&[u8], &UnpackOptions) -> Result<Box<dyn Any + Send>, Error> + Send + Sync>;

struct PackEntry {
    ext_code: i8,
    pack_fn: PackFn,
}

#[derive(Default)]
struct Registry {
    by_type: HashMap<TypeId, PackEntry>,
    by_code: HashMap<i8, UnpackFn>,
}

static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();

fn registry() -> &'static RwLock<Registry> {
    REGISTRY.get_or_init(|| RwLock::new(Registry::default()))
}

fn register_entry<T, P, U>(ext_code: i8, pack_fn: P, unpack_fn: U)
where
    T: Any + 'static,
    P: Fn(&T, &PackOptions) -> Result<Vec<u8>, Error> + Send + Sync + 'static,
    U: Fn(&[u8], &UnpackOptions) -> Result<T, Error> + Send + Sync + 'static,
{
    let type_id = TypeId::of::<T>();
    let boxed_pack: PackFn = Arc::new(move |value, opts| {
        let value = value
            .downcast_ref::<T>()
            .expect("registry dispatched to the wrong pack_fn for this type");
        pack_fn(value, opts)
    });
    let boxed_unpack: UnpackFn =
        Arc::new(move |data, opts| unpack_fn(data, opts).map(|v| Box::new(v) as Box<dyn Any + Send>));

    let mut reg = registry().write().expect("registry lock poisoned");
    if reg.by_type.contains_key(&type_id) {
        tracing::warn!(ext_code, "replacing existing extension pack registration for type");
    }
    if reg.by_code.contains_key(&ext_code) {
        tracing::warn!(ext_code, "replacing existing extension unpack registration for code");
    }
    reg.by_type.insert(
        type_id,
        PackEntry {
            ext_code,
            pack_fn: boxed_pack,
        },
    );
    reg.by_code.insert(ext_code, boxed_unpack);
}

/// Register crate-shipped support for `T` under `ext_code`. Distinct from
/// [`register_user`] only in caller intent — both populate the same
/// registry.
pub fn register_builtin<T, P, U>(ext_code: i8, pack_fn: P, unpack_fn: U)
where
    T: Any + 'static,
    P: Fn(&T, &PackOptions) -> Result<Vec<u8>, Error> + Send + Sync + 'static,
    U: Fn(&[u8], &UnpackOptions) -> Result<T, Error> + Send + Sync + 'static,
{
    register_entry(ext_code, pack_fn, unpack_fn);
}

/// Register application-defined support for `T` under `ext_code`.
pub fn register_user<T, P, U>(ext_code: i8, pack_fn: P, unpack_fn: U)
where
    T: Any + 'static,
    P: Fn(&T, &PackOptions) -> Result<Vec<u8>, Error> + Send + Sync + 'static,
    U: Fn(&[u8], &UnpackOptions) -> Result<T, Error> + Send + Sync + 'static,
{
    register_entry(ext_code, pack_fn, unpack_fn);
}

/// Pack a registered Rust type `T` as an `Ext` value, choosing fixext vs
/// ext8/16/32 by payload length exactly as [`crate::pack`] does for an
/// already-tagged [`Value::Ext`].
pub fn pack_ext<T: Any>(value: &T, opts: &PackOptions) -> Result<Vec<u8>, Error> {
    let type_id = TypeId::of::<T>();
    let (ext_code, payload) = {
        let reg = registry().read().expect("registry lock poisoned");
        let entry = reg.by_type.get(&type_id).ok_or(Error::UnsupportedType)?;
        ((entry.ext_code), (entry.pack_fn)(value, opts)?)
    };
    pack(
        &Value::Ext(ExtValue {
            type_code: ext_code,
            data: payload,
        }),
        opts,
    )
}

/// Decode a raw [`ExtValue`] (as returned by unpack) into a registered Rust
/// type `T`, using the unpack closure registered for `ext.type_code`.
pub fn unpack_ext<T: Any>(ext: &ExtValue, opts: &UnpackOptions) -> Result<T, Error> {
    let boxed = {
        let reg = registry().read().expect("registry lock poisoned");
        let unpack_fn = reg
            .by_code
            .get(&ext.type_code)
            .ok_or_else(|| Error::reserved_code(0, ext.type_code as u8))?
            .clone();
        unpack_fn(&ext.data, opts)?
    };
    boxed
        .downcast::<T>()
        .map(|b| *b)
        .map_err(|_| Error::UnsupportedType)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn pack_point(p: &Point, _opts: &PackOptions) -> Result<Vec<u8>, Error> {
        let mut data = Vec::with_capacity(8);
        data.extend_from_slice(&p.x.to_be_bytes());
        data.extend_from_slice(&p.y.to_be_bytes());
        Ok(data)
    }

    fn unpack_point(data: &[u8], _opts: &UnpackOptions) -> Result<Point, Error> {
        let x = i32::from_be_bytes(data[0..4].try_into().unwrap());
        let y = i32::from_be_bytes(data[4..8].try_into().unwrap());
        Ok(Point { x, y })
    }

    #[test]
    fn round_trips_a_registered_type() {
        register_user::<Point, _, _>(42, pack_point, unpack_point);
        let p = Point { x: 3, y: -7 };
        let bytes = pack_ext(&p, &PackOptions::default()).unwrap();
        let value = crate::unpack::unpack(&bytes, &UnpackOptions::default()).unwrap();
        let ext = value.as_ext().unwrap();
        assert_eq!(ext.type_code, 42);
        let back: Point = unpack_ext(ext, &UnpackOptions::default()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn unregistered_type_is_unsupported() {
        struct NotRegistered;
        let err = pack_ext(&NotRegistered, &PackOptions::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType));
    }
}
