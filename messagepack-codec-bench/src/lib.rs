//! `Value` trees for the codec benchmarks, mirroring a spread of shapes a
//! real document might take: small and large primitives, strings, binary
//! blobs, arrays, and maps.

use messagepack_codec::{Int, Value};
use rand::distr::{Alphanumeric, Distribution};
use rand::Rng;

pub fn primitives() -> Value {
    let mut rng = rand::rng();
    Value::Array(vec![
        Value::from(rng.random::<i64>()),
        Value::Int(Int::Unsigned(rng.random::<u64>())),
        Value::from(rng.random::<f64>()),
        Value::Bool(rng.random()),
        Value::Nil,
    ])
}

pub fn strings() -> Value {
    Value::Array(vec![
        Value::from(include_str!("../data/lorem-ipsum.txt")),
        Value::from(include_str!("../data/jp-constitution.txt")),
        Value::from(include_str!("../data/raven.txt")),
    ])
}

pub fn bytes() -> Value {
    Value::Array(vec![
        Value::from(include_bytes!("../data/lorem-ipsum.txt").to_vec()),
        Value::from(include_bytes!("../data/jp-constitution.txt").to_vec()),
        Value::from(include_bytes!("../data/raven.txt").to_vec()),
    ])
}

pub fn map(len: usize) -> Value {
    let mut rng = rand::rng();
    let pairs = (0..len)
        .map(|_| {
            let key_len = rng.random_range(0..32);
            let key: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(key_len)
                .map(char::from)
                .collect();
            (Value::from(key), Value::from(rng.random::<i64>()))
        })
        .collect();
    Value::Map(pairs)
}

pub struct CompositeDocument;

impl Distribution<Value> for CompositeDocument {
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> Value {
        Value::Array(vec![primitives(), strings(), bytes(), map(64)])
    }
}

pub fn composite() -> Value {
    rand::rng().sample(CompositeDocument)
}
