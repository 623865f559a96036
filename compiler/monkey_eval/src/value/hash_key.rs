//! Hash keys for `HASH` values.

use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Which hashable variant a key was derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKeyTag {
    Integer,
    Boolean,
    String,
}

/// A `{tag, 64-bit hash}` pair derived from a hashable value's content.
///
/// Equal values always produce equal keys: integers use their bits,
/// booleans map to 0 and 1, and strings hash their UTF-8 bytes with
/// `FxHasher` (fixed seed, so keys are stable across runs).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub tag: HashKeyTag,
    pub hash: u64,
}

impl HashKey {
    pub fn integer(value: i64) -> Self {
        HashKey {
            tag: HashKeyTag::Integer,
            hash: u64::from_ne_bytes(value.to_ne_bytes()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        HashKey {
            tag: HashKeyTag::Boolean,
            hash: u64::from(value),
        }
    }

    pub fn string(value: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write(value.as_bytes());
        HashKey {
            tag: HashKeyTag::String,
            hash: hasher.finish(),
        }
    }
}
