//! Runtime values.
//!
//! `Value` is a closed set of variants. Scalars are stored inline; strings,
//! arrays, hashes and error messages live behind `Heap<T>` so that cloning
//! a value is cheap. `Heap::new` is private to this module: build heap
//! values with the factory methods (`Value::string`, `Value::array`,
//! `Value::hash`, `Value::error`).
//!
//! Values are immutable. Builtins such as `push` return new values rather
//! than changing their arguments.

mod function;
mod hash_key;
mod heap;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::builtins::Builtin;

pub use function::FunctionValue;
pub use hash_key::{HashKey, HashKeyTag};
pub use heap::Heap;

/// Entry of a `HASH` value: the original key is kept for printing.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Storage behind `Value::Hash`.
pub type HashPairs = FxHashMap<HashKey, HashPair>;

/// A Monkey runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Heap<String>),
    Null,
    /// A runtime failure, as returned to the caller of `eval_program`.
    Error(Heap<String>),
    Function(FunctionValue),
    Builtin(&'static Builtin),
    Array(Heap<Vec<Value>>),
    Hash(Heap<HashPairs>),
}

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);
    pub const NULL: Value = Value::Null;

    /// The canonical boolean for `value`.
    #[inline]
    pub fn from_bool(value: bool) -> Value {
        if value {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    pub fn string(value: impl Into<String>) -> Value {
        Value::String(Heap::new(value.into()))
    }

    pub fn array(elements: Vec<Value>) -> Value {
        Value::Array(Heap::new(elements))
    }

    pub fn hash(pairs: HashPairs) -> Value {
        Value::Hash(Heap::new(pairs))
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(Heap::new(message.into()))
    }

    /// Type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    /// `null` and `false` are falsy; everything else, `0` included, is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Key for use in a `HASH`, or `None` if this value is not hashable.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey::integer(*n)),
            Value::Boolean(b) => Some(HashKey::boolean(*b)),
            Value::String(s) => Some(HashKey::string(s)),
            _ => None,
        }
    }

    /// Human-readable rendering, as printed by the REPL.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
            Value::Error(message) => write!(f, "ERROR: {}", &**message),
            Value::Function(function) => write!(f, "{function}"),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Hash(pairs) => {
                f.write_str("{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::from_bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}
