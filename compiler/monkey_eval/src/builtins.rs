//! Builtin functions.
//!
//! A fixed table consulted after identifier lookup misses every scope, so
//! a user binding with the same name shadows the builtin.

use std::fmt;

use tracing::debug;

use crate::print_handler::PrintHandlerImpl;
use crate::{EvalErrorKind, Value};

/// Native implementation of a builtin.
///
/// Builtins check their own arity and argument types.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, EvalErrorKind>;

/// A named native function.
pub struct Builtin {
    pub name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub fn call(&self, args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
        debug!(builtin = self.name, args = args.len(), "call builtin");
        (self.func)(args, out)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

static BUILTINS: [Builtin; 6] = [
    Builtin {
        name: "len",
        func: len,
    },
    Builtin {
        name: "first",
        func: first,
    },
    Builtin {
        name: "last",
        func: last,
    },
    Builtin {
        name: "rest",
        func: rest,
    },
    Builtin {
        name: "push",
        func: push,
    },
    Builtin {
        name: "puts",
        func: puts,
    },
];

/// Find a builtin by name.
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// Names of every builtin, in table order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name)
}

fn check_arity(args: &[Value], want: usize) -> Result<(), EvalErrorKind> {
    if args.len() == want {
        Ok(())
    } else {
        Err(EvalErrorKind::BuiltinArity {
            got: args.len(),
            want,
        })
    }
}

fn expect_array<'a>(builtin: &'static str, value: &'a Value) -> Result<&'a [Value], EvalErrorKind> {
    match value {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(EvalErrorKind::ExpectedArray {
            builtin,
            type_name: other.type_name(),
        }),
    }
}

fn length(n: usize) -> Value {
    Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn len(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    check_arity(args, 1)?;
    match &args[0] {
        Value::String(s) => Ok(length(s.len())),
        Value::Array(elements) => Ok(length(elements.len())),
        Value::Hash(pairs) => Ok(length(pairs.len())),
        other => Err(EvalErrorKind::LenNotSupported {
            type_name: other.type_name(),
        }),
    }
}

fn first(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    check_arity(args, 1)?;
    let elements = expect_array("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(Value::NULL))
}

fn last(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    check_arity(args, 1)?;
    let elements = expect_array("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(Value::NULL))
}

fn rest(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    check_arity(args, 1)?;
    let elements = expect_array("rest", &args[0])?;
    match elements.split_first() {
        Some((_, tail)) => Ok(Value::array(tail.to_vec())),
        None => Ok(Value::NULL),
    }
}

fn push(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    check_arity(args, 2)?;
    let elements = expect_array("push", &args[0])?;
    let mut extended = Vec::with_capacity(elements.len().saturating_add(1));
    extended.extend_from_slice(elements);
    extended.push(args[1].clone());
    Ok(Value::array(extended))
}

fn puts(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    for arg in args {
        out.println(&arg.inspect());
    }
    Ok(Value::NULL)
}
