#![deny(clippy::arithmetic_side_effects)]
//! Monkey Eval - tree-walking evaluator for Monkey programs.
//!
//! # Architecture
//!
//! - `Interpreter`: walks the AST; built with `InterpreterBuilder`
//! - `Environment`: shared, parent-linked scopes; closures capture one
//! - `Value`: closed set of runtime values, with `HashKey` for hashes
//! - `evaluate_binary` / `evaluate_unary`: operator dispatch on operand
//!   types
//! - builtins: a fixed fallback table behind identifier lookup
//!
//! # Errors
//!
//! Inside the evaluator every step returns `EvalResult` and propagates
//! with `?`. `Interpreter::eval_program` turns a failure into
//! `Value::Error`, which is what hosts print.

mod builtins;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
pub mod value;

pub use builtins::{builtin_names, lookup_builtin, Builtin, BuiltinFn};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{EvalConfig, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, HashKey, HashKeyTag, HashPair, Heap, Value};

#[cfg(test)]
mod tests;
