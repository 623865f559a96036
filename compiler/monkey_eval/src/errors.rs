//! Evaluation errors and the return signal.
//!
//! Every evaluation step returns `EvalResult` and propagates failures with
//! `?`, so the first error in a sequence, operand pair or argument list
//! aborts the rest of it. A `return` statement travels the same channel as
//! `EvalError::Return` and is caught at the enclosing function call (or at
//! program level).

use monkey_ir::{InfixOp, PrefixOp};
use monkey_stack::DepthExceeded;

use crate::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, EvalError>;

/// Typed runtime failure. `Display` is the message a user sees after
/// `ERROR: `.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Names
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    // Operators
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: PrefixOp,
        operand: &'static str,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        operator: InfixOp,
        right: &'static str,
    },
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: InfixOp,
        right: &'static str,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Calls
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },
    #[error("wrong number of arguments: want={expected}, got={got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error(transparent)]
    RecursionLimit(#[from] DepthExceeded),
    #[error("evaluation step budget exceeded (limit: {limit})")]
    StepBudgetExceeded { limit: u64 },

    // Collections
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },
    #[error("unusable as hash key: {type_name}")]
    UnusableHashKey { type_name: &'static str },

    // Builtins
    #[error("wrong number of arguments. got={got}, want={want}")]
    BuiltinArity { got: usize, want: usize },
    #[error("argument to `len` not supported, got {type_name}")]
    LenNotSupported { type_name: &'static str },
    #[error("argument to `{builtin}` must be ARRAY, got {type_name}")]
    ExpectedArray {
        builtin: &'static str,
        type_name: &'static str,
    },
}

/// Why evaluation of a node stopped early.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalError {
    /// A runtime failure; aborts the whole program.
    Failed(EvalErrorKind),
    /// `return <value>`; unwinds to the nearest function call.
    Return(Value),
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::Failed(kind)
    }
}

impl From<DepthExceeded> for EvalError {
    fn from(exceeded: DepthExceeded) -> Self {
        EvalError::Failed(exceeded.into())
    }
}
