//! Evaluator tests driven by source text.
//!
//! - `eval_tests`: literals, operators, conditionals, errors, collections
//! - `closure_tests`: function values, scoping and recursion
//! - `limits_tests`: call depth, step budget and deep nesting
//! - `property_tests`: universally quantified behavior

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::arithmetic_side_effects
)]

mod eval_tests;
mod limits_tests;

use crate::print_handler::buffer_handler;
use crate::{Environment, Interpreter, Value};

/// Parse `source`, failing the test on any parse error.
pub(crate) fn parse_program(source: &str) -> monkey_ir::Program {
    let output = monkey_parse::parse(source);
    assert!(
        output.errors.is_empty(),
        "parse errors for {source:?}: {:?}",
        output.errors
    );
    output.program
}

/// Evaluate `source` in a fresh environment with captured output.
pub(crate) fn eval(source: &str) -> Value {
    let mut interpreter = Interpreter::builder()
        .print_handler(buffer_handler())
        .build();
    interpreter.eval_program(&parse_program(source), &Environment::new())
}

/// Evaluate `source` and render the result as the REPL would.
pub(crate) fn eval_inspect(source: &str) -> String {
    eval(source).inspect()
}
