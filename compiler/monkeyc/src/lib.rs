//! Monkey front end.
//!
//! Glue between source text and the evaluator: `run_source` parses and
//! evaluates one unit against a caller-owned environment, `Session` keeps
//! that environment alive across units (the REPL), and `commands` holds
//! the CLI subcommands used by the `monkey` binary.

pub mod commands;
mod error;

use std::fmt;
use std::sync::Once;

use monkey_eval::{Environment, Interpreter, Value};
use tracing::debug;

pub use error::CliError;

/// Result of running one source unit.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The unit parsed and was evaluated. A runtime failure is a
    /// `Value::Error`.
    Value(Value),
    /// The unit did not parse; nothing was evaluated.
    ParseErrors(Vec<String>),
}

impl Outcome {
    /// False for parse errors and for runtime errors.
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Value(value) => !value.is_error(),
            Outcome::ParseErrors(_) => false,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Outcome::ParseErrors(_))
    }
}

/// A value renders as its inspect form; parse errors as a tab-indented
/// list, one per line.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{value}"),
            Outcome::ParseErrors(errors) => {
                for (i, message) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "\t{message}")?;
                }
                Ok(())
            }
        }
    }
}

/// Parse `source` and, if it parsed cleanly, evaluate it in `env`.
pub fn run_source(source: &str, env: &Environment, interpreter: &mut Interpreter) -> Outcome {
    let output = monkey_parse::parse(source);
    if output.has_errors() {
        debug!(errors = output.errors.len(), "not evaluating: parse errors");
        return Outcome::ParseErrors(output.errors.iter().map(ToString::to_string).collect());
    }
    Outcome::Value(interpreter.eval_program(&output.program, env))
}

/// An environment and interpreter reused across source units, so that
/// bindings made by one unit are visible to the next.
pub struct Session {
    env: Environment,
    interpreter: Interpreter,
}

impl Session {
    pub fn new(interpreter: Interpreter) -> Self {
        Session {
            env: Environment::new(),
            interpreter,
        }
    }

    /// Run one unit in the session's environment.
    pub fn eval(&mut self, source: &str) -> Outcome {
        run_source(source, &self.env, &mut self.interpreter)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Interpreter::new())
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set; spans and events are then
/// rendered as an indented tree on stderr. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        }
    });
}
