//! Tree-walking interpreter.
//!
//! - `mod.rs`: the `Interpreter` type, programs, statements and blocks
//! - `expr.rs`: expression evaluation
//! - `function_call.rs`: closure and builtin calls
//! - `builder.rs`: `InterpreterBuilder` and `EvalConfig`

mod builder;
mod expr;
mod function_call;

use monkey_ir::{BlockStatement, Program, Statement, StatementKind};
use monkey_stack::DepthLimiter;
use tracing::debug;

use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, EvalErrorKind, EvalResult, Value};

pub use builder::{EvalConfig, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

/// Remaining evaluation steps when a budget is configured.
#[derive(Clone, Copy, Debug)]
struct StepBudget {
    limit: u64,
    remaining: u64,
}

/// Evaluates programs against a caller-owned environment.
///
/// One interpreter can run many programs (a REPL runs every line through
/// the same one); the call-depth counter and step budget are reset at the
/// start of each `eval_program`.
pub struct Interpreter {
    config: EvalConfig,
    print_handler: SharedPrintHandler,
    call_depth: DepthLimiter,
    budget: Option<StepBudget>,
}

impl Interpreter {
    /// Interpreter with the default configuration, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Where `puts` writes.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate `program` in `env`.
    ///
    /// Returns the value of the last statement, the operand of a top-level
    /// `return`, or `Value::Error` if evaluation failed. Bindings made
    /// before a failure stay in `env`.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Value {
        self.call_depth = DepthLimiter::new(self.config.max_call_depth);
        self.budget = self
            .config
            .step_budget
            .map(|limit| StepBudget { limit, remaining: limit });

        match self.eval_statements(&program.statements, env) {
            Ok(value) | Err(EvalError::Return(value)) => value,
            Err(EvalError::Failed(kind)) => {
                debug!(error = %kind, "evaluation failed");
                Value::error(kind.to_string())
            }
        }
    }

    /// Evaluate a block in `env` itself; blocks do not open a scope.
    pub(crate) fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        self.eval_statements(&block.statements, env)
    }

    /// Evaluate in order, stopping at the first error or `return`.
    fn eval_statements(&mut self, statements: &[Statement], env: &Environment) -> EvalResult {
        let mut result = Value::NULL;
        for statement in statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> EvalResult {
        match &statement.kind {
            StatementKind::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.name.as_str(), value);
                Ok(Value::NULL)
            }
            StatementKind::Return { value } => {
                let value = match value {
                    Some(expr) => self.eval_expression(expr, env)?,
                    None => Value::NULL,
                };
                Err(EvalError::Return(value))
            }
            StatementKind::Expression(expr) => self.eval_expression(expr, env),
        }
    }

    /// Charge one step against the budget, if there is one.
    fn tick(&mut self) -> Result<(), EvalErrorKind> {
        if let Some(budget) = &mut self.budget {
            if budget.remaining == 0 {
                debug!(limit = budget.limit, "step budget exhausted");
                return Err(EvalErrorKind::StepBudgetExceeded {
                    limit: budget.limit,
                });
            }
            budget.remaining = budget.remaining.saturating_sub(1);
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
