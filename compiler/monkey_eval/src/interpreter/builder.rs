//! `InterpreterBuilder` for creating `Interpreter` instances with various
//! configurations.

use monkey_stack::DepthLimiter;

use super::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Default bound on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Resource limits for evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum nesting of function calls; `None` disables the check.
    pub max_call_depth: Option<usize>,
    /// Maximum number of expressions evaluated per program; `None` means
    /// unlimited.
    pub step_budget: Option<u64>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            step_budget: None,
        }
    }
}

/// Builder for `Interpreter`.
#[derive(Default)]
pub struct InterpreterBuilder {
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.config.max_call_depth = limit;
        self
    }

    #[must_use]
    pub fn step_budget(mut self, budget: Option<u64>) -> Self {
        self.config.step_budget = budget;
        self
    }

    /// Set the destination for `puts`. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            call_depth: DepthLimiter::new(self.config.max_call_depth),
            budget: None,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            config: self.config,
        }
    }
}
