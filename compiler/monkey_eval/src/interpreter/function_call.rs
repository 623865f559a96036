//! Function application.

use monkey_stack::ensure_sufficient_stack;
use tracing::debug;

use super::Interpreter;
use crate::value::FunctionValue;
use crate::{Environment, EvalError, EvalErrorKind, EvalResult, Value};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    pub(crate) fn apply_function(&mut self, callee: Value, args: &[Value]) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(&function, args),
            Value::Builtin(builtin) => Ok(builtin.call(args, &self.print_handler)?),
            other => Err(EvalErrorKind::NotAFunction {
                type_name: other.type_name(),
            }
            .into()),
        }
    }

    /// Run a closure body in a fresh scope whose parent is the closure's
    /// captured environment.
    fn call_function(&mut self, function: &FunctionValue, args: &[Value]) -> EvalResult {
        let params = function.parameters();
        if params.len() != args.len() {
            return Err(EvalErrorKind::ArityMismatch {
                expected: params.len(),
                got: args.len(),
            }
            .into());
        }

        if let Err(exceeded) = self.call_depth.enter() {
            debug!(limit = exceeded.limit, "call depth limit reached");
            return Err(exceeded.into());
        }
        debug!(depth = self.call_depth.depth(), arity = args.len(), "call");

        let call_env = Environment::enclosed(function.env());
        for (param, arg) in params.iter().zip(args) {
            call_env.set(param.name.as_str(), arg.clone());
        }

        let result = ensure_sufficient_stack(|| self.eval_block(function.body(), &call_env));
        self.call_depth.leave();

        match result {
            Ok(value) | Err(EvalError::Return(value)) => Ok(value),
            Err(failed) => Err(failed),
        }
    }
}
