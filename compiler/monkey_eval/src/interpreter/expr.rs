//! Expression evaluation.

use std::rc::Rc;

use monkey_ir::{Expression, ExpressionKind};
use monkey_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::builtins::lookup_builtin;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::{FunctionValue, HashPair, HashPairs};
use crate::{Environment, EvalError, EvalErrorKind, EvalResult, Value};

impl Interpreter {
    /// Evaluate an expression.
    ///
    /// Nested expressions recurse through here, so the native stack is
    /// grown on demand.
    pub(crate) fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        self.tick()?;

        match &expr.kind {
            ExpressionKind::Integer(n) => Ok(Value::Integer(*n)),
            ExpressionKind::Boolean(b) => Ok(Value::from_bool(*b)),
            ExpressionKind::String(s) => Ok(Value::string(s.as_str())),
            ExpressionKind::Identifier(name) => eval_identifier(name, env),
            ExpressionKind::Prefix { operator, operand } => {
                let operand = self.eval_expression(operand, env)?;
                Ok(evaluate_unary(*operator, &operand)?)
            }
            ExpressionKind::Infix {
                operator,
                left,
                right,
            } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_binary(&left, *operator, &right)?)
            }
            ExpressionKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Value::NULL)
                }
            }
            ExpressionKind::Function(literal) => Ok(Value::Function(FunctionValue::new(
                Rc::clone(literal),
                env.clone(),
            ))),
            ExpressionKind::Call { callee, arguments } => {
                let callee = self.eval_expression(callee, env)?;
                let args = self.eval_expressions(arguments, env)?;
                self.apply_function(callee, &args)
            }
            ExpressionKind::Array(elements) => {
                Ok(Value::array(self.eval_expressions(elements, env)?))
            }
            ExpressionKind::Index { collection, index } => {
                let collection = self.eval_expression(collection, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(eval_index(&collection, &index)?)
            }
            ExpressionKind::Hash(pairs) => self.eval_hash_literal(pairs, env),
        }
    }

    /// Evaluate left to right, stopping at the first failure.
    fn eval_expressions(
        &mut self,
        exprs: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Value>, EvalError> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    /// Later duplicate keys overwrite earlier ones.
    fn eval_hash_literal(
        &mut self,
        pairs: &[(Expression, Expression)],
        env: &Environment,
    ) -> EvalResult {
        let mut map = HashPairs::default();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = key.hash_key().ok_or(EvalErrorKind::UnusableHashKey {
                type_name: key.type_name(),
            })?;
            let value = self.eval_expression(value_expr, env)?;
            map.insert(hash_key, HashPair { key, value });
        }
        Ok(Value::hash(map))
    }
}

/// Environment chain first, then the builtin table.
fn eval_identifier(name: &str, env: &Environment) -> EvalResult {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(builtin) = lookup_builtin(name) {
        return Ok(Value::Builtin(builtin));
    }
    Err(EvalErrorKind::IdentifierNotFound {
        name: name.to_owned(),
    }
    .into())
}

/// `collection[index]`. Missing elements and keys are `null`.
///
/// A hash entry matches only if its stored key equals `index`; sharing
/// the 64-bit `HashKey` is not enough.
fn eval_index(collection: &Value, index: &Value) -> Result<Value, EvalErrorKind> {
    match (collection, index) {
        (Value::Array(elements), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Value::NULL)),
        (Value::Hash(pairs), key) => {
            let hash_key = key.hash_key().ok_or(EvalErrorKind::UnusableHashKey {
                type_name: key.type_name(),
            })?;
            Ok(pairs
                .get(&hash_key)
                .filter(|pair| pair.key == *key)
                .map_or(Value::NULL, |pair| pair.value.clone()))
        }
        (other, _) => Err(EvalErrorKind::IndexNotSupported {
            type_name: other.type_name(),
        }),
    }
}
