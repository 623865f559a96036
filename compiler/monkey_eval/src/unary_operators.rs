//! Prefix operators.

use monkey_ir::PrefixOp;

use crate::{EvalErrorKind, Value};

/// Apply `operator` to an evaluated operand.
///
/// `!` works on any value through truthiness; `-` only on integers.
pub fn evaluate_unary(operator: PrefixOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match (operator, operand) {
        (PrefixOp::Not, value) => Ok(Value::from_bool(!value.is_truthy())),
        (PrefixOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or(EvalErrorKind::IntegerOverflow {
                operation: "negation",
            }),
        (PrefixOp::Neg, value) => Err(EvalErrorKind::UnknownPrefixOperator {
            operator,
            operand: value.type_name(),
        }),
    }
}
