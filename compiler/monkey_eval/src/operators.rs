//! Binary operators.
//!
//! Operands are dispatched on their type pair:
//! - `INTEGER op INTEGER`: checked arithmetic and comparisons
//! - `STRING + STRING`: concatenation
//! - `BOOLEAN ==/!= BOOLEAN`
//!
//! Any other pair is a type mismatch when the types differ and an unknown
//! operator when they agree.

use monkey_ir::InfixOp;

use crate::{EvalErrorKind, Value};

/// Apply `operator` to two evaluated operands.
pub fn evaluate_binary(
    left: &Value,
    operator: InfixOp,
    right: &Value,
) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(*l, operator, *r),
        (Value::String(l), Value::String(r)) if operator == InfixOp::Add => {
            let mut joined = String::with_capacity(l.len().saturating_add(r.len()));
            joined.push_str(l);
            joined.push_str(r);
            Ok(Value::string(joined))
        }
        (Value::Boolean(l), Value::Boolean(r)) => match operator {
            InfixOp::Eq => Ok(Value::from_bool(l == r)),
            InfixOp::NotEq => Ok(Value::from_bool(l != r)),
            _ => Err(unknown_operator(left, operator, right)),
        },
        _ if left.type_name() != right.type_name() => Err(EvalErrorKind::TypeMismatch {
            left: left.type_name(),
            operator,
            right: right.type_name(),
        }),
        _ => Err(unknown_operator(left, operator, right)),
    }
}

fn unknown_operator(left: &Value, operator: InfixOp, right: &Value) -> EvalErrorKind {
    EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        operator,
        right: right.type_name(),
    }
}

fn eval_integer_binary(l: i64, operator: InfixOp, r: i64) -> Result<Value, EvalErrorKind> {
    let overflow = |operation| EvalErrorKind::IntegerOverflow { operation };
    match operator {
        InfixOp::Add => l.checked_add(r).map(Value::Integer).ok_or(overflow("addition")),
        InfixOp::Sub => l
            .checked_sub(r)
            .map(Value::Integer)
            .ok_or(overflow("subtraction")),
        InfixOp::Mul => l
            .checked_mul(r)
            .map(Value::Integer)
            .ok_or(overflow("multiplication")),
        InfixOp::Div => {
            if r == 0 {
                return Err(EvalErrorKind::DivisionByZero);
            }
            // i64::MIN / -1 is the one overflowing quotient
            l.checked_div(r).map(Value::Integer).ok_or(overflow("division"))
        }
        InfixOp::Lt => Ok(Value::from_bool(l < r)),
        InfixOp::Gt => Ok(Value::from_bool(l > r)),
        InfixOp::Eq => Ok(Value::from_bool(l == r)),
        InfixOp::NotEq => Ok(Value::from_bool(l != r)),
    }
}
