//! Iterative teardown of expression trees.
//!
//! Every nesting level of an expression is a separate allocation, so the
//! compiler-generated drop recurses once per level and a deeply nested
//! program would overflow the stack while being freed. Instead, each
//! expression moves its children onto a worklist and they are released
//! one at a time.

use std::mem;
use std::rc::Rc;

use super::{BlockStatement, Expression, ExpressionKind, StatementKind};

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr.kind, &mut pending);
        }
    }
}

/// Replace `kind` with a leaf, moving its child expressions to `pending`.
fn detach_children(kind: &mut ExpressionKind, pending: &mut Vec<Expression>) {
    match mem::replace(kind, ExpressionKind::Boolean(false)) {
        ExpressionKind::Identifier(_)
        | ExpressionKind::Integer(_)
        | ExpressionKind::Boolean(_)
        | ExpressionKind::String(_) => {}
        ExpressionKind::Prefix { operand, .. } => pending.push(*operand),
        ExpressionKind::Infix { left, right, .. } => {
            pending.push(*left);
            pending.push(*right);
        }
        ExpressionKind::If {
            condition,
            consequence,
            alternative,
        } => {
            pending.push(*condition);
            detach_block(consequence, pending);
            if let Some(alternative) = alternative {
                detach_block(alternative, pending);
            }
        }
        // Closures may still hold the literal; the last owner tears it down.
        ExpressionKind::Function(literal) => {
            if let Some(literal) = Rc::into_inner(literal) {
                detach_block(literal.body, pending);
            }
        }
        ExpressionKind::Call { callee, arguments } => {
            pending.push(*callee);
            pending.extend(arguments);
        }
        ExpressionKind::Array(elements) => pending.extend(elements),
        ExpressionKind::Index { collection, index } => {
            pending.push(*collection);
            pending.push(*index);
        }
        ExpressionKind::Hash(pairs) => {
            for (key, value) in pairs {
                pending.push(key);
                pending.push(value);
            }
        }
    }
}

fn detach_block(block: BlockStatement, pending: &mut Vec<Expression>) {
    for statement in block.statements {
        match statement.kind {
            StatementKind::Let { value, .. } | StatementKind::Expression(value) => {
                pending.push(value);
            }
            StatementKind::Return { value } => pending.extend(value),
        }
    }
}
