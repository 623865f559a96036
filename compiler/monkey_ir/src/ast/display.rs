//! Debug-string form of the tree.
//!
//! The output is valid source: operator expressions are fully
//! parenthesized, strings are quoted, blocks are braced and consecutive
//! expression statements are separated by `;`. Parsing the printed form
//! yields the same tree shape, and printing that tree again yields the
//! same text.

use std::fmt;

use monkey_stack::ensure_sufficient_stack;

use super::{
    BlockStatement, Expression, ExpressionKind, FunctionLiteral, Identifier, Program, Statement,
    StatementKind,
};

/// Write `items` separated by `", "`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A statement list, printed so that it parses back into the same list.
///
/// `let` and `return` print their own `;`; an expression statement needs
/// one only when another statement follows, otherwise `a; (b)` would
/// print as the call `a(b)`.
pub struct Statements<'a>(pub &'a [Statement]);

impl fmt::Display for Statements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut needs_separator = false;
        for statement in self.0 {
            if needs_separator {
                f.write_str(";")?;
            }
            write!(f, "{statement}")?;
            needs_separator = matches!(statement.kind, StatementKind::Expression(_));
        }
        Ok(())
    }
}

impl BlockStatement {
    /// The block's statements without the surrounding braces.
    pub fn statements_display(&self) -> Statements<'_> {
        Statements(&self.statements)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Statements(&self.statements))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StatementKind::Let { name, value } => write!(f, "let {name} = {value};"),
            StatementKind::Return { value: Some(value) } => write!(f, "return {value};"),
            StatementKind::Return { value: None } => f.write_str("return;"),
            StatementKind::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{}");
        }
        write!(f, "{{ {} }}", self.statements_display())
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_list(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

/// Quote a string literal, escaping what the lexer unescapes.
fn write_string_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

impl Expression {
    /// Whether this expression already prints inside its own parentheses.
    fn prints_parenthesized(&self) -> bool {
        matches!(
            self.kind,
            ExpressionKind::Prefix { .. } | ExpressionKind::Infix { .. } | ExpressionKind::Index { .. }
        )
    }

    fn fmt_inner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpressionKind::Identifier(name) => f.write_str(name),
            ExpressionKind::String(value) => write_string_literal(f, value),
            ExpressionKind::Integer(value) => write!(f, "{value}"),
            ExpressionKind::Boolean(value) => write!(f, "{value}"),
            ExpressionKind::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            ExpressionKind::Infix {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            ExpressionKind::If {
                condition,
                consequence,
                alternative,
            } => {
                if condition.prints_parenthesized() {
                    write!(f, "if {condition} {consequence}")?;
                } else {
                    write!(f, "if ({condition}) {consequence}")?;
                }
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            ExpressionKind::Function(function) => write!(f, "{function}"),
            ExpressionKind::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
            ExpressionKind::Array(elements) => {
                f.write_str("[")?;
                write_list(f, elements)?;
                f.write_str("]")
            }
            ExpressionKind::Index { collection, index } => write!(f, "({collection}[{index}])"),
            ExpressionKind::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// Printing recurses once per nesting level; grow the stack as it goes.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_inner(f))
    }
}
