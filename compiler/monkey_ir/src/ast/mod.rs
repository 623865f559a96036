//! Abstract syntax tree.
//!
//! Statements and expressions are each a closed set of variants
//! (`StatementKind`, `ExpressionKind`) wrapped in a node struct that keeps
//! the token the node originated from. Evaluation and printing are
//! exhaustive matches over the kind.
//!
//! # Module Structure
//!
//! - `mod.rs`: node types and the `Node` capability
//! - `operators.rs`: prefix and infix operators
//! - `display.rs`: debug-string form (`Display`) of every node
//! - `teardown.rs`: stack-independent teardown of expression trees

mod display;
mod operators;
mod teardown;

use std::rc::Rc;

use crate::Token;

pub use display::Statements;
pub use operators::{InfixOp, PrefixOp};

/// Capability shared by every AST node: a debug-printable string form
/// (via `Display`) and the literal text of the token it came from.
pub trait Node: std::fmt::Display {
    fn token_literal(&self) -> &str;
}

/// Root of the tree: the ordered top-level statements of one source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

/// A name in binding position (`let` target, function parameter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub token: Token,
    pub kind: StatementKind,
}

impl Statement {
    pub fn new(token: Token, kind: StatementKind) -> Self {
        Statement { token, kind }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatementKind {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expression },
    /// `return <value>;`. The operand is optional (`return;`).
    Return { value: Option<Expression> },
    /// A standalone expression.
    Expression(Expression),
}

/// Braced, ordered statement list used by `if` arms and function bodies.
///
/// Blocks do not introduce a scope of their own; only function calls do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStatement {
    /// The opening `{`.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// A function literal.
///
/// Shared (`Rc`) between the tree and every closure value created from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    pub token: Token,
    pub kind: ExpressionKind,
}

impl Expression {
    pub fn new(token: Token, kind: ExpressionKind) -> Self {
        Expression { token, kind }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpressionKind {
    // ===== Literals =====
    /// Variable reference.
    Identifier(String),
    /// Integer literal, already converted to 64 bits.
    Integer(i64),
    /// `true` / `false`.
    Boolean(bool),
    /// String literal with escapes resolved.
    String(String),

    // ===== Operators =====
    /// `<op><operand>`
    Prefix {
        operator: PrefixOp,
        operand: Box<Expression>,
    },
    /// `<left> <op> <right>`
    Infix {
        operator: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    // ===== Compound =====
    /// `if (<condition>) { ... } else { ... }`
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// `fn(<params>) { ... }`
    Function(Rc<FunctionLiteral>),
    /// `<callee>(<args>)`
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// `[<elements>]`
    Array(Vec<Expression>),
    /// `<collection>[<index>]`
    Index {
        collection: Box<Expression>,
        index: Box<Expression>,
    },
    /// `{<key>: <value>, ...}` in source order.
    Hash(Vec<(Expression, Expression)>),
}

#[cfg(test)]
mod tests;
