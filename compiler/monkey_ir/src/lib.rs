//! Monkey IR - tokens and the abstract syntax tree.
//!
//! This crate holds the data structures shared by every stage of the
//! Monkey pipeline:
//! - `Span` for source locations
//! - `Token`, `TokenKind` and the `TokenSource` pull interface the parser
//!   consumes
//! - AST nodes (`Program`, `Statement`, `Expression`, ...)
//!
//! # Ownership
//!
//! The tree is strict: every node is owned by exactly one parent and the
//! `Program` owns the roots. The only shared piece is a function literal,
//! held behind `Rc` so that closure values can keep its body alive after
//! the `Program` that produced it has been dropped (a REPL evaluates many
//! short-lived programs against one environment).

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{
    BlockStatement, Expression, ExpressionKind, FunctionLiteral, Identifier, InfixOp, Node,
    PrefixOp, Program, Statement, StatementKind, Statements,
};
pub use span::Span;
pub use token::{lookup_ident, Token, TokenKind, TokenSource};
