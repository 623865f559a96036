//! Parse diagnostics.

use monkey_ir::{Span, TokenKind};

/// A parse diagnostic.
///
/// Parsing never stops at the first one; the parser records each error,
/// resynchronizes at the next statement and keeps going.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lookahead token was not the one the grammar requires.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    /// No expression can start with this token.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, span: Span },
    /// Integer literal text that does not fit (or is not) a 64-bit integer.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String, span: Span },
}

impl ParseError {
    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::NoPrefixParseFn { span, .. }
            | ParseError::InvalidInteger { span, .. } => *span,
        }
    }
}
