//! Pratt parser for Monkey.
//!
//! Consumes tokens one at a time through `TokenSource` (one token of
//! lookahead: `current` and `peek`) and builds a `Program`. Errors are
//! collected, never thrown: a statement that fails to parse is dropped,
//! the parser resynchronizes at the next statement boundary, and
//! `errors()` reports everything found in one pass.

mod error;
mod grammar;
mod precedence;

pub use error::ParseError;
pub use precedence::Precedence;

use monkey_ir::{Program, Token, TokenKind, TokenSource};
use monkey_lexer::Lexer;
use tracing::trace;

/// Parser state.
pub struct Parser<S> {
    source: S,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser, priming `current` and `peek` from the source.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Parser {
            source,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream.
    ///
    /// Always returns a program; check `errors()` before evaluating it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => {
                    self.synchronize();
                }
            }
            self.advance();
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Diagnostics in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Diagnostics rendered as human-readable messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    // Cursor

    /// Shift `peek` into `current` and pull a new `peek`.
    fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(current = ?self.current.kind, peek = ?self.peek.kind, "advance");
    }

    #[inline]
    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if `peek` is `kind`; otherwise record an error and stay put.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.push_error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
                span: self.peek.span,
            });
            false
        }
    }

    fn push_error(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse error");
        self.errors.push(error);
    }

    /// Skip the rest of a statement that failed to parse.
    ///
    /// Stops on the statement's `;`, on the `}` matching a `{` skipped
    /// along the way, or at end of input, leaving the caller's usual
    /// "advance past the statement" step to land on the next one. Returns
    /// `true` when it stopped on a `}` the statement never opened; that
    /// brace closes the enclosing block and must not be skipped.
    fn synchronize(&mut self) -> bool {
        let mut open_braces = 0usize;
        loop {
            match self.current.kind {
                TokenKind::Eof => return false,
                TokenKind::Semicolon if open_braces == 0 => return false,
                TokenKind::LBrace => open_braces += 1,
                TokenKind::RBrace if open_braces == 0 => return true,
                TokenKind::RBrace => {
                    open_braces -= 1;
                    if open_braces == 0 {
                        return false;
                    }
                }
                _ => {}
            }
            self.advance();
        }
    }
}

/// Output of [`parse`]: the program plus every diagnostic.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize and parse `source` in one step.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.errors,
    }
}

#[cfg(test)]
mod tests;
