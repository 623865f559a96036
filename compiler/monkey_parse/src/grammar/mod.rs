//! Grammar productions.
//!
//! - `mod.rs`: statements and blocks
//! - `expr.rs`: the Pratt loop and operator rules
//! - `literals.rs`: atoms and bracketed forms (`if`, `fn`, calls, arrays,
//!   hashes, index)
//!
//! Every production starts with `current` on its first token and leaves
//! `current` on its last token. Failure is `None` after an error has been
//! recorded.

mod expr;
mod literals;

use monkey_ir::{BlockStatement, Identifier, Statement, StatementKind, TokenKind, TokenSource};

use crate::{Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::new(token, StatementKind::Let { name, value }))
    }

    /// `return [<expr>] [;]`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        let value = if matches!(
            self.peek.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            None
        } else {
            self.advance();
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        self.skip_optional_semicolon();

        Some(Statement::new(token, StatementKind::Return { value }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::new(token, StatementKind::Expression(expression)))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// `{ <statement>* }` with `current` on the `{`.
    ///
    /// Ends on the `}`. A missing `}` at end of input is accepted; the
    /// block simply runs to the end.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();
        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => {
                    statements.push(statement);
                    self.advance();
                }
                None => {
                    if !self.synchronize() {
                        self.advance();
                    }
                }
            }
        }

        BlockStatement { token, statements }
    }
}
