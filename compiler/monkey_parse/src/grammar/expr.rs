//! Pratt expression parsing.

use monkey_ir::{Expression, ExpressionKind, InfixOp, PrefixOp, TokenKind, TokenSource};
use monkey_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// Parse an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// Deeply nested input recurses here, so the stack is grown on demand.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.advance();
            left = match self.current.kind {
                TokenKind::LParen => self.parse_call_expression(left)?,
                TokenKind::LBracket => self.parse_index_expression(left)?,
                _ => self.parse_infix_expression(left)?,
            };
        }

        Some(left)
    }

    /// Dispatch on the token that starts an expression.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.push_error(ParseError::NoPrefixParseFn {
                    kind,
                    span: self.current.span,
                });
                None
            }
        }
    }

    /// `!<expr>` or `-<expr>`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = PrefixOp::from_token(token.kind)?;

        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::new(
            token,
            ExpressionKind::Prefix {
                operator,
                operand: Box::new(operand),
            },
        ))
    }

    /// `<left> <op> <right>` with `current` on the operator.
    ///
    /// The right side is parsed at the operator's own precedence, which
    /// makes every binary operator left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let precedence = self.current_precedence();
        let operator = InfixOp::from_token(token.kind)?;

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::new(
            token,
            ExpressionKind::Infix {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
        ))
    }

    /// `( <expr> )`. Grouping leaves no node behind.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expression)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }
}
