//! Atoms and bracketed forms.

use std::rc::Rc;

use monkey_ir::{Expression, ExpressionKind, FunctionLiteral, Identifier, TokenKind, TokenSource};

use crate::{ParseError, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    pub(super) fn parse_identifier(&mut self) -> Expression {
        let token = self.current.clone();
        let name = token.literal.clone();
        Expression::new(token, ExpressionKind::Identifier(name))
    }

    pub(super) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match parse_int(&token.literal) {
            Some(value) => Some(Expression::new(token, ExpressionKind::Integer(value))),
            None => {
                self.push_error(ParseError::InvalidInteger {
                    literal: token.literal,
                    span: token.span,
                });
                None
            }
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Expression {
        let token = self.current.clone();
        let value = token.literal.clone();
        Expression::new(token, ExpressionKind::String(value))
    }

    pub(super) fn parse_boolean(&mut self) -> Expression {
        let token = self.current.clone();
        let value = token.is(TokenKind::True);
        Expression::new(token, ExpressionKind::Boolean(value))
    }

    /// `if (<cond>) { ... } [else { ... }]`
    pub(super) fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::new(
            token,
            ExpressionKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
        ))
    }

    /// `fn(<params>) { ... }`
    pub(super) fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::new(
            token,
            ExpressionKind::Function(Rc::new(FunctionLiteral { parameters, body })),
        ))
    }

    /// Comma-separated identifiers up to `)`, with `current` on the `(`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        parameters.push(Identifier::new(self.current.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(Identifier::new(self.current.clone()));
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    /// `<callee>(<args>)` with `current` on the `(`.
    pub(super) fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expression::new(
            token,
            ExpressionKind::Call {
                callee: Box::new(callee),
                arguments,
            },
        ))
    }

    /// `<collection>[<index>]` with `current` on the `[`.
    pub(super) fn parse_index_expression(&mut self, collection: Expression) -> Option<Expression> {
        let token = self.current.clone();
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expression::new(
            token,
            ExpressionKind::Index {
                collection: Box::new(collection),
                index: Box::new(index),
            },
        ))
    }

    /// `[<elements>]`
    pub(super) fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::new(token, ExpressionKind::Array(elements)))
    }

    /// `{<key>: <value>, ...}`
    pub(super) fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }
        Some(Expression::new(token, ExpressionKind::Hash(pairs)))
    }

    /// Comma-separated expressions up to `end`, with `current` on the
    /// opening delimiter. Ends on `end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Some(list);
        }

        self.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }
}

/// Convert integer literal text to `i64`.
///
/// Accepts decimal and `0x`/`0o`/`0b` prefixed forms with `_` separators.
/// A leading zero without a prefix is still decimal. Out-of-range values
/// and stray characters are rejected.
pub(crate) fn parse_int(literal: &str) -> Option<i64> {
    let digits: String = literal.chars().filter(|&c| c != '_').collect();

    let (radix, body) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ => (10, digits.as_str()),
    };

    // from_str_radix accepts a leading sign; literals never carry one
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(body, radix).ok()
}
