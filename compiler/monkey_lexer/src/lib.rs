//! Tokenizer for Monkey using logos.
//!
//! Produces `monkey_ir::Token`s one at a time through the `TokenSource`
//! pull interface. Keywords are lexed as identifiers and reclassified with
//! `lookup_ident`; integer literals are handed to the parser as text so the
//! conversion (and its failure) happens there.

use logos::Logos;
use monkey_ir::{lookup_ident, Span, Token, TokenKind, TokenSource};

/// Raw token from logos (before keyword lookup and unescaping).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // === Comments ===
    #[regex(r"//[^\n]*")]
    LineComment,

    // === Operators ===
    #[token("==")]
    Eq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // === Literals ===

    // Digits followed by any alphanumerics: `0x1F`, `1_000`, and also
    // malformed text like `12ab`, which the parser rejects.
    #[regex(r"[0-9][0-9a-zA-Z_]*")]
    Int,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // Runs to end of input; only wins when the closing quote is missing.
    #[regex(r#""([^"\\]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Streaming tokenizer over one source text.
///
/// To restart, build a new `Lexer` over the same text.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    source_len: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    fn convert(raw: RawToken, slice: &str, span: Span) -> Token {
        let kind = match raw {
            RawToken::Ident => lookup_ident(slice),
            RawToken::Int => TokenKind::Int,
            RawToken::String => {
                let content = &slice[1..slice.len() - 1];
                return Token::new(TokenKind::String, unescape(content), span);
            }
            RawToken::UnterminatedString => TokenKind::Illegal,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            // Filtered out by `next_token` before conversion.
            RawToken::LineComment => TokenKind::Illegal,
        };
        Token::new(kind, slice, span)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        loop {
            let Some(result) = self.inner.next() else {
                return Token::eof(self.source_len);
            };
            let span = Span::from_range(self.inner.span());
            let slice = self.inner.slice();
            match result {
                Ok(RawToken::LineComment) => {}
                Ok(raw) => return Lexer::convert(raw, slice, span),
                Err(()) => return Token::new(TokenKind::Illegal, slice, span),
            }
        }
    }
}

/// Lex a whole source text. The returned list always ends with `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Resolve the escape sequences `\n \t \r \" \\`. Unknown escapes are kept
/// verbatim.
fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
