//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::io::Write;
use std::path::Path;

use monkey_ir::TokenKind;

use super::read_file;
use crate::CliError;

/// Parse a file and print its debug-string form, or the parse errors.
///
/// Returns `Ok(false)` when the file has parse errors.
pub fn parse_file(path: &Path, out: &mut impl Write) -> Result<bool, CliError> {
    let content = read_file(path)?;
    let output = monkey_parse::parse(&content);

    if output.has_errors() {
        writeln!(out, "parser errors:")?;
        for error in &output.errors {
            writeln!(out, "\t{}: {error}", error.span())?;
        }
        return Ok(false);
    }

    writeln!(out, "{}", output.program)?;
    Ok(true)
}

/// Lex a file and print the token stream, one token per line.
pub fn lex_file(path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let content = read_file(path)?;
    for token in monkey_lexer::lex(&content) {
        if token.is(TokenKind::Eof) {
            writeln!(out, "{} {}", token.span, token.kind)?;
        } else {
            writeln!(out, "{} {} {}", token.span, token.kind, token.literal)?;
        }
    }
    Ok(())
}
