//! `monkey repl`: the interactive loop.

use std::io::{BufRead, Write};

use crate::{CliError, Session};

const PROMPT: &str = ">> ";

/// Read lines from `input` until end of input, evaluating each one in
/// `session` and writing the result to `out`.
///
/// Blank lines are skipped. Parse errors are reported and the session's
/// bindings are left untouched.
pub fn run_repl(
    input: impl BufRead,
    out: &mut impl Write,
    session: &mut Session,
) -> Result<(), CliError> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = session.eval(&line);
        if outcome.is_parse_error() {
            writeln!(out, "parser errors:")?;
        }
        writeln!(out, "{outcome}")?;
    }
}
